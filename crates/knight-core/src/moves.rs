//! Knight move geometry shared by the solver and interactive play.

use crate::board::{Cell, Grid, Position};

/// The eight knight offsets, in the fixed order both modes enumerate them.
pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (2, 1),
    (1, 2),
    (-2, 1),
    (-1, 2),
    (-2, -1),
    (-1, -2),
    (2, -1),
    (1, -2),
];

/// In-bounds, unvisited squares a knight on `from` can move to.
///
/// Targets follow the offset order above. The solver's search order and the
/// hint counts shown during play both rely on that order being stable for a
/// given grid state.
pub fn reachable(grid: &Grid, from: Position) -> Vec<Position> {
    let mut targets = Vec::with_capacity(KNIGHT_OFFSETS.len());
    for (dx, dy) in KNIGHT_OFFSETS {
        let column = from.column as i32 + dx;
        let row = from.row as i32 + dy;
        if column < 0 || row < 0 {
            continue;
        }
        let pos = Position::new(column as usize, row as usize);
        if grid.contains(pos) && grid.cell(pos) == Cell::Empty {
            targets.push(pos);
        }
    }
    targets
}
