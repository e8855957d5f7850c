use crate::board::{Cell, Grid, Position};
use crate::error::TourError;
use crate::moves;

/// Exhaustive knight's-tour search.
///
/// Plain depth-first backtracking over the fixed move order: candidates are
/// tried in the order [`moves::reachable`] yields them and the first complete
/// tour wins. Worst-case cost is exponential in the board area, and recursion
/// depth reaches the total cell count on success, so expect large boards to
/// take effectively forever.
pub struct Solver;

impl Solver {
    pub fn new() -> Self {
        Self
    }

    /// Search for a complete tour of `grid` starting at `start`.
    ///
    /// The caller's grid is only read for its dimensions; the returned board
    /// carries [`Cell::Visit`] markers 1..=N along the tour. A search that
    /// exhausts every branch reports [`TourError::NoSolution`].
    pub fn solve(&self, grid: &Grid, start: Position) -> Result<Grid, TourError> {
        if !grid.contains(start) {
            return Err(TourError::OutOfBounds(start));
        }
        let mut board = grid.clone();
        board.reset();
        let mut visited = 1;
        board.set(start, Cell::Visit(visited));
        if extend(&mut board, start, &mut visited) {
            Ok(board)
        } else {
            Err(TourError::NoSolution)
        }
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

/// Try to extend a partial tour ending on `last`. On failure the board and
/// counter are exactly as they were on entry.
fn extend(board: &mut Grid, last: Position, visited: &mut usize) -> bool {
    if *visited == board.total_cells() {
        return true;
    }
    for next in moves::reachable(board, last) {
        *visited += 1;
        board.set(next, Cell::Visit(*visited));
        if extend(board, next, visited) {
            return true;
        }
        board.set(next, Cell::Empty);
        *visited -= 1;
    }
    false
}
