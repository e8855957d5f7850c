use serde::{Deserialize, Serialize};
use std::fmt;

/// A board coordinate, 0-indexed from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub column: usize,
    pub row: usize,
}

impl Position {
    pub fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

/// Marker held by a single board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    /// Not visited yet.
    Empty,
    /// Visited as the n-th square of a computed tour.
    Visit(usize),
    /// The knight's present square during interactive play.
    Current,
    /// A square the knight already left during interactive play.
    Trail,
    /// A reachable square, annotated with its onward-move count.
    Hint(usize),
}

/// Rectangular playing board.
///
/// The grid does no bounds checking on behalf of its callers: accessing a
/// position off the board is a contract violation and panics. Use
/// [`Grid::contains`] first when the position comes from outside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    columns: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-empty board.
    ///
    /// Panics if either dimension is zero.
    pub fn new(columns: usize, rows: usize) -> Self {
        assert!(
            columns >= 1 && rows >= 1,
            "board dimensions must be at least 1x1"
        );
        Self {
            columns,
            rows,
            cells: vec![Cell::Empty; columns * rows],
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of squares on the board.
    pub fn total_cells(&self) -> usize {
        self.columns * self.rows
    }

    /// Whether `pos` lies on the board.
    pub fn contains(&self, pos: Position) -> bool {
        pos.column < self.columns && pos.row < self.rows
    }

    fn index(&self, pos: Position) -> usize {
        assert!(
            self.contains(pos),
            "position {} outside {}x{} board",
            pos,
            self.columns,
            self.rows
        );
        pos.row * self.columns + pos.column
    }

    /// Marker at `pos`. Panics if `pos` is off the board.
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[self.index(pos)]
    }

    /// Place `marker` at `pos`. Panics if `pos` is off the board.
    pub fn set(&mut self, pos: Position, marker: Cell) {
        let index = self.index(pos);
        self.cells[index] = marker;
    }

    /// Clear every square back to [`Cell::Empty`], keeping the dimensions.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Every position on the board, row-major from the top-left.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let columns = self.columns;
        (0..self.rows)
            .flat_map(move |row| (0..columns).map(move |column| Position::new(column, row)))
    }

    /// The squares of a computed tour, ordered by visit number.
    pub fn visit_path(&self) -> Vec<Position> {
        let mut numbered: Vec<(usize, Position)> = self
            .positions()
            .filter_map(|pos| match self.cell(pos) {
                Cell::Visit(n) => Some((n, pos)),
                _ => None,
            })
            .collect();
        numbered.sort_by_key(|&(n, _)| n);
        numbered.into_iter().map(|(_, pos)| pos).collect()
    }
}
