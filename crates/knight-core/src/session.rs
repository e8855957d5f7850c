use serde::{Deserialize, Serialize};

use crate::board::{Cell, Grid, Position};
use crate::error::TourError;
use crate::moves;

/// Where an interactive game stands after the latest move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Legal moves remain.
    Ongoing,
    /// No legal move is left and unvisited squares remain.
    Stuck { visited: usize },
    /// Every square has been visited.
    Complete,
}

/// One human attempt at the tour.
///
/// The session owns its board; the grid passed to [`Session::new`] is only
/// read for its dimensions, so the solver's solved board can be handed in
/// unchanged. After every accepted move the legal-move set is recomputed
/// from scratch and each reachable square is annotated with a
/// [`Cell::Hint`] carrying its onward-move count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    board: Grid,
    knight: Position,
    visited: usize,
    candidates: Vec<Position>,
}

impl Session {
    /// Start a fresh attempt from `start`.
    pub fn new(grid: &Grid, start: Position) -> Result<Self, TourError> {
        if !grid.contains(start) {
            return Err(TourError::OutOfBounds(start));
        }
        let mut board = grid.clone();
        board.reset();
        board.set(start, Cell::Current);
        let mut session = Self {
            board,
            knight: start,
            visited: 1,
            candidates: Vec::new(),
        };
        session.refresh_candidates();
        Ok(session)
    }

    pub fn board(&self) -> &Grid {
        &self.board
    }

    pub fn knight(&self) -> Position {
        self.knight
    }

    /// Squares visited so far, the starting square included.
    pub fn visited(&self) -> usize {
        self.visited
    }

    /// The squares the knight may move to right now, in move order.
    pub fn legal_moves(&self) -> &[Position] {
        &self.candidates
    }

    /// Whether `target` is in the current legal-move set.
    pub fn is_legal(&self, target: Position) -> bool {
        self.candidates.contains(&target)
    }

    /// Move the knight to `target`.
    ///
    /// Validates again even when the boundary already has: a square off the
    /// board is [`TourError::OutOfBounds`], an on-board square outside the
    /// legal set is [`TourError::IllegalMove`]. Either way the session is
    /// left exactly as it was.
    pub fn apply_move(&mut self, target: Position) -> Result<(), TourError> {
        if !self.board.contains(target) {
            return Err(TourError::OutOfBounds(target));
        }
        if !self.is_legal(target) {
            return Err(TourError::IllegalMove(target));
        }
        self.board.set(self.knight, Cell::Trail);
        self.board.set(target, Cell::Current);
        self.knight = target;
        self.visited += 1;
        self.refresh_candidates();
        Ok(())
    }

    /// Terminal state of the game, if any.
    pub fn outcome(&self) -> Outcome {
        if !self.candidates.is_empty() {
            Outcome::Ongoing
        } else if self.visited == self.board.total_cells() {
            Outcome::Complete
        } else {
            Outcome::Stuck {
                visited: self.visited,
            }
        }
    }

    /// Recompute the legal-move set from the knight's square and rewrite the
    /// hint annotations.
    ///
    /// Stale hints are cleared first (hints only: `Current` and `Trail`
    /// squares are never touched), and every onward count is taken before
    /// any new hint lands on the board, so the counts cannot observe each
    /// other.
    fn refresh_candidates(&mut self) {
        for &stale in &self.candidates {
            if matches!(self.board.cell(stale), Cell::Hint(_)) {
                self.board.set(stale, Cell::Empty);
            }
        }
        self.candidates = moves::reachable(&self.board, self.knight);
        let onward: Vec<usize> = self
            .candidates
            .iter()
            .map(|&candidate| moves::reachable(&self.board, candidate).len())
            .collect();
        for (&candidate, count) in self.candidates.iter().zip(onward) {
            self.board.set(candidate, Cell::Hint(count));
        }
    }
}
