use crate::board::Position;
use thiserror::Error;

/// Everything the engine can refuse to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TourError {
    /// The search exhausted every branch without completing a tour. A normal
    /// negative result, not a fault: callers branch on it and end the run.
    #[error("no knight's tour exists from the starting square")]
    NoSolution,
    /// A move target outside the current legal-move set. Recoverable; the
    /// caller re-prompts.
    #[error("illegal move to {0}")]
    IllegalMove(Position),
    /// A position off the board reached a public entry point. Unreachable
    /// through a validating boundary.
    #[error("position {0} is outside the board")]
    OutOfBounds(Position),
}
