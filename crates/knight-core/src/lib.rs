//! Core engine for the knight's tour puzzle.
//!
//! [`Grid`] stores the board as a flat array of [`Cell`] markers, [`moves`]
//! enumerates knight moves in a fixed order, [`Solver`] runs the exhaustive
//! backtracking tour search, and [`Session`] tracks one human attempt with
//! per-square onward-move hints. Prompting and rendering live in the
//! front-end crate.

mod board;
mod error;
pub mod moves;
mod session;
mod solver;

pub use board::{Cell, Grid, Position};
pub use error::TourError;
pub use session::{Outcome, Session};
pub use solver::Solver;
