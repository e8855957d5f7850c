mod app;
mod input;
mod render;
mod theme;

use clap::Parser;
use std::io;
use std::num::NonZeroUsize;

/// Knight's tour puzzle: compute a full tour of a rectangular board, or walk
/// one yourself with onward-move hints.
///
/// Anything not given as a flag is prompted for. Coordinates are 1-indexed,
/// columns counted from the left and rows from the bottom.
#[derive(Debug, Parser)]
#[command(name = "knight-tour", version, about)]
pub struct Args {
    /// Board width in squares
    #[arg(long, requires = "rows")]
    pub columns: Option<NonZeroUsize>,

    /// Board height in squares
    #[arg(long, requires = "columns")]
    pub rows: Option<NonZeroUsize>,

    /// Starting square as COLUMN ROW
    #[arg(long, num_args = 2, value_names = ["COLUMN", "ROW"])]
    pub start: Option<Vec<usize>>,

    /// Print the computed tour and exit without offering a game
    #[arg(long, conflicts_with = "play")]
    pub solve: bool,

    /// Play interactively without being asked first
    #[arg(long)]
    pub play: bool,

    /// Emit the computed tour as JSON (implies --solve)
    #[arg(long, conflicts_with = "play")]
    pub json: bool,

    /// Render the board without colors
    #[arg(long)]
    pub no_color: bool,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    app::run(args)
}
