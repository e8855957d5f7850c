//! Top-level game flow: gather the configuration, run the solver, then
//! either show the tour or hand the board to the player.

use std::io::{self, BufRead, Write};

use knight_core::{Grid, Outcome, Position, Session, Solver, TourError};
use serde::Serialize;

use crate::input;
use crate::render;
use crate::theme::Theme;
use crate::Args;

/// Machine-readable dump of a computed tour.
#[derive(Debug, Serialize)]
struct TourDump {
    columns: usize,
    rows: usize,
    start: Position,
    tour: Vec<Position>,
}

pub fn run(args: Args) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(args, &mut stdin.lock(), &mut stdout.lock())
}

fn run_with(args: Args, input: &mut impl BufRead, output: &mut impl Write) -> io::Result<()> {
    let theme = if args.no_color {
        Theme::plain()
    } else {
        Theme::dark()
    };

    let (columns, rows) = match (args.columns, args.rows) {
        (Some(columns), Some(rows)) => (columns.get(), rows.get()),
        _ => input::prompt_dimensions(input, output)?,
    };
    let grid = Grid::new(columns, rows);

    let start = match args.start {
        Some(pair) => input::to_internal(pair[0], pair[1], columns, rows).ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "starting position is off the board")
        })?,
        None => input::prompt_start(input, output, columns, rows)?,
    };

    let play = if args.play {
        true
    } else if args.solve || args.json {
        false
    } else {
        input::prompt_play(input, output)?
    };

    // solvability is always checked first: it gates player mode too
    let solved = match Solver::new().solve(&grid, start) {
        Ok(board) => board,
        Err(TourError::NoSolution) => {
            writeln!(output, "No solution exists!")?;
            return Ok(());
        }
        Err(err) => return Err(io::Error::new(io::ErrorKind::InvalidInput, err)),
    };

    if play {
        play_tour(input, output, &grid, start, &theme)
    } else if args.json {
        let dump = TourDump {
            columns,
            rows,
            start,
            tour: solved.visit_path(),
        };
        writeln!(output, "{}", serde_json::to_string_pretty(&dump)?)
    } else {
        writeln!(output, "Here's the solution!")?;
        render::render_board(output, &solved, &theme)
    }
}

fn play_tour(
    input: &mut impl BufRead,
    output: &mut impl Write,
    grid: &Grid,
    start: Position,
    theme: &Theme,
) -> io::Result<()> {
    let mut session = Session::new(grid, start)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;
    render::render_board(output, session.board(), theme)?;

    loop {
        match session.outcome() {
            Outcome::Ongoing => {}
            Outcome::Complete => {
                return writeln!(output, "What a great tour! Congratulations!");
            }
            Outcome::Stuck { visited } => {
                writeln!(output, "No more possible moves!")?;
                return writeln!(output, "Your knight visited {visited} squares!");
            }
        }

        let target = input::prompt_move(input, output, &session)?;
        // prompt_move only hands back squares from the legal set, and the
        // engine still re-checks
        if let Err(err) = session.apply_move(target) {
            writeln!(output, "{err}")?;
            continue;
        }
        render::render_board(output, session.board(), theme)?;
    }
}
