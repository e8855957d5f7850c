//! Line-based prompting and validation of raw user input.
//!
//! Parsing is pure and separated from the prompt loops so it can be tested
//! without a terminal. Human coordinates are 1-indexed with `x` counting
//! columns from the left and `y` counting rows from the bottom; the board
//! itself is 0-indexed from the top-left corner.

use std::io::{self, BufRead, Write};

use knight_core::{Position, Session};

/// Split a line into exactly two non-negative integers.
pub fn parse_pair(line: &str) -> Option<(usize, usize)> {
    let mut parts = line.split_whitespace();
    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((x, y))
}

/// Board size as `COLUMNS ROWS`, both at least 1.
pub fn parse_dimensions(line: &str) -> Option<(usize, usize)> {
    parse_pair(line).filter(|&(columns, rows)| columns >= 1 && rows >= 1)
}

/// Convert human coordinates to an internal position, if on the board.
pub fn to_internal(x: usize, y: usize, columns: usize, rows: usize) -> Option<Position> {
    if (1..=columns).contains(&x) && (1..=rows).contains(&y) {
        Some(Position::new(x - 1, rows - y))
    } else {
        None
    }
}

/// Inverse of [`to_internal`].
pub fn to_human(pos: Position, rows: usize) -> (usize, usize) {
    (pos.column + 1, rows - pos.row)
}

fn read_line(input: &mut impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input ended"));
    }
    Ok(line)
}

/// Ask for board dimensions until a valid pair is typed.
pub fn prompt_dimensions(
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<(usize, usize)> {
    loop {
        write!(output, "Enter your board dimensions: ")?;
        output.flush()?;
        match parse_dimensions(&read_line(input)?) {
            Some(dimensions) => return Ok(dimensions),
            None => writeln!(output, "Invalid dimensions!")?,
        }
    }
}

/// Ask for the starting square until an on-board position is typed.
pub fn prompt_start(
    input: &mut impl BufRead,
    output: &mut impl Write,
    columns: usize,
    rows: usize,
) -> io::Result<Position> {
    loop {
        write!(output, "Enter the knight's starting position: ")?;
        output.flush()?;
        let position =
            parse_pair(&read_line(input)?).and_then(|(x, y)| to_internal(x, y, columns, rows));
        match position {
            Some(position) => return Ok(position),
            None => writeln!(output, "Invalid position!")?,
        }
    }
}

/// Ask whether the player wants to try the puzzle themselves.
pub fn prompt_play(input: &mut impl BufRead, output: &mut impl Write) -> io::Result<bool> {
    loop {
        write!(output, "Do you want to try the puzzle? (y/n): ")?;
        output.flush()?;
        match read_line(input)?.trim() {
            "y" => return Ok(true),
            "n" => return Ok(false),
            _ => writeln!(output, "Invalid input!")?,
        }
    }
}

/// Ask for the next move until a square in the current legal set is typed.
pub fn prompt_move(
    input: &mut impl BufRead,
    output: &mut impl Write,
    session: &Session,
) -> io::Result<Position> {
    let board = session.board();
    loop {
        write!(output, "Enter your next move: ")?;
        output.flush()?;
        let target = parse_pair(&read_line(input)?)
            .and_then(|(x, y)| to_internal(x, y, board.columns(), board.rows()))
            .filter(|&pos| session.is_legal(pos));
        match target {
            Some(target) => return Ok(target),
            None => write!(output, "Invalid move!")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use knight_core::Grid;
    use std::io::Cursor;

    #[test]
    fn test_parse_pair() {
        assert_eq!(parse_pair("3 4\n"), Some((3, 4)));
        assert_eq!(parse_pair("  7   2  "), Some((7, 2)));
        assert_eq!(parse_pair("3"), None);
        assert_eq!(parse_pair("3 4 5"), None);
        assert_eq!(parse_pair("a b"), None);
        assert_eq!(parse_pair("-1 4"), None);
        assert_eq!(parse_pair(""), None);
    }

    #[test]
    fn test_parse_dimensions_rejects_zero() {
        assert_eq!(parse_dimensions("5 5"), Some((5, 5)));
        assert_eq!(parse_dimensions("0 5"), None);
        assert_eq!(parse_dimensions("5 0"), None);
    }

    #[test]
    fn test_human_coordinates_flip_rows() {
        // bottom-left of a 5x5 board
        assert_eq!(to_internal(1, 1, 5, 5), Some(Position::new(0, 4)));
        // top-right
        assert_eq!(to_internal(5, 5, 5, 5), Some(Position::new(4, 0)));
        assert_eq!(to_internal(0, 1, 5, 5), None);
        assert_eq!(to_internal(6, 1, 5, 5), None);
        assert_eq!(to_internal(1, 6, 5, 5), None);
    }

    #[test]
    fn test_coordinate_round_trip() {
        let (columns, rows) = (4, 7);
        for x in 1..=columns {
            for y in 1..=rows {
                let pos = to_internal(x, y, columns, rows).unwrap();
                assert_eq!(to_human(pos, rows), (x, y));
            }
        }
    }

    #[test]
    fn test_prompt_dimensions_reprompts_until_valid() {
        let mut input = Cursor::new("nope\n0 3\n3 4\n");
        let mut output = Vec::new();
        let dimensions = prompt_dimensions(&mut input, &mut output).unwrap();
        assert_eq!(dimensions, (3, 4));

        let transcript = String::from_utf8(output).unwrap();
        assert_eq!(transcript.matches("Enter your board dimensions: ").count(), 3);
        assert_eq!(transcript.matches("Invalid dimensions!").count(), 2);
    }

    #[test]
    fn test_prompt_start_validates_bounds() {
        let mut input = Cursor::new("9 9\n1 1\n");
        let mut output = Vec::new();
        let start = prompt_start(&mut input, &mut output, 5, 5).unwrap();
        assert_eq!(start, Position::new(0, 4));

        let transcript = String::from_utf8(output).unwrap();
        assert_eq!(transcript.matches("Invalid position!").count(), 1);
    }

    #[test]
    fn test_prompt_play_accepts_only_y_or_n() {
        let mut input = Cursor::new("maybe\ny\n");
        let mut output = Vec::new();
        assert!(prompt_play(&mut input, &mut output).unwrap());

        let transcript = String::from_utf8(output).unwrap();
        assert_eq!(transcript.matches("Invalid input!").count(), 1);

        let mut input = Cursor::new("n\n");
        let mut output = Vec::new();
        assert!(!prompt_play(&mut input, &mut output).unwrap());
    }

    #[test]
    fn test_prompt_move_rejects_squares_outside_legal_set() {
        let grid = Grid::new(5, 5);
        let session = Session::new(&grid, Position::new(0, 4)).unwrap();
        // (3, 4) is on the board but not a knight move; (2, 3) is legal
        let mut input = Cursor::new("3 4\n2 3\n");
        let mut output = Vec::new();
        let target = prompt_move(&mut input, &mut output, &session).unwrap();
        assert_eq!(target, Position::new(1, 2));

        let transcript = String::from_utf8(output).unwrap();
        assert_eq!(transcript.matches("Invalid move!").count(), 1);
    }

    #[test]
    fn test_prompt_fails_cleanly_on_closed_input() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        let err = prompt_dimensions(&mut input, &mut output).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
