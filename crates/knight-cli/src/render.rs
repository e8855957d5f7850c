//! Text rendering of the board.
//!
//! Layout: a dash frame sized from the cell width (the decimal width of the
//! total cell count), row numbers on the left counting down to 1, and a
//! column-number footer. Empty squares print as underscores; everything else
//! prints right-aligned in its cell.

use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use knight_core::{Cell, Grid, Position};

use crate::theme::Theme;

/// Draw `grid` to `out` in the given theme, ending flushed.
pub fn render_board(out: &mut impl Write, grid: &Grid, theme: &Theme) -> io::Result<()> {
    let width = grid.total_cells().to_string().len();
    let label_width = grid.rows().to_string().len();

    let column_labels = (1..=grid.columns())
        .map(|n| format!("{n:>width$}"))
        .collect::<Vec<_>>()
        .join(" ");
    let frame = format!("{:label_width$}{}", "", "-".repeat(column_labels.len() + 4));

    paint(out, &frame, theme.frame)?;
    queue!(out, Print("\n"))?;

    for row in 0..grid.rows() {
        let label = grid.rows() - row;
        paint(out, &format!("{label:>label_width$}| "), theme.frame)?;
        for column in 0..grid.columns() {
            if column > 0 {
                queue!(out, Print(" "))?;
            }
            let (text, color) = match grid.cell(Position::new(column, row)) {
                Cell::Empty => ("_".repeat(width), None),
                Cell::Visit(n) => (format!("{n:>width$}"), theme.visit),
                Cell::Current => (format!("{:>width$}", "X"), theme.current),
                Cell::Trail => (format!("{:>width$}", "*"), theme.trail),
                Cell::Hint(k) => (format!("{k:>width$}"), theme.hint),
            };
            paint(out, &text, color)?;
        }
        paint(out, " |", theme.frame)?;
        queue!(out, Print("\n"))?;
    }

    paint(out, &frame, theme.frame)?;
    queue!(out, Print("\n"))?;
    paint(out, &format!("{:label_width$}  {column_labels}", ""), theme.frame)?;
    queue!(out, Print("\n"))?;
    out.flush()
}

fn paint(out: &mut impl Write, text: &str, color: Option<Color>) -> io::Result<()> {
    match color {
        Some(color) => queue!(out, SetForegroundColor(color), Print(text), ResetColor),
        None => queue!(out, Print(text)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use knight_core::{Session, Solver};

    fn render_plain(grid: &Grid) -> String {
        let mut buffer = Vec::new();
        render_board(&mut buffer, grid, &Theme::plain()).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_empty_2x2_board() {
        let expected = "\
 -------
2| _ _ |
1| _ _ |
 -------
   1 2
";
        assert_eq!(render_plain(&Grid::new(2, 2)), expected);
    }

    #[test]
    fn test_cell_width_follows_total_cells() {
        // 4x3 = 12 cells, so cells are two characters wide
        let expected = "\
 ---------------
3| __ __ __ __ |
2| __ __ __ __ |
1| __ __ __ __ |
 ---------------
    1  2  3  4
";
        assert_eq!(render_plain(&Grid::new(4, 3)), expected);
    }

    #[test]
    fn test_player_markers() {
        let grid = Grid::new(3, 3);
        let session = Session::new(&grid, Position::new(0, 2)).unwrap();
        // knight on human (1, 1); each candidate has one onward move left
        let expected = "\
 ---------
3| _ 1 _ |
2| _ _ 1 |
1| X _ _ |
 ---------
   1 2 3
";
        assert_eq!(render_plain(session.board()), expected);
    }

    #[test]
    fn test_solved_1x1_board() {
        let solved = Solver::new()
            .solve(&Grid::new(1, 1), Position::new(0, 0))
            .unwrap();
        let expected = "\
 -----
1| 1 |
 -----
   1
";
        assert_eq!(render_plain(&solved), expected);
    }

    #[test]
    fn test_dark_theme_emits_ansi() {
        let mut buffer = Vec::new();
        render_board(&mut buffer, &Grid::new(2, 2), &Theme::dark()).unwrap();
        let styled = String::from_utf8(buffer).unwrap();
        assert!(styled.contains("\x1b["));
    }
}
