//! Basic example of using the knight's tour engine

use knight_core::{Cell, Grid, Position, Session, Solver};

fn main() {
    // Search a 5x5 board from the bottom-left corner
    let grid = Grid::new(5, 5);
    let start = Position::new(0, 4);

    let solver = Solver::new();
    match solver.solve(&grid, start) {
        Ok(solved) => {
            println!("Found a tour of {} squares:", solved.total_cells());
            for (step, pos) in solved.visit_path().iter().enumerate() {
                println!("{:>2}. {}", step + 1, pos);
            }
        }
        Err(err) => {
            println!("{err}");
            return;
        }
    }

    // Start an interactive attempt and look at the first hints
    if let Ok(session) = Session::new(&grid, start) {
        println!("\nLegal first moves and their onward-move counts:");
        for &target in session.legal_moves() {
            if let Cell::Hint(count) = session.board().cell(target) {
                println!("  {target}: {count}");
            }
        }
    }
}
