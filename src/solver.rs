//! This module contains the logic for solving Sudoku.
//!
//! Most importantly, this module contains the definition of the [Solver]
//! trait and the [BacktrackingSolver] as a generally usable implementation.
//! The strategies which power the reduction between guesses are located in
//! the [strategy] submodule.

pub mod strategy;

use crate::{SIZE, SudokuGrid};
use crate::error::{SolveResult, Unsatisfiable};
use crate::history::{AssignmentRecorder, NoHistory};
use crate::solver::strategy::Board;

/// A trait for structs which have the ability to solve Sudoku. A solver
/// takes a puzzle in the form of a [SudokuGrid] and either produces a full
/// solution grid which contains all the puzzle's clues, or proves that no
/// such grid exists.
pub trait Solver {

    /// Solves the provided Sudoku.
    ///
    /// # Errors
    ///
    /// If the puzzle has no solution, `Err(Unsatisfiable)` is returned.
    fn solve(&self, grid: &SudokuGrid) -> SolveResult<SudokuGrid> {
        self.solve_with_history(grid, &mut NoHistory)
    }

    /// Solves the provided Sudoku, reporting every assignment made along
    /// the way to `recorder`. Note that assignments of abandoned search
    /// branches are reported as well, so the recorded trace reflects the
    /// entire solving process and not only the successful path.
    ///
    /// # Arguments
    ///
    /// * `grid`: The [SudokuGrid] to solve. It is not modified, the
    /// solution is returned as a new grid.
    /// * `recorder`: The [AssignmentRecorder] which observes the solving
    /// process.
    ///
    /// # Errors
    ///
    /// If the puzzle has no solution, `Err(Unsatisfiable)` is returned.
    fn solve_with_history(&self, grid: &SudokuGrid,
        recorder: &mut impl AssignmentRecorder) -> SolveResult<SudokuGrid>;
}

/// A [Solver] which interleaves strategic reduction with recursive search.
/// Before every guess, the board is reduced with the strategies from the
/// [strategy] module. If the reduction does not finish the board, the cell
/// with the fewest remaining candidates is picked and its candidates are
/// tried in ascending order, abandoning a guess as soon as it leads to a
/// contradiction.
///
/// This means two things:
///
/// * Its worst-case runtime is exponential, although the reduction keeps
/// the search tree small for most published puzzles.
/// * It always terminates, either with a solution or with the proof that
/// none exists.
pub struct BacktrackingSolver;

impl BacktrackingSolver {

    /// Finds the unsolved cell with the fewest candidates. Ties are broken
    /// in favor of the first such cell in left-to-right, top-to-bottom
    /// order. The board must contain at least one unsolved cell.
    fn find_most_constrained(board: &Board) -> (usize, usize) {
        let mut best = (0, 0);
        let mut best_len = SIZE + 1;

        for row in 0..SIZE {
            for column in 0..SIZE {
                let len = board.candidates(column, row).len();

                if len > 1 && len < best_len {
                    best = (column, row);
                    best_len = len;
                }
            }
        }

        best
    }

    fn search(mut board: Board, recorder: &mut impl AssignmentRecorder)
            -> SolveResult<Board> {
        strategy::reduce(&mut board, recorder)?;

        if board.is_solved() {
            return Ok(board);
        }

        let (column, row) = BacktrackingSolver::find_most_constrained(&board);

        for digit in board.candidates(column, row) {
            let mut next = board.clone();
            next.assign(column, row, digit, recorder);

            if let Ok(solved) = BacktrackingSolver::search(next, recorder) {
                return Ok(solved);
            }
        }

        Err(Unsatisfiable)
    }
}

impl Solver for BacktrackingSolver {
    fn solve_with_history(&self, grid: &SudokuGrid,
            recorder: &mut impl AssignmentRecorder)
            -> SolveResult<SudokuGrid> {
        let board = Board::from_grid(grid);
        let solved = BacktrackingSolver::search(board, recorder)?;
        Ok(solved.to_grid())
    }
}
