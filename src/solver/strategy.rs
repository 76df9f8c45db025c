//! This module is about strategic reduction of Sudoku boards. Strategies
//! are local inference rules which shrink the candidate sets of cells
//! without any search. They cannot solve every Sudoku on their own, but
//! they solve many published puzzles outright and drastically reduce the
//! search space for the [backtracking solver](crate::solver::BacktrackingSolver)
//! otherwise.
//!
//! This module contains the definition of the [Strategy] trait, which all
//! strategies implement, the [Board] struct holding the candidate sets the
//! strategies operate on, and the [reduce] function, which applies all
//! strategies in a loop until none of them yields further progress.

use crate::{SIZE, SudokuGrid, index};
use crate::error::{SolveResult, Unsatisfiable};
use crate::history::AssignmentRecorder;
use crate::units;
use crate::util::DigitSet;

use serde::Serialize;

use std::fmt::{self, Display, Formatter};

/// Tracks the set of digits which are still possible for every cell of a
/// Sudoku grid. This is analogous to the pencil markings a human player
/// would make. Strategies communicate the results of logical reasoning by
/// removing candidates from or committing assignments on a board.
///
/// A cell with exactly one candidate is called solved. A cell with no
/// candidates signals that the board as a whole has become unsolvable, see
/// [Board::has_contradiction].
///
/// When serialized with serde, a board is represented as a vector of 81
/// candidate strings in left-to-right, top-to-bottom order, e.g. `"137"`
/// for a cell in which 1, 3, and 7 are still possible.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(into = "Vec<String>")]
pub struct Board {
    cells: Vec<DigitSet>
}

impl Board {

    /// Creates a new board from a Sudoku grid. The candidates for all cells
    /// that are empty in the provided grid are all digits, and the
    /// candidates for cells which are filled are only the digit in that
    /// cell.
    pub fn from_grid(grid: &SudokuGrid) -> Board {
        let cells = grid.cells().iter()
            .map(|cell| match cell {
                Some(digit) => DigitSet::singleton(*digit),
                None => DigitSet::all()
            })
            .collect();

        Board {
            cells
        }
    }

    /// Gets the candidate set of the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, 9[`.
    pub fn candidates(&self, column: usize, row: usize) -> DigitSet {
        self.cells[index(column, row)]
    }

    /// Gets a mutable reference to the candidate set of the cell at the
    /// specified position.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, 9[`.
    pub fn candidates_mut(&mut self, column: usize, row: usize)
            -> &mut DigitSet {
        &mut self.cells[index(column, row)]
    }

    /// Commits the cell at the specified position to the given digit, i.e.
    /// replaces its candidate set with the singleton containing only that
    /// digit. The assignment is reported to `recorder` afterwards. If the
    /// cell already holds exactly that singleton, nothing happens and
    /// nothing is reported.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be
    /// in the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, 9[`.
    /// * `digit`: The digit to commit. Must be in the range `[1, 9]`.
    /// * `recorder`: The [AssignmentRecorder] which observes the
    /// assignment.
    ///
    /// Returns true, if and only if this board changed as a result of the
    /// operation.
    pub fn assign(&mut self, column: usize, row: usize, digit: usize,
            recorder: &mut impl AssignmentRecorder) -> bool {
        let singleton = DigitSet::singleton(digit);

        if self.cells[index(column, row)] == singleton {
            return false;
        }

        self.cells[index(column, row)] = singleton;
        recorder.record_assignment(column, row, digit, self);
        true
    }

    /// Removes the given digit from the candidate set of the cell at the
    /// specified position. In contrast to [Board::assign], this is not an
    /// assignment and is therefore not recorded anywhere.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the cell. Must be in the
    /// range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the cell. Must be in the range
    /// `[0, 9[`.
    /// * `digit`: The digit to remove. Must be in the range `[1, 9]`.
    ///
    /// Returns true, if and only if this board changed as a result of the
    /// operation.
    pub fn remove_candidate(&mut self, column: usize, row: usize,
            digit: usize) -> bool {
        self.cells[index(column, row)].remove(digit)
    }

    /// Counts the cells which are solved, i.e. hold exactly one candidate.
    pub fn count_solved_cells(&self) -> usize {
        self.cells.iter().filter(|cell| cell.len() == 1).count()
    }

    /// Indicates whether every cell of this board is solved.
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(|cell| cell.len() == 1)
    }

    /// Indicates whether any cell of this board has run out of candidates,
    /// which proves that the board is unsolvable.
    pub fn has_contradiction(&self) -> bool {
        self.cells.iter().any(|cell| cell.is_empty())
    }

    /// Converts this board into a [SudokuGrid] in which every solved cell
    /// is filled with its candidate and every other cell is empty.
    pub fn to_grid(&self) -> SudokuGrid {
        let mut grid = SudokuGrid::new();

        for row in 0..SIZE {
            for column in 0..SIZE {
                if let Some(digit) = self.cells[index(column, row)].single() {
                    grid.set_cell(column, row, digit).unwrap();
                }
            }
        }

        grid
    }
}

impl From<Board> for Vec<String> {
    fn from(board: Board) -> Vec<String> {
        board.cells.iter().map(|cell| cell.to_string()).collect()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let width = 1 + self.cells.iter()
            .map(|cell| cell.len())
            .max()
            .unwrap_or(0);
        let separator = vec!["-".repeat(width * 3); 3].join("+");

        for row in 0..SIZE {
            for column in 0..SIZE {
                let candidates =
                    self.cells[index(column, row)].to_string();
                write!(f, "{:^width$}", candidates, width = width)?;

                if column == 2 || column == 5 {
                    f.write_str("|")?;
                }
            }

            f.write_str("\n")?;

            if row == 2 || row == 5 {
                f.write_str(separator.as_str())?;
                f.write_str("\n")?;
            }
        }

        Ok(())
    }
}

/// A strategy which makes deductions on a [Board]. In contrast to search,
/// strategies never guess, they only draw conclusions which hold in every
/// solution of the board.
pub trait Strategy {

    /// Applies this strategy to the given board. Any assignment committed
    /// in the process is reported to `recorder`.
    ///
    /// This method shall return `true` if and only if something changed,
    /// i.e. a candidate was removed or a cell was assigned. This indicates
    /// to [reduce] whether it is useful to apply the strategies again,
    /// since they may find something new.
    fn apply(&self, board: &mut Board,
        recorder: &mut impl AssignmentRecorder) -> bool;
}

/// A [Strategy] which removes the digit of every solved cell from the
/// candidate sets of all of that cell's peers. This is the most fundamental
/// deduction in Sudoku: once a cell is known to hold a digit, no cell
/// sharing a row, column, block, or diagonal with it can hold the same
/// digit.
///
/// The solved cells are collected before any removal takes place, so cells
/// which become solved during the application are only processed by the
/// next application.
#[derive(Clone)]
pub struct EliminateStrategy;

impl Strategy for EliminateStrategy {

    fn apply(&self, board: &mut Board,
            _recorder: &mut impl AssignmentRecorder) -> bool {
        let mut solved = Vec::new();

        for row in 0..SIZE {
            for column in 0..SIZE {
                if let Some(digit) = board.candidates(column, row).single() {
                    solved.push((column, row, digit));
                }
            }
        }

        let mut changed = false;

        for (column, row, digit) in solved {
            for &(peer_column, peer_row) in units::peers_of(column, row) {
                changed |=
                    board.remove_candidate(peer_column, peer_row, digit);
            }
        }

        changed
    }
}

#[derive(Clone)]
enum Location {
    None,
    One(usize, usize),
    Multiple
}

impl Location {
    fn union(&self, column: usize, row: usize) -> Location {
        match self {
            Location::None => Location::One(column, row),
            Location::One(_, _) => Location::Multiple,
            Location::Multiple => Location::Multiple
        }
    }
}

/// A [Strategy] which detects situations in which a digit can only go in
/// one cell of a unit and commits that cell to the digit.
///
/// As a visualization, the cell marked with X in the following example is
/// the only one in its block that can be a 2: the 2s further down exclude
/// the second and third column and the other cells of the first column are
/// already filled.
///
/// ```text
/// ╔═══╤═══╤═══╦═══╤═══╤═══╦═══╤═══╤═══╗
/// ║ 5 │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║ 7 │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║ X │   │   ║   │   │   ║   │   │   ║
/// ╠═══╪═══╪═══╬═══╪═══╪═══╬═══╪═══╪═══╣
/// ║   │ 2 │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╠═══╪═══╪═══╬═══╪═══╪═══╬═══╪═══╪═══╣
/// ║   │   │ 2 ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╚═══╧═══╧═══╩═══╧═══╧═══╩═══╧═══╧═══╝
/// ```
///
/// Assignments committed by this strategy are reported to the recorder.
#[derive(Clone)]
pub struct OnlyChoiceStrategy;

impl Strategy for OnlyChoiceStrategy {

    fn apply(&self, board: &mut Board,
            recorder: &mut impl AssignmentRecorder) -> bool {
        let mut changed = false;

        for unit in units::all_units() {
            let mut locations = vec![Location::None; SIZE + 1];

            for &(column, row) in unit {
                let candidates = board.candidates(column, row);

                for digit in candidates.iter() {
                    let location = &locations[digit];
                    locations[digit] = location.union(column, row);
                }
            }

            for (digit, location) in locations.into_iter().enumerate() {
                if let Location::One(column, row) = location {
                    changed |= board.assign(column, row, digit, recorder);
                }
            }
        }

        changed
    }
}

/// A [Strategy] which detects naked twins, that is, two cells in one unit
/// whose candidate sets are the same two digits. Since those two digits
/// must go into those two cells in some order, they can be removed from
/// every other cell of the unit.
///
/// As an example, consider the first row of the following configuration.
/// The cells marked with A can only contain 1 or 2, since 3 is excluded by
/// the 3s in their columns. They are therefore naked twins, which fixes the
/// cell marked with X to 3.
///
/// ```text
/// ╔═══╤═══╤═══╦═══╤═══╤═══╦═══╤═══╤═══╗
/// ║ A │ A │ X ║ 4 │ 5 │ 6 ║ 7 │ 8 │ 9 ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╠═══╪═══╪═══╬═══╪═══╪═══╬═══╪═══╪═══╣
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║ 3 │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╠═══╪═══╪═══╬═══╪═══╪═══╬═══╪═══╪═══╣
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │ 3 │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╚═══╧═══╧═══╩═══╧═══╧═══╩═══╧═══╧═══╝
/// ```
///
/// The twin digits are only removed from cells which currently hold more
/// than two candidates. This leaves other two-candidate cells alone, which
/// may be unrelated twins, and in particular never touches the twins
/// themselves. Three or more cells of one unit sharing the same pair make
/// the unit unsolvable, which is left to be detected by the resulting empty
/// candidate sets.
#[derive(Clone)]
pub struct NakedTwinsStrategy;

impl Strategy for NakedTwinsStrategy {

    fn apply(&self, board: &mut Board,
            _recorder: &mut impl AssignmentRecorder) -> bool {
        let mut changed = false;

        for row in 0..SIZE {
            for column in 0..SIZE {
                let pair = board.candidates(column, row);

                if pair.len() != 2 {
                    continue;
                }

                for unit in units::units_of(column, row) {
                    let has_twin = unit.iter()
                        .any(|&(other_column, other_row)|
                            (other_column, other_row) != (column, row) &&
                            board.candidates(other_column, other_row)
                                == pair);

                    if !has_twin {
                        continue;
                    }

                    for &(other_column, other_row) in unit {
                        let options =
                            board.candidates(other_column, other_row);

                        if options.len() <= 2 {
                            continue;
                        }

                        let narrowed = options - pair;

                        if narrowed != options {
                            *board.candidates_mut(other_column, other_row) =
                                narrowed;
                            changed = true;
                        }
                    }
                }
            }
        }

        changed
    }
}

/// Applies [EliminateStrategy], [NakedTwinsStrategy], and
/// [OnlyChoiceStrategy], in this order, in a loop until an iteration no
/// longer increases the number of solved cells. The strategies reinforce
/// each other, e.g. an assignment made by the only-choice strategy enables
/// new eliminations, so a single pass is not enough.
///
/// Assignments committed in the process are reported to `recorder`.
///
/// # Errors
///
/// If any cell runs out of candidates, the board is unsolvable and
/// `Err(Unsatisfiable)` is returned. The board then remains in its
/// contradictory state, so this is only useful for callers which discard
/// the board on failure, like the backtracking search.
pub fn reduce(board: &mut Board, recorder: &mut impl AssignmentRecorder)
        -> SolveResult<()> {
    loop {
        let solved_before = board.count_solved_cells();

        EliminateStrategy.apply(board, recorder);
        NakedTwinsStrategy.apply(board, recorder);
        OnlyChoiceStrategy.apply(board, recorder);

        if board.has_contradiction() {
            return Err(Unsatisfiable);
        }

        if board.count_solved_cells() == solved_before {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::digits;
    use crate::history::{AssignmentHistory, NoHistory};

    fn empty_board() -> Board {
        Board::from_grid(&SudokuGrid::new())
    }

    #[test]
    fn from_grid_sets_candidates() {
        let mut grid = SudokuGrid::new();
        grid.set_cell(3, 2, 7).unwrap();

        let board = Board::from_grid(&grid);

        assert_eq!(DigitSet::singleton(7), board.candidates(3, 2));
        assert_eq!(DigitSet::all(), board.candidates(0, 0));
        assert_eq!(1, board.count_solved_cells());
        assert!(!board.is_solved());
        assert!(!board.has_contradiction());
    }

    #[test]
    fn assign_commits_and_reports_once() {
        let mut board = empty_board();
        let mut history = AssignmentHistory::new();

        assert!(board.assign(2, 3, 7, &mut history));
        assert!(!board.assign(2, 3, 7, &mut history));
        assert_eq!(DigitSet::singleton(7), board.candidates(2, 3));
        assert_eq!(1, history.len());
    }

    #[test]
    fn eliminate_removes_solved_digit_from_peers() {
        let mut grid = SudokuGrid::new();
        grid.set_cell(4, 4, 5).unwrap();

        let mut board = Board::from_grid(&grid);

        assert!(EliminateStrategy.apply(&mut board, &mut NoHistory));

        // row, column, block, and both diagonal peers lose the digit
        assert!(!board.candidates(1, 4).contains(5));
        assert!(!board.candidates(4, 7).contains(5));
        assert!(!board.candidates(3, 3).contains(5));
        assert!(!board.candidates(0, 0).contains(5));
        assert!(!board.candidates(8, 0).contains(5));

        // unrelated cells are untouched
        assert!(board.candidates(1, 0).contains(5));
        assert_eq!(DigitSet::singleton(5), board.candidates(4, 4));

        assert!(!EliminateStrategy.apply(&mut board, &mut NoHistory));
    }

    #[test]
    fn eliminate_exposes_contradiction() {
        let mut grid = SudokuGrid::new();

        // the two cells share only the main diagonal
        grid.set_cell(0, 0, 5).unwrap();
        grid.set_cell(4, 4, 5).unwrap();

        let mut board = Board::from_grid(&grid);

        EliminateStrategy.apply(&mut board, &mut NoHistory);

        assert!(board.has_contradiction());
    }

    #[test]
    fn only_choice_assigns_unique_location() {
        let mut board = empty_board();

        for column in 1..9 {
            board.candidates_mut(column, 0).remove(5);
        }

        let mut history = AssignmentHistory::new();

        assert!(OnlyChoiceStrategy.apply(&mut board, &mut history));
        assert_eq!(DigitSet::singleton(5), board.candidates(0, 0));
        assert_eq!(1, history.len());

        let entry = &history.entries()[0];

        assert_eq!((0, 0, 5), (entry.column(), entry.row(), entry.digit()));

        assert!(!OnlyChoiceStrategy.apply(&mut board, &mut history));
        assert_eq!(1, history.len());
    }

    #[test]
    fn naked_twins_strip_pair_from_shared_unit() {
        let mut board = empty_board();

        *board.candidates_mut(0, 0) = digits!(1, 2);
        *board.candidates_mut(3, 0) = digits!(1, 2);
        *board.candidates_mut(4, 0) = digits!(1, 2, 3);
        *board.candidates_mut(5, 0) = digits!(1, 3);

        assert!(NakedTwinsStrategy.apply(&mut board, &mut NoHistory));

        // only cells with more than two candidates are narrowed
        assert_eq!(digits!(3), board.candidates(4, 0));
        assert_eq!(digits!(1, 3), board.candidates(5, 0));
        assert_eq!(digits!(1, 2), board.candidates(0, 0));
        assert_eq!(digits!(1, 2), board.candidates(3, 0));
        assert_eq!(digits!(3, 4, 5, 6, 7, 8, 9), board.candidates(8, 0));

        assert!(!NakedTwinsStrategy.apply(&mut board, &mut NoHistory));
    }

    #[test]
    fn naked_twins_require_a_shared_unit() {
        let mut board = empty_board();

        *board.candidates_mut(0, 0) = digits!(1, 2);
        *board.candidates_mut(3, 4) = digits!(1, 2);

        assert!(!NakedTwinsStrategy.apply(&mut board, &mut NoHistory));
        assert_eq!(DigitSet::all(), board.candidates(1, 0));
    }

    #[test]
    fn naked_twins_act_per_unit() {
        let mut board = empty_board();

        // twins in row 0, but in different blocks
        *board.candidates_mut(0, 0) = digits!(8, 9);
        *board.candidates_mut(7, 0) = digits!(8, 9);

        assert!(NakedTwinsStrategy.apply(&mut board, &mut NoHistory));

        // the shared row is narrowed, the blocks of the twins are not
        assert!(!board.candidates(4, 0).contains(8));
        assert!(board.candidates(1, 1).contains(8));
        assert!(board.candidates(6, 1).contains(8));
    }

    #[test]
    fn reduce_solves_propagation_only_puzzle() {
        let puzzle = SudokuGrid::parse(
            ".12345679\
             375.89124\
             496172.58\
             7.1936285\
             2637.8941\
             9584217.3\
             52.893416\
             68921.537\
             13456789.").unwrap();
        let expected = SudokuGrid::parse(
            "812345679\
             375689124\
             496172358\
             741936285\
             263758941\
             958421763\
             527893416\
             689214537\
             134567892").unwrap();
        let mut board = Board::from_grid(&puzzle);

        reduce(&mut board, &mut NoHistory).unwrap();

        assert!(board.is_solved());
        assert_eq!(expected, board.to_grid());
    }

    #[test]
    fn reduce_detects_contradiction() {
        let mut code = String::from("55");
        code.push_str(".".repeat(79).as_str());

        let puzzle = SudokuGrid::parse(code.as_str()).unwrap();
        let mut board = Board::from_grid(&puzzle);

        assert_eq!(Err(Unsatisfiable),
            reduce(&mut board, &mut NoHistory));
    }

    #[test]
    fn reduce_rejects_cell_without_candidates() {
        let mut board = empty_board();

        // contradictory before any strategy has run
        *board.candidates_mut(4, 4) = DigitSet::empty();

        assert_eq!(Err(Unsatisfiable),
            reduce(&mut board, &mut NoHistory));
    }

    #[test]
    fn strategies_are_stable_after_reduction() {
        let mut code =
            String::from("2.............62....1....7...6..8...");
        code.push_str("3...9...7...6..4...4....8....52.............3");

        let puzzle = SudokuGrid::parse(code.as_str()).unwrap();
        let mut board = Board::from_grid(&puzzle);

        reduce(&mut board, &mut NoHistory).unwrap();

        assert!(board.is_solved());
        assert!(!EliminateStrategy.apply(&mut board, &mut NoHistory));
        assert!(!NakedTwinsStrategy.apply(&mut board, &mut NoHistory));
        assert!(!OnlyChoiceStrategy.apply(&mut board, &mut NoHistory));
    }

    #[test]
    fn to_grid_keeps_unsolved_cells_empty() {
        let board = empty_board();

        assert!(board.to_grid().is_empty());

        let mut grid = SudokuGrid::new();
        grid.set_cell(2, 6, 9).unwrap();

        let board = Board::from_grid(&grid);

        assert_eq!(grid, board.to_grid());
    }

    #[test]
    fn display_centers_candidates() {
        let mut board = empty_board();

        *board.candidates_mut(0, 0) = digits!(1, 2);

        let displayed = board.to_string();
        let lines: Vec<&str> = displayed.lines().collect();

        assert_eq!(11, lines.len());
        assert!(lines[0].starts_with("    12    "));
        assert_eq!(2, lines[0].matches('|').count());
        assert!(lines[3].starts_with("------"));
        assert_eq!(2, lines[3].matches('+').count());
        assert_eq!(lines[3], lines[7]);
    }

    #[test]
    fn board_serializes_candidate_strings() {
        let mut grid = SudokuGrid::new();
        grid.set_cell(0, 0, 4).unwrap();

        let board = Board::from_grid(&grid);
        let json = serde_json::to_string(&board).unwrap();

        assert!(json.starts_with("[\"4\",\"123456789\""));
    }
}
