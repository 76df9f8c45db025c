// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_codeblock_attributes)]

//! This crate implements an easy-to-understand solver for diagonal Sudoku,
//! that is, 9x9 Sudoku where additionally both main diagonals must contain
//! every digit exactly once. It supports the following key features:
//!
//! * Parsing and printing Sudoku grids
//! * Checking validity of grids and solutions according to the diagonal
//! Sudoku rules
//! * Solving Sudoku using constraint propagation combined with a perfect
//! backtracking algorithm
//! * Recording every committed assignment made during solving, for
//! consumers that want to visualize or analyze the solving process
//!
//! # Parsing and printing Sudoku
//!
//! See [SudokuGrid::parse] for the exact format of a grid code.
//!
//! Codes can be used to exchange Sudoku, while pretty prints can be used to
//! display a grid in a clearer manner. An example of how to parse and
//! display a grid is provided below.
//!
//! ```
//! use sudoku_diagonals::SudokuGrid;
//!
//! let grid = SudokuGrid::parse(
//!     ".1234567.\
//!      .........\
//!      .........\
//!      7.......5\
//!      2.......1\
//!      9.......3\
//!      .........\
//!      .........\
//!      .3456789.").unwrap();
//! println!("{}", grid);
//! ```
//!
//! # Checking validity of Sudoku
//!
//! [SudokuGrid::is_valid] checks that no unit, i.e. no row, column, block,
//! or diagonal, contains a digit twice. Empty cells are ignored, so
//! partially filled grids can be checked as well. Note that the diagonals
//! link cells which are unrelated in classic Sudoku.
//!
//! ```
//! use sudoku_diagonals::SudokuGrid;
//!
//! let mut grid = SudokuGrid::new();
//!
//! // 1s in opposite corners share only the main diagonal.
//! grid.set_cell(0, 0, 1).unwrap();
//! grid.set_cell(8, 8, 1).unwrap();
//!
//! assert!(!grid.is_valid());
//!
//! grid.clear_cell(8, 8).unwrap();
//! grid.set_cell(8, 7, 1).unwrap();
//!
//! assert!(grid.is_valid());
//! ```
//!
//! # Solving Sudoku
//!
//! The [BacktrackingSolver](solver::BacktrackingSolver) first applies the
//! propagation strategies from the [strategy](solver::strategy) module
//! until they yield no further progress and only then branches over the
//! candidates of an undetermined cell. Many published puzzles are solved by
//! propagation alone, like the 17-clue puzzle below.
//!
//! ```
//! use sudoku_diagonals::SudokuGrid;
//! use sudoku_diagonals::solver::{BacktrackingSolver, Solver};
//!
//! let puzzle = SudokuGrid::parse(
//!     "2.............62....1....7...6..8...\
//!      3...9...7...6..4...4....8....52.............3").unwrap();
//! let solution = BacktrackingSolver.solve(&puzzle).unwrap();
//! let expected = SudokuGrid::parse(
//!     "267945381853716249491823576576438192\
//!      384192657129657438642379815935281764718564923").unwrap();
//!
//! assert_eq!(expected, solution);
//! ```
//!
//! If a puzzle admits no solution at all,
//! [Unsatisfiable](error::Unsatisfiable) is returned instead.
//!
//! # Recording the solving process
//!
//! Every committed assignment, whether derived by a strategy or guessed
//! during backtracking, can be recorded together with a snapshot of the
//! board on which it was made. Pass an
//! [AssignmentHistory](history::AssignmentHistory) to
//! [Solver::solve_with_history](solver::Solver::solve_with_history) and
//! read the entries afterwards.
//!
//! ```
//! use sudoku_diagonals::SudokuGrid;
//! use sudoku_diagonals::history::AssignmentHistory;
//! use sudoku_diagonals::solver::{BacktrackingSolver, Solver};
//!
//! let puzzle = SudokuGrid::parse(
//!     "2.............62....1....7...6..8...\
//!      3...9...7...6..4...4....8....52.............3").unwrap();
//! let mut history = AssignmentHistory::new();
//!
//! BacktrackingSolver.solve_with_history(&puzzle, &mut history).unwrap();
//!
//! assert!(!history.is_empty());
//!
//! let first = &history.entries()[0];
//! let candidates = first.board().candidates(first.column(), first.row());
//!
//! assert_eq!(Some(first.digit()), candidates.single());
//! ```
//!
//! # Note regarding performance
//!
//! Solving a single puzzle is fast, but hard instances with few clues can
//! require a noticeable amount of backtracking. If you solve many puzzles,
//! for example in tests, it is recommended to use at least `opt-level = 2`,
//! which speeds up the search by an order of magnitude.

pub mod error;
pub mod history;
pub mod solver;
pub mod units;
pub mod util;



use error::{
    GridParseError,
    GridParseResult,
    SudokuError,
    SudokuResult
};

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};

pub(crate) const SIZE: usize = 9;
pub(crate) const BLOCK_SIZE: usize = 3;

/// A Sudoku grid consists of 81 cells arranged in 9 rows, 9 columns, and 9
/// 3x3 blocks. Each cell may or may not be filled with a digit from the
/// range `[1, 9]`. In the diagonal variant implemented by this crate, the
/// two main diagonals act as additional units, i.e. a solved grid must
/// contain every digit exactly once in each row, column, block, and
/// diagonal.
///
/// A grid pretty-prints like this:
///
/// ```text
/// ╔═══╤═══╤═══╦═══╤═══╤═══╦═══╤═══╤═══╗
/// ║   │ 1 │ 2 ║ 3 │ 4 │ 5 ║ 6 │ 7 │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╠═══╪═══╪═══╬═══╪═══╪═══╬═══╪═══╪═══╣
/// ║ 7 │   │   ║   │   │   ║   │   │ 5 ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║ 2 │   │   ║   │   │   ║   │   │ 1 ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║ 9 │   │   ║   │   │   ║   │   │ 3 ║
/// ╠═══╪═══╪═══╬═══╪═══╪═══╬═══╪═══╪═══╣
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │ 3 │ 4 ║ 5 │ 6 │ 7 ║ 8 │ 9 │   ║
/// ╚═══╧═══╧═══╩═══╧═══╧═══╩═══╧═══╧═══╝
/// ```
///
/// When serialized with serde, a grid is represented by its code, i.e. the
/// string accepted by [SudokuGrid::parse].
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(into = "String")]
#[serde(try_from = "String")]
pub struct SudokuGrid {
    cells: Vec<Option<usize>>
}

fn to_char(cell: Option<usize>) -> char {
    if let Some(n) = cell {
        ('0' as u8 + n as u8) as char
    }
    else {
        ' '
    }
}

fn to_code_char(cell: Option<usize>) -> char {
    if let Some(n) = cell {
        ('0' as u8 + n as u8) as char
    }
    else {
        '.'
    }
}

fn line(start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char, newline: bool)
        -> String {
    let mut result = String::new();

    for x in 0..SIZE {
        if x == 0 {
            result.push(start);
        }
        else if x % BLOCK_SIZE == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(x));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn top_row() -> String {
    line('╔', '╦', '╤', |_| '═', '═', '╗', true)
}

fn thin_separator_line() -> String {
    line('╟', '╫', '┼', |_| '─', '─', '╢', true)
}

fn thick_separator_line() -> String {
    line('╠', '╬', '╪', |_| '═', '═', '╣', true)
}

fn bottom_row() -> String {
    line('╚', '╩', '╧', |_| '═', '═', '╝', false)
}

fn content_row(grid: &SudokuGrid, y: usize) -> String {
    line('║', '║', '│', |x| to_char(grid.get_cell(x, y).unwrap()), ' ', '║',
        true)
}

impl Display for SudokuGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let top_row = top_row();
        let thin_separator_line = thin_separator_line();
        let thick_separator_line = thick_separator_line();
        let bottom_row = bottom_row();

        for y in 0..SIZE {
            if y == 0 {
                f.write_str(top_row.as_str())?;
            }
            else if y % BLOCK_SIZE == 0 {
                f.write_str(thick_separator_line.as_str())?;
            }
            else {
                f.write_str(thin_separator_line.as_str())?;
            }

            f.write_str(content_row(self, y).as_str())?;
        }

        f.write_str(bottom_row.as_str())?;
        Ok(())
    }
}

pub(crate) fn index(column: usize, row: usize) -> usize {
    row * SIZE + column
}

impl SudokuGrid {

    /// Creates a new, empty Sudoku grid in which every cell can be assigned
    /// later using [SudokuGrid::set_cell].
    pub fn new() -> SudokuGrid {
        SudokuGrid {
            cells: vec![None; SIZE * SIZE]
        }
    }

    /// Parses a code encoding a Sudoku grid. The code must consist of
    /// exactly one character per cell, i.e. 81 characters in total, in
    /// left-to-right, top-to-bottom order, where each row is completed
    /// before the next one is started. A digit from the range `[1, 9]`
    /// denotes a filled cell and the character `'.'` denotes an empty one.
    ///
    /// As an example, the code
    /// `"1........2........3........4........5........6........7........8........9........"`
    /// parses to the grid which contains the digits 1 to 9 in its first
    /// column and is empty everywhere else.
    ///
    /// # Errors
    ///
    /// Any specialization of [GridParseError] (see that documentation).
    pub fn parse(code: &str) -> GridParseResult<SudokuGrid> {
        let chars: Vec<char> = code.chars().collect();

        if chars.len() != SIZE * SIZE {
            return Err(GridParseError::WrongLength);
        }

        let mut cells = Vec::with_capacity(SIZE * SIZE);

        for c in chars {
            match c {
                '.' => cells.push(None),
                '1'..='9' => cells.push(Some(c as usize - '0' as usize)),
                _ => return Err(GridParseError::InvalidCharacter)
            }
        }

        Ok(SudokuGrid {
            cells
        })
    }

    /// Converts the grid into a `String` in a way that is consistent with
    /// [SudokuGrid::parse]. That is, a grid that is converted to a string
    /// and parsed again will not change, as is illustrated below.
    ///
    /// ```
    /// use sudoku_diagonals::SudokuGrid;
    ///
    /// let mut grid = SudokuGrid::new();
    ///
    /// // Just some arbitrary changes to create some content.
    /// grid.set_cell(1, 1, 4).unwrap();
    /// grid.set_cell(1, 2, 5).unwrap();
    ///
    /// let grid_str = grid.to_parseable_string();
    /// let grid_parsed = SudokuGrid::parse(grid_str.as_str()).unwrap();
    ///
    /// assert_eq!(grid, grid_parsed);
    /// ```
    pub fn to_parseable_string(&self) -> String {
        self.cells.iter().copied().map(to_code_char).collect()
    }

    /// Gets the content of the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn get_cell(&self, column: usize, row: usize)
            -> SudokuResult<Option<usize>> {
        if column >= SIZE || row >= SIZE {
            Err(SudokuError::OutOfBounds)
        }
        else {
            Ok(self.cells[index(column, row)])
        }
    }

    /// Sets the content of the cell at the specified position to the given
    /// digit. If the cell was not empty, the old digit will be overwritten.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, 9[`.
    /// * `digit`: The digit to assign to the specified cell. Must be in the
    /// range `[1, 9]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `column` or `row` are not in
    /// the specified range.
    /// * `SudokuError::InvalidNumber` If `digit` is not in the specified
    /// range.
    pub fn set_cell(&mut self, column: usize, row: usize, digit: usize)
            -> SudokuResult<()> {
        if column >= SIZE || row >= SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        if digit == 0 || digit > SIZE {
            return Err(SudokuError::InvalidNumber);
        }

        self.cells[index(column, row)] = Some(digit);
        Ok(())
    }

    /// Clears the content of the cell at the specified position, that is, if
    /// it contains a digit, that digit is removed. If the cell is already
    /// empty, it will be left that way.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the cleared cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the cleared cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn clear_cell(&mut self, column: usize, row: usize)
            -> SudokuResult<()> {
        if column >= SIZE || row >= SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        self.cells[index(column, row)] = None;
        Ok(())
    }

    /// Counts the number of clues given by this grid. This is the number of
    /// non-empty cells. While on average Sudoku with less clues are harder,
    /// this is *not* a reliable measure of difficulty.
    pub fn count_clues(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Indicates whether this grid is full, i.e. every cell is filled with a
    /// digit.
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|c| c == &None)
    }

    /// Indicates whether this grid is empty, i.e. no cell is filled with a
    /// digit. In this case, [SudokuGrid::count_clues] returns 0.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c == &None)
    }

    /// Indicates whether this grid violates no constraint, i.e. no row,
    /// column, block, or diagonal contains the same digit twice among its
    /// filled cells. Empty cells are ignored, so a partially filled grid can
    /// be valid. A full, valid grid is a solution.
    pub fn is_valid(&self) -> bool {
        units::all_units().iter().all(|unit| !util::contains_duplicate(
            unit.iter().filter_map(|&(column, row)|
                self.cells[index(column, row)])))
    }

    /// Indicates whether this grid configuration is a subset of another one.
    /// That is, all cells filled in this grid with some digit must be filled
    /// in `other` with the same digit. If this condition is met, `true` is
    /// returned, and `false` otherwise.
    pub fn is_subset(&self, other: &SudokuGrid) -> bool {
        self.cells.iter()
            .zip(other.cells.iter())
            .all(|(self_cell, other_cell)| {
                match self_cell {
                    Some(self_digit) => other_cell == &Some(*self_digit),
                    None => true
                }
            })
    }

    /// Indicates whether this grid configuration is a superset of another
    /// one. That is, all cells filled in the `other` grid with some digit
    /// must be filled in this one with the same digit. If this condition is
    /// met, `true` is returned, and `false` otherwise.
    pub fn is_superset(&self, other: &SudokuGrid) -> bool {
        other.is_subset(self)
    }

    /// Gets a reference to the vector which holds the cells. They are in
    /// left-to-right, top-to-bottom order, where rows are together.
    pub fn cells(&self) -> &Vec<Option<usize>> {
        &self.cells
    }
}

impl From<SudokuGrid> for String {
    fn from(grid: SudokuGrid) -> String {
        grid.to_parseable_string()
    }
}

impl TryFrom<String> for SudokuGrid {
    type Error = GridParseError;

    fn try_from(code: String) -> Result<SudokuGrid, GridParseError> {
        SudokuGrid::parse(&code)
    }
}
