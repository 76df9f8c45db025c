//! This module contains the error and result definitions used in this crate.

use std::fmt::{self, Display, Formatter};

/// Miscellaneous errors that can occur on some methods in the root module.
/// This does not include errors that occur when parsing a grid, see
/// [GridParseError] for that, nor solver failure, see [Unsatisfiable].
#[derive(Debug, Eq, PartialEq)]
pub enum SudokuError {

    /// Indicates that some number is invalid as a cell content. This is the
    /// case if it is less than 1 or greater than 9.
    InvalidNumber,

    /// Indicates that the specified coordinates (column and row) lie outside
    /// the Sudoku grid. This is the case if either is greater than or equal
    /// to 9.
    OutOfBounds
}

/// Syntactic sugar for `Result<V, SudokuError>`.
pub type SudokuResult<V> = Result<V, SudokuError>;

/// An enumeration of the errors that may occur when parsing a
/// [SudokuGrid](crate::SudokuGrid) code.
#[derive(Debug, Eq, PartialEq)]
pub enum GridParseError {

    /// Indicates that the code does not contain exactly one character per
    /// cell, i.e. its length is not 81.
    WrongLength,

    /// Indicates that the code contains a character which is neither a digit
    /// from the range `[1, 9]` nor the empty-cell marker `'.'`.
    InvalidCharacter
}

impl Display for GridParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            GridParseError::WrongLength =>
                write!(f, "code must contain exactly 81 characters"),
            GridParseError::InvalidCharacter =>
                write!(f, "code must consist of digits 1 to 9 and '.' only")
        }
    }
}

/// Syntactic sugar for `Result<V, GridParseError>`.
pub type GridParseResult<V> = Result<V, GridParseError>;

/// The error raised when propagation or search determines that a board
/// admits no solution. During backtracking this is raised and handled once
/// per abandoned branch; it only reaches the caller of the solver if the
/// whole puzzle is unsolvable.
#[derive(Debug, Eq, PartialEq)]
pub struct Unsatisfiable;

/// Syntactic sugar for `Result<V, Unsatisfiable>`.
pub type SolveResult<V> = Result<V, Unsatisfiable>;
