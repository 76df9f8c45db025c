//! This module contains the types used to record the assignments committed
//! while solving a Sudoku. Consumers that want to visualize or analyze the
//! solving process can replay the recorded board snapshots in order.

use crate::solver::strategy::Board;

use serde::Serialize;

/// A capability to observe every committed assignment made while solving.
/// An implementation of this trait is passed to the solve entry points and
/// to the strategies, which report each assignment right after making it.
///
/// Candidate removals are not assignments and are not reported, only
/// commitments of a cell to a single digit.
pub trait AssignmentRecorder {

    /// Called after the given digit has been committed to the cell at the
    /// given position. `board` is the state of the board immediately after
    /// the assignment.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the assigned cell.
    /// * `row`: The row (y-coordinate) of the assigned cell.
    /// * `digit`: The digit the cell was committed to.
    /// * `board`: The board on which the assignment was made, after the
    /// assignment.
    fn record_assignment(&mut self, column: usize, row: usize, digit: usize,
        board: &Board);
}

/// A single recorded assignment: the position and digit that were committed
/// together with a snapshot of the [Board] immediately after the
/// assignment.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct AssignmentEntry {
    column: usize,
    row: usize,
    digit: usize,
    board: Board
}

impl AssignmentEntry {

    /// Gets the column (x-coordinate) of the assigned cell.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Gets the row (y-coordinate) of the assigned cell.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Gets the digit the cell was committed to.
    pub fn digit(&self) -> usize {
        self.digit
    }

    /// Gets the state of the board immediately after the assignment.
    pub fn board(&self) -> &Board {
        &self.board
    }
}

/// An [AssignmentRecorder] that stores all reported assignments in
/// chronological order. Note that assignments made in abandoned search
/// branches remain in the history, so it is a record of the attempts, not
/// only of the final solution path.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct AssignmentHistory {
    entries: Vec<AssignmentEntry>
}

impl AssignmentHistory {

    /// Creates a new, empty assignment history.
    pub fn new() -> AssignmentHistory {
        AssignmentHistory {
            entries: Vec::new()
        }
    }

    /// Gets the recorded entries in chronological order.
    pub fn entries(&self) -> &[AssignmentEntry] {
        &self.entries
    }

    /// Gets the number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Indicates whether no assignment has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes all recorded entries, so the history can be reused for
    /// another solver run.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl AssignmentRecorder for AssignmentHistory {
    fn record_assignment(&mut self, column: usize, row: usize, digit: usize,
            board: &Board) {
        self.entries.push(AssignmentEntry {
            column,
            row,
            digit,
            board: board.clone()
        });
    }
}

/// An [AssignmentRecorder] that discards all reported assignments. This is
/// used by [Solver::solve](crate::solver::Solver::solve) when no history is
/// wanted.
#[derive(Clone, Debug)]
pub struct NoHistory;

impl AssignmentRecorder for NoHistory {
    fn record_assignment(&mut self, _column: usize, _row: usize,
        _digit: usize, _board: &Board) { }
}
