//! Error types shared by every day's parser and solver

use std::fmt::Display;
use thiserror::Error;

/// Failure to turn puzzle input into a day's parsed representation
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// The input as a whole doesn't have the expected shape
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// A single line of input could not be parsed (1-based line number)
    #[error("Invalid input on line {line}: {reason}")]
    InvalidLine { line: usize, reason: String },
    /// A section or marker the puzzle requires is absent
    #[error("Missing data: {0}")]
    MissingData(String),
}

impl ParseError {
    /// Build an [`ParseError::InvalidLine`] from a 0-based line index.
    pub fn at_line(index: usize, reason: impl Display) -> Self {
        ParseError::InvalidLine {
            line: index + 1,
            reason: reason.to_string(),
        }
    }
}

/// Failure while computing the answer for one part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The solver declares the part but has no implementation for it
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// The part number is 0 or greater than the solver's `PARTS`
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// The input parsed but admits no answer (e.g. no path, no cycle)
    #[error("No solution: {0}")]
    NoSolution(String),
    /// Any other error raised while solving
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Error type for looking up, parsing and solving through a registry
#[derive(Debug, Error)]
pub enum SolverError {
    /// No solver registered for the given year and day
    #[error("Solver not found for year {0} day {1}")]
    NotFound(u16, u8),
    /// Error occurred during parsing
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
    /// Error occurred during solving
    #[error("Solve error: {0}")]
    SolveError(#[from] SolveError),
}

/// Error type for registration failures
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// A solver is already registered for this day
    #[error("Duplicate solver registration for year {0} day {1}")]
    DuplicateSolver(u16, u8),
    /// Day outside 1..=25
    #[error("Invalid day {1} for year {0}")]
    InvalidDay(u16, u8),
}
