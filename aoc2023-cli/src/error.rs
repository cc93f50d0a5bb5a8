//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Errors that end the run with a non-zero exit status
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid combination of arguments
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// The results channel closed before every part was reported
    #[error("Executor stopped: {0}")]
    Executor(#[from] ExecutorError),

    /// Some parts failed; each was already reported on its own line
    #[error("{0} part(s) failed")]
    Failed(usize),

    #[error("Expected {expected}, got {actual}")]
    Mismatch { expected: String, actual: String },
}

/// Why a single day/part produced no answer
#[derive(Error, Debug)]
pub enum ExecutorError {
    #[error("No input file at {}", .0.display())]
    MissingInput(PathBuf),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Solver(#[from] aoc_solver::SolverError),

    #[error("Result channel closed")]
    ChannelSend,
}

/// Input store errors
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
