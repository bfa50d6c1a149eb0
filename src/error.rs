//! Errors raised while reading input, talking to the solver, or reading its answer.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The `n m` line of an instance is missing or malformed.
    #[error("invalid instance header: {0}")]
    Header(String),

    /// A subset line holds something other than positive integers.
    #[error("invalid element {token:?} on line {line}")]
    Element { line: usize, token: String },

    #[error("number of sets does not match given m: declared {declared}, found {found}")]
    SubsetCount { declared: usize, found: usize },

    #[error("invalid DIMACS input: {0}")]
    Dimacs(String),

    /// A `v` line of the solver output holds a token that is not a literal.
    #[error("invalid literal {token:?} in solver model")]
    ModelLiteral { token: String },

    #[error("failed to launch solver {}: {source}", .solver.display())]
    Launch {
        solver: PathBuf,
        source: std::io::Error,
    },
}

impl Error {
    /// Process exit status for a run that ends with this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Launch { .. } => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
