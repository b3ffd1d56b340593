use std::fmt;

use crate::core::piece::Side;

#[derive(Debug)]
/// Structured errors returned by the solver's fallible entry points.
pub enum SolverError {
    /// The input text does not describe a legal 8x8 position.
    InvalidBoard { reason: String },
    /// The side to move still has pieces but no legal move.
    NoLegalMove { side: Side },
    /// I/O failure while reading a board or writing a trace/report.
    Io {
        stage: &'static str,
        path: String,
        error: String,
    },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverError::InvalidBoard { reason } => write!(f, "invalid board: {reason}"),
            SolverError::NoLegalMove { side } => write!(f, "no legal move for {side}"),
            SolverError::Io { stage, path, error } => {
                write!(f, "io error at {stage} for {path}: {error}")
            }
        }
    }
}

impl std::error::Error for SolverError {}
