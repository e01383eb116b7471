//! Error types for pattern construction.

use std::error::Error;
use std::fmt;

/// Errors from building a [`Construct`](crate::Construct).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConstructError {
    /// The input had no rows, or rows of zero width.
    Empty,
    /// A row's length differed from the first row's.
    Ragged {
        /// Index of the offending row.
        row: usize,
        /// Expected width (the first row's length).
        expected: usize,
        /// Actual length of the offending row.
        got: usize,
    },
}

impl fmt::Display for ConstructError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "pattern must have at least one row and one column"),
            Self::Ragged { row, expected, got } => {
                write!(f, "row {row} has length {got}, expected {expected}")
            }
        }
    }
}

impl Error for ConstructError {}
