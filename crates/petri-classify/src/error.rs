//! Error types for survey configuration.

use std::error::Error;
use std::fmt;

use crate::encode::MAX_SIDE;

/// Errors detected during
/// [`ClassifyConfig::validate`](crate::ClassifyConfig::validate).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SurveyError {
    /// The side bound is below 2 or above [`MAX_SIDE`].
    SideOutOfRange {
        /// The rejected bound.
        value: usize,
    },
    /// The per-candidate iteration cap is zero.
    ZeroTickCap,
}

impl fmt::Display for SurveyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SideOutOfRange { value } => {
                write!(f, "max side must be within 2..={MAX_SIDE}, got {value}")
            }
            Self::ZeroTickCap => write!(f, "tick cap must be at least 1"),
        }
    }
}

impl Error for SurveyError {}
