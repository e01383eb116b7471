//! Exhaustive long-run classification of small Life patterns.
//!
//! For each side length `s` up to a configured bound, every non-empty
//! s × s bit pattern is synthesized, inserted into a fresh pool-free
//! board of exactly its own size, and stepped until its behavior is
//! known: it reaches a state that stepping leaves unchanged
//! ([`Outcome::FixedPoint`]), it re-enters a previously seen state
//! ([`Outcome::Cycle`] with the exact period), or the per-candidate
//! iteration cap elapses ([`Outcome::Unclassified`]).
//!
//! The search space is exponential in s²: a survey to side `s` visits
//! Σ 2^(s²) − 1 candidates ([`survey_size`]), which is why
//! [`MAX_SIDE`] caps the accepted bound.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod encode;
pub mod error;
pub mod outcome;
pub mod survey;

pub use encode::{StateKey, MAX_SIDE};
pub use error::SurveyError;
pub use outcome::{Classification, Outcome};
pub use survey::{classify, survey, survey_size, ClassifyConfig};
