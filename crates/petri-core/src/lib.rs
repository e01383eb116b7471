//! Pattern templates for the Petri automaton toolkit.
//!
//! This is the leaf crate with no internal dependencies. It defines
//! [`Construct`], an immutable rectangular bit pattern that grids stamp
//! into their buffer, together with its construction errors and a small
//! catalog of named shapes.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod catalog;
pub mod construct;
pub mod error;

pub use construct::{Construct, ALIVE_GLYPH, DEAD_GLYPH};
pub use error::ConstructError;
