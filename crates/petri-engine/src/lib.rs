//! Bounded-grid Game of Life engine.
//!
//! A [`Grid`] owns a fixed rows × cols buffer of binary cells and
//! advances it one generation per [`step()`](Grid::step) under the
//! standard B3/S23 rule. The boundary is non-wrapping: everything
//! outside the grid is permanently dead. Neighbor counting is performed
//! with whole-buffer shift-and-accumulate passes over a pre-allocated
//! scratch arena, so a tick costs a handful of row copies and
//! elementwise sums rather than a per-cell scalar loop.
//!
//! The stochastic features ([`randomize`](Grid::randomize) and the
//! spawning pools configured through [`GridConfig`]) draw from a
//! grid-owned ChaCha8 RNG seeded at construction, so a fixed seed
//! produces an identical run.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod grid;
mod scratch;

pub use config::{ConfigError, GridConfig, PoolConfig};
pub use error::GridError;
pub use grid::{Grid, RANDOMIZE_SPAN};
