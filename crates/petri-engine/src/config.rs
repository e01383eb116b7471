//! Grid configuration and validation.
//!
//! [`GridConfig`] is the construction input for a [`Grid`](crate::Grid).
//! Spawning pools are part of the configuration; the engine itself
//! hard-codes no pool locations, sizes, or probabilities.
//! [`GridConfig::validate`] checks all structural invariants up front so
//! the engine's per-tick paths never have to.

use std::error::Error;
use std::fmt;

/// A rectangular region periodically re-seeded with random cells.
///
/// Every tick, independently of any other pool, the pool fires with
/// `probability`; when it fires, the rectangle in the freshly computed
/// next state is overwritten with independent Bernoulli(0.5) cells. Pool
/// writes happen after rule evaluation and neither influence nor are
/// influenced by that tick's neighbor counts.
#[derive(Clone, Debug, PartialEq)]
pub struct PoolConfig {
    /// Top-left corner of the pool rectangle, `(row, col)`.
    pub origin: (usize, usize),
    /// Rectangle extent, `(rows, cols)`.
    pub size: (usize, usize),
    /// Per-tick trigger probability in `[0.0, 1.0]`.
    pub probability: f64,
}

impl PoolConfig {
    /// Stock per-tick trigger probability.
    pub const DEFAULT_PROBABILITY: f64 = 0.01;

    /// A pool with the given placement and the stock probability.
    pub fn new(origin: (usize, usize), size: (usize, usize)) -> Self {
        Self {
            origin,
            size,
            probability: Self::DEFAULT_PROBABILITY,
        }
    }
}

/// Complete configuration for constructing a [`Grid`](crate::Grid).
#[derive(Clone, Debug, PartialEq)]
pub struct GridConfig {
    /// Number of rows. Must be non-zero.
    pub rows: usize,
    /// Number of columns. Must be non-zero.
    pub cols: usize,
    /// Seed for the grid-owned RNG. A fixed seed yields a reproducible
    /// run; only `randomize` and pool triggers consume randomness.
    pub seed: u64,
    /// Spawning pools, applied in order after each rule pass. Later
    /// pools overwrite earlier ones where rectangles overlap.
    pub pools: Vec<PoolConfig>,
}

impl GridConfig {
    /// A pool-free configuration with the given dimensions and seed.
    pub fn new(rows: usize, cols: usize, seed: u64) -> Self {
        Self {
            rows,
            cols,
            seed,
            pools: Vec::new(),
        }
    }

    /// Validate all structural invariants.
    ///
    /// # Errors
    ///
    /// Returns the first violation found: zero dimensions, a
    /// zero-extent pool, a pool rectangle extending past the grid, or a
    /// pool probability outside `[0.0, 1.0]` (NaN included).
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Dimensions must be non-zero.
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyGrid {
                rows: self.rows,
                cols: self.cols,
            });
        }
        for (index, pool) in self.pools.iter().enumerate() {
            // 2. Pool rectangles must be non-empty and inside the grid.
            let (row, col) = pool.origin;
            let (height, width) = pool.size;
            if height == 0 || width == 0 {
                return Err(ConfigError::EmptyPool { index });
            }
            if row >= self.rows
                || col >= self.cols
                || height > self.rows - row
                || width > self.cols - col
            {
                return Err(ConfigError::PoolOutOfBounds {
                    index,
                    origin: pool.origin,
                    size: pool.size,
                });
            }
            // 3. Probabilities must be finite and within [0, 1].
            if !pool.probability.is_finite() || !(0.0..=1.0).contains(&pool.probability) {
                return Err(ConfigError::InvalidProbability {
                    index,
                    value: pool.probability,
                });
            }
        }
        Ok(())
    }
}

/// Errors detected during [`GridConfig::validate`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// One or both grid dimensions are zero.
    EmptyGrid {
        /// Configured row count.
        rows: usize,
        /// Configured column count.
        cols: usize,
    },
    /// A pool has a zero-extent rectangle.
    EmptyPool {
        /// Index of the pool in `GridConfig::pools`.
        index: usize,
    },
    /// A pool rectangle extends past the grid boundary.
    PoolOutOfBounds {
        /// Index of the pool in `GridConfig::pools`.
        index: usize,
        /// The pool's top-left corner.
        origin: (usize, usize),
        /// The pool's extent.
        size: (usize, usize),
    },
    /// A pool probability is NaN, infinite, or outside `[0.0, 1.0]`.
    InvalidProbability {
        /// Index of the pool in `GridConfig::pools`.
        index: usize,
        /// The invalid value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { rows, cols } => {
                write!(f, "grid dimensions must be non-zero, got {rows}x{cols}")
            }
            Self::EmptyPool { index } => {
                write!(f, "pool {index} has a zero-extent rectangle")
            }
            Self::PoolOutOfBounds {
                index,
                origin,
                size,
            } => write!(
                f,
                "pool {index} ({}x{} at ({}, {})) extends past the grid",
                size.0, size.1, origin.0, origin.1
            ),
            Self::InvalidProbability { index, value } => write!(
                f,
                "pool {index} probability must be within [0.0, 1.0], got {value}"
            ),
        }
    }
}

impl Error for ConfigError {}
