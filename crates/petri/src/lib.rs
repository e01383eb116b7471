//! Petri: a bounded-universe Game of Life toolkit.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Petri sub-crates. For most users, adding `petri` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use petri::prelude::*;
//!
//! // An 8×8 bounded universe with no spawning pools, seeded for
//! // reproducibility.
//! let mut grid = Grid::new(GridConfig::new(8, 8, 42)).unwrap();
//! grid.insert_construct(&catalog::block(), (3, 3)).unwrap();
//!
//! // The block is a still life: stepping never changes it.
//! let before = grid.state().to_vec();
//! grid.step();
//! assert_eq!(grid.state(), &before[..]);
//! assert_eq!(grid.live_cells(), vec![(3, 3), (3, 4), (4, 3), (4, 4)]);
//!
//! // And the classifier agrees.
//! let verdict = classify(&catalog::block(), 100);
//! assert!(verdict.is_stable());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`pattern`] | `petri-core` | `Construct`, the shape catalog, construction errors |
//! | [`engine`] | `petri-engine` | `Grid`, `GridConfig`, spawning pools |
//! | [`classify`] | `petri-classify` | state encoding, outcomes, the exhaustive survey |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Pattern templates and the shape catalog (`petri-core`).
pub use petri_core as pattern;

/// The bounded-grid engine and its configuration (`petri-engine`).
pub use petri_engine as engine;

/// Exhaustive pattern classification (`petri-classify`).
pub use petri_classify as classify;

/// Common imports for typical Petri usage.
///
/// ```rust
/// use petri::prelude::*;
/// ```
pub mod prelude {
    // Patterns
    pub use petri_core::{catalog, Construct, ConstructError};

    // Engine
    pub use petri_engine::{
        ConfigError, Grid, GridConfig, GridError, PoolConfig, RANDOMIZE_SPAN,
    };

    // Classifier
    pub use petri_classify::{
        classify, survey, survey_size, Classification, ClassifyConfig, Outcome, StateKey,
        SurveyError, MAX_SIDE,
    };
}
