//! Candidate enumeration and the per-candidate convergence driver.

use indexmap::IndexSet;
use petri_core::Construct;
use petri_engine::{Grid, GridConfig};

use crate::encode::{StateKey, MAX_SIDE};
use crate::error::SurveyError;
use crate::outcome::{Classification, Outcome};

/// Configuration for an exhaustive survey.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassifyConfig {
    /// Largest square side length to enumerate, inclusive. Must lie in
    /// `2..=MAX_SIDE`.
    pub max_side: usize,
    /// Per-candidate iteration cap. A bounded board must eventually
    /// revisit a state, but the cap bounds the wait explicitly; runs
    /// that exhaust it report [`Outcome::Unclassified`].
    pub tick_cap: usize,
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self {
            max_side: 3,
            tick_cap: 10_000,
        }
    }
}

impl ClassifyConfig {
    /// Validate the bound and the cap.
    ///
    /// # Errors
    ///
    /// Returns [`SurveyError::SideOutOfRange`] unless
    /// `2 <= max_side <= MAX_SIDE`, and [`SurveyError::ZeroTickCap`]
    /// for a zero cap.
    pub fn validate(&self) -> Result<(), SurveyError> {
        if !(2..=MAX_SIDE).contains(&self.max_side) {
            return Err(SurveyError::SideOutOfRange {
                value: self.max_side,
            });
        }
        if self.tick_cap == 0 {
            return Err(SurveyError::ZeroTickCap);
        }
        Ok(())
    }
}

/// Drive one candidate to convergence on an isolated board of exactly
/// the candidate's own shape.
///
/// The board is pool-free, so the run is fully deterministic. Each tick
/// the new state's canonical key is compared against the immediately
/// preceding key (fixed point), then against the set of every earlier
/// key (cycle, one tick after the period closes); the seed state is in
/// that set, so a literal return to the start is a cycle like any
/// other. The exact period falls out of the history's insertion order.
///
/// # Panics
///
/// Panics if the pattern holds more than 64 cells; survey bounds are
/// validated against [`MAX_SIDE`] precisely so this cannot happen there.
pub fn classify(construct: &Construct, tick_cap: usize) -> Classification {
    let (rows, cols) = construct.shape();
    let mut grid =
        Grid::new(GridConfig::new(rows, cols, 0)).expect("pattern dimensions are non-zero");
    grid.insert_construct(construct, (0, 0))
        .expect("board sized to the pattern");

    let seed_key = StateKey::encode(grid.state());
    let mut seen: IndexSet<StateKey> = IndexSet::new();
    seen.insert(seed_key);
    let mut previous = seed_key;

    for tick in 1..=tick_cap {
        let key = StateKey::encode(grid.step());
        if key == previous {
            return Classification {
                construct: construct.clone(),
                outcome: Outcome::FixedPoint,
                ticks: tick,
                settled_to_seed: key == seed_key,
            };
        }
        if let Some(first_visit) = seen.get_index_of(&key) {
            return Classification {
                construct: construct.clone(),
                outcome: Outcome::Cycle {
                    period: seen.len() - first_visit,
                },
                ticks: tick,
                settled_to_seed: key == seed_key,
            };
        }
        seen.insert(key);
        previous = key;
    }

    Classification {
        construct: construct.clone(),
        outcome: Outcome::Unclassified,
        ticks: tick_cap,
        settled_to_seed: previous == seed_key,
    }
}

/// Run an exhaustive survey, streaming every verdict to `sink`.
///
/// For each side `s` in `2..=config.max_side`, enumerates the integers
/// `1..2^(s²)` (the all-zero pattern is excluded), synthesizes each as
/// an s × s candidate via [`Construct::from_bits`], and classifies it.
/// Candidates are visited in enumeration order.
///
/// # Errors
///
/// Returns a [`SurveyError`] from [`ClassifyConfig::validate`] before
/// classifying anything.
pub fn survey(
    config: &ClassifyConfig,
    mut sink: impl FnMut(Classification),
) -> Result<(), SurveyError> {
    config.validate()?;
    for side in 2..=config.max_side {
        let patterns = 1u128 << (side * side);
        for bits in 1..patterns {
            let candidate = Construct::from_bits(side, bits);
            sink(classify(&candidate, config.tick_cap));
        }
    }
    Ok(())
}

/// Number of candidates a survey up to `max_side` enumerates:
/// Σ over s in 2..=max_side of (2^(s²) − 1).
///
/// Informational only: printed before a run, never load-bearing.
///
/// # Panics
///
/// Panics if `max_side` exceeds 11, where 2^(s²) no longer fits u128.
pub fn survey_size(max_side: usize) -> u128 {
    assert!(max_side <= 11, "2^(side * side) overflows u128 beyond side 11");
    (2..=max_side)
        .map(|side| (1u128 << (side * side)) - 1)
        .sum()
}
