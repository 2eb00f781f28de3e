//! Parent selection by rejection sampling.
//!
//! Selection approximates fitness-proportionate ("roulette") selection without computing a
//! normalizing sum. The candidates are scanned in order and each one is accepted when a
//! uniform draw in [0, 1) falls below its fitness; the last acceptance in a scan wins.
//! Scans repeat until a first parent is found, then repeat again until a second parent that
//! differs from the first is found.
//!
//! Because fitness is the reciprocal of a tour length, acceptance probabilities are small
//! for large shapes and many scans may be needed. Each search is therefore capped at
//! `max_scans` full scans and fails with [`SelectionError::Exhausted`] instead of spinning
//! forever, e.g. when every candidate is the same route and no distinct second parent exists.
//!
//! ```rust
//! use poly_tour_ga::models::Selector;
//!
//! let selector = Selector::rejection(10_000)?;
//! assert_eq!(selector.max_scans(), 10_000);
//!
//! assert!(Selector::rejection(0).is_err());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::models::Route;
use serde::{Deserialize, Serialize};
use tracing::instrument;

pub const DEFAULT_MAX_SCANS: usize = 10_000;

/// Runs full scans over `candidates` until one is accepted.
///
/// A candidate equal to `excluded` is never accepted, but its draw is still consumed so the
/// random stream does not depend on which parent was picked first.
fn rejection_scan(
    candidates: &[(&Route, f64)],
    excluded: Option<&Route>,
    max_scans: usize,
    rng: &mut impl rand::Rng,
) -> Result<usize, SelectionError> {
    for _ in 0..max_scans {
        let mut accepted = None;

        for (index, (route, fitness)) in candidates.iter().enumerate() {
            let draw: f64 = rng.random_range(0.0..1.0);
            if draw < *fitness && excluded.is_none_or(|parent| parent != *route) {
                accepted = Some(index);
            }
        }

        if let Some(index) = accepted {
            return Ok(index);
        }
    }

    Err(SelectionError::Exhausted { scans: max_scans })
}

/// Configuration for parent selection.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[cfg_attr(test, derive(PartialEq))]
#[serde(try_from = "RawSelector")]
pub struct Selector {
    /// Upper bound on full scans per parent search
    max_scans: usize,
}

#[derive(Deserialize)]
struct RawSelector {
    max_scans: usize,
}

impl TryFrom<RawSelector> for Selector {
    type Error = SelectionError;

    fn try_from(raw: RawSelector) -> Result<Self, Self::Error> {
        Self::rejection(raw.max_scans)
    }
}

/// Errors that can occur during parent selection.
#[derive(Debug, thiserror::Error)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub enum SelectionError {
    /// There are no candidates to select from.
    #[error("No valid parents available for selection")]
    NoValidParents,

    /// The scan limit must allow at least one scan.
    #[error("max_scans must be greater than 0")]
    InvalidScanLimit,

    /// No candidate was accepted within the scan limit.
    ///
    /// This happens when every fitness is zero, when the fitness values are so small that
    /// acceptance is practically impossible, or when the population holds a single distinct
    /// route so no second parent can differ from the first.
    #[error("Selection failed to converge after {scans} scans")]
    Exhausted { scans: usize },
}

impl Default for Selector {
    fn default() -> Self {
        Self {
            max_scans: DEFAULT_MAX_SCANS,
        }
    }
}

impl Selector {
    /// Creates a rejection-sampling selector that gives up after `max_scans` scans per parent.
    pub fn rejection(max_scans: usize) -> Result<Self, SelectionError> {
        if max_scans == 0 {
            return Err(SelectionError::InvalidScanLimit);
        }

        Ok(Self { max_scans })
    }

    pub fn max_scans(&self) -> usize {
        self.max_scans
    }

    /// Selects two distinct parents and returns their indices into `candidates`.
    ///
    /// Parents are compared by value, so two equal routes at different indices count as the
    /// same parent.
    #[instrument(level = "debug", skip(self, candidates, rng), fields(num_candidates = candidates.len(), max_scans = self.max_scans))]
    pub(crate) fn select_parents(
        &self,
        candidates: &[(&Route, f64)],
        rng: &mut impl rand::Rng,
    ) -> Result<(usize, usize), SelectionError> {
        if candidates.is_empty() {
            return Err(SelectionError::NoValidParents);
        }

        let first = rejection_scan(candidates, None, self.max_scans, rng)?;
        let second = rejection_scan(candidates, Some(candidates[first].0), self.max_scans, rng)?;

        Ok((first, second))
    }
}
