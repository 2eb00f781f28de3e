use crate::models::Route;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

// ============================================================
// MutationRate
// ============================================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMutationRate")]
pub struct MutationRate {
    value: f64,
}

#[derive(Deserialize)]
struct RawMutationRate {
    value: f64,
}

impl TryFrom<RawMutationRate> for MutationRate {
    type Error = MutationRateOutOfRange;

    fn try_from(raw: RawMutationRate) -> Result<Self, Self::Error> {
        Self::new(raw.value)
    }
}

#[derive(Debug, thiserror::Error)]
#[cfg_attr(test, derive(PartialEq))]
#[error("mutation_rate must be between 0.0 and 1.0, got: {0}")]
pub struct MutationRateOutOfRange(f64);

impl MutationRate {
    pub fn new(value: f64) -> Result<Self, MutationRateOutOfRange> {
        if !(0.0..=1.0).contains(&value) {
            return Err(MutationRateOutOfRange(value));
        }

        Ok(Self { value })
    }

    pub fn get(&self) -> f64 {
        self.value
    }
}

// ============================================================
// Mutagen
// ============================================================

/// Swap mutation: with probability `mutation_rate`, two uniformly drawn positions of a route
/// exchange their points. Drawing the same position twice leaves the route as it was.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mutagen {
    mutation_rate: MutationRate,
}

impl Mutagen {
    pub fn new(mutation_rate: MutationRate) -> Self {
        Self { mutation_rate }
    }

    pub fn constant(mutation_rate_value: f64) -> Result<Self, MutationRateOutOfRange> {
        Ok(Self::new(MutationRate::new(mutation_rate_value)?))
    }

    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate.get()
    }

    /// Mutates `route` in place. Returns whether a swap was performed.
    #[instrument(level = "debug", skip(self, rng, route), fields(mutation_rate = self.mutation_rate.get(), route_length = route.len()))]
    pub(crate) fn mutate<R: Rng>(&self, rng: &mut R, route: &mut Route) -> bool {
        if route.is_empty() || rng.random_range(0.0..1.0) >= self.mutation_rate.get() {
            return false;
        }

        let n = route.len();
        let base = rng.random_range(0..n);
        let other = rng.random_range(0..n);
        route.points_mut().swap(base, other);

        true
    }
}
