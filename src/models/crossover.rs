use crate::models::{Point, Route};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Performs ordered crossover over the inclusive block `lo..=hi`.
///
/// The block is copied verbatim from `lhs`. The remaining positions are filled by walking `rhs`
/// cyclically from `hi + 1`, skipping points already placed, and writing accepted points
/// cyclically from `hi + 1`. Returns `None` when the parents are not permutations of the
/// same point set.
#[instrument(level = "debug", skip(lhs, rhs), fields(route_length = lhs.len(), lo = lo, hi = hi))]
fn crossover_ordered(lhs: &[Point], rhs: &[Point], lo: usize, hi: usize) -> Option<Vec<Point>> {
    let n = lhs.len();
    let mut child: Vec<Option<Point>> = vec![None; n];

    for i in lo..=hi {
        child[i] = Some(lhs[i]);
    }

    let mut child_id = (hi + 1) % n;
    let mut missing = n - (hi - lo + 1);

    // One lap over rhs visits every point once, which is enough for a valid permutation
    for step in 0..n {
        if missing == 0 {
            break;
        }

        let candidate = rhs[(hi + 1 + step) % n];
        if child.contains(&Some(candidate)) {
            continue;
        }

        child[child_id] = Some(candidate);
        child_id = (child_id + 1) % n;
        missing -= 1;
    }

    child.into_iter().collect()
}

/// Permutation-preserving crossover applied to a pair of parent routes.
///
/// With probability `probability` the child is produced by ordered crossover: a contiguous
/// block of the first parent is kept in place and the rest of the tour is filled in the
/// relative order the points appear in the second parent. Otherwise the child is a copy of
/// the first parent.
///
/// Ordered crossover never duplicates or drops a point, so every child is a valid tour over
/// the same point set as its parents.
///
/// # Examples
///
/// ```rust
/// use poly_tour_ga::models::Crossover;
///
/// let crossover = Crossover::new(0.3)?;
/// assert_eq!(crossover.probability(), 0.3);
///
/// assert!(Crossover::new(1.5).is_err());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCrossover")]
pub struct Crossover {
    probability: f64,
}

#[derive(Deserialize)]
struct RawCrossover {
    probability: f64,
}

impl TryFrom<RawCrossover> for Crossover {
    type Error = ProbabilityOutOfRangeError;

    fn try_from(raw: RawCrossover) -> Result<Self, Self::Error> {
        Self::new(raw.probability)
    }
}

/// Error returned when a crossover chance falls outside [0.0, 1.0].
#[derive(Debug, thiserror::Error)]
#[cfg_attr(test, derive(PartialEq))]
#[error("crossover probability must be between 0.0 and 1.0, got {0}")]
pub struct ProbabilityOutOfRangeError(f64);

#[derive(Debug, thiserror::Error)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub enum CrossoverError {
    #[error("parents have different lengths: {lhs} and {rhs}")]
    LengthMismatch { lhs: usize, rhs: usize },
    #[error("parents are not permutations of the same point set")]
    IncompatibleParents,
    #[error("cannot cross over empty routes")]
    EmptyParents,
}

impl Crossover {
    /// Creates a crossover operator applied with the given chance.
    ///
    /// # Returns
    ///
    /// * `Ok(Crossover)` - when `probability` lies in [0.0, 1.0]
    /// * `Err(ProbabilityOutOfRangeError)` - otherwise, including NaN
    pub fn new(probability: f64) -> Result<Self, ProbabilityOutOfRangeError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(ProbabilityOutOfRangeError(probability));
        }

        Ok(Self { probability })
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Produces one child from two parents.
    #[instrument(level = "debug", skip(self, rng, lhs, rhs), fields(probability = self.probability, route_length = lhs.len()))]
    pub(crate) fn apply<R: Rng>(
        &self,
        rng: &mut R,
        lhs: &Route,
        rhs: &Route,
    ) -> Result<Route, CrossoverError> {
        if rng.random_range(0.0..1.0) >= self.probability {
            return Ok(lhs.clone());
        }

        let n = lhs.len();
        if n != rhs.len() {
            return Err(CrossoverError::LengthMismatch {
                lhs: n,
                rhs: rhs.len(),
            });
        }
        if n == 0 {
            return Err(CrossoverError::EmptyParents);
        }

        let i1 = rng.random_range(0..n);
        let i2 = rng.random_range(0..n);
        let (lo, hi) = (i1.min(i2), i1.max(i2));

        crossover_ordered(lhs.points(), rhs.points(), lo, hi)
            .map(Route::new)
            .ok_or(CrossoverError::IncompatibleParents)
    }
}
