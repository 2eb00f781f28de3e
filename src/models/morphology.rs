use crate::models::{Point, Route};
use rand::seq::SliceRandom;
use serde::Serialize;
use tracing::instrument;

pub const MIN_POINTS: usize = 3;

/// The fixed point set every route is a permutation of.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Morphology {
    pub(crate) points: Vec<Point>,
}

#[derive(Debug, thiserror::Error)]
#[cfg_attr(test, derive(PartialEq))]
pub enum MorphologyError {
    #[error("at least 3 points are required, got {0}")]
    TooFewPoints(usize),
    #[error("point {point} appears more than once (positions {first} and {second})")]
    DuplicatePoint {
        point: Point,
        first: usize,
        second: usize,
    },
    #[error("point {index} has a non-finite coordinate")]
    NonFinitePoint { index: usize },
}

impl Morphology {
    #[instrument(level = "debug", skip(points), fields(points_count = points.len()))]
    pub fn new(points: Vec<Point>) -> Result<Self, MorphologyError> {
        if points.len() < MIN_POINTS {
            return Err(MorphologyError::TooFewPoints(points.len()));
        }

        for (index, point) in points.iter().enumerate() {
            if !point.x.is_finite() || !point.y.is_finite() {
                return Err(MorphologyError::NonFinitePoint { index });
            }
        }

        // Distinct points guarantee every tour has a positive length
        for (first, point) in points.iter().enumerate() {
            if let Some(offset) = points[first + 1..].iter().position(|p| p == point) {
                return Err(MorphologyError::DuplicatePoint {
                    point: *point,
                    first,
                    second: first + 1 + offset,
                });
            }
        }

        Ok(Self { points })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// A uniformly shuffled tour over all points.
    pub fn random(&self, rng: &mut impl rand::Rng) -> Route {
        let mut points = self.points.clone();
        points.shuffle(rng);
        Route::new(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn triangle() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
        ]
    }

    #[test]
    fn it_rejects_too_few_points() {
        assert_eq!(
            Morphology::new(triangle()[..2].to_vec()),
            Err(MorphologyError::TooFewPoints(2))
        );
        assert_eq!(Morphology::new(vec![]), Err(MorphologyError::TooFewPoints(0)));
    }

    #[test]
    fn it_rejects_duplicate_points() {
        let mut points = triangle();
        points.push(Point::new(1.0, 0.0));

        assert_eq!(
            Morphology::new(points),
            Err(MorphologyError::DuplicatePoint {
                point: Point::new(1.0, 0.0),
                first: 1,
                second: 3,
            })
        );
    }

    #[test]
    fn it_rejects_non_finite_points() {
        let mut points = triangle();
        points[2] = Point::new(f64::NAN, 0.0);

        assert_eq!(
            Morphology::new(points),
            Err(MorphologyError::NonFinitePoint { index: 2 })
        );
    }

    #[test]
    fn it_shuffles_into_permutations() {
        let mut rng = StdRng::seed_from_u64(42);
        let points: Vec<Point> = (0..7).map(|i| Point::new(i as f64, 0.5 * i as f64)).collect();
        let morphology = Morphology::new(points.clone()).unwrap();

        for _ in 0..20 {
            let route = morphology.random(&mut rng);
            assert_eq!(route.len(), points.len());
            assert!(points.iter().all(|p| route.points().contains(p)));
        }
    }
}
