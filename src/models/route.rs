use crate::models::Point;
use serde::{Deserialize, Serialize};

/// Tours shorter than this are treated as degenerate.
const MIN_TOUR_DISTANCE: f64 = f64::EPSILON;

/// One candidate tour: a permutation of the fixed point set, read as a closed cycle.
///
/// A route owns its point sequence, so cloning a route produces an independent copy
/// that can be mutated in place without affecting the original. Two routes are equal
/// when they visit the same points in the same order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    points: Vec<Point>,
}

impl Route {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub(crate) fn points_mut(&mut self) -> &mut [Point] {
        &mut self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Sum of edge lengths including the wrap-around edge from the last point back to the first.
    pub fn total_distance(&self) -> f64 {
        let n = self.points.len();
        (0..n)
            .map(|i| self.points[i].distance(&self.points[(i + 1) % n]))
            .sum()
    }

    /// Reciprocal of the tour length; higher is better.
    ///
    /// A tour of (near) zero length saturates to `f64::MAX` rather than dividing by zero,
    /// which makes it always acceptable during selection.
    pub fn fitness(&self) -> f64 {
        let distance = self.total_distance();
        if distance < MIN_TOUR_DISTANCE {
            return f64::MAX;
        }

        1.0 / distance
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for point in &self.points {
            write!(f, "{point}->")?;
        }
        Ok(())
    }
}
