//! Fixed point sets to search tours over.
//!
//! The presets are regular polygons centered at (200, 250). Because the optimal tour of a
//! convex polygon visits its vertices in order, the perimeter is a known target to compare the
//! evolved routes against.

use crate::models::Point;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::str::FromStr;

const CENTER: Point = Point { x: 200.0, y: 250.0 };

fn circumradius(sides: usize, side_length: f64) -> f64 {
    (side_length / 2.0) / (PI / sides as f64).sin()
}

#[derive(Debug, thiserror::Error)]
#[cfg_attr(test, derive(PartialEq))]
pub enum ShapeError {
    #[error("a polygon needs at least 3 sides, got {0}")]
    TooFewSides(usize),
    #[error("side length must be positive and finite, got {0}")]
    InvalidSideLength(f64),
    #[error("unknown shape: {0}")]
    UnknownShape(String),
}

/// A regular polygon described by its vertex count and circumradius.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegularPolygon {
    sides: usize,
    center: Point,
    circumradius: f64,
}

impl RegularPolygon {
    /// Creates a polygon whose edges all have length `side_length`.
    pub fn with_side_length(
        sides: usize,
        center: Point,
        side_length: f64,
    ) -> Result<Self, ShapeError> {
        if sides < 3 {
            return Err(ShapeError::TooFewSides(sides));
        }
        if !side_length.is_finite() || side_length <= 0.0 {
            return Err(ShapeError::InvalidSideLength(side_length));
        }

        Ok(Self {
            sides,
            center,
            circumradius: circumradius(sides, side_length),
        })
    }

    pub fn sides(&self) -> usize {
        self.sides
    }

    pub fn circumradius(&self) -> f64 {
        self.circumradius
    }

    /// Length of the tour that visits the vertices in order.
    pub fn perimeter(&self) -> f64 {
        2.0 * self.sides as f64 * self.circumradius * (PI / self.sides as f64).sin()
    }

    /// Vertices in angular order, starting straight "below" the center in screen coordinates.
    pub fn vertices(&self) -> Vec<Point> {
        (0..self.sides)
            .map(|k| {
                let theta = 2.0 * PI * k as f64 / self.sides as f64;
                Point::new(
                    self.center.x + self.circumradius * theta.sin(),
                    self.center.y + self.circumradius * theta.cos(),
                )
            })
            .collect()
    }
}

/// Named presets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Heptagon,
    #[default]
    Dodecagon,
    Icosagon,
}

impl Shape {
    pub fn polygon(&self) -> RegularPolygon {
        let (sides, side_length) = match self {
            Shape::Heptagon => (7, 80.0),
            Shape::Dodecagon => (12, 80.0),
            Shape::Icosagon => (20, 40.0),
        };

        RegularPolygon {
            sides,
            center: CENTER,
            circumradius: circumradius(sides, side_length),
        }
    }
}

impl FromStr for Shape {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "heptagon" => Ok(Shape::Heptagon),
            "dodecagon" => Ok(Shape::Dodecagon),
            "icosagon" => Ok(Shape::Icosagon),
            other => Err(ShapeError::UnknownShape(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn it_places_vertices_on_the_circumcircle() {
        let polygon = Shape::Dodecagon.polygon();
        let vertices = polygon.vertices();

        assert_eq!(vertices.len(), 12);
        for vertex in &vertices {
            assert!((vertex.distance(&CENTER) - polygon.circumradius()).abs() < TOLERANCE);
        }
    }

    #[test]
    fn it_uses_the_requested_side_length() {
        for (shape, sides, side_length) in [
            (Shape::Heptagon, 7, 80.0),
            (Shape::Dodecagon, 12, 80.0),
            (Shape::Icosagon, 20, 40.0),
        ] {
            let vertices = shape.polygon().vertices();
            assert_eq!(vertices.len(), sides);

            for i in 0..sides {
                let edge = vertices[i].distance(&vertices[(i + 1) % sides]);
                assert!((edge - side_length).abs() < TOLERANCE);
            }
        }
    }

    #[test]
    fn it_computes_the_perimeter() {
        let polygon = RegularPolygon::with_side_length(5, Point::new(0.0, 0.0), 3.0).unwrap();
        assert!((polygon.perimeter() - 15.0).abs() < TOLERANCE);
    }

    #[test]
    fn it_validates_polygons() {
        let origin = Point::new(0.0, 0.0);

        assert_eq!(
            RegularPolygon::with_side_length(2, origin, 1.0),
            Err(ShapeError::TooFewSides(2))
        );
        assert_eq!(
            RegularPolygon::with_side_length(4, origin, 0.0),
            Err(ShapeError::InvalidSideLength(0.0))
        );
    }

    #[test]
    fn it_parses_shape_names() {
        assert_eq!("heptagon".parse::<Shape>(), Ok(Shape::Heptagon));
        assert_eq!(" Icosagon ".parse::<Shape>(), Ok(Shape::Icosagon));
        assert_eq!(
            "circle".parse::<Shape>(),
            Err(ShapeError::UnknownShape("circle".to_string()))
        );
    }
}
