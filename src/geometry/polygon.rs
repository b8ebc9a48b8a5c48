use crate::error::{GeometryError, Result};

use super::{LineSeg, Point, Vector};

/// A polyline outline used as one face of a bounding box.
///
/// Closed outlines repeat their first point at the end, so the edge list
/// returned by [`Polygon::edges`] covers the whole loop.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    /// Creates an outline from its points, in order.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if fewer than two points are given.
    pub fn new(points: Vec<Point>) -> Result<Self> {
        if points.len() < 2 {
            return Err(GeometryError::Degenerate(format!(
                "outline needs at least 2 points, got {}",
                points.len()
            )));
        }
        Ok(Self { points })
    }

    /// Creates a closed outline, appending the first point if the loop is open.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if fewer than two points are given.
    pub fn closed(mut points: Vec<Point>) -> Result<Self> {
        if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
            if points.len() >= 2 && first != last {
                points.push(first);
            }
        }
        Self::new(points)
    }

    /// Axis-aligned rectangular footprint at height `z`, wound counter-clockwise
    /// from `(min_x, min_y)`.
    #[must_use]
    pub fn rectangle(min_x: f64, min_y: f64, max_x: f64, max_y: f64, z: f64) -> Self {
        Self {
            points: vec![
                Point::new(min_x, min_y, z),
                Point::new(max_x, min_y, z),
                Point::new(max_x, max_y, z),
                Point::new(min_x, max_y, z),
                Point::new(min_x, min_y, z),
            ],
        }
    }

    /// Returns the points of the outline.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns `true` if the last point repeats the first.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.points.len() > 2 && self.points.first() == self.points.last()
    }

    /// Iterates over consecutive point pairs as segments.
    pub fn edges(&self) -> impl Iterator<Item = LineSeg> + '_ {
        self.points.windows(2).map(|w| LineSeg::new(w[0], w[1]))
    }

    /// Returns a copy moved by `v`.
    #[must_use]
    pub fn translated(&self, v: Vector) -> Self {
        Self {
            points: self.points.iter().map(|&p| p + v).collect(),
        }
    }

    /// Returns `true` if any edge of `self` strictly crosses any edge of `other`
    /// in the XY plane.
    ///
    /// Touching edges and collinear overlaps are not crossings, so two
    /// footprints that share a wall, or one nested fully inside the other,
    /// report `false`.
    #[must_use]
    pub fn crosses(&self, other: &Polygon) -> bool {
        self.edges()
            .any(|a| other.edges().any(|b| a.intersect(&b)))
    }
}
