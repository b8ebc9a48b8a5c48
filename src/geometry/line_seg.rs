use std::ops::{Index, IndexMut};

use crate::math::intersect_2d::{is_interior, segment_params_2d};
use crate::math::INTERIOR_EPSILON;

use super::{Point, Vector};

/// A directed segment from `p1` to `p2`.
///
/// Intersection queries work in the XY plane; `z` is ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LineSeg {
    pub p1: Point,
    pub p2: Point,
}

impl LineSeg {
    /// Creates a segment between two endpoints.
    #[must_use]
    pub const fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    /// Creates a segment starting at `p1` and displaced by `v`, so `p2 = p1 + v`.
    #[must_use]
    pub fn from_displacement(p1: Point, v: Vector) -> Self {
        Self { p1, p2: p1 + v }
    }

    /// Returns the vector from `p1` to `p2`.
    #[must_use]
    pub fn direction(&self) -> Vector {
        Vector::between(self.p1, self.p2)
    }

    /// Returns `true` if the two segments cross strictly inside both of them.
    ///
    /// Parallel and collinear segments never intersect, even when they
    /// overlap. A crossing at or within [`INTERIOR_EPSILON`] of either
    /// segment's endpoints is not counted, so segments that only share an
    /// endpoint do not intersect.
    #[must_use]
    pub fn intersect(&self, other: &LineSeg) -> bool {
        self.intersect_within(other, INTERIOR_EPSILON)
    }

    /// Like [`LineSeg::intersect`] with a caller-chosen endpoint exclusion.
    ///
    /// Both parameters must fall in the open interval `(epsilon, 1 - epsilon)`.
    #[must_use]
    pub fn intersect_within(&self, other: &LineSeg, epsilon: f64) -> bool {
        match segment_params_2d(&self.p1, &self.p2, &other.p1, &other.p2) {
            Some((ua, ub)) => is_interior(ua, epsilon) && is_interior(ub, epsilon),
            None => false,
        }
    }

    /// Returns the point where the lines through both segments cross.
    ///
    /// The crossing is not checked against the segment bounds; call
    /// [`LineSeg::intersect`] first when an interior crossing is required.
    /// The returned point always has `z = 0`. Parallel segments have no
    /// answer, so `self.p1` is returned in that case.
    #[must_use]
    pub fn intersection(&self, other: &LineSeg) -> Point {
        let Some((ua, ub)) = segment_params_2d(&self.p1, &self.p2, &other.p1, &other.p2) else {
            tracing::debug!(segment = ?self, other = ?other, "parallel segments, falling back to p1");
            return self.p1;
        };

        let x = (other.p2.x - other.p1.x) * ub + other.p1.x;
        let y = (self.p2.y - self.p1.y) * ua + self.p1.y;
        Point::new(x, y, 0.0)
    }
}

/// Endpoint access: index 1 is `p2`; every other index resolves to `p1`.
impl Index<usize> for LineSeg {
    type Output = Point;

    fn index(&self, index: usize) -> &Point {
        if index == 1 {
            &self.p2
        } else {
            &self.p1
        }
    }
}

impl IndexMut<usize> for LineSeg {
    fn index_mut(&mut self, index: usize) -> &mut Point {
        if index == 1 {
            &mut self.p2
        } else {
            &mut self.p1
        }
    }
}
