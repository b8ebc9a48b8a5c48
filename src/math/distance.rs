use crate::geometry::{Point, Vector};

/// Euclidean distance between two values of the same kind.
pub trait Distance {
    /// Returns the magnitude of the difference between `self` and `other`.
    fn distance(self, other: Self) -> f64;
}

impl Distance for Point {
    fn distance(self, other: Self) -> f64 {
        Vector::between(other, self).magnitude()
    }
}

impl Distance for Vector {
    fn distance(self, other: Self) -> f64 {
        (self - other).magnitude()
    }
}

/// Returns the distance between two points, or between the tips of two vectors.
///
/// Identical inputs yield a zero difference, so the zero-vector diagnostic
/// from [`Vector::magnitude`] fires and the result is `0.0`.
#[must_use]
pub fn distance<T: Distance>(a: T, b: T) -> f64 {
    a.distance(b)
}
