use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign};

use crate::error::{GeometryError, Result};

use super::Vector;

/// A location in 3D space.
///
/// Equality is exact: two points compare equal only when all three
/// components are bitwise-equal values, so points reached through different
/// floating-point paths may compare unequal. Use [`Point::approx_eq`] when a
/// tolerance is wanted.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    /// The point `(0, 0, 0)`.
    pub const ORIGIN: Point = Point::new(0.0, 0.0, 0.0);

    /// Creates a point from its coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns component `index` (0, 1, 2 for x, y, z).
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::IndexOutOfRange`] for any other index.
    pub fn component(&self, index: usize) -> Result<f64> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            _ => Err(GeometryError::IndexOutOfRange { index, len: 3 }),
        }
    }

    /// Moves this point by `v` and returns it for chaining.
    pub fn translate(&mut self, v: Vector) -> &mut Self {
        *self += v;
        self
    }

    /// Adds the coordinates of `other` to this point and returns it for chaining.
    pub fn add_in_place(&mut self, other: Point) -> &mut Self {
        *self += other;
        self
    }

    /// Scales every coordinate by `k` and returns the point for chaining.
    pub fn scale_in_place(&mut self, k: f64) -> &mut Self {
        *self *= k;
        self
    }

    /// Divides every coordinate by `k` and returns the point for chaining.
    ///
    /// A zero divisor is not intercepted; components become infinite or NaN.
    pub fn div_in_place(&mut self, k: f64) -> &mut Self {
        *self /= k;
        self
    }

    /// Returns `true` if every component differs from `other` by at most `tol`.
    #[must_use]
    pub fn approx_eq(&self, other: &Point, tol: f64) -> bool {
        (self.x - other.x).abs() <= tol
            && (self.y - other.y).abs() <= tol
            && (self.z - other.z).abs() <= tol
    }
}

impl Add<Vector> for Point {
    type Output = Point;

    fn add(self, rhs: Vector) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign<Vector> for Point {
    fn add_assign(&mut self, rhs: Vector) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl MulAssign<f64> for Point {
    fn mul_assign(&mut self, rhs: f64) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
    }
}

impl Div<f64> for Point {
    type Output = Point;

    fn div(self, rhs: f64) -> Point {
        Point::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl DivAssign<f64> for Point {
    fn div_assign(&mut self, rhs: f64) {
        self.x /= rhs;
        self.y /= rhs;
        self.z /= rhs;
    }
}

/// Component access: 0, 1, 2 map to x, y, z.
///
/// # Panics
///
/// Panics on any other index. Use [`Point::component`] for a checked read.
impl Index<usize> for Point {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("point component index {index} out of range 0..3"),
        }
    }
}

impl IndexMut<usize> for Point {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("point component index {index} out of range 0..3"),
        }
    }
}

impl From<Point> for nalgebra::Point3<f64> {
    fn from(p: Point) -> Self {
        nalgebra::Point3::new(p.x, p.y, p.z)
    }
}

impl From<nalgebra::Point3<f64>> for Point {
    fn from(p: nalgebra::Point3<f64>) -> Self {
        Point::new(p.x, p.y, p.z)
    }
}
