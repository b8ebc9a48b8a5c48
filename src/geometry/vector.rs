use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::error::{GeometryError, Result};

use super::Point;

/// A displacement or direction in 3D space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector {
    /// The zero displacement.
    pub const ZERO: Vector = Vector::new(0.0, 0.0, 0.0);

    /// Creates a vector from its components.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the displacement from `start` to `end`, i.e. `end - start`.
    #[must_use]
    pub fn between(start: Point, end: Point) -> Self {
        Self::new(end.x - start.x, end.y - start.y, end.z - start.z)
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

    /// Euclidean norm `sqrt(x² + y² + z²)`.
    ///
    /// Callers are expected to avoid zero-length vectors. When the squared
    /// length is not strictly positive a warning is logged and the square
    /// root is taken anyway, so the zero vector yields `0.0`.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        let squared = self.x * self.x + self.y * self.y + self.z * self.z;
        if squared <= 0.0 {
            tracing::warn!(squared, "taking the magnitude of a non-positive squared length");
        }
        squared.sqrt()
    }

    /// Alias for [`Vector::magnitude`].
    #[must_use]
    pub fn length(&self) -> f64 {
        self.magnitude()
    }

    #[must_use]
    pub fn dot(&self, other: &Vector) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Alias for [`Vector::dot`].
    #[must_use]
    pub fn dot_product(&self, other: &Vector) -> f64 {
        self.dot(other)
    }

    /// Right-handed cross product; neither operand is modified.
    #[must_use]
    pub fn cross(&self, other: &Vector) -> Vector {
        Vector::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Alias for [`Vector::cross`].
    #[must_use]
    pub fn cross_product(&self, other: &Vector) -> Vector {
        self.cross(other)
    }

    /// Returns the unit vector pointing the same way.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if the vector has no length.
    pub fn normalized(&self) -> Result<Vector> {
        let squared = self.dot(self);
        if squared <= 0.0 {
            return Err(GeometryError::ZeroVector);
        }
        Ok(*self / squared.sqrt())
    }

    /// Adds `other` to this vector and returns it for chaining.
    pub fn add_in_place(&mut self, other: Vector) -> &mut Self {
        *self += other;
        self
    }

    /// Subtracts `other` from this vector and returns it for chaining.
    pub fn sub_in_place(&mut self, other: Vector) -> &mut Self {
        *self -= other;
        self
    }

    /// Scales every component by `k` and returns the vector for chaining.
    pub fn scale_in_place(&mut self, k: f64) -> &mut Self {
        *self *= k;
        self
    }

    /// Divides every component by `k` and returns the vector for chaining.
    ///
    /// A zero divisor is not intercepted; components become infinite or NaN.
    pub fn div_in_place(&mut self, k: f64) -> &mut Self {
        *self /= k;
        self
    }

    /// Returns `true` if every component differs from `other` by at most `tol`.
    #[must_use]
    pub fn approx_eq(&self, other: &Vector, tol: f64) -> bool {
        (self.x - other.x).abs() <= tol
            && (self.y - other.y).abs() <= tol
            && (self.z - other.z).abs() <= tol
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, rhs: Vector) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Vector {
    fn sub_assign(&mut self, rhs: Vector) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        Vector::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl MulAssign<f64> for Vector {
    fn mul_assign(&mut self, rhs: f64) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
    }
}

impl Div<f64> for Vector {
    type Output = Vector;

    fn div(self, rhs: f64) -> Vector {
        Vector::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl DivAssign<f64> for Vector {
    fn div_assign(&mut self, rhs: f64) {
        self.x /= rhs;
        self.y /= rhs;
        self.z /= rhs;
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y, -self.z)
    }
}

/// Component access: 0, 1, 2 map to x, y, z.
///
/// # Panics
///
/// Panics on any other index. Use [`Vector::component`] for a checked read.
impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("vector component index {index} out of range 0..3"),
        }
    }
}

impl IndexMut<usize> for Vector {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("vector component index {index} out of range 0..3"),
        }
    }
}

impl From<Vector> for nalgebra::Vector3<f64> {
    fn from(v: Vector) -> Self {
        nalgebra::Vector3::new(v.x, v.y, v.z)
    }
}

impl From<nalgebra::Vector3<f64>> for Vector {
    fn from(v: nalgebra::Vector3<f64>) -> Self {
        Vector::new(v.x, v.y, v.z)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;
    use crate::math::TOLERANCE;
    use crate::test_support::capture_logs;

    #[test]
    fn between_points_is_end_minus_start() {
        let v = Vector::between(Point::new(1.0, 2.0, 3.0), Point::new(4.0, 0.0, 3.5));
        assert_eq!(v, Vector::new(3.0, -2.0, 0.5));
    }

    #[test]
    fn magnitude_and_length_agree() {
        let v = Vector::new(2.0, 3.0, 6.0);
        assert_relative_eq!(v.magnitude(), 7.0);
        assert_relative_eq!(v.length(), v.magnitude());
    }

    #[test]
    fn zero_magnitude_logs_and_returns_zero() {
        let (m, logs) = capture_logs(|| Vector::ZERO.magnitude());
        assert_eq!(m, 0.0);
        assert!(logs.contains("WARN"), "logs={logs}");
        assert!(logs.contains("squared=0.0"), "logs={logs}");
    }

    #[test]
    fn nonzero_magnitude_is_silent() {
        let (m, logs) = capture_logs(|| Vector::new(3.0, 4.0, 0.0).magnitude());
        assert_relative_eq!(m, 5.0);
        assert!(!logs.contains("WARN"), "logs={logs}");
    }

    #[test]
    fn dot_of_perpendicular_is_zero() {
        let a = Vector::new(1.0, 0.0, 0.0);
        let b = Vector::new(0.0, 5.0, 0.0);
        assert_eq!(a.dot(&b), 0.0);
        assert_eq!(a.dot(&a), 1.0);
    }

    #[test]
    fn cross_of_axes() {
        let x = Vector::new(1.0, 0.0, 0.0);
        let y = Vector::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(&y), Vector::new(0.0, 0.0, 1.0));
        assert_eq!(y.cross(&x), Vector::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn cross_leaves_operands_untouched() {
        let a = Vector::new(1.0, 2.0, 3.0);
        let b = Vector::new(-2.0, 0.5, 4.0);
        let _ = a.cross(&b);
        assert_eq!(a, Vector::new(1.0, 2.0, 3.0));
        assert_eq!(b, Vector::new(-2.0, 0.5, 4.0));
    }

    #[test]
    fn cross_matches_nalgebra() {
        let a = Vector::new(1.5, -2.0, 3.25);
        let b = Vector::new(-0.5, 4.0, 2.0);
        let expected: Vector = nalgebra::Vector3::<f64>::from(a)
            .cross(&nalgebra::Vector3::<f64>::from(b))
            .into();
        assert!(a.cross(&b).approx_eq(&expected, TOLERANCE));
    }

    // The aliases return the computed value instead of discarding it.
    #[test]
    fn product_aliases_return_their_result() {
        let a = Vector::new(1.0, 2.0, 3.0);
        let b = Vector::new(4.0, -5.0, 6.0);
        assert_eq!(a.dot_product(&b), a.dot(&b));
        assert_eq!(a.dot_product(&b), 12.0);
        assert_eq!(a.cross_product(&b), a.cross(&b));
    }

    #[test]
    fn arithmetic_operators() {
        let a = Vector::new(1.0, 2.0, 3.0);
        let b = Vector::new(0.5, 0.5, 0.5);
        assert_eq!(a + b, Vector::new(1.5, 2.5, 3.5));
        assert_eq!(a - b, Vector::new(0.5, 1.5, 2.5));
        assert_eq!(a * 2.0, Vector::new(2.0, 4.0, 6.0));
        assert_eq!(a / 2.0, Vector::new(0.5, 1.0, 1.5));
        assert_eq!(-a, Vector::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn in_place_forms_chain() {
        let mut v = Vector::new(1.0, 1.0, 1.0);
        v.add_in_place(Vector::new(1.0, 2.0, 3.0))
            .sub_in_place(Vector::new(0.0, 1.0, 2.0))
            .scale_in_place(3.0)
            .div_in_place(2.0);
        assert_eq!(v, Vector::new(3.0, 3.0, 3.0));

        v += Vector::new(1.0, 0.0, 0.0);
        v -= Vector::new(0.0, 1.0, 0.0);
        v *= 2.0;
        v /= 4.0;
        assert_eq!(v, Vector::new(2.0, 1.0, 1.5));
    }

    #[test]
    fn divide_by_zero_follows_float_semantics() {
        let v = Vector::new(2.0, 0.0, -3.0) / 0.0;
        assert_eq!(v.x, f64::INFINITY);
        assert!(v.y.is_nan());
        assert_eq!(v.z, f64::NEG_INFINITY);
    }

    #[test]
    fn normalized_has_unit_length() {
        let n = Vector::new(3.0, 0.0, 4.0).normalized().unwrap();
        assert_abs_diff_eq!(n.magnitude(), 1.0, epsilon = TOLERANCE);
        assert_abs_diff_eq!(n.x, 0.6, epsilon = TOLERANCE);
        assert_abs_diff_eq!(n.z, 0.8, epsilon = TOLERANCE);
    }

    #[test]
    fn normalized_zero_is_an_error() {
        assert_eq!(Vector::ZERO.normalized(), Err(GeometryError::ZeroVector));
    }

    #[test]
    fn index_access() {
        let mut v = Vector::new(7.0, 8.0, 9.0);
        assert_eq!(v[0], 7.0);
        assert_eq!(v[2], 9.0);
        v[0] = -1.0;
        assert_eq!(v.x, -1.0);
        assert_eq!(v.component(1).unwrap(), 8.0);
        assert!(v.component(5).is_err());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn index_out_of_range_panics() {
        let v = Vector::ZERO;
        let _ = v[7];
    }
}
