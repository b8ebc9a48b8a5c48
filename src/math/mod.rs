pub mod distance;
pub mod intersect_2d;

/// General tolerance for approximate floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Lower bound of the open interval a segment parameter must fall in to
/// count as an interior crossing; the upper bound is `1.0 - INTERIOR_EPSILON`.
///
/// Tuned empirically: segment ends rarely registered as crossing under plain
/// floating-point rounding, so crossings within this distance of either
/// endpoint are rejected. An exact endpoint touch is never a crossing.
pub const INTERIOR_EPSILON: f64 = 5e-15;
