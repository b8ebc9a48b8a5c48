use crate::geometry::Point;

/// Parametric 2D line-line solve for the lines through `a0 → a1` and `b0 → b1`.
///
/// Returns `(ua, ub)` such that `a0 + ua * (a1 - a0) = b0 + ub * (b1 - b0)`
/// in the XY plane; `z` is ignored. Uses Cramer's rule on the 2×2 system.
///
/// Returns `None` only when the denominator determinant is exactly zero,
/// which covers parallel, collinear and overlapping inputs alike.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn segment_params_2d(a0: &Point, a1: &Point, b0: &Point, b1: &Point) -> Option<(f64, f64)> {
    let a_top = [
        [b0.x - a0.x, -(b1.x - b0.x)],
        [b0.y - a0.y, -(b1.y - b0.y)],
    ];
    let b_top = [
        [a1.x - a0.x, b0.x - a0.x],
        [a1.y - a0.y, b0.y - a0.y],
    ];
    let denom = [
        [a1.x - a0.x, -(b1.x - b0.x)],
        [a1.y - a0.y, -(b1.y - b0.y)],
    ];

    let bot_det = det2(&denom);
    if bot_det == 0.0 {
        return None;
    }
    Some((det2(&a_top) / bot_det, det2(&b_top) / bot_det))
}

/// Returns `true` if `t` lies in the open interval `(epsilon, 1 - epsilon)`.
#[must_use]
pub fn is_interior(t: f64, epsilon: f64) -> bool {
    t > epsilon && t < 1.0 - epsilon
}

fn det2(m: &[[f64; 2]; 2]) -> f64 {
    m[0][0] * m[1][1] - m[0][1] * m[1][0]
}
