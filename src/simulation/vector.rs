//! 2D vector support for the sandbox
//!
//! Kinematic state uses nalgebra's `Vector2<f64>`, aliased as `NVec2`.
//! Arithmetic, dot products and norms come straight from nalgebra; this
//! module adds the geometric helpers the engine needs on top:
//! - `unit_or_zero` for normalization with a zero-vector fallback
//! - `from_angle` for building a direction from radians
//! - `distance_point_to_segment` for picking line shapes
//! - `point_in_triangle` for picking triangle shapes

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// Unit vector of `v`, or the zero vector when `v` has zero length
/// The fallback avoids a division by zero; the spring force relies on
/// it to vanish at its exact anchor point
pub fn unit_or_zero(v: NVec2) -> NVec2 {
    let len = v.norm();
    if len > 0.0 {
        v / len
    } else {
        NVec2::zeros()
    }
}

/// Unit vector at `theta` radians from the +x axis
pub fn from_angle(theta: f64) -> NVec2 {
    NVec2::new(theta.cos(), theta.sin())
}

/// Shortest distance from point `p` to the segment `v` -> `w`
/// A degenerate segment (v == w) falls back to the point distance
pub fn distance_point_to_segment(p: NVec2, v: NVec2, w: NVec2) -> f64 {
    let vw = w - v;
    let l2 = vw.norm_squared();
    if l2 == 0.0 {
        return (p - v).norm();
    }
    // Parameter of the projection of p onto the infinite line through v, w,
    // clamped to [0, 1] so the closest point stays on the segment
    let t = ((p - v).dot(&vw) / l2).clamp(0.0, 1.0);
    let projection = v + vw * t;
    (p - projection).norm()
}

/// Barycentric point-in-triangle test against vertices `a`, `b`, `c`
///
/// Containment holds iff u >= 0, v >= 0 and u + v < 1: inclusive on the
/// two edges where a barycentric coordinate is zero, exclusive on the
/// third. The asymmetry is intentional picking behavior and is kept
/// exactly as the renderer was built against it
pub fn point_in_triangle(p: NVec2, a: NVec2, b: NVec2, c: NVec2) -> bool {
    let v0 = c - a;
    let v1 = b - a;
    let v2 = p - a;
    let dot00 = v0.dot(&v0);
    let dot01 = v0.dot(&v1);
    let dot02 = v0.dot(&v2);
    let dot11 = v1.dot(&v1);
    let dot12 = v1.dot(&v2);
    let inv_denom = 1.0 / (dot00 * dot11 - dot01 * dot01);
    let u = (dot11 * dot02 - dot01 * dot12) * inv_denom;
    let v = (dot00 * dot12 - dot01 * dot02) * inv_denom;
    u >= 0.0 && v >= 0.0 && (u + v < 1.0)
}
