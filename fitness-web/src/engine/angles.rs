//! Joint geometry on 2D landmark positions
//!
//! Interior joint angles use the two rays leaving the vertex; circular
//! headings use atan2 and are normalized to [0, 360).

use nalgebra::Vector2;

/// Rays shorter than this are treated as a collapsed joint
const MIN_RAY_LENGTH: f32 = 0.0001;

/// Interior angle at `vertex` in degrees, within [0, 180]
///
/// cos(θ) = (v1 · v2) / (|v1| × |v2|) with v1 = a - vertex, v2 = c - vertex.
///
/// - 180° = the three points are collinear (limb straight)
/// - 90° = right angle at the vertex
pub fn joint_angle(a: Vector2<f32>, vertex: Vector2<f32>, c: Vector2<f32>) -> f32 {
    let v1 = a - vertex;
    let v2 = c - vertex;

    // Degenerate: assume straight if we can't calculate
    if v1.norm() < MIN_RAY_LENGTH || v2.norm() < MIN_RAY_LENGTH {
        return 180.0;
    }

    let cos_angle = (v1.dot(&v2) / (v1.norm() * v2.norm())).clamp(-1.0, 1.0);
    cos_angle.acos().to_degrees()
}

/// Direction of the vector `from -> to` in degrees, within [0, 360)
///
/// Image coordinates: y grows downward, so positive angles turn clockwise
/// on screen.
pub fn heading(from: Vector2<f32>, to: Vector2<f32>) -> f32 {
    let d = to - from;
    let deg = d.y.atan2(d.x).to_degrees();
    let normalized = (deg + 360.0) % 360.0;
    // -0.0 and rounding right below 360 both land on 360 after the modulo
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// Signed shortest rotation from one heading to the next, within [-180, 180]
pub fn wrap_delta(delta: f32) -> f32 {
    if delta > 180.0 {
        delta - 360.0
    } else if delta < -180.0 {
        delta + 360.0
    } else {
        delta
    }
}

pub fn distance(a: Vector2<f32>, b: Vector2<f32>) -> f32 {
    (b - a).norm()
}
