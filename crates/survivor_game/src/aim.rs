//! Aim geometry: facing angle, shot direction and the dashed aim line.

use glam::Vec2;

/// Angle in degrees from `from` towards `to`, measured with `atan2(dy, dx)`.
/// With Y pointing down, positive angles turn clockwise on screen.
pub fn angle_degrees(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    d.y.atan2(d.x).to_degrees()
}

/// Unit vector `(cos θ, sin θ)` for an angle in degrees.
pub fn direction_from_degrees(degrees: f32) -> Vec2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Vec2::new(cos, sin)
}

/// Split the segment `from → to` into dashes of `dash` units separated by
/// `gap` units.  The last dash is cut short at `to`.
///
/// Returns no segments for a zero-length line or a non-positive dash.
pub fn dashed_segments(from: Vec2, to: Vec2, dash: f32, gap: f32) -> Vec<(Vec2, Vec2)> {
    let delta = to - from;
    let length = delta.length();
    if length <= f32::EPSILON || dash <= 0.0 {
        return Vec::new();
    }
    let dir = delta / length;
    let period = dash + gap.max(0.0);

    let mut segments = Vec::with_capacity((length / period).ceil() as usize);
    let mut t = 0.0;
    while t < length {
        let end = (t + dash).min(length);
        segments.push((from + dir * t, from + dir * end));
        t += period;
    }
    segments
}
