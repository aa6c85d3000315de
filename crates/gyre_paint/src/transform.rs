//! Affine transforms

use std::f64::consts::TAU;

pub use tiny_skia::Transform;

use crate::primitives::Point;

/// Rotation by `radians` about `center`
///
/// Composed in append order: translate by `-center`, then rotate, then
/// translate back, each step applied in the frame left by the previous one.
/// The angle is reduced to one turn before narrowing to `f32`.
pub fn rotation_about(center: Point, radians: f64) -> Transform {
    let degrees = radians.rem_euclid(TAU).to_degrees() as f32;
    Transform::from_translate(-center.x, -center.y)
        .post_rotate(degrees)
        .post_translate(center.x, center.y)
}

/// Apply `transform` to a single point
pub fn map_point(transform: &Transform, point: Point) -> Point {
    let mut points = [point];
    transform.map_points(&mut points);
    points[0]
}
