//! A second point-in-hexagon test, based on splitting the hexagon into six
//! triangles that all share the center. [Hexagon::contains] is the one to use;
//! this one exists to cross-check it and to benchmark against it.
//!
//! [Hexagon::contains]: crate::Hexagon::contains

use crate::{
    hex::{hexagon::build_vertices, EPSILON},
    util::unit::Vector2,
};

/// Barycentric weights of `point` relative to the triangle
/// `(origin, b, c)`. Returns `(u, v)` such that `point = u·b + v·c`; the
/// weight of the origin corner is `1 - u - v`.
fn barycentric_weights(point: Vector2, b: Vector2, c: Vector2) -> (f64, f64) {
    // Twice the signed area of the triangle. Never zero for a hexagon wedge,
    // since b and c are 60° apart
    let area = b.cross(c);
    let u = point.cross(c) / area;
    let v = b.cross(point) / area;
    (u, v)
}

/// Is the point inside a hexagon of the given shape? Same semantics as
/// [Hexagon::contains](crate::Hexagon::contains), including boundary points
/// counting as inside, but computed by checking each center-anchored triangle.
pub fn contains_barycentric(point: Vector2, size: f64, flat: bool) -> bool {
    if !point.is_finite() {
        return false;
    }

    let vertices = build_vertices(size, flat);
    (0..6).any(|i| {
        let (u, v) =
            barycentric_weights(point, vertices[i], vertices[(i + 1) % 6]);
        // Weights are relative to the triangle, so the tolerance doesn't need
        // to scale with size
        u >= -EPSILON && v >= -EPSILON && u + v <= 1.0 + EPSILON
    })
}
