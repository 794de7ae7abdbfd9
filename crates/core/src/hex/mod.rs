//! This module holds the geometry for a single hexagon cell.
//!
//! ## Local Frame
//!
//! Every hexagon lives in its own 2D coordinate system, with the hexagon's
//! center at the origin. Right is `+x`, up is `+y`, and angles are measured
//! counter-clockwise from `+x`, just like in a math textbook. In compass terms,
//! north is `+y` and east is `+x`.
//!
//! ```text
//!        +y (N)
//!         ^
//!         |
//! -x <----o----> +x (E)
//!         |
//!         v
//!        -y
//! ```
//!
//! Converting a world-space or screen-space point into this frame (undoing
//! the cell's translation, rotation and scale) is the job of whoever is
//! hosting the hexagon. Nothing in here knows about grids, cameras or cursors.
//!
//! ## Orientations
//!
//! Hexagons come in two flavors:
//!
//! - **Flat-top**: a horizontal edge on top and bottom, with vertices at 0°,
//!   60°, ..., 300°
//! - **Pointy-top**: a vertex on top and bottom, with vertices at 90°, 150°,
//!   ..., 30°
//!
//! They're the same shape, just rotated. Rotating a pointy-top hexagon by 90°
//! counter-clockwise gives you the flat-top hexagon of the same size.
//!
//! ## Wedges
//!
//! For cursor interaction, a hexagon is split into six wedges. Each wedge is
//! the 60° slice between the rays from the center through two adjacent
//! vertices, so each wedge is paired with exactly one edge and (in a grid)
//! one neighbor. Wedges are labelled with an [Orientation] naming the
//! direction of that edge. See [Hexagon::classify] for how points on the
//! boundary between two wedges are assigned.

mod barycentric;
mod hexagon;
mod orientation;

pub use self::{barycentric::*, hexagon::*, orientation::*};

/// Relative slack for floating point comparisons, a few ULPs. It only has to
/// absorb rounding in the `√3/2` vertex coordinates, so anything measurably
/// past the boundary is still outside. Distances are compared with
/// `EPSILON * size` and cross products with `EPSILON * size²`.
pub const EPSILON: f64 = 8.0 * f64::EPSILON;
