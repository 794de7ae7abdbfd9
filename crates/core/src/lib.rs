//! Hexa is the geometry engine behind a hex-grid game layer. It answers the
//! questions a renderer or cursor handler needs to ask about a single hexagon
//! cell: where are its vertices, how big is its bounding box, is this point
//! inside it, and which of its six wedges (i.e. which neighbor direction) is
//! this point in. Grids, rendering and input are implemented elsewhere.
//!
//! ```
//! use hexa::{Hexagon, Orientation, Vector2};
//!
//! // Pointy-top hexagon with a circumradius of 1
//! let hexagon = Hexagon::new(1.0, false).unwrap();
//! assert!(hexagon.contains(Vector2::new(0.0, 0.99)));
//! assert!(!hexagon.contains(Vector2::new(0.0, 1.01)));
//!
//! let (orientation, _edge) = hexagon.classify(Vector2::new(0.3, 0.5));
//! assert_eq!(orientation, Orientation::NorthEast);
//! ```
//!
//! See the [hex] module for a description of the coordinate frame all of this
//! operates in.

mod config;
pub mod hex;
#[cfg(feature = "js")]
pub mod js;
mod util;

pub use crate::{
    config::HexagonConfig,
    hex::{
        bounding_rect, build_vertices, contains_barycentric, edge_vector,
        wedge_orientations, Edge, Hexagon, Orientation,
    },
    util::{
        range::{NumRange, Rangeable},
        unit::{Rect, Vector2},
    },
};
