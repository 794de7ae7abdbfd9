//! Compass-style labels for the six wedges of a hexagon, and the edges those
//! wedges map to.

use crate::util::unit::Vector2;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString};

/// A compass direction in the hexagon's local frame, used to label the wedge
/// (and edge) that a point falls in. North is `+y`, east is `+x`.
///
/// Only six of the eight compass directions can label a wedge for any given
/// hexagon, because each label names the direction of its edge's midpoint
/// from the center. Flat-top hexagons have edges facing north and south, so
/// [Self::East] and [Self::West] never come up. Pointy-top hexagons are the
/// opposite: [Self::North] and [Self::South] are unreachable. See
/// [wedge_orientations].
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    strum::Display,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Orientation {
    East,
    NorthEast,
    North,
    NorthWest,
    West,
    SouthWest,
    South,
    SouthEast,
    /// The point couldn't be placed in any wedge
    Invalid,
}

impl Orientation {
    /// Every real compass direction, counter-clockwise starting at East.
    /// Excludes [Self::Invalid].
    pub const COMPASS: [Self; 8] = [
        Self::East,
        Self::NorthEast,
        Self::North,
        Self::NorthWest,
        Self::West,
        Self::SouthWest,
        Self::South,
        Self::SouthEast,
    ];

    fn compass_index(self) -> Option<usize> {
        Self::COMPASS.iter().position(|dir| *dir == self)
    }

    /// Can this orientation label a wedge on a hexagon with the given
    /// orientation flag?
    pub fn is_valid_for(self, flat: bool) -> bool {
        wedge_index(flat, self).is_some()
    }

    /// The direction pointing the other way. Invalid stays invalid.
    pub fn opposite(self) -> Self {
        match self.compass_index() {
            Some(index) => Self::COMPASS[(index + 4) % Self::COMPASS.len()],
            None => Self::Invalid,
        }
    }

    /// A unit vector pointing in this compass direction. Returns the zero
    /// vector for [Self::Invalid].
    pub fn to_vector(self) -> Vector2 {
        match self.compass_index() {
            Some(index) => Vector2::RIGHT.rotate(index as f64 * 45.0),
            None => Vector2::ZERO,
        }
    }
}

/// Wedge labels for a flat-top hexagon, in the same order as its vertices
/// (counter-clockwise from `+x`). Wedge `i` spans vertices `i` and `i + 1`.
///
/// ```text
///      N
///  NW ___ NE
///    /   \
///    \___/
///  SW     SE
///      S
/// ```
const FLAT_WEDGES: [Orientation; 6] = [
    Orientation::NorthEast,
    Orientation::North,
    Orientation::NorthWest,
    Orientation::SouthWest,
    Orientation::South,
    Orientation::SouthEast,
];

/// Wedge labels for a pointy-top hexagon, in the same order as its vertices
/// (counter-clockwise from `+y`). Wedge `i` spans vertices `i` and `i + 1`.
///
/// ```text
///  NW  /\  NE
///   W |  | E
///  SW  \/  SE
/// ```
const POINTY_WEDGES: [Orientation; 6] = [
    Orientation::NorthWest,
    Orientation::West,
    Orientation::SouthWest,
    Orientation::SouthEast,
    Orientation::East,
    Orientation::NorthEast,
];

/// The six orientations that label the wedges of a hexagon with the given
/// orientation flag, in vertex order.
pub fn wedge_orientations(flat: bool) -> &'static [Orientation; 6] {
    if flat {
        &FLAT_WEDGES
    } else {
        &POINTY_WEDGES
    }
}

/// Index of the wedge (and its starting vertex) that the orientation labels,
/// or `None` if that orientation isn't reachable for this hexagon type.
pub(crate) fn wedge_index(flat: bool, orientation: Orientation) -> Option<usize> {
    wedge_orientations(flat)
        .iter()
        .position(|dir| *dir == orientation)
}

/// One side of a hexagon, as an ordered pair of adjacent vertices. `b` always
/// follows `a` counter-clockwise, so the inside of the hexagon is to the
/// left of the edge.
#[derive(
    Copy, Clone, Debug, Default, Display, PartialEq, Serialize, Deserialize,
)]
#[display(fmt = "{} -> {}", a, b)]
pub struct Edge {
    pub a: Vector2,
    pub b: Vector2,
}

impl Edge {
    /// An edge with both ends at the origin. Returned alongside
    /// [Orientation::Invalid].
    pub const EMPTY: Self = Self::new(Vector2::ZERO, Vector2::ZERO);

    pub const fn new(a: Vector2, b: Vector2) -> Self {
        Self { a, b }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// The directed vector from `a` to `b`
    pub fn vector(&self) -> Vector2 {
        self.b - self.a
    }

    pub fn midpoint(&self) -> Vector2 {
        (self.a + self.b) / 2.0
    }

    /// Signed area test of `point` against this edge. Positive means the point
    /// is to the left of the edge (inside the hexagon, for a CCW edge), zero
    /// means it's on the line through the edge.
    pub fn side(&self, point: Vector2) -> f64 {
        self.vector().cross(point - self.a)
    }

    /// Is the point on the left side of this edge, or on it? `tolerance` is
    /// how far negative [Self::side] can go before we call it the right side.
    pub fn contains_left(&self, point: Vector2, tolerance: f64) -> bool {
        self.side(point) >= -tolerance
    }

    /// The triangle formed by this edge and the hexagon's center, i.e. the
    /// part of the wedge that's inside the hexagon. Useful for drawing the
    /// hovered wedge.
    pub fn triangle(&self) -> [Vector2; 3] {
        [self.a, self.b, Vector2::ZERO]
    }
}
