use crate::{
    config::HexagonConfig,
    hex::{
        orientation::{wedge_index, wedge_orientations, Edge, Orientation},
        EPSILON,
    },
    util::{
        range::NumRange,
        unit::{Rect, Vector2},
    },
};
use anyhow::{bail, Context};
use derive_more::Display;
use log::trace;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use validator::Validate;

/// `sqrt(3) / 2`, the distance from a hexagon's center to the midpoint of a
/// side, relative to its size. Also `sin(60°)`.
const SQRT_3_2: f64 = 0.866_025_403_784_438_6;

/// A single regular hexagon, centered on the origin of its own local frame.
/// A hexagon is defined by two things: its size and whether it's flat-top or
/// pointy-top. Everything else (vertices, bounding box, etc.) is derived from
/// those two values.
///
/// All queries take points **in the hexagon's local frame**, i.e. relative to
/// its center. Converting from world/screen space into that frame is up to the
/// caller.
///
/// ## Caching
///
/// The six vertices are built lazily on first use and cached until the size or
/// orientation changes. Queries only need `&self`, so a hexagon can be shared
/// between threads and read concurrently. Changing the shape requires
/// `&mut self`, which guarantees nobody is reading while the cache is reset.
///
/// ## Serialization
///
/// A hexagon serializes as its [HexagonConfig]. Deserializing validates the
/// config, so you can't sneak a zero-size hexagon in that way.
#[derive(Clone, Debug, Display, Serialize, Deserialize)]
#[display(fmt = "Hexagon(size = {}, flat = {})", size, flat)]
#[serde(try_from = "HexagonConfig", into = "HexagonConfig")]
pub struct Hexagon {
    /// Distance from the center to each vertex. This is also the length of
    /// each side.
    size: f64,
    /// `true` for flat-top, `false` for pointy-top
    flat: bool,
    /// Lazily built vertices. Empty means the cache is dirty.
    vertices: OnceLock<[Vector2; 6]>,
}

impl Hexagon {
    /// Create a new hexagon. Returns an error if the size isn't a finite
    /// positive number.
    pub fn new(size: f64, flat: bool) -> anyhow::Result<Self> {
        check_size(size)?;
        Ok(Self {
            size,
            flat,
            vertices: OnceLock::new(),
        })
    }

    /// Create a hexagon from a config, validating the config first
    pub fn from_config(config: HexagonConfig) -> anyhow::Result<Self> {
        config.validate().context("invalid hexagon config")?;
        Self::new(config.size, config.flat)
    }

    /// Get the config that would produce this same hexagon
    pub fn config(&self) -> HexagonConfig {
        HexagonConfig {
            size: self.size,
            flat: self.flat,
        }
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    /// Is this a flat-top hexagon? If not, it's pointy-top.
    pub fn flat(&self) -> bool {
        self.flat
    }

    /// Change the size of the hexagon. Returns an error (and leaves the
    /// hexagon unchanged) if the size isn't a finite positive number.
    pub fn set_size(&mut self, size: f64) -> anyhow::Result<()> {
        check_size(size)?;
        if size != self.size {
            self.size = size;
            self.invalidate();
        }
        Ok(())
    }

    /// Switch between flat-top and pointy-top
    pub fn set_flat(&mut self, flat: bool) {
        if flat != self.flat {
            self.flat = flat;
            self.invalidate();
        }
    }

    /// Throw away the cached vertices. They'll be rebuilt on next access.
    pub fn invalidate(&mut self) {
        self.vertices.take();
    }

    /// Has the vertex cache been built since the last invalidation?
    pub fn is_cached(&self) -> bool {
        self.vertices.get().is_some()
    }

    /// The six vertices of this hexagon, counter-clockwise. Flat-top hexagons
    /// start from the `+x` vertex, pointy-top from the `+y` vertex.
    pub fn vertices(&self) -> &[Vector2; 6] {
        self.vertices.get_or_init(|| {
            trace!("Building vertices for {}", self);
            build_vertices(self.size, self.flat)
        })
    }

    /// Axis-aligned box that exactly encloses the hexagon
    pub fn rect(&self) -> Rect {
        bounding_rect(self.size, self.flat)
    }

    pub fn width(&self) -> f64 {
        self.rect().width()
    }

    pub fn height(&self) -> f64 {
        self.rect().height()
    }

    /// All six edges, paired with the label of the wedge each one bounds. The
    /// order matches [Self::vertices].
    pub fn edges(&self) -> impl Iterator<Item = (Orientation, Edge)> + '_ {
        let vertices = self.vertices();
        wedge_orientations(self.flat)
            .iter()
            .enumerate()
            .map(move |(i, orientation)| {
                (*orientation, Edge::new(vertices[i], vertices[(i + 1) % 6]))
            })
    }

    /// Get the edge that bounds the wedge with the given label. Returns `None`
    /// if that label isn't used by this type of hexagon.
    pub fn edge(&self, orientation: Orientation) -> Option<Edge> {
        let i = wedge_index(self.flat, orientation)?;
        let vertices = self.vertices();
        Some(Edge::new(vertices[i], vertices[(i + 1) % 6]))
    }

    /// Directed vector along the edge with the given label. See
    /// [edge_vector].
    pub fn edge_vector(&self, orientation: Orientation) -> Vector2 {
        self.edge(orientation)
            .map(|edge| edge.vector())
            .unwrap_or(Vector2::ZERO)
    }

    /// Is the point inside this hexagon? Points on the boundary count as
    /// inside.
    ///
    /// Two cheap rejections run first (the circumscribed circle, then the
    /// bounding box), then an exact test: the vertices wind counter-clockwise,
    /// so a point is inside iff it isn't strictly to the right of any edge.
    pub fn contains(&self, point: Vector2) -> bool {
        if !self.in_circle(point) {
            return false;
        }
        if !self.rect().grow(self.distance_tolerance()).contains(point) {
            return false;
        }

        let tolerance = self.area_tolerance();
        self.edges()
            .all(|(_, edge)| edge.contains_left(point, tolerance))
    }

    /// Figure out which wedge of the hexagon the point falls in. The hexagon
    /// is split into six 60° wedges, one per edge, each bounded by the rays
    /// from the center through that edge's two vertices. Wedges extend
    /// infinitely, so this does **not** check that the point is inside the
    /// hexagon; use [Self::wedge_at] for that.
    ///
    /// A point that lies exactly on the ray through a vertex belongs to the
    /// wedge that *starts* at that vertex (the counter-clockwise one). The
    /// center belongs to the first wedge. So every finite point gets exactly
    /// one wedge; [Orientation::Invalid] (with an empty edge) only comes back
    /// for NaN or infinite input.
    pub fn classify(&self, point: Vector2) -> (Orientation, Edge) {
        if !point.is_finite() {
            return (Orientation::Invalid, Edge::EMPTY);
        }

        // Wedge spanning rays a->b (CCW, 60° apart) holds the point iff the
        // point is CCW from a (or on it) and strictly CW from b
        let in_wedge = |edge: &Edge| {
            edge.a.cross(point) >= 0.0 && point.cross(edge.b) > 0.0
        };
        self.edges()
            .find(|(_, edge)| in_wedge(edge))
            .or_else(|| {
                // No wedge had a strict inequality, so the point has no usable
                // direction. That's the center (or close enough that the cross
                // products underflow)
                self.edges().next()
            })
            .unwrap_or((Orientation::Invalid, Edge::EMPTY))
    }

    /// Find the wedge that the point falls in, but only if the point is also
    /// inside the hexagon. This is the query for "is the cursor over this hex,
    /// and which neighbor is it closest to".
    ///
    /// Since the only part of the hexagon's boundary within a wedge is that
    /// wedge's edge, we only need one half-plane test after classifying.
    pub fn wedge_at(&self, point: Vector2) -> Option<(Orientation, Edge)> {
        let (orientation, edge) = self.classify(point);
        if orientation == Orientation::Invalid || !self.in_circle(point) {
            return None;
        }
        if edge.contains_left(point, self.area_tolerance()) {
            Some((orientation, edge))
        } else {
            None
        }
    }

    /// Map a local point to normalized `[0, 1]` coordinates across the
    /// bounding box, with the bottom-left corner at `(0, 0)`. This is the UV
    /// mapping for a texture that exactly covers the hexagon.
    pub fn uv(&self, point: Vector2) -> Vector2 {
        self.rect().normalize(point)
    }

    /// Necessary condition for containment: the hexagon fits inside the
    /// circle through its vertices
    fn in_circle(&self, point: Vector2) -> bool {
        let radius = self.size + self.distance_tolerance();
        point.magnitude_squared() <= radius * radius
    }

    /// Slack for distance comparisons, so vertices computed in floating point
    /// still land inside
    fn distance_tolerance(&self) -> f64 {
        EPSILON * self.size
    }

    /// Slack for cross products, which scale with size squared
    fn area_tolerance(&self) -> f64 {
        EPSILON * self.size * self.size
    }
}

impl PartialEq for Hexagon {
    fn eq(&self, other: &Self) -> bool {
        // The cache is derived, so it doesn't factor in
        self.size == other.size && self.flat == other.flat
    }
}

impl TryFrom<HexagonConfig> for Hexagon {
    type Error = anyhow::Error;

    fn try_from(config: HexagonConfig) -> Result<Self, Self::Error> {
        Self::from_config(config)
    }
}

impl From<Hexagon> for HexagonConfig {
    fn from(hexagon: Hexagon) -> Self {
        hexagon.config()
    }
}

fn check_size(size: f64) -> anyhow::Result<()> {
    if !(size.is_finite() && size > 0.0) {
        bail!("hexagon size must be a finite number > 0, but was {}", size);
    }
    Ok(())
}

/// Build the six vertices of a hexagon centered on the origin, in
/// counter-clockwise order. Flat-top vertices sit at 0°, 60°, ..., 300°.
/// Pointy-top vertices are the same set rotated by 90°, starting at +y.
///
/// Coordinates are written out directly rather than computed with trig, so
/// the axis-aligned ones are exact and opposite vertices are exact negations
/// of each other.
pub fn build_vertices(size: f64, flat: bool) -> [Vector2; 6] {
    let long = size;
    let short = size / 2.0;
    let apothem = size * SQRT_3_2;
    if flat {
        //   2 ___ 1
        //    /   \
        // 3 <  .  > 0
        //    \___/
        //   4     5
        [
            Vector2::new(long, 0.0),
            Vector2::new(short, apothem),
            Vector2::new(-short, apothem),
            Vector2::new(-long, 0.0),
            Vector2::new(-short, -apothem),
            Vector2::new(short, -apothem),
        ]
    } else {
        //      0
        //   1 / \ 5
        //    | . |
        //   2 \ / 4
        //      3
        [
            Vector2::new(0.0, long),
            Vector2::new(-apothem, short),
            Vector2::new(-apothem, -short),
            Vector2::new(0.0, -long),
            Vector2::new(apothem, -short),
            Vector2::new(apothem, short),
        ]
    }
}

/// The axis-aligned bounding box of a hexagon centered on the origin. For
/// flat-top, that's `2·size` wide and `√3·size` tall; pointy-top is the
/// transpose.
pub fn bounding_rect(size: f64, flat: bool) -> Rect {
    // Use the same expressions as build_vertices so the box touches the
    // extremal vertices exactly
    let apothem = size * SQRT_3_2;
    let (half_width, half_height) = if flat {
        (size, apothem)
    } else {
        (apothem, size)
    };
    Rect {
        x: NumRange::new(-half_width, half_width),
        y: NumRange::new(-half_height, half_height),
    }
}

/// Directed vector along the edge that bounds the wedge with the given
/// label, for a hexagon of the given shape. Returns the zero vector if the
/// label isn't used by that type of hexagon (e.g. [Orientation::West] on a
/// flat-top hexagon).
pub fn edge_vector(flat: bool, size: f64, orientation: Orientation) -> Vector2 {
    match wedge_index(flat, orientation) {
        Some(i) => {
            let vertices = build_vertices(size, flat);
            vertices[(i + 1) % 6] - vertices[i]
        }
        None => Vector2::ZERO,
    }
}
