//! JS-compatibility code. This is for Wasm contexts where the hexagon lives
//! in Rust but the host (canvas, cursor handling, etc.) is JS/TS. This
//! module/feature should **not** be enabled when compiling to Wasm in a
//! pure-Rust context.
//!
//! Points cross the boundary as separate `x`/`y` numbers and come back as
//! flat `[x0, y0, x1, y1, ...]` arrays, since those map onto JS without any
//! glue objects.

mod util;

use crate::{js::util::ResultExt, Hexagon, HexagonConfig, Orientation, Vector2};
use std::str::FromStr;
use validator::Validate;
use wasm_bindgen::prelude::*;

/// Executed when the Wasm module is first loaded
#[wasm_bindgen(start)]
pub fn main() {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
    wasm_logger::init(wasm_logger::Config::default());
}

/// Validate the given config object. Missing fields are populated with
/// defaults, so you can "validate" an empty object to get the default config.
#[wasm_bindgen]
pub fn validate_hexagon_config(input: JsValue) -> Result<HexagonConfig, JsValue> {
    let config: HexagonConfig = input.into_serde().into_js()?;
    config.validate().into_js()?;
    Ok(config)
}

/// A [Hexagon] handle for JS. All query points are in the hexagon's local
/// frame.
#[wasm_bindgen(js_name = Hexagon)]
pub struct JsHexagon(Hexagon);

#[wasm_bindgen(js_class = Hexagon)]
impl JsHexagon {
    #[wasm_bindgen(constructor)]
    pub fn new(size: f64, flat: bool) -> Result<JsHexagon, JsValue> {
        Hexagon::new(size, flat).map(Self).into_js()
    }

    #[wasm_bindgen(getter)]
    pub fn size(&self) -> f64 {
        self.0.size()
    }

    /// Not a property setter, since resizing can fail
    pub fn set_size(&mut self, size: f64) -> Result<(), JsValue> {
        self.0.set_size(size).into_js()
    }

    #[wasm_bindgen(getter)]
    pub fn flat(&self) -> bool {
        self.0.flat()
    }

    #[wasm_bindgen(setter)]
    pub fn set_flat(&mut self, flat: bool) {
        self.0.set_flat(flat)
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f64 {
        self.0.width()
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f64 {
        self.0.height()
    }

    /// Vertices as a flat `[x0, y0, ..., x5, y5]` array
    pub fn vertices(&self) -> Vec<f64> {
        flatten(self.0.vertices())
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.0.contains(Vector2::new(x, y))
    }

    /// Name of the wedge the point falls in, e.g. `"north_east"`. Returns
    /// `"invalid"` for non-finite input.
    pub fn classify(&self, x: f64, y: f64) -> String {
        self.0.classify(Vector2::new(x, y)).0.to_string()
    }

    /// Wedge triangle `[ax, ay, bx, by, 0, 0]` under the point, or `undefined`
    /// if the point is outside the hexagon. Handy for highlighting the hovered
    /// wedge.
    pub fn wedge_triangle(&self, x: f64, y: f64) -> Option<Vec<f64>> {
        self.0
            .wedge_at(Vector2::new(x, y))
            .map(|(_, edge)| flatten(&edge.triangle()))
    }

    /// Edge vector `[x, y]` for the wedge with the given name. Zero if that
    /// wedge doesn't exist on this type of hexagon.
    pub fn edge_vector(&self, orientation: &str) -> Result<Vec<f64>, JsValue> {
        let orientation = Orientation::from_str(orientation).into_js()?;
        Ok(flatten(&[self.0.edge_vector(orientation)]))
    }
}

fn flatten(points: &[Vector2]) -> Vec<f64> {
    points.iter().flat_map(|p| vec![p.x, p.y]).collect()
}
