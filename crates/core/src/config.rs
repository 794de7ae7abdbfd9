use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError, ValidationErrors};
#[cfg(feature = "js")]
use wasm_bindgen::prelude::*;

/// Configuration that defines a single hexagon. A [Hexagon](crate::Hexagon)
/// is fully determined by its config, so this is also the serialized form of
/// a hexagon.
#[cfg_attr(feature = "js", wasm_bindgen)]
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HexagonConfig {
    /// Distance from the center of the hexagon to each of its vertices, which
    /// is also the length of each side. Must be a finite number greater than
    /// zero.
    pub size: f64,

    /// `true` for flat-top hexagons (horizontal edges on top and bottom),
    /// `false` for pointy-top (a vertex on top and bottom).
    pub flat: bool,
}

impl Default for HexagonConfig {
    fn default() -> Self {
        Self {
            size: 0.5,
            flat: false,
        }
    }
}

// The derived `range` check can't express "strictly greater than zero", and
// lets NaN through, so this one is written out by hand
impl Validate for HexagonConfig {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if !(self.size.is_finite() && self.size > 0.0) {
            let mut error = ValidationError::new("positive");
            error.message =
                Some(Cow::Borrowed("size must be a finite number > 0"));
            error.add_param(Cow::Borrowed("value"), &self.size);
            errors.add("size", error);
        }

        if errors.errors().is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(feature = "json")]
impl HexagonConfig {
    /// Deserialize a config from JSON. Missing fields fall back to their
    /// defaults. The result is **not** validated.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        use anyhow::Context;
        serde_json::from_str(json).context("error deserializing hexagon config")
    }

    /// Serialize this config to JSON
    pub fn to_json(&self) -> anyhow::Result<String> {
        use anyhow::Context;
        serde_json::to_string(self).context("error serializing hexagon config")
    }
}
