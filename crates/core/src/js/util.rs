use std::fmt::Display;
use wasm_bindgen::prelude::*;

pub fn to_js_error(error: impl Display) -> JsValue {
    js_sys::Error::new(&error.to_string()).into()
}

/// An extension trait for `Result` to allow us to add custom methods
pub trait ResultExt<T, E> {
    /// Helper to convert any result to a result with a JS error value.
    fn into_js(self) -> Result<T, JsValue>;
}

impl<T, E: Display> ResultExt<T, E> for Result<T, E> {
    fn into_js(self) -> Result<T, JsValue> {
        // {:#} includes the whole anyhow context chain
        self.map_err(|error| to_js_error(format!("{:#}", error)))
    }
}
