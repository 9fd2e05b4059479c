//! Related-tools bindings
//!
//! The "you might also need" shelf rendered under every tool page. The
//! page passes its own route; an empty array back means render nothing.

use related_tools::default_catalog;
use wasm_bindgen::prelude::*;

/// Up to six related catalog entries for the tool at `current_path`
#[wasm_bindgen(js_name = relatedTools)]
pub fn related_tools(current_path: &str) -> Result<JsValue, JsValue> {
    let shelf = related_tools::related_tools(default_catalog().tools(), current_path);
    serde_wasm_bindgen::to_value(&shelf)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// The full tool catalog, for the landing page grid
#[wasm_bindgen]
pub fn catalog() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(default_catalog().tools())
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}
