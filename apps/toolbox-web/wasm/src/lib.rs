//! WASM bindings for the browser toolbox
//!
//! One wasm module backs every tool page. State-heavy tools (PDF merge and
//! split, image→PDF) use session objects that keep all state in Rust;
//! everything else is a stateless function. JavaScript only handles DOM
//! events, file pickers and downloads.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { PdfSession, SessionMode, relatedTools } from './pkg/toolbox_wasm.js';
//!
//! await init();
//!
//! const session = new PdfSession(SessionMode.Merge);
//! session.addDocument("a.pdf", bytesA);
//! session.addDocument("b.pdf", bytesB);
//! const merged = session.execute();
//!
//! const shelf = relatedTools("/tools/merge-pdf"); // up to 6 catalog entries
//! ```

pub mod images;
pub mod inspect;
pub mod related;
pub mod session;
pub mod text;

use wasm_bindgen::prelude::*;

pub use images::ImagePdfBuilder;
pub use related::{catalog, related_tools};
pub use session::{PdfSession, SessionMode};

/// Initialize the WASM module
/// Called automatically by wasm-bindgen
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Get the library version
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Get detailed PDF info without creating a session
/// Useful for showing file facts before the user commits to an operation
#[wasm_bindgen(js_name = getPdfInfo)]
pub fn get_pdf_info(bytes: &[u8]) -> Result<JsValue, JsValue> {
    let info = pdftool_core::document_info(bytes).map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_wasm_bindgen::to_value(&info)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Get page count from PDF bytes (convenience function)
#[wasm_bindgen(js_name = getPageCount)]
pub fn get_page_count(bytes: &[u8]) -> Result<u32, JsValue> {
    pdftool_core::page_count(bytes).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Rotate the pages in `ranges` ("1-3, 5"; empty string means all pages)
/// by the given multiple of 90 degrees
#[wasm_bindgen(js_name = rotatePdf)]
pub fn rotate_pdf(bytes: &[u8], ranges: &str, degrees: i32) -> Result<Vec<u8>, JsValue> {
    let pages =
        pdftool_core::parse_page_ranges(ranges).map_err(|e| JsValue::from_str(&e.to_string()))?;
    pdftool_core::rotate_pages(bytes, &pages, degrees)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Format bytes as a human-readable size for file listings
#[wasm_bindgen]
pub fn format_bytes(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = KB * 1024;

    if bytes < KB {
        format!("{} B", bytes)
    } else if bytes < MB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    }
}
