//! Image → PDF builder for the JPG-to-PDF page
//!
//! Same session pattern as [`crate::session::PdfSession`]: images accumulate
//! in Rust, JavaScript triggers `build()` and downloads the result.

use pdftool_core::{images_to_pdf, ImageInput};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Default)]
pub struct ImagePdfBuilder {
    images: Vec<ImageInput>,
}

#[wasm_bindgen]
impl ImagePdfBuilder {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    #[wasm_bindgen(js_name = imageCount)]
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    /// Queue an image; format is validated at build time
    #[wasm_bindgen(js_name = addImage)]
    pub fn add_image(&mut self, name: &str, bytes: &[u8]) {
        self.images.push(ImageInput {
            name: name.to_string(),
            bytes: bytes.to_vec(),
        });
    }

    #[wasm_bindgen(js_name = removeImage)]
    pub fn remove_image(&mut self, index: usize) -> Result<(), JsValue> {
        if index >= self.images.len() {
            return Err(JsValue::from_str("Image index out of bounds"));
        }
        self.images.remove(index);
        Ok(())
    }

    /// Produce the PDF, one page per queued image
    pub fn build(&self) -> Result<Vec<u8>, JsValue> {
        images_to_pdf(&self.images).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

/// Stateless one-shot conversion for single-image pages
#[wasm_bindgen(js_name = imageToPdf)]
pub fn image_to_pdf(name: &str, bytes: &[u8]) -> Result<Vec<u8>, JsValue> {
    let input = ImageInput { name: name.to_string(), bytes: bytes.to_vec() };
    images_to_pdf(&[input]).map_err(|e| JsValue::from_str(&e.to_string()))
}
