//! Document inspection
//!
//! Read-only facts about a PDF: page count, version, encryption flag and
//! per-page media-box dimensions in points.

use crate::error::PdfToolError;
use lopdf::{Dictionary, Document, Object};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct PageDimensions {
    /// Width in PDF points (1/72 inch)
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentInfo {
    pub page_count: u32,
    pub version: String,
    pub encrypted: bool,
    pub pages: Vec<PageDimensions>,
}

/// Parse PDF bytes and return the page count
pub fn page_count(bytes: &[u8]) -> Result<u32, PdfToolError> {
    let doc = Document::load_mem(bytes).map_err(|e| PdfToolError::Parse(e.to_string()))?;
    Ok(doc.get_pages().len() as u32)
}

/// Full inspection report for the PDF Inspector page
pub fn document_info(bytes: &[u8]) -> Result<DocumentInfo, PdfToolError> {
    let doc = Document::load_mem(bytes).map_err(|e| PdfToolError::Parse(e.to_string()))?;
    let page_map = doc.get_pages();

    let mut pages = Vec::with_capacity(page_map.len());
    for (_, &page_id) in &page_map {
        let dict = doc
            .get_object(page_id)
            .ok()
            .and_then(|obj| obj.as_dict().ok())
            .ok_or_else(|| PdfToolError::Parse("Page object is not a dictionary".into()))?;
        pages.push(media_box(&doc, dict));
    }

    Ok(DocumentInfo {
        page_count: page_map.len() as u32,
        version: doc.version.clone(),
        encrypted: doc.trailer.get(b"Encrypt").is_ok(),
        pages,
    })
}

/// MediaBox of a page, following Parent inheritance; US Letter when absent
fn media_box(doc: &Document, page: &Dictionary) -> PageDimensions {
    let mut dict = page.clone();
    loop {
        if let Ok(Object::Array(bounds)) = dict.get(b"MediaBox").map(|o| o.clone()) {
            let coords: Vec<f32> = bounds.iter().filter_map(as_number).collect();
            if coords.len() == 4 {
                return PageDimensions {
                    width: (coords[2] - coords[0]).abs(),
                    height: (coords[3] - coords[1]).abs(),
                };
            }
        }
        let parent = dict
            .get(b"Parent")
            .ok()
            .and_then(|p| p.as_reference().ok())
            .and_then(|id| doc.get_object(id).ok())
            .and_then(|obj| obj.as_dict().ok());
        match parent {
            Some(parent_dict) => dict = parent_dict.clone(),
            None => return PageDimensions { width: 612.0, height: 792.0 },
        }
    }
}

/// MediaBox entries may be integers or reals
fn as_number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(value) => Some(*value as f32),
        Object::Real(value) => Some(*value),
        _ => None,
    }
}
