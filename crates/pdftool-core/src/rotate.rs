//! Page rotation
//!
//! Adjusts the /Rotate entry of page dictionaries. Rotation is relative to
//! the page's current rotation, normalised to 0/90/180/270.

use crate::error::PdfToolError;
use lopdf::{Document, Object};
use std::collections::BTreeSet;

/// Rotate the selected 1-indexed pages by `degrees` (any multiple of 90,
/// negative allowed). An empty selection rotates every page.
pub fn rotate_pages(bytes: &[u8], pages: &[u32], degrees: i32) -> Result<Vec<u8>, PdfToolError> {
    if degrees % 90 != 0 {
        return Err(PdfToolError::Operation(format!(
            "Rotation must be a multiple of 90 degrees, got {}",
            degrees
        )));
    }

    let mut doc = Document::load_mem(bytes).map_err(|e| PdfToolError::Parse(e.to_string()))?;
    let page_map = doc.get_pages();
    let page_count = page_map.len() as u32;

    let selected: BTreeSet<u32> = if pages.is_empty() {
        (1..=page_count).collect()
    } else {
        pages.iter().copied().collect()
    };

    if selected.contains(&0) {
        return Err(PdfToolError::PageSelection("Pages are numbered from 1".into()));
    }
    if let Some(&too_big) = selected.iter().find(|&&p| p > page_count) {
        return Err(PdfToolError::PageSelection(format!(
            "Page {} does not exist (document has {} pages)",
            too_big, page_count
        )));
    }

    for (&number, &page_id) in &page_map {
        if !selected.contains(&number) {
            continue;
        }
        let current = doc
            .get_object(page_id)
            .ok()
            .and_then(|obj| obj.as_dict().ok())
            .and_then(|dict| dict.get(b"Rotate").ok())
            .and_then(|r| r.as_i64().ok())
            .unwrap_or(0) as i32;
        let rotated = (current + degrees).rem_euclid(360);
        if let Ok(Object::Dictionary(dict)) = doc.get_object_mut(page_id) {
            dict.set("Rotate", Object::Integer(rotated as i64));
        }
    }

    let mut out = Vec::new();
    doc.save_to(&mut out)
        .map_err(|e| PdfToolError::Operation(format!("Could not write rotated PDF: {}", e)))?;
    Ok(out)
}
