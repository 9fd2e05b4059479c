//! PDF page extraction
//!
//! Builds the split output by deleting every page that is not selected,
//! then pruning objects the surviving pages no longer reference.

use crate::error::PdfToolError;
use lopdf::Document;
use std::collections::BTreeSet;

/// Extract the given 1-indexed pages into a new PDF, preserving page order.
pub fn extract_pages(bytes: &[u8], pages: &[u32]) -> Result<Vec<u8>, PdfToolError> {
    if pages.is_empty() {
        return Err(PdfToolError::PageSelection("No pages selected".into()));
    }
    if pages.contains(&0) {
        return Err(PdfToolError::PageSelection("Pages are numbered from 1".into()));
    }

    let doc = Document::load_mem(bytes).map_err(|e| PdfToolError::Parse(e.to_string()))?;
    let page_count = doc.get_pages().len() as u32;

    let keep: BTreeSet<u32> = pages.iter().copied().collect();
    if let Some(&too_big) = keep.iter().find(|&&p| p > page_count) {
        return Err(PdfToolError::PageSelection(format!(
            "Page {} does not exist (document has {} pages)",
            too_big, page_count
        )));
    }

    let mut out_doc = doc.clone();

    // Delete back-to-front so earlier indices stay valid
    let discard: Vec<u32> = (1..=page_count).rev().filter(|p| !keep.contains(p)).collect();
    for page in discard {
        out_doc.delete_pages(&[page]);
    }

    out_doc.prune_objects();
    out_doc.compress();

    let mut out = Vec::new();
    out_doc
        .save_to(&mut out)
        .map_err(|e| PdfToolError::Operation(format!("Could not write split PDF: {}", e)))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_pdf;

    #[test]
    fn test_extract_subset_of_pages() {
        let pdf = sample_pdf(5);
        let out = extract_pages(&pdf, &[1, 3, 5]).unwrap();
        let doc = Document::load_mem(&out).unwrap();
        assert_eq!(doc.get_pages().len(), 3);
    }

    #[test]
    fn test_extract_all_pages_keeps_count() {
        let pdf = sample_pdf(4);
        let out = extract_pages(&pdf, &[1, 2, 3, 4]).unwrap();
        let doc = Document::load_mem(&out).unwrap();
        assert_eq!(doc.get_pages().len(), 4);
    }

    #[test]
    fn test_rejects_empty_selection() {
        let pdf = sample_pdf(2);
        assert!(extract_pages(&pdf, &[]).is_err());
    }

    #[test]
    fn test_rejects_page_zero() {
        let pdf = sample_pdf(2);
        assert!(extract_pages(&pdf, &[0, 1]).is_err());
    }

    #[test]
    fn test_rejects_out_of_range_page() {
        let pdf = sample_pdf(2);
        let err = extract_pages(&pdf, &[3]).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_rejects_non_pdf_bytes() {
        assert!(matches!(
            extract_pages(b"hello", &[1]),
            Err(PdfToolError::Parse(_))
        ));
    }
}
