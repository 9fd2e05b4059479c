//! Page-range string parsing
//!
//! Every PDF tool page accepts selections like "1-3, 5, 8-10".

use crate::error::PdfToolError;
use std::collections::BTreeSet;

/// Parse a page-range string into sorted, de-duplicated 1-indexed pages.
///
/// Accepts comma-separated single pages and inclusive ranges; whitespace
/// around tokens is ignored, empty tokens are skipped.
pub fn parse_page_ranges(input: &str) -> Result<Vec<u32>, PdfToolError> {
    let mut pages = BTreeSet::new();

    for token in input.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }

        match token.split_once('-') {
            Some((lo, hi)) => {
                let lo = parse_page_number(lo)?;
                let hi = parse_page_number(hi)?;
                if lo > hi {
                    return Err(PdfToolError::PageSelection(format!(
                        "Range starts at {} but ends at {}",
                        lo, hi
                    )));
                }
                pages.extend(lo..=hi);
            }
            None => {
                pages.insert(parse_page_number(token)?);
            }
        }
    }

    Ok(pages.into_iter().collect())
}

fn parse_page_number(token: &str) -> Result<u32, PdfToolError> {
    let page: u32 = token
        .trim()
        .parse()
        .map_err(|_| PdfToolError::PageSelection(format!("Not a page number: {:?}", token.trim())))?;
    if page == 0 {
        return Err(PdfToolError::PageSelection("Pages are numbered from 1".into()));
    }
    Ok(page)
}
