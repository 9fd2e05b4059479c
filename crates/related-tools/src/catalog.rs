//! Static tool catalog
//!
//! Compiled-in configuration data: the full list of utility pages the site
//! ships. Loaded once, never mutated. Popularity ranks come from page
//! analytics and only influence fallback ordering in the recommender.

use lazy_static::lazy_static;
use shared_types::{Tool, ToolCategory};

/// Read-only ordered collection of catalog entries
#[derive(Debug, Clone)]
pub struct ToolCatalog {
    tools: Vec<Tool>,
}

impl ToolCatalog {
    /// Wrap a tool list. Paths must be unique; duplicates are a catalog
    /// defect, checked here in debug builds rather than handled at runtime.
    pub fn new(tools: Vec<Tool>) -> Self {
        debug_assert!(
            {
                let mut paths: Vec<&str> = tools.iter().map(|t| t.path).collect();
                paths.sort_unstable();
                paths.windows(2).all(|w| w[0] != w[1])
            },
            "duplicate tool path in catalog"
        );
        Self { tools }
    }

    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    pub fn find(&self, path: &str) -> Option<&Tool> {
        self.tools.iter().find(|t| t.path == path)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

macro_rules! tool {
    ($id:literal, $name:literal, $desc:literal, $icon:literal, $cat:ident, $pop:expr) => {
        Tool {
            id: $id,
            path: concat!("/tools/", $id),
            name: $name,
            description: $desc,
            icon: $icon,
            category: ToolCategory::$cat,
            popularity: $pop,
        }
    };
}

lazy_static! {
    static ref DEFAULT_CATALOG: ToolCatalog = ToolCatalog::new(vec![
        // PDF
        tool!("merge-pdf", "Merge PDF", "Combine multiple PDFs into one file", "layers", Pdf, Some(95)),
        tool!("split-pdf", "Split PDF", "Extract pages from a PDF", "scissors", Pdf, Some(88)),
        tool!("rotate-pdf", "Rotate PDF", "Rotate pages in a PDF", "rotate-cw", Pdf, Some(41)),
        tool!("jpg-to-pdf", "JPG to PDF", "Turn images into a PDF document", "file-image", Pdf, Some(73)),
        tool!("pdf-info", "PDF Inspector", "Page count, version and page sizes", "info", Pdf, Some(12)),
        // Image
        tool!("heic-to-jpg", "HEIC to JPG", "Convert iPhone photos to JPG", "camera", Image, Some(81)),
        tool!("compress-image", "Compress Image", "Shrink images in your browser", "minimize", Image, Some(90)),
        tool!("image-converter", "Image Converter", "Convert between PNG, JPG and WebP", "image", Image, Some(64)),
        // Text
        tool!("base64", "Base64 Encoder", "Encode and decode Base64 text", "binary", Text, Some(70)),
        tool!("url-encode", "URL Encoder", "Percent-encode and decode URLs", "link", Text, Some(55)),
        tool!("hex-converter", "Hex Converter", "Text to hex and back", "hash", Text, Some(18)),
        tool!("json-formatter", "JSON Formatter", "Pretty-print or minify JSON", "braces", Text, Some(77)),
        tool!("case-converter", "Case Converter", "camelCase, snake_case and friends", "type", Text, Some(33)),
        tool!("word-counter", "Word Counter", "Words, characters and reading time", "align-left", Text, Some(49)),
        // Inspect
        tool!("color-converter", "Color Converter", "HEX, RGB and HSL in one place", "palette", Inspect, Some(58)),
        tool!("cron-parser", "Cron Parser", "Explain cron expressions in English", "clock", Inspect, Some(44)),
        tool!("timestamp", "Unix Timestamp", "Convert Unix timestamps to dates", "calendar", Inspect, Some(62)),
        tool!("password-strength", "Password Strength", "Entropy-based password check", "shield", Inspect, Some(26)),
        tool!("jwt-decoder", "JWT Decoder", "Inspect JSON Web Token claims", "key", Inspect, None),
    ]);
}

/// The catalog every page of the site is built from
pub fn default_catalog() -> &'static ToolCatalog {
    &DEFAULT_CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommend::{related_tools, MAX_RELATED};
    use std::collections::HashSet;

    #[test]
    fn test_default_catalog_paths_unique() {
        let catalog = default_catalog();
        let paths: HashSet<&str> = catalog.tools().iter().map(|t| t.path).collect();
        assert_eq!(paths.len(), catalog.len());
    }

    #[test]
    fn test_default_catalog_ids_unique() {
        let catalog = default_catalog();
        let ids: HashSet<&str> = catalog.tools().iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_find_by_path() {
        let catalog = default_catalog();
        let tool = catalog.find("/tools/merge-pdf").unwrap();
        assert_eq!(tool.id, "merge-pdf");
    }

    #[test]
    fn test_every_page_gets_a_full_shelf() {
        // Catalog is large enough that every tool page fills all six slots.
        let catalog = default_catalog();
        for tool in catalog.tools() {
            let result = related_tools(catalog.tools(), tool.path);
            assert_eq!(result.len(), MAX_RELATED, "short shelf for {}", tool.id);
        }
    }

    #[test]
    fn test_merge_pdf_shelf_leads_with_pdf_tools() {
        let catalog = default_catalog();
        let result = related_tools(catalog.tools(), "/tools/merge-pdf");
        // Four other PDF tools in catalog order, then top-popularity rest.
        let ids: Vec<&str> = result.iter().map(|t| t.id).collect();
        assert_eq!(
            ids,
            vec![
                "split-pdf",
                "rotate-pdf",
                "jpg-to-pdf",
                "pdf-info",
                "compress-image",
                "heic-to-jpg"
            ]
        );
    }
}
