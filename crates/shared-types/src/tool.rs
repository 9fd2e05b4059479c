//! Tool catalog data model
//!
//! A `Tool` is one entry in the static catalog of single-purpose utility
//! pages (merge PDF, Base64 encoder, color converter, ...). The catalog is
//! loaded once at startup and never mutated; `path` is the routing key and
//! must be unique across the catalog.

use serde::{Deserialize, Serialize};

/// Grouping label for a tool page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolCategory {
    Pdf,
    Image,
    Text,
    Inspect,
}

impl ToolCategory {
    /// Display label used by page headings and the category filter
    pub fn label(&self) -> &'static str {
        match self {
            ToolCategory::Pdf => "PDF",
            ToolCategory::Image => "Image",
            ToolCategory::Text => "Text",
            ToolCategory::Inspect => "Inspect",
        }
    }
}

/// One catalog entry describing a single-purpose utility page
///
/// Fields are `&'static str` because the catalog is compiled-in data;
/// entries serialize to JS but are never deserialized.
#[derive(Debug, Clone, Serialize)]
pub struct Tool {
    /// Stable unique identifier
    pub id: &'static str,
    /// Routable path, e.g. "/tools/merge-pdf". Unique; used to identify
    /// the currently viewed tool and to exclude it from recommendations.
    pub path: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Icon slug resolved by the presentation layer
    pub icon: &'static str,
    pub category: ToolCategory,
    /// Relevance signal for fallback ordering; `None` sorts as 0
    pub popularity: Option<u32>,
}

impl Tool {
    /// Popularity with the documented default of 0 when absent
    pub fn popularity_rank(&self) -> u32 {
        self.popularity.unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_popularity_ranks_as_zero() {
        let tool = Tool {
            id: "t",
            path: "/tools/t",
            name: "T",
            description: "",
            icon: "t",
            category: ToolCategory::Text,
            popularity: None,
        };
        assert_eq!(tool.popularity_rank(), 0);
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(ToolCategory::Pdf.label(), "PDF");
        assert_eq!(ToolCategory::Inspect.label(), "Inspect");
    }
}
