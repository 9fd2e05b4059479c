//! Related-tools recommendation
//!
//! Given the catalog of utility pages and the path of the page currently
//! being viewed, picks up to six other tools to show as "related"
//! suggestions. Same-category tools come first in catalog order; remaining
//! slots are filled from other categories by descending popularity.

pub mod catalog;
pub mod recommend;

pub use catalog::{default_catalog, ToolCatalog};
pub use recommend::{related_tools, MAX_RELATED};
