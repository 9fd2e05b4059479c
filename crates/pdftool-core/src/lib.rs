//! Client-side PDF tool cores
//!
//! Backs the PDF pages of the toolbox: merge, split, rotate, image→PDF and
//! the inspector. Everything works on in-memory byte buffers via lopdf so
//! the same code runs in wasm and in native tests.

pub mod error;
pub mod images;
pub mod info;
pub mod merge;
pub mod ranges;
pub mod rotate;
pub mod split;

pub use error::PdfToolError;
pub use images::{images_to_pdf, ImageInput};
pub use info::{document_info, page_count, DocumentInfo, PageDimensions};
pub use merge::merge_documents;
pub use ranges::parse_page_ranges;
pub use rotate::rotate_pages;
pub use split::extract_pages;
