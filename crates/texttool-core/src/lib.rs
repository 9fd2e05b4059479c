//! Text tool cores
//!
//! Pure string-in/string-out transforms behind the text pages: Base64, hex
//! and URL codecs, JSON formatting, case conversion and word statistics.

pub mod casing;
pub mod codec;
pub mod error;
pub mod json;
pub mod stats;

pub use casing::{convert_case, CaseStyle};
pub use codec::{
    base64_decode, base64_encode, hex_decode, hex_encode, url_decode, url_encode, Base64Alphabet,
};
pub use error::TextToolError;
pub use json::{json_minify, json_pretty};
pub use stats::{text_stats, TextStats};
