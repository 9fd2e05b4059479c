//! Base64, hex and URL codecs
//!
//! All decoders are strict: malformed input is an error, never a best-effort
//! result, so the pages can show a meaningful message instead of mojibake.

use crate::error::TextToolError;
use base64::engine::general_purpose::{STANDARD, URL_SAFE};
use base64::Engine as _;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Which Base64 alphabet the page has selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Base64Alphabet {
    #[default]
    Standard,
    UrlSafe,
}

pub fn base64_encode(text: &str, alphabet: Base64Alphabet) -> String {
    match alphabet {
        Base64Alphabet::Standard => STANDARD.encode(text.as_bytes()),
        Base64Alphabet::UrlSafe => URL_SAFE.encode(text.as_bytes()),
    }
}

pub fn base64_decode(encoded: &str, alphabet: Base64Alphabet) -> Result<String, TextToolError> {
    let engine = match alphabet {
        Base64Alphabet::Standard => &STANDARD,
        Base64Alphabet::UrlSafe => &URL_SAFE,
    };
    let bytes = engine
        .decode(encoded.trim())
        .map_err(|e| TextToolError::Base64(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| TextToolError::Utf8(e.to_string()))
}

pub fn hex_encode(text: &str) -> String {
    hex::encode(text.as_bytes())
}

pub fn hex_decode(encoded: &str) -> Result<String, TextToolError> {
    let cleaned: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = hex::decode(&cleaned).map_err(|e| TextToolError::Hex(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| TextToolError::Utf8(e.to_string()))
}

/// Everything outside the RFC 3986 unreserved set gets percent-encoded,
/// matching encodeURIComponent semantics closely enough for the URL page.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

pub fn url_encode(text: &str) -> String {
    utf8_percent_encode(text, COMPONENT).to_string()
}

pub fn url_decode(encoded: &str) -> Result<String, TextToolError> {
    percent_decode_str(encoded)
        .decode_utf8()
        .map(|s| s.into_owned())
        .map_err(|e| TextToolError::PercentEncoding(e.to_string()))
}
