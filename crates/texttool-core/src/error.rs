use thiserror::Error;

#[derive(Error, Debug)]
pub enum TextToolError {
    #[error("Invalid Base64: {0}")]
    Base64(String),

    #[error("Invalid hex: {0}")]
    Hex(String),

    #[error("Invalid percent-encoding: {0}")]
    PercentEncoding(String),

    #[error("Invalid JSON: {0}")]
    Json(String),

    #[error("Decoded bytes are not UTF-8: {0}")]
    Utf8(String),
}
