use thiserror::Error;

#[derive(Error, Debug)]
pub enum PdfToolError {
    #[error("Failed to parse PDF: {0}")]
    Parse(String),

    #[error("Invalid page selection: {0}")]
    PageSelection(String),

    #[error("Unsupported image: {0}")]
    UnsupportedImage(String),

    #[error("PDF operation failed: {0}")]
    Operation(String),
}
