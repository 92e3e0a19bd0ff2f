//! Error types for md2wx.

use thiserror::Error;

/// Result type for md2wx operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during Markdown to WeChat HTML conversion.
#[derive(Error, Debug)]
pub enum Error {
    /// Error occurred during file I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error occurred while writing rendered markup.
    #[error("Formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),

    /// Local image referenced by the document could not be read.
    #[error("Media not found: {0}")]
    MediaNotFound(String),
}
