//! Error types for the folio library.

use std::io;
use thiserror::Error;

/// Result type alias for folio operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading or serializing documents.
///
/// Rendering and text extraction themselves are total and never produce
/// these; they only arise at the I/O and serialization edges.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The document tree is not valid JSON or lacks a node `type`.
    #[error("Invalid document tree: {0}")]
    Json(#[from] serde_json::Error),

    /// Error during output serialization (HTML, JSON, RSS).
    #[error("Rendering error: {0}")]
    Render(String),
}
