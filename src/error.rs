//! Error types for the map compiler and exporter.

use thiserror::Error;

/// Result type alias using BuilderError.
pub type Result<T> = std::result::Result<T, BuilderError>;

/// Main error type for map compilation and export operations.
#[derive(Error, Debug)]
pub enum BuilderError {
    /// Failed to parse or emit JSON data.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error during archive or file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Unknown map name passed to the compiler.
    #[error("Unknown map: {0}")]
    UnknownMap(String),

    /// A static catalog lookup failed. Catalog keys are fixed at build
    /// time, so this is a programming error rather than a runtime state.
    #[error("Catalog lookup failed: {0}")]
    CatalogLookup(String),

    /// A room referenced a floor template that does not exist.
    #[error("Unknown room template: {0:#04x}")]
    UnknownRoomTemplate(u8),

    /// Failed to produce the export archive.
    #[error("Export error: {0}")]
    Export(String),
}
