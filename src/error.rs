//! Error handling for Layerpaint
//!
//! "Nothing to do" outcomes of undo/redo/replay are not errors; they are
//! reported as `None` or `true` by the trackers themselves.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Layerpaint operations
pub type Result<T> = std::result::Result<T, PaintError>;

/// Main error type for Layerpaint operations
#[derive(Error, Debug)]
pub enum PaintError {
    // Construction Errors
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("Cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    // Container Errors
    #[error("{container} is full (capacity {capacity})")]
    CapacityExceeded {
        container: &'static str,
        capacity: usize,
    },

    #[error("{container} is empty")]
    Underflow { container: &'static str },

    // Catalogue Errors
    #[error("Unknown layer: {name}")]
    UnknownLayer { name: String },

    // File Errors
    #[error("Failed to read file: {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory creation failed: {path}: {source}")]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PaintError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            PaintError::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
            PaintError::OutOfBounds { .. } => "OUT_OF_BOUNDS",
            PaintError::CapacityExceeded { .. } => "CAPACITY_EXCEEDED",
            PaintError::Underflow { .. } => "UNDERFLOW",
            PaintError::UnknownLayer { .. } => "UNKNOWN_LAYER",
            PaintError::FileRead { .. } => "FILE_READ_ERROR",
            PaintError::FileWrite { .. } => "FILE_WRITE_ERROR",
            PaintError::DirectoryCreate { .. } => "DIRECTORY_CREATE_ERROR",
            PaintError::Serialization(_) => "SERIALIZATION_ERROR",
            PaintError::Io(_) => "IO_ERROR",
        }
    }

    /// Returns a user-friendly recovery suggestion.
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            PaintError::InvalidConfiguration { .. } => {
                Some("Use one of the draw styles SET, ADD or SEQUENCE with non-zero dimensions.")
            }
            PaintError::OutOfBounds { .. } => Some("Check the cell coordinates against the grid size."),
            PaintError::CapacityExceeded { .. } => {
                Some("Erase some layers from this cell or raise the configured capacity.")
            }
            PaintError::Underflow { .. } => Some("There is nothing left to remove from this cell."),
            PaintError::UnknownLayer { .. } => Some("Run 'layerpaint layers' to list known layers."),
            PaintError::FileRead { .. } => Some("Check the file path and try again."),
            _ => None,
        }
    }
}
