//! Error types for cut list export.

use std::path::PathBuf;
use thiserror::Error;

/// Error codes for export failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Scene file not found (-1)
    FileNotFound = -1,
    /// Empty scene file (-2)
    EmptyFile = -2,
    /// Scene could not be parsed (-3)
    ParseError = -3,
    /// Nothing selected (-11)
    EmptySelection = -11,
    /// Bounding box unusable (E100)
    InvalidDimension = 100,
    /// Selection references a missing object (E101)
    ObjectNotFound = 101,
    /// Output location could not be determined or written (E200)
    OutputFailed = 200,
}

/// Main error type for the exporter.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Empty file: {path}")]
    EmptyFile { path: PathBuf },

    #[error("Parse error at line {line}, column {column}: {message}")]
    ParseError {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("No objects selected")]
    EmptySelection,

    #[error("Invalid dimension for '{object}': {value}")]
    InvalidDimension { object: String, value: f64 },

    #[error("Selected object not found in scene: {name}")]
    ObjectNotFound { name: String },

    #[error("Cannot determine output directory for {path}")]
    NoOutputDirectory { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExportError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ExportError::FileNotFound { .. } => ErrorCode::FileNotFound,
            ExportError::EmptyFile { .. } => ErrorCode::EmptyFile,
            ExportError::ParseError { .. } => ErrorCode::ParseError,
            ExportError::EmptySelection => ErrorCode::EmptySelection,
            ExportError::InvalidDimension { .. } => ErrorCode::InvalidDimension,
            ExportError::ObjectNotFound { .. } => ErrorCode::ObjectNotFound,
            ExportError::NoOutputDirectory { .. } => ErrorCode::OutputFailed,
            ExportError::Io(_) => ErrorCode::OutputFailed,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }
}

/// Result type alias for exporter operations.
pub type Result<T> = std::result::Result<T, ExportError>;
