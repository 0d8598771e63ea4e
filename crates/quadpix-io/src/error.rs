//! I/O error types
//!
//! Provides a unified error type for raster and container I/O. Each
//! format module maps its failures into `IoError` variants so that
//! callers only need to handle one error type.

use thiserror::Error;

/// Error type for image and container I/O operations.
#[derive(Debug, Error)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file format is not supported by this layer
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The file data is structurally invalid
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// A caller-supplied parameter is out of range
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// An error from the core library (e.g. a malformed preorder body)
    #[error("core error: {0}")]
    Core(#[from] quadpix_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
