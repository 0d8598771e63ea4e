//! Error types for quadpix-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Every failure here indicates corrupt or mismatched input; operations
//! abort immediately with no partial results.

use thiserror::Error;

/// Quadpix core error type
#[derive(Debug, Error)]
pub enum Error {
    /// Input rows do not all have the same length
    #[error("ragged pixel rows: row {row} has {got} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        got: usize,
    },

    /// Pixel coordinates outside the matrix
    #[error("index out of bounds: ({x}, {y}) in {width}x{height}")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Requested region extends outside the matrix
    #[error("region out of bounds: ({x}, {y}) {w}x{h} in {width}x{height} matrix")]
    RegionOutOfBounds {
        x: u32,
        y: u32,
        w: u32,
        h: u32,
        width: u32,
        height: u32,
    },

    /// Region with no samples passed to a statistics operation
    #[error("empty region: no samples to measure")]
    EmptyRegion,

    /// Preorder token list with no entries
    #[error("empty preorder token list")]
    EmptyPreorder,

    /// Decode encountered a token that is neither the internal marker,
    /// the empty marker, nor a pixel value in 0..=255
    #[error("malformed preorder token at index {index}: {token:?}")]
    MalformedToken { index: usize, token: String },

    /// The token stream ended before an internal node received 4 children
    #[error("internal node truncated: {got} of 4 children present")]
    ShapeViolation { got: usize },

    /// The public restore entry point requires an internal root
    #[error("preorder root token must be the internal marker, got {token:?}")]
    NonInternalRoot { token: String },

    /// Tokens left over after the root subtree was fully restored
    #[error("{got} trailing tokens after preorder root subtree")]
    TrailingTokens { got: usize },

    /// Loss audit called with an original tree coarser than the compressed one
    #[error("original tree is coarser than compressed: {original} < {compressed} nodes")]
    LossPrecondition { original: usize, compressed: usize },
}

/// Result type alias for quadpix core operations
pub type Result<T> = std::result::Result<T, Error>;
