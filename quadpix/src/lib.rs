//! Quadpix - Quadtree compression for grayscale images
//!
//! # Overview
//!
//! Quadpix compresses a grayscale image by recursively partitioning it
//! into quadrants until every region's color variance falls within an
//! allowed loss level, then flattening each region into a single value.
//! The resulting tree serializes to a compact preorder string, restores
//! losslessly from it, and expands back into a full pixel matrix.
//!
//! - Tree construction, expansion, serialization, the vertical mirror
//!   transform, and the maximum-loss audit live in the core types
//!   re-exported at the root.
//! - BMP rasters, grayscale conversion, and the `.qdt` container live
//!   in the [`io`] module.
//!
//! # Example
//!
//! ```
//! use quadpix::{GrayMatrix, QuadTree};
//!
//! let pixels = GrayMatrix::from_rows(&[vec![10, 20], vec![30, 40]]).unwrap();
//! let tree = QuadTree::build(&pixels, 0.0, false);
//! assert_eq!(tree.to_pixels(), pixels);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use quadpix_core::*;

// Re-export the I/O layer as a module to avoid name conflicts
pub use quadpix_io as io;
