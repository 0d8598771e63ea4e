//! Quadpix Core - Quadtree compression engine for grayscale images
//!
//! This crate implements lossy compression of 2D grayscale pixel
//! matrices by recursive quadrant partitioning:
//!
//! - [`GrayMatrix`] - The pixel container, with region statistics
//! - [`QuadTree`] / [`Node`] - Tree construction and pixel expansion
//! - Preorder serialization - Compact string encode/decode of a tree
//! - [`maximum_loss`] - Worst-case audit of a compressed tree against an
//!   uncompressed one
//!
//! A region splits into four quadrants (ordered bottom-left,
//! bottom-right, top-left, top-right) whenever its population standard
//! deviation exceeds the loss level; regions at or below the threshold
//! flatten into a single leaf carrying their rounded mean. Restoring
//! from the preorder form is lossless with respect to the tree, and the
//! expanded matrix is lossy only with respect to the original image.
//!
//! # Example
//!
//! ```
//! use quadpix_core::{GrayMatrix, QuadTree};
//!
//! let pixels = GrayMatrix::from_rows(&[vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]).unwrap();
//! let tree = QuadTree::build(&pixels, 0.0, false);
//!
//! // lossless at loss level zero
//! assert_eq!(tree.to_pixels(), pixels);
//!
//! // the preorder string round-trips the tree exactly
//! let restored = QuadTree::restore_from_str(&tree.preorder(), 3, 3).unwrap();
//! assert_eq!(restored.preorder(), tree.preorder());
//! ```

pub mod error;
pub mod matrix;
pub mod rect;
pub mod tree;

pub use error::{Error, Result};
pub use matrix::GrayMatrix;
pub use rect::Rect;
pub use tree::{
    DELIMITER, EMPTY_FILL, EMPTY_TOKEN, INTERNAL_TOKEN, Node, QuadTree, Quadrants,
    QuadrantsBuilder, maximum_loss,
};
