//! Quadtree construction and the tree container
//!
//! [`QuadTree`] owns a root node plus the dimensions and loss level it
//! was created with. A tree comes into existence in exactly one of two
//! ways: built from a pixel matrix, or restored from a preorder token
//! sequence. There is no partially-initialized state in between.

pub mod loss;
pub mod mirror;
pub mod node;
pub mod serial;

pub use loss::maximum_loss;
pub use node::{EMPTY_FILL, Node, Quadrants, QuadrantsBuilder};
pub use serial::{DELIMITER, EMPTY_TOKEN, INTERNAL_TOKEN};

use crate::error::{Error, Result};
use crate::matrix::GrayMatrix;
use crate::rect::Rect;

/// A quadtree compression of a grayscale pixel matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadTree {
    loss_level: f64,
    width: u32,
    height: u32,
    root: Node,
}

impl QuadTree {
    /// Build a tree compressing `pixels` under `loss_level`.
    ///
    /// Regions recurse into quadrants until their population standard
    /// deviation is less than or equal to `loss_level` (the threshold is
    /// inclusive: a region sitting exactly on it becomes a leaf). A
    /// flattened region's leaf value is its mean rounded to the nearest
    /// integer, ties away from zero.
    ///
    /// With `mirror` set, the vertical mirror transform is applied to
    /// the finished root exactly once.
    ///
    /// Degenerate inputs build degenerate trees: a matrix with no pixels
    /// yields a single empty node, a 1x1 matrix a single leaf.
    pub fn build(pixels: &GrayMatrix, loss_level: f64, mirror: bool) -> QuadTree {
        let mut root = build_node(pixels, pixels.full_rect(), loss_level);
        if mirror {
            root.mirror();
        }
        QuadTree {
            loss_level,
            width: pixels.width(),
            height: pixels.height(),
            root,
        }
    }

    /// Restore a tree from preorder tokens plus its dimensions.
    ///
    /// The first token must be the internal marker: the public decode
    /// path only accepts trees whose root is an internal node.
    ///
    /// # Errors
    ///
    /// Fails on a non-internal root, malformed tokens, a truncated
    /// stream, or trailing tokens.
    pub fn restore(tokens: &[&str], width: u32, height: u32) -> Result<QuadTree> {
        match tokens.first() {
            None => return Err(Error::EmptyPreorder),
            Some(&token) if token != INTERNAL_TOKEN => {
                return Err(Error::NonInternalRoot {
                    token: token.to_string(),
                });
            }
            Some(_) => {}
        }
        let root = Node::from_preorder(tokens)?;
        Ok(QuadTree {
            loss_level: 0.0,
            width,
            height,
            root,
        })
    }

    /// Restore from a joined preorder string, splitting on the token
    /// delimiter.
    pub fn restore_from_str(preorder: &str, width: u32, height: u32) -> Result<QuadTree> {
        let tokens: Vec<&str> = preorder.split(DELIMITER).collect();
        Self::restore(&tokens, width, height)
    }

    /// Number of nodes in the tree, counting empty, leaf, and internal
    /// nodes alike.
    pub fn size(&self) -> usize {
        self.root.size()
    }

    /// Reconstruct the full pixel matrix this tree represents.
    pub fn to_pixels(&self) -> GrayMatrix {
        self.root.expand(self.width, self.height)
    }

    /// The preorder token string for the whole tree.
    pub fn preorder(&self) -> String {
        self.root.preorder()
    }

    /// Width of the represented image.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the represented image.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The loss level the tree was built with.
    pub fn loss_level(&self) -> f64 {
        self.loss_level
    }

    /// The root node.
    pub fn root(&self) -> &Node {
        &self.root
    }
}

/// Recursive builder over matrix regions.
fn build_node(pixels: &GrayMatrix, rect: Rect, loss_level: f64) -> Node {
    if rect.is_empty() {
        return Node::Empty;
    }
    if rect.is_unit() {
        return Node::Leaf(pixels.sample(rect.x, rect.y));
    }

    let (stddev, mean) = pixels.region_stats(rect);
    if stddev <= loss_level {
        // mean of u8 samples is within [0, 255], so the cast is exact
        return Node::Leaf(mean.round() as u8);
    }

    let children = rect
        .split_quadrants()
        .map(|quadrant| build_node(pixels, quadrant, loss_level));
    Node::Internal(Box::new(Quadrants::new(children)))
}
