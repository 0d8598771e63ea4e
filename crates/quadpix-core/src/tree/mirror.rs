//! Vertical mirror transform
//!
//! Replaces the top half of the represented image with a flipped copy of
//! the bottom half. Flipping is a pure recursive duplication: it returns
//! a new owned subtree and never aliases nodes between the two halves.

use crate::tree::node::{Node, Quadrants};

impl Node {
    /// A deep copy of this subtree, flipped in the vertical direction.
    ///
    /// Empty and leaf nodes copy as themselves; an internal node swaps
    /// its bottom and top child pairs and flips each child in turn, so
    /// the whole subtree's pixel content is mirrored, not just the top
    /// level.
    pub fn flipped(&self) -> Node {
        match self {
            Node::Empty => Node::Empty,
            Node::Leaf(value) => Node::Leaf(*value),
            Node::Internal(q) => Node::Internal(Box::new(Quadrants::new([
                q.top_left().flipped(),
                q.top_right().flipped(),
                q.bottom_left().flipped(),
                q.bottom_right().flipped(),
            ]))),
        }
    }

    /// Mirror the bottom half of the image over the top half, in place.
    ///
    /// The top-left and top-right quadrants are replaced with flipped
    /// deep copies of the bottom-left and bottom-right quadrants; the
    /// bottom half is left untouched. Leaf and empty nodes already are
    /// their own vertical mirror, so they are left as is.
    pub fn mirror(&mut self) {
        if let Node::Internal(q) = self {
            let top_left = q.bottom_left().flipped();
            let top_right = q.bottom_right().flipped();
            q.set_top_left(top_left);
            q.set_top_right(top_right);
        }
    }
}
