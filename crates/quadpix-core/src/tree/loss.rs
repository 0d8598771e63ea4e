//! Compression loss audit
//!
//! Compares an uncompressed tree against a compressed one and reports
//! the worst per-region standard deviation the compression introduced.
//! This is a worst-case metric: regions are never summed or averaged
//! together.

use crate::error::{Error, Result};
use crate::tree::node::Node;

/// Maximum loss across all compressed regions.
///
/// Wherever `compressed` flattened a region into a leaf or empty node,
/// the population standard deviation of all leaf values in the
/// corresponding `original` subtree is that region's loss; the result
/// is the largest such value anywhere in the tree. Comparing a tree
/// against itself yields 0.
///
/// # Errors
///
/// Returns [`Error::LossPrecondition`] if `original` has fewer nodes
/// than `compressed`, i.e. the supposedly uncompressed tree is the
/// coarser one.
pub fn maximum_loss(original: &Node, compressed: &Node) -> Result<f64> {
    let original_size = original.size();
    let compressed_size = compressed.size();
    if original_size < compressed_size {
        return Err(Error::LossPrecondition {
            original: original_size,
            compressed: compressed_size,
        });
    }
    Ok(region_loss(original, compressed))
}

fn region_loss(original: &Node, compressed: &Node) -> f64 {
    match (original, compressed) {
        // compressed stops here: this whole original subtree is one region
        (_, Node::Leaf(_) | Node::Empty) => {
            let mut values = Vec::new();
            collect_leaf_values(original, &mut values);
            stddev(&values)
        }
        // both subdivide: pair up the quadrants
        (Node::Internal(oq), Node::Internal(cq)) => oq
            .iter()
            .zip(cq.iter())
            .map(|(o, c)| region_loss(o, c))
            .fold(0.0, f64::max),
        // original is coarser here: measure it against every compressed
        // quadrant as a whole
        (_, Node::Internal(cq)) => cq
            .iter()
            .map(|c| region_loss(original, c))
            .fold(0.0, f64::max),
    }
}

fn collect_leaf_values(node: &Node, out: &mut Vec<u8>) {
    match node {
        Node::Empty => {}
        Node::Leaf(value) => out.push(*value),
        Node::Internal(q) => {
            for child in q.iter() {
                collect_leaf_values(child, out);
            }
        }
    }
}

/// Population standard deviation; an empty set of values measures 0.
fn stddev(values: &[u8]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let count = values.len() as f64;
    let mean = values.iter().map(|&v| v as f64).sum::<f64>() / count;
    let total_square_error = values
        .iter()
        .map(|&v| {
            let diff = v as f64 - mean;
            diff * diff
        })
        .sum::<f64>();
    (total_square_error / count).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::GrayMatrix;
    use crate::tree::QuadTree;

    fn three_by_three() -> GrayMatrix {
        GrayMatrix::from_rows(&[vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]).unwrap()
    }

    #[test]
    fn test_loss_against_self_is_zero() {
        let tree = QuadTree::build(&three_by_three(), 0.0, false);
        assert_eq!(maximum_loss(tree.root(), tree.root()).unwrap(), 0.0);
    }

    #[test]
    fn test_loss_reference_value() {
        let pixels = three_by_three();
        let orig = QuadTree::build(&pixels, 0.0, false);
        let comp = QuadTree::build(&pixels, 2.0, false);
        let loss = maximum_loss(orig.root(), comp.root()).unwrap();
        // worst region is the 2x2 quadrant {5, 6, 8, 9}
        assert!((loss - 1.5811388300841898).abs() < 1e-12);
    }

    #[test]
    fn test_loss_precondition() {
        let pixels = three_by_three();
        let orig = QuadTree::build(&pixels, 0.0, false);
        let comp = QuadTree::build(&pixels, 2.0, false);
        let err = maximum_loss(comp.root(), orig.root()).unwrap_err();
        assert!(matches!(err, Error::LossPrecondition { .. }));
    }

    #[test]
    fn test_loss_fully_flattened() {
        let pixels = three_by_three();
        let orig = QuadTree::build(&pixels, 0.0, false);
        let comp = QuadTree::build(&pixels, 255.0, false);
        assert_eq!(comp.size(), 1);
        let loss = maximum_loss(orig.root(), comp.root()).unwrap();
        // the single region covers all of 1..=9
        assert!((loss - (60.0f64 / 9.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_stddev_empty_is_zero() {
        assert_eq!(stddev(&[]), 0.0);
        assert_eq!(stddev(&[42]), 0.0);
    }
}
