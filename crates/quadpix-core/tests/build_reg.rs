//! Tree construction regression test
//!
//! Covers the quadrant split convention, the inclusive stopping rule,
//! lossless round-trips at loss level zero, size behavior across loss
//! levels, and degenerate inputs.
//!
//! Run with:
//! ```
//! cargo test -p quadpix-core --test build_reg
//! ```

use quadpix_core::{GrayMatrix, Node, QuadTree, Rect};
use quadpix_test::{RegParams, gradient_matrix};
use rand::{RngExt, SeedableRng, rngs::StdRng};

#[test]
fn split_convention() {
    let mut rp = RegParams::new("split");

    let m = GrayMatrix::from_rows(&[vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]).unwrap();
    let [bl, br, tl, tr] = m.full_rect().split_quadrants();

    // odd dimensions put the smaller half at the lower indices
    let expected: [(Rect, Vec<Vec<u8>>); 4] = [
        (bl, vec![vec![1]]),
        (br, vec![vec![2, 3]]),
        (tl, vec![vec![4], vec![7]]),
        (tr, vec![vec![5, 6], vec![8, 9]]),
    ];
    for (rect, rows) in expected {
        let sub = m.crop(rect).unwrap();
        let want = GrayMatrix::from_rows(&rows).unwrap();
        rp.compare_matrix(&sub, &want);
    }

    assert!(rp.cleanup());
}

#[test]
fn stopping_rule_boundary() {
    let mut rp = RegParams::new("stopping_rule");

    // checkerboard halves 0/200: standard deviation is exactly 100
    let m = GrayMatrix::from_rows(&[vec![0, 200], vec![200, 0]]).unwrap();
    let (sd, _) = m.stddev_in_rect(None).unwrap();
    rp.compare_values(100.0, sd, 0.0);

    // at the threshold the region must flatten, just below it must split
    let at = QuadTree::build(&m, 100.0, false);
    rp.compare_values(1.0, at.size() as f64, 0.0);
    let below = QuadTree::build(&m, 99.999, false);
    rp.compare_values(5.0, below.size() as f64, 0.0);

    assert!(rp.cleanup());
}

#[test]
fn roundtrip_lossless_at_zero() {
    let mut rp = RegParams::new("roundtrip");

    let gradient = gradient_matrix(32, 24);
    let tree = QuadTree::build(&gradient, 0.0, false);
    rp.compare_matrix(&tree.to_pixels(), &gradient);

    // odd dimensions exercise the uneven split on every level
    let mut rng = StdRng::seed_from_u64(42);
    for (w, h) in [(17, 13), (1, 9), (9, 1), (31, 32)] {
        let mut m = GrayMatrix::new(w, h);
        for y in 0..h {
            for x in 0..w {
                m.set(x, y, rng.random_range(0..=255)).unwrap();
            }
        }
        let tree = QuadTree::build(&m, 0.0, false);
        rp.compare_matrix(&tree.to_pixels(), &m);
    }

    assert!(rp.cleanup());
}

#[test]
fn size_across_loss_levels() {
    let mut rp = RegParams::new("size");

    let gradient = gradient_matrix(16, 16);
    let mut previous = usize::MAX;
    for loss in [0.0, 2.0, 8.0, 32.0, 128.0, 255.0] {
        let size = QuadTree::build(&gradient, loss, false).size();
        // a looser threshold can only prune the tree
        assert!(size <= previous, "size grew from {previous} to {size}");
        assert!(size >= 1);
        previous = size;
    }

    // 255 is at least the standard deviation of any 8-bit region
    let flat = QuadTree::build(&gradient, 255.0, false);
    rp.compare_values(1.0, flat.size() as f64, 0.0);

    assert!(rp.cleanup());
}

#[test]
fn degenerate_inputs() {
    let mut rp = RegParams::new("degenerate");

    let no_rows = QuadTree::build(&GrayMatrix::from_rows(&[]).unwrap(), 0.0, false);
    assert_eq!(no_rows.root(), &Node::Empty);
    rp.compare_values(1.0, no_rows.size() as f64, 0.0);

    let no_cols = GrayMatrix::from_rows(&[vec![], vec![], vec![]]).unwrap();
    let tree = QuadTree::build(&no_cols, 0.0, false);
    assert_eq!(tree.root(), &Node::Empty);
    rp.compare_values(1.0, tree.size() as f64, 0.0);

    let single = QuadTree::build(&GrayMatrix::from_rows(&[vec![200]]).unwrap(), 0.0, false);
    assert_eq!(single.root(), &Node::Leaf(200));
    rp.compare_values(1.0, single.size() as f64, 0.0);

    assert!(rp.cleanup());
}
