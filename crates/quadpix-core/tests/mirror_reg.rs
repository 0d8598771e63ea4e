//! Mirror transform regression test
//!
//! The mirrored reconstruction must repeat the bottom half of the image,
//! upside down, over the top half.
//!
//! Run with:
//! ```
//! cargo test -p quadpix-core --test mirror_reg
//! ```

use quadpix_core::{GrayMatrix, QuadTree};
use quadpix_test::{RegParams, gradient_matrix};

#[test]
fn mirror_two_by_two() {
    let mut rp = RegParams::new("mirror");

    // rows bottom to top: [1, 2] then [3, 4]
    let m = GrayMatrix::from_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
    let tree = QuadTree::build(&m, 0.0, true);
    let rows = tree.to_pixels().to_rows();
    rp.compare_strings(&rows[0], &[1, 2]);
    rp.compare_strings(&rows[1], &[1, 2]);

    assert!(rp.cleanup());
}

#[test]
fn mirror_preserves_bottom_half() {
    let mut rp = RegParams::new("mirror_bottom");

    // power-of-two dimensions split evenly at every level, so the
    // mirrored top half is an exact pixel flip of the bottom half
    let m = gradient_matrix(8, 8);
    let plain = QuadTree::build(&m, 0.0, false).to_pixels();
    let mirrored = QuadTree::build(&m, 0.0, true).to_pixels();

    let plain_rows = plain.to_rows();
    let rows = mirrored.to_rows();
    for r in 0..4 {
        // bottom half untouched
        rp.compare_strings(&rows[r], &plain_rows[r]);
        // top half is the bottom half reflected
        rp.compare_strings(&rows[7 - r], &rows[r]);
    }

    assert!(rp.cleanup());
}

#[test]
fn mirror_on_degenerate_roots() {
    // a uniform image is its own vertical mirror
    let uniform = QuadTree::build(&GrayMatrix::filled(4, 4, 9), 0.0, true);
    assert_eq!(uniform.to_pixels(), GrayMatrix::filled(4, 4, 9));

    // an empty image stays empty
    let empty = QuadTree::build(&GrayMatrix::new(0, 0), 0.0, true);
    assert_eq!(empty.size(), 1);
    assert!(empty.to_pixels().is_empty());
}
