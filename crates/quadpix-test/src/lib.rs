//! quadpix-test - Regression test framework for quadpix
//!
//! Supports three modes, selected through the `REGTEST_MODE` environment
//! variable:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files (default)
//! - **Display**: Run tests without comparison
//!
//! # Usage
//!
//! ```ignore
//! use quadpix_test::{gradient_matrix, RegParams};
//!
//! let mut rp = RegParams::new("build");
//! rp.compare_values(1.0, tree.size() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! Test inputs are synthetic matrices produced by the generators below,
//! so no binary fixtures need to be checked in.

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use quadpix_core::GrayMatrix;

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // quadpix-test is at crates/quadpix-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

/// A smooth synthetic grayscale matrix with spatial variation.
///
/// Overlapping sinusoids give every quadrant a different mix of flat and
/// busy areas, which is what the tree builder's stopping rule feeds on.
pub fn gradient_matrix(width: u32, height: u32) -> GrayMatrix {
    let mut m = GrayMatrix::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let fx = x as f64 / width.max(1) as f64;
            let fy = y as f64 / height.max(1) as f64;
            let val = 128.0
                + 60.0 * (fx * std::f64::consts::TAU).sin()
                + 40.0 * (fy * 2.0 * std::f64::consts::TAU).cos()
                + 20.0 * ((fx + fy) * 9.42).sin();
            let _ = m.set(x, y, val.clamp(0.0, 255.0) as u8);
        }
    }
    m
}

/// A two-tone checkerboard matrix with square tiles.
pub fn checkerboard_matrix(width: u32, height: u32, tile: u32, low: u8, high: u8) -> GrayMatrix {
    let tile = tile.max(1);
    let mut m = GrayMatrix::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let value = if ((x / tile) + (y / tile)) % 2 == 0 {
                low
            } else {
                high
            };
            let _ = m.set(x, y, value);
        }
    }
    m
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_dimensions() {
        let m = gradient_matrix(16, 9);
        assert_eq!(m.width(), 16);
        assert_eq!(m.height(), 9);
    }

    #[test]
    fn test_checkerboard_tiles() {
        let m = checkerboard_matrix(4, 4, 2, 10, 200);
        assert_eq!(m.get(0, 0), Some(10));
        assert_eq!(m.get(1, 1), Some(10));
        assert_eq!(m.get(2, 0), Some(200));
        assert_eq!(m.get(0, 2), Some(200));
        assert_eq!(m.get(2, 2), Some(10));
    }
}
