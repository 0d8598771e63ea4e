//! Region statistics for grayscale matrices
//!
//! Mean and population standard deviation over rectangular regions,
//! computed in two passes: mean first, then root-mean-square deviation
//! from that mean. These drive the tree builder's stopping rule, so the
//! arithmetic stays in f64 and the results are compared exactly.

use crate::error::{Error, Result};
use crate::matrix::GrayMatrix;
use crate::rect::Rect;

impl GrayMatrix {
    /// Mean sample value in a region (the whole matrix when `None`).
    ///
    /// # Errors
    ///
    /// Returns an error if the region extends outside the matrix or
    /// contains no samples.
    pub fn mean_in_rect(&self, region: Option<Rect>) -> Result<f64> {
        let rect = self.resolve_region(region)?;
        Ok(self.region_stats(rect).1)
    }

    /// Population standard deviation and mean in a region (the whole
    /// matrix when `None`).
    ///
    /// # Errors
    ///
    /// Returns an error if the region extends outside the matrix or
    /// contains no samples.
    pub fn stddev_in_rect(&self, region: Option<Rect>) -> Result<(f64, f64)> {
        let rect = self.resolve_region(region)?;
        Ok(self.region_stats(rect))
    }

    fn resolve_region(&self, region: Option<Rect>) -> Result<Rect> {
        let rect = region.unwrap_or_else(|| self.full_rect());
        self.check_region(rect)?;
        if rect.is_empty() {
            return Err(Error::EmptyRegion);
        }
        Ok(rect)
    }

    /// Two-pass standard deviation and mean over an in-bounds, non-empty
    /// region.
    pub(crate) fn region_stats(&self, rect: Rect) -> (f64, f64) {
        let count = rect.area() as f64;

        let mut total = 0.0;
        for y in rect.y..rect.y + rect.h {
            for x in rect.x..rect.x + rect.w {
                total += self.sample(x, y) as f64;
            }
        }
        let mean = total / count;

        let mut total_square_error = 0.0;
        for y in rect.y..rect.y + rect.h {
            for x in rect.x..rect.x + rect.w {
                let diff = self.sample(x, y) as f64 - mean;
                total_square_error += diff * diff;
            }
        }
        ((total_square_error / count).sqrt(), mean)
    }
}
