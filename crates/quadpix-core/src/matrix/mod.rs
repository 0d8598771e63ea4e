//! GrayMatrix - rectangular grayscale pixel container
//!
//! The main pixel container for compression and reconstruction. Samples
//! are 8-bit intensities stored in a flat row-major buffer with **row 0
//! at the bottom** of the image, the same order BMP files use and the
//! order quadrant indexing assumes throughout the crate.

pub mod statistics;

use crate::error::{Error, Result};
use crate::rect::Rect;

/// Rectangular matrix of 8-bit grayscale samples.
///
/// Rows are indexed bottom to top, columns left to right. Zero-sized
/// matrices are legal; they build to a single empty tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayMatrix {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl GrayMatrix {
    /// Create a zero-filled matrix.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, 0)
    }

    /// Create a matrix with every sample set to `value`.
    pub fn filled(width: u32, height: u32, value: u8) -> Self {
        Self {
            width,
            height,
            data: vec![value; width as usize * height as usize],
        }
    }

    /// Create a matrix from nested rows, bottom row first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RaggedRows`] if the rows are not all the same
    /// length.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(width * height);
        for (row_index, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(Error::RaggedRows {
                    row: row_index,
                    expected: width,
                    got: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            width: width as u32,
            height: height as u32,
            data,
        })
    }

    /// Copy the samples back out as nested rows, bottom row first.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.data
            .chunks(self.width.max(1) as usize)
            .map(<[u8]>::to_vec)
            .collect()
    }

    /// Width in columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether the matrix covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The rectangle covering the whole matrix.
    pub fn full_rect(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    /// Get the sample at `(x, y)`, or `None` when out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x < self.width && y < self.height {
            Some(self.data[self.index(x, y)])
        } else {
            None
        }
    }

    /// Set the sample at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] when the coordinates fall
    /// outside the matrix.
    pub fn set(&mut self, x: u32, y: u32, value: u8) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let i = self.index(x, y);
        self.data[i] = value;
        Ok(())
    }

    /// Extract a sub-region as a new matrix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RegionOutOfBounds`] if `rect` is not fully
    /// contained in the matrix.
    pub fn crop(&self, rect: Rect) -> Result<GrayMatrix> {
        self.check_region(rect)?;
        let mut out = GrayMatrix::new(rect.w, rect.h);
        for y in 0..rect.h {
            let src = self.index(rect.x, rect.y + y);
            let dst = (y * rect.w) as usize;
            out.data[dst..dst + rect.w as usize]
                .copy_from_slice(&self.data[src..src + rect.w as usize]);
        }
        Ok(out)
    }

    /// Fill a sub-region with a single value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RegionOutOfBounds`] if `rect` is not fully
    /// contained in the matrix.
    pub fn fill_rect(&mut self, rect: Rect, value: u8) -> Result<()> {
        self.check_region(rect)?;
        for y in rect.y..rect.y + rect.h {
            let start = self.index(rect.x, y);
            self.data[start..start + rect.w as usize].fill(value);
        }
        Ok(())
    }

    /// Raw samples, row-major, bottom row first.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Fill an in-bounds region. Expansion only passes regions derived
    /// from `full_rect()` splits, which stay in bounds by construction.
    pub(crate) fn fill_region(&mut self, rect: Rect, value: u8) {
        debug_assert!(self.check_region(rect).is_ok());
        for y in rect.y..rect.y + rect.h {
            let start = self.index(rect.x, y);
            self.data[start..start + rect.w as usize].fill(value);
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Sample at `(x, y)` without an option wrapper.
    ///
    /// Callers must ensure the coordinates are in bounds; the tree
    /// builder only passes coordinates derived from `full_rect()`.
    pub(crate) fn sample(&self, x: u32, y: u32) -> u8 {
        debug_assert!(x < self.width && y < self.height);
        self.data[self.index(x, y)]
    }

    pub(crate) fn check_region(&self, rect: Rect) -> Result<()> {
        let x_end = rect.x.checked_add(rect.w);
        let y_end = rect.y.checked_add(rect.h);
        match (x_end, y_end) {
            (Some(xe), Some(ye)) if xe <= self.width && ye <= self.height => Ok(()),
            _ => Err(Error::RegionOutOfBounds {
                x: rect.x,
                y: rect.y,
                w: rect.w,
                h: rect.h,
                width: self.width,
                height: self.height,
            }),
        }
    }
}
