//! Grayscale conversion
//!
//! Pure per-pixel conversion from RGB triples to 8-bit gray, applied
//! before compression. The core engine only ever sees single-channel
//! matrices.

use crate::error::IoResult;
use quadpix_core::GrayMatrix;

/// Convert an RGB triple to a single grayscale value.
///
/// Uses the ITU-R BT.709 luma weights:
/// `gray = round(0.2126*R + 0.7152*G + 0.0722*B)`
#[inline]
pub fn rgb_to_grayscale(red: u8, green: u8, blue: u8) -> u8 {
    let gray = 0.2126 * red as f64 + 0.7152 * green as f64 + 0.0722 * blue as f64;
    gray.round() as u8
}

/// Convert bottom-up RGB rows to a grayscale matrix.
///
/// # Errors
///
/// Fails if the rows are ragged.
pub fn rgb_rows_to_gray(rows: &[Vec<(u8, u8, u8)>]) -> IoResult<GrayMatrix> {
    let gray_rows: Vec<Vec<u8>> = rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|&(r, g, b)| rgb_to_grayscale(r, g, b))
                .collect()
        })
        .collect();
    Ok(GrayMatrix::from_rows(&gray_rows)?)
}
