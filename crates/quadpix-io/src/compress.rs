//! Compression and decompression pipelines
//!
//! File-level orchestration over the core engine: BMP in, `.qdt` out,
//! and back again. Loss-level range checking lives here, at the
//! boundary, so the core only ever sees values already known valid.

use crate::bmp::{read_bmp, write_bmp};
use crate::error::{IoError, IoResult};
use crate::format::{FileFormat, require_extension};
use crate::gray::rgb_rows_to_gray;
use crate::qdt::{read_qdt, write_qdt};
use quadpix_core::{GrayMatrix, QuadTree};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// Build a quadtree from a grayscale matrix, validating the loss level.
///
/// # Errors
///
/// Returns [`IoError::InvalidParameter`] unless `loss_level` is in
/// 0..=255.
pub fn compress(pixels: &GrayMatrix, loss_level: i32, mirror: bool) -> IoResult<QuadTree> {
    if !(0..=255).contains(&loss_level) {
        return Err(IoError::InvalidParameter(format!(
            "loss level must be between 0 and 255, inclusive: {}",
            loss_level
        )));
    }
    Ok(QuadTree::build(pixels, loss_level as f64, mirror))
}

/// Compress a BMP file into a `.qdt` container next to it.
///
/// The input must carry the `.bmp` extension; the output path is the
/// input path with `.qdt` appended. Returns the output path.
pub fn compress_file(bmp_path: &Path, loss_level: i32, mirror: bool) -> IoResult<PathBuf> {
    require_extension(bmp_path, FileFormat::Bmp)?;

    let reader = BufReader::new(File::open(bmp_path)?);
    let rows = read_bmp(reader)?;
    let gray = rgb_rows_to_gray(&rows)?;
    let tree = compress(&gray, loss_level, mirror)?;

    let out_path = appended_extension(bmp_path, FileFormat::Qdt);
    let writer = BufWriter::new(File::create(&out_path)?);
    write_qdt(&tree, writer)?;
    Ok(out_path)
}

/// Decompress a `.qdt` container into a BMP file next to it.
///
/// The input must carry the `.qdt` extension; the output path is the
/// input path with `.bmp` appended. Returns the output path.
pub fn decompress_file(qdt_path: &Path) -> IoResult<PathBuf> {
    require_extension(qdt_path, FileFormat::Qdt)?;

    let reader = BufReader::new(File::open(qdt_path)?);
    let tree = read_qdt(reader)?;
    let gray = tree.to_pixels();

    let out_path = appended_extension(qdt_path, FileFormat::Bmp);
    let writer = BufWriter::new(File::create(&out_path)?);
    write_bmp(&gray, writer)?;
    Ok(out_path)
}

fn appended_extension(path: &Path, format: FileFormat) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(format.extension());
    PathBuf::from(name)
}
