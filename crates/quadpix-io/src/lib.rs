//! Quadpix I/O - Raster and container I/O for quadtree compression
//!
//! Everything between the pure compression engine and the filesystem:
//!
//! - BMP raster reading and writing ([`read_bmp`] / [`write_bmp`])
//! - RGB to grayscale conversion ([`rgb_to_grayscale`])
//! - The `.qdt` compressed container ([`read_qdt`] / [`write_qdt`]),
//!   which persists the canonical (preorder, width, height) triple
//! - File pipelines ([`compress_file`] / [`decompress_file`]) with
//!   loss-level and extension validation

pub mod bmp;
pub mod compress;
pub mod error;
pub mod format;
pub mod gray;
pub mod qdt;

pub use bmp::{RgbRows, read_bmp, write_bmp};
pub use compress::{compress, compress_file, decompress_file};
pub use error::{IoError, IoResult};
pub use format::{
    BMP_EXTENSION, FileFormat, QDT_EXTENSION, detect_format, detect_format_from_bytes,
    require_extension,
};
pub use gray::{rgb_rows_to_gray, rgb_to_grayscale};
pub use qdt::{read_qdt, write_qdt};
