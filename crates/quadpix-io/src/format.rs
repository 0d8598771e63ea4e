//! File format detection and extension handling
//!
//! The pipelines only touch two file kinds: BMP rasters going in and
//! compressed `.qdt` containers coming out. Detection works on magic
//! numbers; extension checks guard the pipeline entry points.

use crate::error::{IoError, IoResult};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Filename extension for BMP rasters.
pub const BMP_EXTENSION: &str = ".bmp";

/// Filename extension for compressed quadtree containers.
pub const QDT_EXTENSION: &str = ".qdt";

/// Magic numbers for format detection
mod magic {
    /// BMP: "BM"
    pub const BMP: &[u8] = b"BM";

    /// QDT: "QT"
    pub const QDT: &[u8] = b"QT";
}

/// File formats handled by this layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// Windows bitmap raster
    Bmp,
    /// Compressed quadtree container
    Qdt,
}

impl FileFormat {
    /// The filename extension for this format, including the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            FileFormat::Bmp => BMP_EXTENSION,
            FileFormat::Qdt => QDT_EXTENSION,
        }
    }
}

/// Detect the file format from a path's leading bytes
pub fn detect_format<P: AsRef<Path>>(path: P) -> IoResult<FileFormat> {
    let mut file = File::open(path).map_err(IoError::Io)?;
    let mut header = [0u8; 2];
    let bytes_read = file.read(&mut header).map_err(IoError::Io)?;
    detect_format_from_bytes(&header[..bytes_read])
}

/// Detect the file format from bytes
pub fn detect_format_from_bytes(data: &[u8]) -> IoResult<FileFormat> {
    if data.len() < 2 {
        return Err(IoError::InvalidData(
            "not enough data to detect format".to_string(),
        ));
    }
    if data.starts_with(magic::BMP) {
        return Ok(FileFormat::Bmp);
    }
    if data.starts_with(magic::QDT) {
        return Ok(FileFormat::Qdt);
    }
    Err(IoError::UnsupportedFormat(
        "unrecognized magic number".to_string(),
    ))
}

/// Require that a path carries the given format's extension.
///
/// The check is case-insensitive on the extension only.
pub fn require_extension(path: &Path, format: FileFormat) -> IoResult<()> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    if name.to_lowercase().ends_with(format.extension()) {
        Ok(())
    } else {
        Err(IoError::InvalidParameter(format!(
            "'{}' must end with {}",
            path.display(),
            format.extension()
        )))
    }
}
