//! QDT compressed container format
//!
//! A `.qdt` file carries the canonical compressed triple (preorder
//! token string, width, height) behind a small BMP-style binary
//! header:
//!
//! ```text
//! bytes  0..2    magic "QT"
//! bytes  2..6    total file size      (u32, little-endian)
//! bytes  6..10   reserved, zero
//! bytes 10..14   body offset          (u32, little-endian)
//! bytes 14..18   info block size      (u32, little-endian)
//! bytes 18..22   image width          (u32, little-endian)
//! bytes 22..26   image height         (u32, little-endian)
//! bytes 26..54   reserved, zero
//! offset..       preorder body, UTF-8, comma-separated tokens
//! ```
//!
//! Readers only rely on the offset, width, and height fields, so legacy
//! files that carried a copied bitmap header in front of the body parse
//! the same way. The container must round-trip the triple exactly.

use crate::error::{IoError, IoResult};
use quadpix_core::QuadTree;
use std::io::{Read, Write};

/// Total header size written by [`write_qdt`]
const QDT_HEADER_SIZE: usize = 54;

/// Smallest header any reader accepts: everything up to and including
/// the height field
const QDT_MIN_HEADER_SIZE: usize = 26;

/// End of the fixed file-header fields; the info block runs from here
/// to the body offset
const BODY_OFFSET_FIELD_END: usize = 14;

/// Write a quadtree as a QDT container.
pub fn write_qdt<W: Write>(tree: &QuadTree, mut writer: W) -> IoResult<()> {
    let body = tree.preorder();
    let file_size = (QDT_HEADER_SIZE + body.len()) as u32;

    writer.write_all(b"QT")?;
    writer.write_all(&file_size.to_le_bytes())?;
    writer.write_all(&0u32.to_le_bytes())?;
    writer.write_all(&(QDT_HEADER_SIZE as u32).to_le_bytes())?;
    writer.write_all(&((QDT_HEADER_SIZE - BODY_OFFSET_FIELD_END) as u32).to_le_bytes())?;
    writer.write_all(&tree.width().to_le_bytes())?;
    writer.write_all(&tree.height().to_le_bytes())?;
    writer.write_all(&[0u8; QDT_HEADER_SIZE - QDT_MIN_HEADER_SIZE])?;
    writer.write_all(body.as_bytes())?;
    Ok(())
}

/// Read a quadtree from a QDT container.
///
/// # Errors
///
/// Fails when the header is too small, the body offset is out of
/// range, the body is not UTF-8, or the preorder tokens do not restore
/// to a tree.
pub fn read_qdt<R: Read>(mut reader: R) -> IoResult<QuadTree> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data).map_err(IoError::Io)?;

    if data.len() < QDT_MIN_HEADER_SIZE {
        return Err(IoError::InvalidData(
            "QDT file too small or invalid header".to_string(),
        ));
    }

    let offset =
        u32::from_le_bytes([data[10], data[11], data[12], data[13]]) as usize;
    let width = u32::from_le_bytes([data[18], data[19], data[20], data[21]]);
    let height = u32::from_le_bytes([data[22], data[23], data[24], data[25]]);

    if offset < QDT_MIN_HEADER_SIZE || offset > data.len() {
        return Err(IoError::InvalidData(format!(
            "invalid QDT body offset: {}",
            offset
        )));
    }

    let body = std::str::from_utf8(&data[offset..])
        .map_err(|e| IoError::InvalidData(format!("QDT body is not UTF-8: {e}")))?;

    Ok(QuadTree::restore_from_str(body, width, height)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quadpix_core::GrayMatrix;
    use std::io::Cursor;

    fn sample_tree() -> QuadTree {
        let m = GrayMatrix::from_rows(&[vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]).unwrap();
        QuadTree::build(&m, 0.0, false)
    }

    #[test]
    fn test_qdt_roundtrip() {
        let tree = sample_tree();
        let mut buf = Vec::new();
        write_qdt(&tree, &mut buf).unwrap();
        assert!(buf.starts_with(b"QT"));

        let restored = read_qdt(Cursor::new(&buf)).unwrap();
        assert_eq!(restored.preorder(), tree.preorder());
        assert_eq!(restored.width(), tree.width());
        assert_eq!(restored.height(), tree.height());
        assert_eq!(restored.to_pixels(), tree.to_pixels());
    }

    #[test]
    fn test_qdt_too_small() {
        let data = b"QT_tiny";
        assert!(matches!(
            read_qdt(Cursor::new(&data[..])),
            Err(IoError::InvalidData(_))
        ));
    }

    #[test]
    fn test_qdt_bad_offset() {
        let tree = sample_tree();
        let mut buf = Vec::new();
        write_qdt(&tree, &mut buf).unwrap();
        // point the body offset past the end of the file
        let bad = (buf.len() as u32 + 1).to_le_bytes();
        buf[10..14].copy_from_slice(&bad);
        assert!(matches!(
            read_qdt(Cursor::new(&buf)),
            Err(IoError::InvalidData(_))
        ));
    }

    #[test]
    fn test_qdt_malformed_body() {
        let tree = sample_tree();
        let mut buf = Vec::new();
        write_qdt(&tree, &mut buf).unwrap();
        buf.truncate(buf.len() - 2);
        assert!(matches!(
            read_qdt(Cursor::new(&buf)),
            Err(IoError::Core(_))
        ));
    }

    #[test]
    fn test_qdt_accepts_larger_legacy_offset() {
        // a body placed further out, as legacy files with copied raster
        // headers do
        let tree = sample_tree();
        let body = tree.preorder();
        let offset = 80u32;
        let mut buf = vec![0u8; offset as usize];
        buf[0] = b'Q';
        buf[1] = b'T';
        buf[10..14].copy_from_slice(&offset.to_le_bytes());
        buf[18..22].copy_from_slice(&tree.width().to_le_bytes());
        buf[22..26].copy_from_slice(&tree.height().to_le_bytes());
        buf.extend_from_slice(body.as_bytes());

        let restored = read_qdt(Cursor::new(&buf)).unwrap();
        assert_eq!(restored.preorder(), body);
    }
}
