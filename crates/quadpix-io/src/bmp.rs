//! BMP image format support
//!
//! Reads and writes uncompressed 24 bpp Windows Bitmap (BMP) files, the
//! raster format the compression pipelines consume and produce. Rows
//! come out bottom-up, matching the matrix row order used everywhere in
//! this workspace.

use crate::error::{IoError, IoResult};
use quadpix_core::GrayMatrix;
use std::io::{Read, Write};

/// BMP file header size
const BMP_FILE_HEADER_SIZE: usize = 14;

/// BMP info header size (BITMAPINFOHEADER)
const BMP_INFO_HEADER_SIZE: u32 = 40;

/// Bottom-up rows of RGB triples, as read from a BMP body.
pub type RgbRows = Vec<Vec<(u8, u8, u8)>>;

/// Read a 24 bpp BMP image into bottom-up RGB rows.
pub fn read_bmp<R: Read>(mut reader: R) -> IoResult<RgbRows> {
    // Read file header (14 bytes)
    let mut file_header = [0u8; BMP_FILE_HEADER_SIZE];
    reader.read_exact(&mut file_header).map_err(IoError::Io)?;

    // Verify magic number
    if &file_header[0..2] != b"BM" {
        return Err(IoError::InvalidData("not a BMP file".to_string()));
    }

    // Pixel data offset
    let pixel_offset = u32::from_le_bytes([
        file_header[10],
        file_header[11],
        file_header[12],
        file_header[13],
    ]) as usize;

    // Read info header (minimum 40 bytes)
    let mut info_header = [0u8; 40];
    reader.read_exact(&mut info_header).map_err(IoError::Io)?;

    let header_size = u32::from_le_bytes([
        info_header[0],
        info_header[1],
        info_header[2],
        info_header[3],
    ]);
    if header_size < BMP_INFO_HEADER_SIZE {
        return Err(IoError::InvalidData(format!(
            "unsupported BMP header size: {}",
            header_size
        )));
    }

    let width = i32::from_le_bytes([
        info_header[4],
        info_header[5],
        info_header[6],
        info_header[7],
    ]);
    let height = i32::from_le_bytes([
        info_header[8],
        info_header[9],
        info_header[10],
        info_header[11],
    ]);

    let planes = u16::from_le_bytes([info_header[12], info_header[13]]);
    if planes != 1 {
        return Err(IoError::InvalidData(format!(
            "unsupported number of planes: {}",
            planes
        )));
    }

    let bits_per_pixel = u16::from_le_bytes([info_header[14], info_header[15]]);
    if bits_per_pixel != 24 {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported BMP bit depth: {}",
            bits_per_pixel
        )));
    }

    let compression = u32::from_le_bytes([
        info_header[16],
        info_header[17],
        info_header[18],
        info_header[19],
    ]);
    if compression != 0 {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported BMP compression: {}",
            compression
        )));
    }

    let width = width.unsigned_abs();
    let top_down = height < 0;
    let height = height.unsigned_abs();

    // Skip to pixel data
    let current_pos = BMP_FILE_HEADER_SIZE + header_size as usize;
    if pixel_offset > current_pos {
        let mut skip = vec![0u8; pixel_offset - current_pos];
        reader.read_exact(&mut skip).map_err(IoError::Io)?;
    }

    // Rows are padded to 4-byte boundaries
    let row_size = (width as usize * 3).div_ceil(4) * 4;
    let mut rows: RgbRows = Vec::with_capacity(height as usize);
    let mut raw_row = vec![0u8; row_size];
    for _ in 0..height {
        reader.read_exact(&mut raw_row).map_err(IoError::Io)?;
        let mut row = Vec::with_capacity(width as usize);
        for x in 0..width as usize {
            // stored as BGR
            let b = raw_row[x * 3];
            let g = raw_row[x * 3 + 1];
            let r = raw_row[x * 3 + 2];
            row.push((r, g, b));
        }
        rows.push(row);
    }

    // A negative height means the file stores rows top-down
    if top_down {
        rows.reverse();
    }

    Ok(rows)
}

/// Write a grayscale matrix as an uncompressed 24 bpp BMP.
///
/// Each sample is replicated across the three color channels.
pub fn write_bmp<W: Write>(matrix: &GrayMatrix, mut writer: W) -> IoResult<()> {
    let width = matrix.width();
    let height = matrix.height();
    let row_size = (width as usize * 3).div_ceil(4) * 4;
    let data_size = row_size * height as usize;
    let pixel_offset = BMP_FILE_HEADER_SIZE as u32 + BMP_INFO_HEADER_SIZE;
    let file_size = pixel_offset + data_size as u32;

    // File header
    writer.write_all(b"BM")?;
    writer.write_all(&file_size.to_le_bytes())?;
    writer.write_all(&0u32.to_le_bytes())?;
    writer.write_all(&pixel_offset.to_le_bytes())?;

    // Info header (BITMAPINFOHEADER)
    writer.write_all(&BMP_INFO_HEADER_SIZE.to_le_bytes())?;
    writer.write_all(&(width as i32).to_le_bytes())?;
    writer.write_all(&(height as i32).to_le_bytes())?;
    writer.write_all(&1u16.to_le_bytes())?; // planes
    writer.write_all(&24u16.to_le_bytes())?; // bits per pixel
    writer.write_all(&0u32.to_le_bytes())?; // compression
    writer.write_all(&(data_size as u32).to_le_bytes())?;
    writer.write_all(&2835i32.to_le_bytes())?; // x pixels per meter (72 dpi)
    writer.write_all(&2835i32.to_le_bytes())?; // y pixels per meter
    writer.write_all(&0u32.to_le_bytes())?; // colors used
    writer.write_all(&0u32.to_le_bytes())?; // important colors

    // Pixel rows, bottom-up, BGR, padded
    let mut raw_row = vec![0u8; row_size];
    for y in 0..height {
        raw_row.fill(0);
        for x in 0..width {
            let v = matrix.get(x, y).unwrap_or(0);
            raw_row[x as usize * 3] = v;
            raw_row[x as usize * 3 + 1] = v;
            raw_row[x as usize * 3 + 2] = v;
        }
        writer.write_all(&raw_row)?;
    }

    Ok(())
}
