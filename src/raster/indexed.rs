//! Palette index planes for indexed PNG and GIF files.
//!
//! Indexed pixels are scalars: the samples are the palette indices, not
//! the palette colors, so these files load as grayscale rasters.

use super::frame::Raster;
use super::pixel::ColorMode;
use super::source::ImageError;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

fn palette_error(path: &Path, reason: impl ToString) -> ImageError {
    ImageError::Palette {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

fn open(path: &Path) -> Result<BufReader<File>, ImageError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| palette_error(path, e))
}

/// Reads the index plane of a PNG, or `None` if it is not indexed.
pub(super) fn read_png(path: &Path) -> Result<Option<Raster>, ImageError> {
    let mut decoder = png::Decoder::new(open(path)?);
    decoder.set_transformations(png::Transformations::IDENTITY);
    // Unreadable headers are left to the generic decoder to report.
    let mut reader = match decoder.read_info() {
        Ok(reader) => reader,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Not a readable PNG header");
            return Ok(None);
        }
    };
    if reader.info().color_type != png::ColorType::Indexed {
        return Ok(None);
    }

    let mut buf = vec![0u8; reader.output_buffer_size()];
    let frame = reader
        .next_frame(&mut buf)
        .map_err(|e| palette_error(path, e))?;

    let indices = unpack_rows(
        &buf,
        frame.width as usize,
        frame.height as usize,
        frame.line_size,
        frame.bit_depth as u8,
    );

    tracing::debug!(
        path = %path.display(),
        width = frame.width,
        height = frame.height,
        bits = frame.bit_depth as u8,
        "Read PNG palette indices"
    );

    Raster::from_samples(frame.width, frame.height, ColorMode::Grayscale, indices).map(Some)
}

/// Reads the first frame of a GIF as indices on the logical screen.
///
/// Screen pixels the frame does not cover take the background index.
pub(super) fn read_gif(path: &Path) -> Result<Option<Raster>, ImageError> {
    let mut options = gif::DecodeOptions::new();
    options.set_color_output(gif::ColorOutput::Indexed);
    let mut decoder = match options.read_info(open(path)?) {
        Ok(decoder) => decoder,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Not a readable GIF header");
            return Ok(None);
        }
    };

    let width = decoder.width() as usize;
    let height = decoder.height() as usize;
    let background = decoder.bg_color().unwrap_or(0) as u8;

    let frame = match decoder
        .read_next_frame()
        .map_err(|e| palette_error(path, e))?
    {
        Some(frame) => frame,
        None => return Ok(None),
    };

    let mut canvas = vec![background; width * height];
    let frame_width = frame.width as usize;
    for (row, line) in frame.buffer.chunks(frame_width.max(1)).enumerate() {
        let y = frame.top as usize + row;
        if y >= height {
            break;
        }
        for (col, &index) in line.iter().enumerate() {
            let x = frame.left as usize + col;
            if x < width {
                canvas[y * width + x] = index;
            }
        }
    }

    tracing::debug!(path = %path.display(), width, height, "Read GIF palette indices");

    Raster::from_samples(width as u32, height as u32, ColorMode::Grayscale, canvas).map(Some)
}

/// Expands packed 1, 2 or 4 bit indices (MSB first) to one byte each.
fn unpack_rows(buf: &[u8], width: usize, height: usize, line_size: usize, bits: u8) -> Vec<u8> {
    let mut out = Vec::with_capacity(width * height);
    if line_size == 0 {
        return out;
    }
    for row in buf.chunks(line_size).take(height) {
        if bits >= 8 {
            out.extend_from_slice(&row[..width]);
            continue;
        }
        let per_byte = (8 / bits) as usize;
        let mask = (1u8 << bits) - 1;
        for x in 0..width {
            let shift = 8 - bits as usize * (x % per_byte + 1);
            out.push((row[x / per_byte] >> shift) & mask);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpack_four_bit() {
        // two rows of three 4-bit indices, padded to two bytes each
        let buf = [0x12, 0x30, 0xAB, 0xC0];
        assert_eq!(unpack_rows(&buf, 3, 2, 2, 4), vec![1, 2, 3, 0xA, 0xB, 0xC]);
    }

    #[test]
    fn test_unpack_one_bit() {
        assert_eq!(unpack_rows(&[0b1010_0000], 3, 1, 1, 1), vec![1, 0, 1]);
    }

    #[test]
    fn test_unpack_eight_bit_drops_nothing() {
        assert_eq!(unpack_rows(b"abcdef", 3, 2, 3, 8), b"abcdef".to_vec());
    }
}
