//! Assertion helpers for tests.

use std::io::Cursor;
use std::path::Path;

use pretty_assertions::assert_eq;

/// A decoded output PNG with its raw (still packed) scanlines
pub struct Gray4Png {
    pub width: u32,
    pub height: u32,
    pub raw: Vec<u8>,
}

impl Gray4Png {
    /// Level (0..=15) of the pixel at (x, y), even pixel in the low nibble
    pub fn level_low_first(&self, x: u32, y: u32) -> u8 {
        let row_bytes = (self.width as usize).div_ceil(2);
        let byte = self.raw[y as usize * row_bytes + x as usize / 2];
        if x % 2 == 0 {
            byte & 0x0F
        } else {
            byte >> 4
        }
    }
}

/// Read a PNG file, asserting it is 4-bit grayscale
pub fn read_gray4(path: &Path) -> Gray4Png {
    let bytes = std::fs::read(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()));

    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::IDENTITY);
    let mut reader = decoder.read_info().expect("Output is not a valid PNG");
    let mut raw = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut raw).expect("Failed to decode PNG frame");
    raw.truncate(info.buffer_size());

    assert_eq!(info.bit_depth, png::BitDepth::Four, "Expected 4-bit depth");
    assert_eq!(
        info.color_type,
        png::ColorType::Grayscale,
        "Expected grayscale color type"
    );

    Gray4Png {
        width: info.width,
        height: info.height,
        raw,
    }
}

/// Assert the output file has the expected dimensions
pub fn assert_dimensions(png: &Gray4Png, width: u32, height: u32) {
    assert_eq!((png.width, png.height), (width, height));
}
