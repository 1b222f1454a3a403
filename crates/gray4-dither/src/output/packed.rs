//! Nibble packing of quantized pixels.

use super::Region;
use crate::api::PipelineError;
use crate::buffer::QuantizedBuffer;

/// Placement of a horizontal pixel pair within its byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NibbleOrder {
    /// Even pixel in the low nibble, odd pixel in the high nibble:
    /// `(p[2k] >> 4) | ((p[2k + 1] >> 4) << 4)`.
    #[default]
    LowFirst,
    /// Even pixel in the high nibble, odd pixel in the low nibble, as
    /// 4-bit PNG scanlines are laid out.
    HighFirst,
}

impl NibbleOrder {
    /// Combine two 4-bit levels into one byte.
    #[inline]
    fn combine(self, even: u8, odd: u8) -> u8 {
        match self {
            NibbleOrder::LowFirst => even | (odd << 4),
            NibbleOrder::HighFirst => (even << 4) | odd,
        }
    }

    /// Split a byte into its `(even, odd)` 4-bit levels.
    #[inline]
    fn split(self, byte: u8) -> (u8, u8) {
        match self {
            NibbleOrder::LowFirst => (byte & 0x0F, byte >> 4),
            NibbleOrder::HighFirst => (byte >> 4, byte & 0x0F),
        }
    }
}

/// Bit-packed 4-bit pixel data, two pixels per byte.
///
/// Each row occupies `ceil(width / 2)` bytes. For odd widths the final
/// pixel of a row is paired with a zero level.
///
/// # Example
///
/// ```
/// use gray4_dither::{quantize, NibbleOrder, PackedPayload, PixelBuffer};
///
/// let quantized = quantize(PixelBuffer::gray(vec![128, 0], 2, 1).unwrap()).unwrap();
///
/// let payload = PackedPayload::pack(&quantized, NibbleOrder::LowFirst);
/// assert_eq!(payload.bytes(), &[0x08]);
///
/// let payload = PackedPayload::pack(&quantized, NibbleOrder::HighFirst);
/// assert_eq!(payload.bytes(), &[0x80]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedPayload {
    bytes: Vec<u8>,
    width: usize,
    height: usize,
    order: NibbleOrder,
}

impl PackedPayload {
    /// Pack a whole quantized image.
    pub fn pack(image: &QuantizedBuffer, order: NibbleOrder) -> Self {
        Self::pack_rows(image, Region::full(image.width(), image.height()), order)
    }

    /// Pack a rectangular part of a quantized image.
    ///
    /// # Errors
    ///
    /// [`PipelineError::RegionOutOfBounds`] if the region is empty or
    /// extends past the image.
    pub fn pack_region(
        image: &QuantizedBuffer,
        region: Region,
        order: NibbleOrder,
    ) -> Result<Self, PipelineError> {
        if !region.fits_within(image.width(), image.height()) {
            return Err(PipelineError::RegionOutOfBounds {
                region,
                width: image.width(),
                height: image.height(),
            });
        }
        Ok(Self::pack_rows(image, region, order))
    }

    fn pack_rows(image: &QuantizedBuffer, region: Region, order: NibbleOrder) -> Self {
        let stride = Self::bytes_per_row(region.width);
        let mut bytes = Vec::with_capacity(stride * region.height);

        for y in region.y..region.y + region.height {
            let row = &image.row(y)[region.x..region.x + region.width];
            for pair in row.chunks(2) {
                let even = pair[0] >> 4;
                let odd = pair.get(1).map_or(0, |&v| v >> 4);
                bytes.push(order.combine(even, odd));
            }
        }

        Self {
            bytes,
            width: region.width,
            height: region.height,
            order,
        }
    }

    /// Bytes needed for one packed row of `width` pixels.
    #[inline]
    pub fn bytes_per_row(width: usize) -> usize {
        width.div_ceil(2)
    }

    /// Packed rows, concatenated without padding between them.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn order(&self) -> NibbleOrder {
        self.order
    }

    /// Expand back to one 8-bit sample per pixel (`level * 16`).
    ///
    /// Padding nibbles of odd-width rows are dropped.
    pub fn unpack(&self) -> Vec<u8> {
        let stride = Self::bytes_per_row(self.width);
        let mut samples = Vec::with_capacity(self.width * self.height);

        for row in self.bytes.chunks_exact(stride.max(1)) {
            for (i, &byte) in row.iter().enumerate() {
                let (even, odd) = self.order.split(byte);
                samples.push(even << 4);
                if 2 * i + 1 < self.width {
                    samples.push(odd << 4);
                }
            }
        }

        samples
    }
}
