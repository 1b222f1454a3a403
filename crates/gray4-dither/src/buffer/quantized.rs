//! Quantizer output: single-channel samples restricted to 16 levels.

/// A single-channel buffer whose samples are all in `{0, 16, ..., 240}`.
///
/// Only [`quantize`](crate::quantize) constructs this type, which is what
/// lets the bit-packer shift samples right by four without checking them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantizedBuffer {
    samples: Vec<u8>,
    width: usize,
    height: usize,
}

impl QuantizedBuffer {
    /// Wrap samples that the quantizer has already reduced to 16 levels.
    pub(crate) fn from_quantized(samples: Vec<u8>, width: usize, height: usize) -> Self {
        debug_assert_eq!(samples.len(), width * height);
        debug_assert!(
            samples.iter().all(|&v| v % 16 == 0),
            "quantized samples must be multiples of 16"
        );
        Self {
            samples,
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Quantized samples in row-major order.
    #[inline]
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// One row of samples.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        &self.samples[y * self.width..(y + 1) * self.width]
    }

    /// Sample at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the buffer.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        self.samples[y * self.width + x]
    }

    /// 4-bit level (0-15) at `(x, y)`.
    #[inline]
    pub fn level(&self, x: usize, y: usize) -> u8 {
        self.get(x, y) >> 4
    }

    pub fn into_samples(self) -> Vec<u8> {
        self.samples
    }
}
