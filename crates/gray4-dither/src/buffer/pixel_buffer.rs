//! Row-major 8-bit pixel buffer with explicit shape.

use super::BufferError;

/// A flat, row-major buffer of 8-bit samples.
///
/// Samples are interleaved per pixel: a 3-channel buffer stores
/// `[R, G, B, R, G, B, ...]`. Any channels beyond the third (alpha, for
/// instance) are carried along but ignored by the luminance reducer.
///
/// The constructor enforces `samples.len() == width * height * channels`,
/// so every `PixelBuffer` in circulation has a consistent shape.
///
/// # Example
///
/// ```
/// use gray4_dither::PixelBuffer;
///
/// let buffer = PixelBuffer::new(vec![10, 20, 30, 40, 50, 60], 3, 2, 1).unwrap();
/// assert_eq!(buffer.get(2, 1), 60);
///
/// assert!(PixelBuffer::new(vec![0; 5], 3, 2, 1).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    samples: Vec<u8>,
    width: usize,
    height: usize,
    channels: usize,
}

impl PixelBuffer {
    /// Create a buffer from interleaved samples.
    ///
    /// # Errors
    ///
    /// - [`BufferError::EmptyDimension`] if any dimension is zero
    /// - [`BufferError::LengthMismatch`] if the sample count does not match
    pub fn new(
        samples: Vec<u8>,
        width: usize,
        height: usize,
        channels: usize,
    ) -> Result<Self, BufferError> {
        if width == 0 || height == 0 || channels == 0 {
            return Err(BufferError::EmptyDimension {
                width,
                height,
                channels,
            });
        }
        let expected = width * height * channels;
        if samples.len() != expected {
            return Err(BufferError::LengthMismatch {
                expected,
                actual: samples.len(),
            });
        }
        Ok(Self {
            samples,
            width,
            height,
            channels,
        })
    }

    /// Create a single-channel buffer.
    pub fn gray(samples: Vec<u8>, width: usize, height: usize) -> Result<Self, BufferError> {
        Self::new(samples, width, height, 1)
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Samples per pixel.
    #[inline]
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// True for single-channel buffers.
    #[inline]
    pub fn is_gray(&self) -> bool {
        self.channels == 1
    }

    /// All samples in row-major, channel-interleaved order.
    #[inline]
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// Mutable access to the samples. The shape cannot change through it.
    #[inline]
    pub fn samples_mut(&mut self) -> &mut [u8] {
        &mut self.samples
    }

    /// Take ownership of the sample storage.
    pub fn into_samples(self) -> Vec<u8> {
        self.samples
    }

    /// Channel values of the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the buffer.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> &[u8] {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        let start = (y * self.width + x) * self.channels;
        &self.samples[start..start + self.channels]
    }

    /// First channel of the pixel at `(x, y)`; the gray value for
    /// single-channel buffers.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the buffer.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.pixel(x, y)[0]
    }

    /// Iterate over pixels as channel slices, row-major.
    pub fn pixels(&self) -> impl Iterator<Item = &[u8]> {
        self.samples.chunks_exact(self.channels)
    }
}
