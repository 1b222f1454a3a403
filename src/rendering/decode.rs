//! Image decoding at the pipeline boundary.
//!
//! Turns any container the `image` crate understands into the 8-bit
//! [`PixelBuffer`] the dithering pipeline consumes.

use std::path::Path;

use gray4_dither::PixelBuffer;
use image::imageops::FilterType;
use image::{ColorType, DynamicImage};

use crate::error::ConvertError;
use crate::models::Dimensions;

/// Decode an image file.
///
/// Unreadable or corrupt input is reported as [`ConvertError::Decode`].
pub fn load(path: &Path) -> Result<DynamicImage, ConvertError> {
    let image = image::open(path)
        .map_err(|e| ConvertError::Decode(format!("{}: {e}", path.display())))?;

    tracing::debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        color = ?image.color(),
        "Decoded input image"
    );
    Ok(image)
}

/// Resize to exact dimensions with Lanczos3 filtering.
///
/// Returns the image unchanged if it already has the target size.
pub fn resize(image: DynamicImage, target: Dimensions) -> DynamicImage {
    let (orig_w, orig_h) = (image.width(), image.height());

    if (orig_w, orig_h) == (target.width, target.height) {
        tracing::debug!(%target, "Image already at target size, skipping resize");
        return image;
    }

    tracing::debug!(
        orig_w,
        orig_h,
        new_width = target.width,
        new_height = target.height,
        "Resizing image"
    );
    image.resize_exact(target.width, target.height, FilterType::Lanczos3)
}

/// Convert a decoded image into an 8-bit pixel buffer.
///
/// Gray images (with or without alpha, any bit depth) become single-channel
/// buffers. RGBA8 keeps its alpha channel, which the luminance reducer
/// ignores. Everything else is converted to RGB8.
pub fn to_pixel_buffer(image: DynamicImage) -> Result<PixelBuffer, ConvertError> {
    let (width, height) = (image.width() as usize, image.height() as usize);

    let buffer = match image.color() {
        ColorType::L8 | ColorType::La8 | ColorType::L16 | ColorType::La16 => {
            PixelBuffer::gray(image.into_luma8().into_raw(), width, height)
        }
        ColorType::Rgba8 => PixelBuffer::new(image.into_rgba8().into_raw(), width, height, 4),
        _ => PixelBuffer::new(image.into_rgb8().into_raw(), width, height, 3),
    }
    .map_err(gray4_dither::PipelineError::from)?;

    Ok(buffer)
}
