//! 4-bit grayscale PNG container for packed payloads.

use std::io::Cursor;

use gray4_dither::{PackedPayload, BIT_DEPTH};

use crate::error::ConvertError;

/// PNG color type code for grayscale in IHDR.
const IHDR_COLOR_GRAYSCALE: u8 = 0;

/// Encode a packed payload as a grayscale, 4-bit PNG.
///
/// The payload rows are written as scanlines unchanged. With `fast` the
/// encoder uses fast compression and no filtering, leaving size
/// optimization to [`optimize`].
pub fn encode_gray4(payload: &PackedPayload, fast: bool) -> Result<Vec<u8>, ConvertError> {
    let width = u32::try_from(payload.width())
        .map_err(|_| ConvertError::PngEncode(format!("width {} too large", payload.width())))?;
    let height = u32::try_from(payload.height())
        .map_err(|_| ConvertError::PngEncode(format!("height {} too large", payload.height())))?;

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Grayscale);
        encoder.set_depth(png::BitDepth::Four);
        if fast {
            encoder.set_compression(png::Compression::Fast);
            encoder.set_filter(png::FilterType::NoFilter);
        } else {
            encoder.set_compression(png::Compression::Default);
        }
        let mut writer = encoder
            .write_header()
            .map_err(|e| ConvertError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(payload.bytes())
            .map_err(|e| ConvertError::PngEncode(e.to_string()))?;
        writer
            .finish()
            .map_err(|e| ConvertError::PngEncode(e.to_string()))?;
    }

    let png_bytes = buf.into_inner();
    tracing::debug!(width, height, bytes = png_bytes.len(), "Encoded 4-bit PNG");
    Ok(png_bytes)
}

/// Re-compress a PNG with oxipng (zopfli + adaptive filter selection).
///
/// The optimized file is only kept if it is still 4-bit grayscale; panels
/// reading the raw scanlines cannot handle a palette or a different depth.
/// On any failure the input is returned unchanged.
pub fn optimize(png_bytes: Vec<u8>) -> Vec<u8> {
    let options = oxipng::Options {
        strip: oxipng::StripChunks::Safe,
        optimize_alpha: false,
        ..Default::default()
    };

    match oxipng::optimize_from_memory(&png_bytes, &options) {
        Ok(optimized) if is_gray4(&optimized) && optimized.len() < png_bytes.len() => {
            tracing::debug!(
                before = png_bytes.len(),
                after = optimized.len(),
                "Optimized PNG"
            );
            optimized
        }
        Ok(_) => {
            tracing::warn!("oxipng changed the pixel format or gained nothing, keeping original");
            png_bytes
        }
        Err(e) => {
            tracing::warn!(%e, "oxipng failed, keeping original");
            png_bytes
        }
    }
}

/// Check the IHDR chunk for 4-bit grayscale.
pub fn is_gray4(png_bytes: &[u8]) -> bool {
    // 8-byte signature, 4-byte length, "IHDR", width, height, depth, color type
    png_bytes.len() >= 26
        && &png_bytes[12..16] == b"IHDR"
        && png_bytes[24] == BIT_DEPTH
        && png_bytes[25] == IHDR_COLOR_GRAYSCALE
}
