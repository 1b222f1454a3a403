//! Input image fixtures.

use std::path::{Path, PathBuf};

use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};

/// Write an image into `dir` and return its path
pub fn write_image(dir: &Path, name: &str, image: &DynamicImage) -> PathBuf {
    let path = dir.join(name);
    image.save(&path).expect("Failed to write fixture image");
    path
}

/// Uniform gray image
pub fn flat_gray(width: u32, height: u32, value: u8) -> DynamicImage {
    DynamicImage::ImageLuma8(GrayImage::from_pixel(width, height, Luma([value])))
}

/// Horizontal gray ramp from black on the left to white on the right
pub fn gray_ramp(width: u32, height: u32) -> DynamicImage {
    let span = width.saturating_sub(1).max(1);
    DynamicImage::ImageLuma8(GrayImage::from_fn(width, height, |x, _| {
        Luma([(x * 255 / span) as u8])
    }))
}

/// Black image with a single white pixel at the top-left corner
pub fn corner_marker(width: u32, height: u32) -> DynamicImage {
    let mut image = RgbImage::new(width, height);
    image.put_pixel(0, 0, Rgb([255, 255, 255]));
    DynamicImage::ImageRgb8(image)
}

/// Bytes that no image decoder accepts
pub const CORRUPT_IMAGE: &[u8] = b"\x89PNG\r\n\x1a\nthis is not really a png";
