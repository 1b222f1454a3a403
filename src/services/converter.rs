use std::path::{Path, PathBuf};

use gray4_dither::{Gray4Pipeline, NibbleOrder, PackedPayload, QuantizedBuffer};

use crate::error::ConvertError;
use crate::models::{ConvertConfig, Dimensions, Tile};
use crate::rendering::{decode, png_writer};

/// A PNG file produced by a conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedFile {
    pub path: PathBuf,
    pub width: usize,
    pub height: usize,
    pub bytes: usize,
}

/// An encoded tile waiting to be written
struct EncodedTile {
    path: PathBuf,
    width: usize,
    height: usize,
    png: Vec<u8>,
}

/// Converts image files into 4-bit grayscale PNGs for e-paper panels
pub struct ConvertService {
    config: ConvertConfig,
}

impl ConvertService {
    pub fn new(config: ConvertConfig) -> Self {
        Self { config }
    }

    /// Convert `input` and write the result to `output`.
    ///
    /// With a tile grid other than 1x1, one file per tile is written next to
    /// `output` (see [`tile_path`]). All tiles are encoded before any file is
    /// touched; if writing any of them fails, the files already written are
    /// removed again.
    pub fn convert(&self, input: &Path, output: &Path) -> Result<Vec<ConvertedFile>, ConvertError> {
        let image = decode::load(input)?;
        let encoded = self.render(image, output)?;
        let written = write_tiles(&encoded)?;

        for file in &written {
            tracing::info!(
                path = %file.path.display(),
                width = file.width,
                height = file.height,
                bytes = file.bytes,
                "Wrote PNG"
            );
        }
        Ok(written)
    }

    fn render(
        &self,
        image: image::DynamicImage,
        output: &Path,
    ) -> Result<Vec<EncodedTile>, ConvertError> {
        let quantized = self.quantize(image)?;
        let tiles = self
            .config
            .tiles
            .tiles(quantized.width() as u32, quantized.height() as u32)?;

        let single = self.config.tiles.is_single();
        tiles
            .into_iter()
            .map(|tile| {
                let png = self.encode_tile(&quantized, &tile)?;
                let path = if single {
                    output.to_path_buf()
                } else {
                    tile_path(output, tile.column, tile.row)
                };
                Ok(EncodedTile {
                    path,
                    width: tile.region.width,
                    height: tile.region.height,
                    png,
                })
            })
            .collect()
    }

    fn quantize(&self, image: image::DynamicImage) -> Result<QuantizedBuffer, ConvertError> {
        let image = match self.config.resize {
            Some(target) => decode::resize(image, target),
            None => image,
        };

        let rotation = self
            .config
            .rotate
            .resolve(Dimensions::new(image.width(), image.height()));
        let buffer = decode::to_pixel_buffer(image)?;
        tracing::debug!(
            width = buffer.width(),
            height = buffer.height(),
            channels = buffer.channels(),
            ?rotation,
            "Quantizing"
        );

        Ok(Gray4Pipeline::new().rotation(rotation).process(buffer)?)
    }

    fn encode_tile(&self, quantized: &QuantizedBuffer, tile: &Tile) -> Result<Vec<u8>, ConvertError> {
        let payload = PackedPayload::pack_region(quantized, tile.region, self.nibble_order())?;
        self.encode(&payload)
    }

    fn encode(&self, payload: &PackedPayload) -> Result<Vec<u8>, ConvertError> {
        let png = png_writer::encode_gray4(payload, self.config.optimize)?;
        if self.config.optimize {
            Ok(png_writer::optimize(png))
        } else {
            Ok(png)
        }
    }

    fn nibble_order(&self) -> NibbleOrder {
        self.config.nibble_order.into()
    }
}

/// Write every tile to a staging file beside its destination, then rename
/// them all into place. On failure nothing from this call is left on disk.
fn write_tiles(encoded: &[EncodedTile]) -> Result<Vec<ConvertedFile>, ConvertError> {
    let mut staged = Vec::with_capacity(encoded.len());
    for tile in encoded {
        let staging = staging_path(&tile.path);
        if let Err(e) = std::fs::write(&staging, &tile.png) {
            remove_files(&staged);
            return Err(e.into());
        }
        staged.push(staging);
    }

    for (i, (tile, staging)) in encoded.iter().zip(&staged).enumerate() {
        if let Err(e) = std::fs::rename(staging, &tile.path) {
            tracing::warn!(path = %tile.path.display(), %e, "Write failed, removing partial output");
            remove_files(&staged[i..]);
            remove_files(encoded[..i].iter().map(|t| &t.path));
            return Err(e.into());
        }
    }

    Ok(encoded
        .iter()
        .map(|tile| ConvertedFile {
            path: tile.path.clone(),
            width: tile.width,
            height: tile.height,
            bytes: tile.png.len(),
        })
        .collect())
}

/// Hidden sibling of `path` used while a conversion is in progress.
fn staging_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{name}.partial"))
}

fn remove_files<'a>(paths: impl IntoIterator<Item = &'a PathBuf>) {
    for path in paths {
        if let Err(e) = std::fs::remove_file(path) {
            tracing::debug!(path = %path.display(), %e, "Could not remove file");
        }
    }
}

/// Output path for one tile: `<stem>_<column>_<row>.<ext>` beside `output`.
pub fn tile_path(output: &Path, column: u32, row: u32) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "tile".to_string());
    let name = match output.extension() {
        Some(ext) => format!("{stem}_{column}_{row}.{}", ext.to_string_lossy()),
        None => format!("{stem}_{column}_{row}"),
    };
    output.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RotateMode, TileGrid};
    use image::{DynamicImage, GrayImage, Luma};

    #[test]
    fn test_tile_path() {
        assert_eq!(
            tile_path(Path::new("/tmp/out/wall.png"), 1, 3),
            PathBuf::from("/tmp/out/wall_1_3.png")
        );
        assert_eq!(
            tile_path(Path::new("frame"), 0, 2),
            PathBuf::from("frame_0_2")
        );
    }

    #[test]
    fn test_landscape_rotation_swaps_dimensions() {
        let service = ConvertService::new(ConvertConfig {
            rotate: RotateMode::Landscape,
            ..Default::default()
        });
        let image = DynamicImage::ImageLuma8(GrayImage::new(8, 4));

        let quantized = service.quantize(image).unwrap();
        assert_eq!((quantized.width(), quantized.height()), (4, 8));
    }

    #[test]
    fn test_render_splits_tiles() {
        let service = ConvertService::new(ConvertConfig {
            tiles: TileGrid { columns: 2, rows: 2 },
            ..Default::default()
        });
        let image = DynamicImage::ImageLuma8(GrayImage::new(8, 6));

        let tiles = service.render(image, Path::new("out.png")).unwrap();
        let paths: Vec<_> = tiles.iter().map(|t| t.path.clone()).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("out_0_0.png"),
                PathBuf::from("out_1_0.png"),
                PathBuf::from("out_0_1.png"),
                PathBuf::from("out_1_1.png"),
            ]
        );
        assert!(tiles.iter().all(|t| t.width == 4 && t.height == 3));
    }

    #[test]
    fn test_render_rejects_uneven_tiles() {
        let service = ConvertService::new(ConvertConfig {
            tiles: TileGrid::PANEL_WALL,
            ..Default::default()
        });
        let image = DynamicImage::ImageLuma8(GrayImage::new(5, 8));

        let err = service.render(image, Path::new("out.png")).err().unwrap();
        assert!(matches!(err, ConvertError::TileMismatch { .. }));
    }

    #[test]
    fn test_failed_write_removes_earlier_tiles() {
        let dir = tempfile::TempDir::new().unwrap();
        let output = dir.path().join("wall.png");
        let service = ConvertService::new(ConvertConfig {
            tiles: TileGrid { columns: 2, rows: 1 },
            ..Default::default()
        });
        let encoded = service
            .render(DynamicImage::ImageLuma8(GrayImage::new(4, 2)), &output)
            .unwrap();

        // A directory in place of the second tile makes its rename fail
        std::fs::create_dir(dir.path().join("wall_1_0.png")).unwrap();

        assert!(write_tiles(&encoded).is_err());
        assert!(!dir.path().join("wall_0_0.png").exists());
        let leftovers: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(leftovers, vec!["wall_1_0.png".to_string()]);
    }

    #[test]
    fn test_write_tiles_leaves_no_staging_files() {
        let dir = tempfile::TempDir::new().unwrap();
        let output = dir.path().join("frame.png");
        let service = ConvertService::new(ConvertConfig::default());
        let encoded = service
            .render(DynamicImage::ImageLuma8(GrayImage::new(4, 2)), &output)
            .unwrap();

        let written = write_tiles(&encoded).unwrap();
        assert_eq!(written[0].path, output);
        let entries = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn test_staging_path_is_hidden_sibling() {
        assert_eq!(
            staging_path(Path::new("/tmp/out/wall_0_1.png")),
            PathBuf::from("/tmp/out/.wall_0_1.png.partial")
        );
    }
}
