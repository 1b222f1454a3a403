use std::path::Path;

use gray4_dither::{NibbleOrder, Rotation};
use serde::Deserialize;

use crate::error::ConvertError;
use crate::models::{Dimensions, TileGrid};

/// Conversion settings, loaded from a YAML file and/or command-line flags
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertConfig {
    /// When to rotate the image 90 degrees clockwise
    pub rotate: RotateMode,

    /// Resize the decoded image to exactly these dimensions first
    pub resize: Option<Dimensions>,

    /// Split the output into equal tiles, one PNG each
    pub tiles: TileGrid,

    /// Placement of each pixel pair within its byte
    pub nibble_order: NibbleLayout,

    /// Re-compress the PNG output with oxipng
    pub optimize: bool,
}

/// Rotation policy
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum RotateMode {
    /// Keep the source orientation
    #[default]
    Never,
    /// Always rotate clockwise
    Always,
    /// Rotate clockwise only if the image is wider than tall
    Landscape,
}

impl RotateMode {
    /// Decide the rotation for an image of the given size.
    pub fn resolve(self, size: Dimensions) -> Rotation {
        match self {
            RotateMode::Never => Rotation::None,
            RotateMode::Always => Rotation::Clockwise90,
            RotateMode::Landscape if size.is_landscape() => Rotation::Clockwise90,
            RotateMode::Landscape => Rotation::None,
        }
    }
}

/// Nibble layout of the packed output
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum NibbleLayout {
    /// Even pixel in the low nibble (panel layout)
    #[default]
    LowFirst,
    /// Even pixel in the high nibble (standard PNG layout)
    HighFirst,
}

impl From<NibbleLayout> for NibbleOrder {
    fn from(layout: NibbleLayout) -> Self {
        match layout {
            NibbleLayout::LowFirst => NibbleOrder::LowFirst,
            NibbleLayout::HighFirst => NibbleOrder::HighFirst,
        }
    }
}

/// Command-line values that take precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub rotate: Option<RotateMode>,
    pub resize: Option<Dimensions>,
    pub tiles: Option<TileGrid>,
    pub nibble_order: Option<NibbleLayout>,
    pub optimize: bool,
}

impl ConvertConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConvertError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConvertError::Config(format!("{}: {e}", path.display())))?;
        let config = Self::from_yaml(&content)
            .map_err(|e| ConvertError::Config(format!("{}: {e}", path.display())))?;

        tracing::info!(
            path = %path.display(),
            rotate = ?config.rotate,
            tiles = %config.tiles,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes as null rather than an empty map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Apply command-line overrides on top of this configuration
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(rotate) = overrides.rotate {
            self.rotate = rotate;
        }
        if let Some(resize) = overrides.resize {
            self.resize = Some(resize);
        }
        if let Some(tiles) = overrides.tiles {
            self.tiles = tiles;
        }
        if let Some(order) = overrides.nibble_order {
            self.nibble_order = order;
        }
        self.optimize |= overrides.optimize;
        self
    }
}
