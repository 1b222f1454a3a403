pub mod config;
pub mod geometry;

pub use config::{ConfigOverrides, ConvertConfig, NibbleLayout, RotateMode};
pub use geometry::{Dimensions, Tile, TileGrid};
