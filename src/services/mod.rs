pub mod converter;

pub use converter::{tile_path, ConvertService, ConvertedFile};
