use std::fmt;
use std::str::FromStr;

use gray4_dither::Region;
use serde::Deserialize;

use crate::error::ConvertError;

/// Parse `"<a>x<b>"` into two positive integers.
fn parse_pair(s: &str) -> Result<(u32, u32), ConvertError> {
    let invalid = || ConvertError::InvalidDimensions(format!("expected <W>x<H>, got {s:?}"));
    let (a, b) = s
        .trim()
        .split_once(|c| c == 'x' || c == 'X')
        .ok_or_else(invalid)?;
    let a: u32 = a.trim().parse().map_err(|_| invalid())?;
    let b: u32 = b.trim().parse().map_err(|_| invalid())?;
    if a == 0 || b == 0 {
        return Err(ConvertError::InvalidDimensions(format!(
            "dimensions must be non-zero, got {s:?}"
        )));
    }
    Ok((a, b))
}

/// Target image size in pixels, written as `WIDTHxHEIGHT`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_landscape(&self) -> bool {
        self.width > self.height
    }
}

impl FromStr for Dimensions {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (width, height) = parse_pair(s)?;
        Ok(Self { width, height })
    }
}

impl TryFrom<String> for Dimensions {
    type Error = ConvertError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Split of the output into equal tiles, written as `COLUMNSxROWS`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct TileGrid {
    pub columns: u32,
    pub rows: u32,
}

/// One tile of a [`TileGrid`] and the pixels it covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub column: u32,
    pub row: u32,
    pub region: Region,
}

impl TileGrid {
    /// The whole image as a single tile
    pub const SINGLE: Self = Self {
        columns: 1,
        rows: 1,
    };

    /// 3744x5616 split into eight 1872x1404 panels
    pub const PANEL_WALL: Self = Self {
        columns: 2,
        rows: 4,
    };

    pub fn is_single(&self) -> bool {
        self.columns == 1 && self.rows == 1
    }

    /// Compute tile regions for a `width x height` image, row by row.
    ///
    /// The image must divide evenly into the grid.
    pub fn tiles(&self, width: u32, height: u32) -> Result<Vec<Tile>, ConvertError> {
        if width % self.columns != 0 || height % self.rows != 0 {
            return Err(ConvertError::TileMismatch {
                width,
                height,
                columns: self.columns,
                rows: self.rows,
            });
        }

        let tile_width = (width / self.columns) as usize;
        let tile_height = (height / self.rows) as usize;

        let mut tiles = Vec::with_capacity((self.columns * self.rows) as usize);
        for row in 0..self.rows {
            for column in 0..self.columns {
                tiles.push(Tile {
                    column,
                    row,
                    region: Region::new(
                        column as usize * tile_width,
                        row as usize * tile_height,
                        tile_width,
                        tile_height,
                    ),
                });
            }
        }
        Ok(tiles)
    }
}

impl Default for TileGrid {
    fn default() -> Self {
        Self::SINGLE
    }
}

impl FromStr for TileGrid {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (columns, rows) = parse_pair(s)?;
        Ok(Self { columns, rows })
    }
}

impl TryFrom<String> for TileGrid {
    type Error = ConvertError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for TileGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.columns, self.rows)
    }
}
