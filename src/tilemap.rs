use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::Deserialize;

use crate::error::{GameError, TilemapDefect};

/// One grid of tile IDs. `0` marks an empty cell; positive IDs are 1-based
/// indices into the tile atlas.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TilemapLayer {
    pub data: Vec<i32>,
    pub width: u32,
    pub height: u32,
}

impl TilemapLayer {
    /// Grid coordinates `(col, row)` of the tile at flat `index`.
    pub fn tile_position(&self, index: usize) -> (u32, u32) {
        let width = self.width.max(1) as usize;
        ((index % width) as u32, (index / width) as u32)
    }

    /// Iterate `(col, row, id)` in storage (row-major) order.
    pub fn tiles(&self) -> impl Iterator<Item = (u32, u32, i32)> + '_ {
        self.data.iter().enumerate().map(|(i, &id)| {
            let (col, row) = self.tile_position(i);
            (col, row, id)
        })
    }

    fn check(&self, layer: usize) -> Result<(), TilemapDefect> {
        if self.width == 0 || self.height == 0 {
            return Err(TilemapDefect::EmptyLayer { layer });
        }
        let expected = self.width as usize * self.height as usize;
        if self.data.len() != expected {
            return Err(TilemapDefect::LengthMismatch { layer, expected, actual: self.data.len() });
        }
        Ok(())
    }
}

/// Layered tilemap, drawn bottom (index 0) to top. Immutable once loaded.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Tilemap {
    pub layers: Vec<TilemapLayer>,
}

impl Tilemap {
    /// Read, decode and validate a tilemap document from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| GameError::asset(path, e))?;
        let tilemap: Tilemap =
            serde_json::from_str(&contents).map_err(|e| GameError::asset(path, e))?;
        tilemap.validate()?;
        log::debug!("loaded tilemap {:?}: {} layer(s)", path, tilemap.layers.len());
        Ok(tilemap)
    }

    /// Decode and validate a tilemap document held in memory.
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let tilemap: Tilemap =
            serde_json::from_str(json).map_err(|e| GameError::asset("<memory>", e))?;
        tilemap.validate()?;
        Ok(tilemap)
    }

    /// Every layer must be non-empty and hold exactly `width * height` IDs.
    pub fn validate(&self) -> Result<(), TilemapDefect> {
        if self.layers.is_empty() {
            return Err(TilemapDefect::NoLayers);
        }
        self.layers.iter().enumerate().try_for_each(|(i, layer)| layer.check(i))
    }

    /// World size in pixels, taken from the base layer.
    pub fn pixel_size(&self, tile_size: u32) -> Vec2 {
        self.layers.first().map_or(Vec2::ZERO, |base| {
            Vec2::new((base.width * tile_size) as f32, (base.height * tile_size) as f32)
        })
    }
}
