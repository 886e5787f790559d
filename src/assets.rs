use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::error::GameError;
use crate::tilemap::Tilemap;

/// Locations of every file read at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetPaths {
    pub player: PathBuf,
    pub enemy: PathBuf,
    pub potion: PathBuf,
    pub tileset: PathBuf,
    pub map: PathBuf,
}

impl AssetPaths {
    /// Standard layout below `root`: `images/` and `maps/`.
    pub fn under(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        let images = root.join("images");
        Self {
            player: images.join("inspector.png"),
            enemy: images.join("noble.png"),
            potion: images.join("LifePot.png"),
            tileset: images.join("TilesetFloor.png"),
            map: root.join("maps").join("spawn.json"),
        }
    }
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self::under("assets")
    }
}

/// Decoded startup assets, ready to upload to the GPU.
pub struct Assets {
    pub player: RgbaImage,
    pub enemy: RgbaImage,
    pub potion: RgbaImage,
    pub tileset: RgbaImage,
    pub tilemap: Tilemap,
}

impl Assets {
    /// Load everything or nothing: the first failure is returned and no
    /// partially loaded set escapes.
    pub fn load(paths: &AssetPaths) -> Result<Self, GameError> {
        let assets = Self {
            player: load_image(&paths.player)?,
            enemy: load_image(&paths.enemy)?,
            potion: load_image(&paths.potion)?,
            tileset: load_image(&paths.tileset)?,
            tilemap: Tilemap::load(&paths.map)?,
        };
        log::info!("loaded assets ({} tilemap layer(s))", assets.tilemap.layers.len());
        Ok(assets)
    }
}

/// Decode a single image file to RGBA8.
pub fn load_image(path: impl AsRef<Path>) -> Result<RgbaImage, GameError> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|e| GameError::asset(path, e))?;
    log::debug!("decoded {:?} ({}x{})", path, img.width(), img.height());
    Ok(img.to_rgba8())
}
