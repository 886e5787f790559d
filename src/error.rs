use std::path::PathBuf;

use thiserror::Error;

/// Low-level cause of a failed asset load.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Image(#[from] image::ImageError),
}

/// Structural problems found while validating a decoded tilemap.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TilemapDefect {
    #[error("tilemap has no layers")]
    NoLayers,
    #[error("layer {layer} has a zero width or height")]
    EmptyLayer { layer: usize },
    #[error("layer {layer} declares {expected} tiles but holds {actual}")]
    LengthMismatch { layer: usize, expected: usize, actual: usize },
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error("failed to load asset '{}': {source}", path.display())]
    AssetLoad {
        path: PathBuf,
        #[source]
        source: AssetError,
    },
    #[error("malformed tilemap: {0}")]
    MalformedTilemap(#[from] TilemapDefect),
    #[error("failed to initialize renderer: {0}")]
    Renderer(String),
    #[error("failed to create application window: {0}")]
    Window(#[source] winit::error::OsError),
    #[error("event loop failed: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
}

impl GameError {
    pub(crate) fn asset(path: impl Into<PathBuf>, source: impl Into<AssetError>) -> Self {
        Self::AssetLoad { path: path.into(), source: source.into() }
    }
}
