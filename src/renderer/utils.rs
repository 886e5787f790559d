// ── Letterbox viewport math ───────────────────────────────────────────────────
//
// The game is drawn at a fixed logical resolution (320 × 240) and scaled
// uniformly into the physical window, centred, with bars on whichever axis
// has spare room.

use crate::window::WindowConfig;

/// Rectangle in physical pixels that receives the logical frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, width: 0.0, height: 0.0 };

    /// Physical pixels per logical pixel.
    pub fn scale(&self, config: &WindowConfig) -> f32 {
        if config.logical_width == 0 {
            return 0.0;
        }
        self.width / config.logical_width as f32
    }
}

/// Largest uniformly scaled, centred rectangle of the logical aspect ratio
/// that fits the physical window.
///
/// ```text
/// scale = min(pw / lw, ph / lh)
/// x     = (pw - lw * scale) / 2
/// y     = (ph - lh * scale) / 2
/// ```
///
/// A zero logical dimension yields [`Viewport::ZERO`].
pub fn letterbox_viewport(config: &WindowConfig) -> Viewport {
    if config.logical_width == 0 || config.logical_height == 0 {
        return Viewport::ZERO;
    }

    let pw = config.physical_width  as f32;
    let ph = config.physical_height as f32;
    let lw = config.logical_width   as f32;
    let lh = config.logical_height  as f32;

    let scale = (pw / lw).min(ph / lh);
    let width  = lw * scale;
    let height = lh * scale;

    Viewport { x: (pw - width) / 2.0, y: (ph - height) / 2.0, width, height }
}
