// =============================================================================
// GEOMETRY.RS — Pixel-space primitives
//
// Small helpers shared by the simulation and the render pass:
// - Axis-aligned rectangles (atlas source rects, sprite bounding boxes)
// - Greedy per-axis stepping (enemy chase)
// - Chebyshev distance between world positions
// =============================================================================

use glam::Vec2;

/// Axis-aligned rectangle in pixels, top-left origin.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Square of side `size` with its top-left corner at `pos`.
    pub fn square(pos: Vec2, size: f32) -> Self {
        Self::new(pos.x, pos.y, size, size)
    }

    /// True when the two rectangles share interior area.
    /// Touching edges do not count as an overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }
}

/// Move `from` toward `to` by at most `max_step` on each axis independently.
///
/// Each axis stops exactly on the target instead of stepping past it, so a
/// chaser never oscillates around the thing it follows.
#[inline]
pub fn step_toward(from: Vec2, to: Vec2, max_step: f32) -> Vec2 {
    let delta = (to - from).clamp(Vec2::splat(-max_step), Vec2::splat(max_step));
    from + delta
}

/// Chessboard distance: the larger of the two per-axis distances.
#[inline]
pub fn distance_chebyshev(a: Vec2, b: Vec2) -> f32 {
    let d = (a - b).abs();
    d.x.max(d.y)
}
