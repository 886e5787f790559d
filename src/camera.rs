use glam::Vec2;

/// 2D scrolling camera.
///
/// The camera is a single translation: `offset` is added to every world-space
/// position to produce a screen-space (logical viewport) position. No zoom,
/// no rotation.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Camera {
    /// World → screen translation in pixels. Always `<= 0` on both axes once
    /// constrained to a map at least as large as the viewport.
    pub offset: Vec2,
}

impl Camera {
    pub fn new(x: f32, y: f32) -> Self {
        Self { offset: Vec2::new(x, y) }
    }

    /// Place `target` (world pixels) at the centre of the viewport.
    ///
    /// ```text
    /// offset = -target + viewport / 2
    /// ```
    pub fn follow_target(&mut self, target: Vec2, viewport: Vec2) {
        self.offset = -target + viewport / 2.0;
    }

    /// Clamp the offset so the viewport never shows anything outside
    /// `[0, map_size]`.
    ///
    /// On each axis the valid range is `[-(map - viewport), 0]`. When the map
    /// is smaller than the viewport on an axis that range is empty; the offset
    /// is pinned to `0` there so the map hugs the top-left corner.
    pub fn constrain(&mut self, map_size: Vec2, viewport: Vec2) {
        self.offset.x = clamp_axis(self.offset.x, map_size.x, viewport.x);
        self.offset.y = clamp_axis(self.offset.y, map_size.y, viewport.y);
    }

    /// Per-frame entry point: centre on `target`, then clamp to the map.
    pub fn update(&mut self, target: Vec2, map_size: Vec2, viewport: Vec2) {
        self.follow_target(target, viewport);
        self.constrain(map_size, viewport);
    }

    /// Translate a world-space position into screen space.
    #[inline]
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        world + self.offset
    }

    /// Inverse of [`Camera::world_to_screen`].
    #[inline]
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        screen - self.offset
    }
}

fn clamp_axis(offset: f32, map: f32, view: f32) -> f32 {
    let overflow = map - view;
    if overflow < 0.0 {
        return 0.0;
    }
    offset.clamp(-overflow, 0.0)
}
