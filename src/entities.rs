// =============================================================================
// ENTITIES.RS — Player, enemies and potions
//
// Each entity owns a `Sprite` (texture handle + world position) plus the
// fields that drive its behaviour. There is no inheritance: shared access to
// the sprite goes through the `HasSprite` trait.
// =============================================================================

use glam::Vec2;

use crate::geometry::Rect;

/// Opaque handle to a texture owned by the renderer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

/// Image handle plus world-space top-left position in pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sprite {
    pub texture: TextureId,
    pub pos: Vec2,
}

impl Sprite {
    pub fn new(texture: TextureId, x: f32, y: f32) -> Self {
        Self { texture, pos: Vec2::new(x, y) }
    }

    /// World-space bounding box for a square sprite of side `size`.
    pub fn bounds(&self, size: f32) -> Rect {
        Rect::square(self.pos, size)
    }
}

/// Anything drawn from a single sprite.
pub trait HasSprite {
    fn sprite(&self) -> &Sprite;
    fn sprite_mut(&mut self) -> &mut Sprite;

    fn pos(&self) -> Vec2 {
        self.sprite().pos
    }

    fn set_pos(&mut self, pos: Vec2) {
        self.sprite_mut().pos = pos;
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub sprite: Sprite,
    pub health: u32,
}

impl Player {
    pub const STARTING_HEALTH: u32 = 3;

    pub fn new(sprite: Sprite) -> Self {
        Self { sprite, health: Self::STARTING_HEALTH }
    }

    /// Add `amount` to health. Health never wraps.
    pub fn heal(&mut self, amount: u32) -> u32 {
        self.health = self.health.saturating_add(amount);
        self.health
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub sprite: Sprite,
    /// Fixed at spawn; stationary enemies never move.
    pub follows_player: bool,
}

impl Enemy {
    pub fn new(sprite: Sprite, follows_player: bool) -> Self {
        Self { sprite, follows_player }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Potion {
    pub sprite: Sprite,
    /// Health restored per trigger.
    pub amount: u32,
    /// Set once the potion has been used up (proximity heal rule only).
    pub consumed: bool,
}

impl Potion {
    pub fn new(sprite: Sprite, amount: u32) -> Self {
        Self { sprite, amount, consumed: false }
    }
}

macro_rules! impl_has_sprite {
    ($($ty:ty),*) => {$(
        impl HasSprite for $ty {
            fn sprite(&self) -> &Sprite { &self.sprite }
            fn sprite_mut(&mut self) -> &mut Sprite { &mut self.sprite }
        }
    )*};
}

impl_has_sprite!(Player, Enemy, Potion);
