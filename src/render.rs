use glam::Vec2;

use crate::atlas::AtlasLayout;
use crate::entities::{HasSprite, TextureId};
use crate::geometry::Rect;
use crate::world::World;

// ── Color ──────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color(pub [f32; 4]);

impl Color {
    /// Sky blue frame background, RGB(120, 180, 255).
    pub const SKY: Self = Self::rgb8(120, 180, 255);

    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self([r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0])
    }
}

// ── Draw commands ──────────────────────────────────────────────────────────

/// One textured quad: copy `src` from `texture` to `dest` (screen space,
/// logical pixels). Commands are drawn in list order; later ones cover
/// earlier ones.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DrawCommand {
    pub texture: TextureId,
    /// Source rectangle in texture pixels.
    pub src: Rect,
    /// Top-left destination in screen pixels. The quad is `src.w × src.h`.
    pub dest: Vec2,
}

impl DrawCommand {
    pub fn dest_rect(&self) -> Rect {
        Rect::new(self.dest.x, self.dest.y, self.src.w, self.src.h)
    }
}

/// Build the draw list for one frame.
///
/// Order: every tilemap layer bottom to top (row-major within a layer), then
/// the player, the enemies, and finally the potions that are still in play.
/// Tiles with an ID of zero or below are empty and emit nothing.
pub fn frame(world: &World, atlas: &AtlasLayout) -> Vec<DrawCommand> {
    let mut commands = Vec::new();
    push_tiles(&mut commands, world, atlas);
    push_sprites(&mut commands, world);
    commands
}

fn push_tiles(out: &mut Vec<DrawCommand>, world: &World, atlas: &AtlasLayout) {
    let tile = world.settings.tile_size as f32;
    for layer in &world.tilemap.layers {
        out.reserve(layer.data.len());
        for (col, row, id) in layer.tiles() {
            let Some(src) = atlas.source_rect(id) else { continue };
            let world_pos = Vec2::new(col as f32 * tile, row as f32 * tile);
            out.push(DrawCommand {
                texture: world.tileset,
                src,
                dest: world.camera.world_to_screen(world_pos),
            });
        }
    }
}

fn push_sprites(out: &mut Vec<DrawCommand>, world: &World) {
    let size = world.settings.sprite_size as f32;
    let src = Rect::new(0.0, 0.0, size, size);
    let sprites = std::iter::once(world.player.sprite())
        .chain(world.enemies.iter().map(HasSprite::sprite))
        .chain(world.potions.iter().filter(|p| !p.consumed).map(HasSprite::sprite));

    out.extend(sprites.map(|sprite| DrawCommand {
        texture: sprite.texture,
        src,
        dest: world.camera.world_to_screen(sprite.pos),
    }));
}
