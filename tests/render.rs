use glam::Vec2;

use overworld::atlas::AtlasLayout;
use overworld::camera::Camera;
use overworld::config::WorldSettings;
use overworld::entities::{Enemy, Player, Potion, Sprite, TextureId};
use overworld::geometry::Rect;
use overworld::render::{DrawCommand, frame};
use overworld::renderer::batch::{Batch, build_batches};
use overworld::tilemap::{Tilemap, TilemapLayer};
use overworld::world::World;

const PLAYER: TextureId = TextureId(0);
const ENEMY: TextureId = TextureId(1);
const POTION: TextureId = TextureId(2);
const TILESET: TextureId = TextureId(3);

const SPRITE_SRC: Rect = Rect::new(0.0, 0.0, 16.0, 16.0);

fn small_world() -> World {
    let tilemap = Tilemap {
        layers: vec![
            TilemapLayer { data: vec![1, 2, 3, 0], width: 2, height: 2 },
            TilemapLayer { data: vec![0, 0, 0, 24], width: 2, height: 2 },
        ],
    };
    let mut world = World::new(
        Player::new(Sprite::new(PLAYER, 10.0, 20.0)),
        tilemap,
        TILESET,
        WorldSettings::default(),
    );
    world.enemies.push(Enemy::new(Sprite::new(ENEMY, 30.0, 40.0), true));
    world.enemies.push(Enemy::new(Sprite::new(ENEMY, 50.0, 60.0), false));
    world.potions.push(Potion::new(Sprite::new(POTION, 70.0, 80.0), 2));
    world
}

// ── Frame building ────────────────────────────────────────────────────────────

#[test]
fn frame_draws_tiles_then_player_enemies_potions() {
    let world = small_world();
    let cmds = frame(&world, &AtlasLayout::default());

    let textures: Vec<TextureId> = cmds.iter().map(|c| c.texture).collect();
    assert_eq!(
        textures,
        vec![TILESET, TILESET, TILESET, TILESET, PLAYER, ENEMY, ENEMY, POTION]
    );
}

#[test]
fn tiles_are_placed_on_grid_with_atlas_sources() {
    let world = small_world();
    let cmds = frame(&world, &AtlasLayout::default());

    let expected = [
        (Vec2::new(0.0, 0.0), Rect::new(0.0, 0.0, 16.0, 16.0)),
        (Vec2::new(16.0, 0.0), Rect::new(16.0, 0.0, 16.0, 16.0)),
        (Vec2::new(0.0, 16.0), Rect::new(32.0, 0.0, 16.0, 16.0)),
        // Top layer, id 24 → second atlas row, second column.
        (Vec2::new(16.0, 16.0), Rect::new(16.0, 16.0, 16.0, 16.0)),
    ];
    for (cmd, (dest, src)) in cmds.iter().zip(expected) {
        assert_eq!(cmd.dest, dest);
        assert_eq!(cmd.src, src);
    }
}

#[test]
fn empty_tiles_emit_nothing() {
    let mut world = small_world();
    world.tilemap.layers[0].data = vec![0, -3, 0, 0];
    world.tilemap.layers[1].data = vec![0; 4];
    let cmds = frame(&world, &AtlasLayout::default());
    assert!(cmds.iter().all(|c| c.texture != TILESET));
}

#[test]
fn sprites_use_fixed_source_rect() {
    let world = small_world();
    let cmds = frame(&world, &AtlasLayout::default());
    for cmd in cmds.iter().filter(|c| c.texture != TILESET) {
        assert_eq!(cmd.src, SPRITE_SRC);
    }
    let player = cmds.iter().find(|c| c.texture == PLAYER).unwrap();
    assert_eq!(player.dest, Vec2::new(10.0, 20.0));
}

#[test]
fn camera_offset_applies_to_everything() {
    let mut world = small_world();
    world.camera = Camera::new(-5.0, -7.0);
    let base = frame(&{
        let mut w = world.clone();
        w.camera = Camera::default();
        w
    }, &AtlasLayout::default());
    let shifted = frame(&world, &AtlasLayout::default());

    assert_eq!(base.len(), shifted.len());
    for (a, b) in base.iter().zip(&shifted) {
        assert_eq!(b.dest, a.dest + Vec2::new(-5.0, -7.0));
        assert_eq!(a.src, b.src);
    }
}

#[test]
fn consumed_potions_are_not_drawn() {
    let mut world = small_world();
    world.potions[0].consumed = true;
    let cmds = frame(&world, &AtlasLayout::default());
    assert!(cmds.iter().all(|c| c.texture != POTION));
}

// ── Batching ──────────────────────────────────────────────────────────────────

fn sizes(id: TextureId) -> Option<(u32, u32)> {
    match id {
        TILESET => Some((352, 64)),
        PLAYER | ENEMY | POTION => Some((16, 16)),
        _ => None,
    }
}

#[test]
fn consecutive_commands_share_a_batch() {
    let world = small_world();
    let cmds = frame(&world, &AtlasLayout::default());
    let (verts, batches) = build_batches(&cmds, sizes);

    assert_eq!(verts.len(), cmds.len() * 6);
    assert_eq!(
        batches,
        vec![
            Batch { texture: TILESET, vertices: 0..24 },
            Batch { texture: PLAYER, vertices: 24..30 },
            Batch { texture: ENEMY, vertices: 30..42 },
            Batch { texture: POTION, vertices: 42..48 },
        ]
    );
}

#[test]
fn interleaved_textures_keep_draw_order() {
    let cmd = |texture| DrawCommand { texture, src: SPRITE_SRC, dest: Vec2::ZERO };
    let cmds = [cmd(PLAYER), cmd(ENEMY), cmd(PLAYER)];
    let (_, batches) = build_batches(&cmds, sizes);
    let order: Vec<TextureId> = batches.iter().map(|b| b.texture).collect();
    assert_eq!(order, vec![PLAYER, ENEMY, PLAYER]);
}

#[test]
fn unknown_textures_are_skipped() {
    let cmds = [
        DrawCommand { texture: TextureId(99), src: SPRITE_SRC, dest: Vec2::ZERO },
        DrawCommand { texture: PLAYER, src: SPRITE_SRC, dest: Vec2::ZERO },
    ];
    let (verts, batches) = build_batches(&cmds, sizes);
    assert_eq!(verts.len(), 6);
    assert_eq!(batches, vec![Batch { texture: PLAYER, vertices: 0..6 }]);
}

#[test]
fn quad_covers_destination_and_normalises_uvs() {
    let cmds = [DrawCommand {
        texture: TILESET,
        src: Rect::new(16.0, 16.0, 16.0, 16.0),
        dest: Vec2::new(32.0, 48.0),
    }];
    let (verts, _) = build_batches(&cmds, sizes);
    // Vertex order: tl, bl, tr, tr, bl, br.
    assert_eq!(verts[0].position, [32.0, 48.0]);
    assert_eq!(verts[5].position, [48.0, 64.0]);
    assert_eq!(verts[0].uv, [16.0 / 352.0, 16.0 / 64.0]);
    assert_eq!(verts[5].uv, [32.0 / 352.0, 32.0 / 64.0]);
}
