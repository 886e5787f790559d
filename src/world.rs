use glam::Vec2;

use crate::camera::Camera;
use crate::config::{HealRule, WorldSettings};
use crate::entities::{Enemy, HasSprite, Player, Potion, Sprite, TextureId};
use crate::geometry::step_toward;
use crate::input::MoveInput;
use crate::tilemap::Tilemap;

/// Texture handles for the four startup images.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Textures {
    pub player: TextureId,
    pub enemy: TextureId,
    pub potion: TextureId,
    pub tileset: TextureId,
}

/// What happened during one tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Total health gained from potions.
    pub healed: u32,
}

/// Owns all game state for the lifetime of the application.
#[derive(Clone, Debug)]
pub struct World {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub potions: Vec<Potion>,
    pub tilemap: Tilemap,
    pub tileset: TextureId,
    pub camera: Camera,
    pub settings: WorldSettings,
}

impl World {
    pub fn new(player: Player, tilemap: Tilemap, tileset: TextureId, settings: WorldSettings) -> Self {
        Self {
            player,
            enemies: Vec::new(),
            potions: Vec::new(),
            tilemap,
            tileset,
            camera: Camera::default(),
            settings,
        }
    }

    /// The starting level: player near the bottom centre, one idle and one
    /// chasing enemy, a single potion to the west.
    pub fn spawn(tilemap: Tilemap, textures: Textures, settings: WorldSettings) -> Self {
        let mut world = Self::new(
            Player::new(Sprite::new(textures.player, 160.0, 220.0)),
            tilemap,
            textures.tileset,
            settings,
        );
        world.enemies = vec![
            Enemy::new(Sprite::new(textures.enemy, 100.0, 100.0), false),
            Enemy::new(Sprite::new(textures.enemy, 200.0, 100.0), true),
        ];
        world.potions = vec![Potion::new(Sprite::new(textures.potion, 50.0, 200.0), 2)];
        world
    }

    /// Advance the simulation by one frame.
    ///
    /// Order is fixed: player movement, enemy chase, potion heal, camera.
    pub fn tick(&mut self, input: &MoveInput) -> TickReport {
        self.move_player(input);
        self.chase_player();
        let healed = self.apply_potions();
        self.update_camera();
        TickReport { healed }
    }

    fn move_player(&mut self, input: &MoveInput) {
        let step = input.direction() * self.settings.player_speed;
        let pos = self.player.pos() + step;
        self.player.set_pos(pos);
    }

    fn chase_player(&mut self) {
        let target = self.player.pos();
        let speed = self.settings.enemy_speed;
        for enemy in self.enemies.iter_mut().filter(|e| e.follows_player) {
            let pos = step_toward(enemy.pos(), target, speed);
            enemy.set_pos(pos);
        }
    }

    fn apply_potions(&mut self) -> u32 {
        let size = self.settings.sprite_size as f32;
        let player_box = self.player.sprite.bounds(size);
        let player_x = self.player.pos().x;
        let mut healed = 0u32;

        for potion in &mut self.potions {
            let triggered = match self.settings.heal_rule {
                HealRule::AxisParity => player_x < potion.pos().x,
                HealRule::Proximity => {
                    !potion.consumed && player_box.overlaps(&potion.sprite.bounds(size))
                }
            };
            if !triggered {
                continue;
            }
            if self.settings.heal_rule == HealRule::Proximity {
                potion.consumed = true;
            }
            let health = self.player.heal(potion.amount);
            healed = healed.saturating_add(potion.amount);
            log::info!("health: {health}");
        }
        healed
    }

    fn update_camera(&mut self) {
        let half_sprite = self.settings.sprite_size as f32 / 2.0;
        let target = self.player.pos() + Vec2::splat(half_sprite);
        let map_size = self.tilemap.pixel_size(self.settings.tile_size);
        self.camera.update(target, map_size, self.settings.viewport);
    }
}
