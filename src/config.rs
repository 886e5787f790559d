use glam::Vec2;

use crate::assets::AssetPaths;
use crate::atlas::AtlasLayout;
use crate::render::Color;
use crate::window::WindowConfig;

/// How potions restore health.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum HealRule {
    /// Heal every tick while the player stands anywhere left of the potion
    /// (`player.x < potion.x`). Y is ignored and the potion is never used up.
    #[default]
    AxisParity,
    /// Heal once when the player's sprite box overlaps the potion's, then the
    /// potion is consumed and no longer drawn.
    Proximity,
}

/// Everything the simulation needs to know about scale and rules.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WorldSettings {
    /// Logical viewport size in pixels.
    pub viewport: Vec2,
    /// Side of one map tile in pixels.
    pub tile_size: u32,
    /// Side of one entity sprite in pixels.
    pub sprite_size: u32,
    /// Player pixels per tick per held direction.
    pub player_speed: f32,
    /// Chasing enemy pixels per tick per axis.
    pub enemy_speed: f32,
    pub heal_rule: HealRule,
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            viewport: Vec2::new(320.0, 240.0),
            tile_size: 16,
            sprite_size: 16,
            player_speed: 2.0,
            enemy_speed: 1.0,
            heal_rule: HealRule::AxisParity,
        }
    }
}

/// Complete runtime configuration.
#[derive(Clone, Debug)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub assets: AssetPaths,
    /// Tile atlas columns; tied to the atlas image width.
    pub atlas_columns: u32,
    pub tile_size: u32,
    pub sprite_size: u32,
    pub player_speed: f32,
    pub enemy_speed: f32,
    pub heal_rule: HealRule,
    /// Fixed simulation updates per second.
    pub target_ups: u32,
    pub clear_color: Color,
}

impl Default for GameConfig {
    fn default() -> Self {
        let world = WorldSettings::default();
        Self {
            window: WindowConfig::default(),
            assets: AssetPaths::default(),
            atlas_columns: AtlasLayout::DEFAULT_COLUMNS,
            tile_size: world.tile_size,
            sprite_size: world.sprite_size,
            player_speed: world.player_speed,
            enemy_speed: world.enemy_speed,
            heal_rule: world.heal_rule,
            target_ups: 60,
            clear_color: Color::SKY,
        }
    }
}

impl GameConfig {
    pub fn world_settings(&self) -> WorldSettings {
        WorldSettings {
            viewport: Vec2::new(self.window.logical_width as f32, self.window.logical_height as f32),
            tile_size: self.tile_size,
            sprite_size: self.sprite_size,
            player_speed: self.player_speed,
            enemy_speed: self.enemy_speed,
            heal_rule: self.heal_rule,
        }
    }

    pub fn atlas_layout(&self) -> AtlasLayout {
        AtlasLayout::new(self.atlas_columns, self.tile_size)
    }
}
