use glam::Vec2;

use overworld::config::{GameConfig, HealRule};
use overworld::error::GameError;
use overworld::render::Color;
use overworld::GameBuilder;

#[test]
fn default_config_matches_original_game() {
    let cfg = GameConfig::default();
    assert_eq!(cfg.atlas_columns, 22);
    assert_eq!(cfg.tile_size, 16);
    assert_eq!(cfg.sprite_size, 16);
    assert_eq!(cfg.target_ups, 60);
    assert_eq!(cfg.heal_rule, HealRule::AxisParity);
    assert_eq!(cfg.clear_color, Color::rgb8(120, 180, 255));

    let world = cfg.world_settings();
    assert_eq!(world.viewport, Vec2::new(320.0, 240.0));
    assert_eq!(world.player_speed, 2.0);
    assert_eq!(world.enemy_speed, 1.0);
}

#[test]
fn builder_overrides_config() {
    let builder = GameBuilder::new()
        .with_title("test")
        .with_window_size(960, 720)
        .with_logical_size(480, 360)
        .with_ups(30)
        .with_heal_rule(HealRule::Proximity)
        .with_atlas_columns(8);
    let cfg = builder.config();
    assert_eq!(cfg.window.title, "test");
    assert_eq!((cfg.window.physical_width, cfg.window.physical_height), (960, 720));
    assert_eq!(cfg.world_settings().viewport, Vec2::new(480.0, 360.0));
    assert_eq!(cfg.target_ups, 30);
    assert_eq!(cfg.world_settings().heal_rule, HealRule::Proximity);
    assert_eq!(cfg.atlas_layout().columns, 8);
}

#[test]
fn run_fails_before_opening_a_window_when_assets_are_missing() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameBuilder::new().with_asset_root(dir.path()).run().unwrap_err();
    match err {
        GameError::AssetLoad { path, .. } => {
            assert_eq!(path, dir.path().join("images").join("inspector.png"));
        }
        other => panic!("expected AssetLoad, got {other:?}"),
    }
}
