use std::fs;
use std::path::Path;

use image::{Rgba, RgbaImage};
use overworld::assets::{AssetPaths, Assets, load_image};
use overworld::error::{AssetError, GameError};

const MAP: &str = r#"{"layers":[{"data":[1,2,3,4],"height":2,"width":2}]}"#;

fn write_png(path: &Path, w: u32, h: u32) {
    RgbaImage::from_pixel(w, h, Rgba([200, 40, 40, 255])).save(path).unwrap();
}

/// Populate `root` with the standard asset layout.
fn populate(root: &Path) -> AssetPaths {
    let paths = AssetPaths::under(root);
    fs::create_dir_all(paths.player.parent().unwrap()).unwrap();
    fs::create_dir_all(paths.map.parent().unwrap()).unwrap();
    write_png(&paths.player, 16, 16);
    write_png(&paths.enemy, 16, 16);
    write_png(&paths.potion, 16, 16);
    write_png(&paths.tileset, 352, 32);
    fs::write(&paths.map, MAP).unwrap();
    paths
}

#[test]
fn default_paths_match_asset_layout() {
    let paths = AssetPaths::default();
    assert_eq!(paths.player, Path::new("assets/images/inspector.png"));
    assert_eq!(paths.enemy, Path::new("assets/images/noble.png"));
    assert_eq!(paths.potion, Path::new("assets/images/LifePot.png"));
    assert_eq!(paths.tileset, Path::new("assets/images/TilesetFloor.png"));
    assert_eq!(paths.map, Path::new("assets/maps/spawn.json"));
}

#[test]
fn load_decodes_everything() {
    let dir = tempfile::tempdir().unwrap();
    let paths = populate(dir.path());

    let assets = Assets::load(&paths).unwrap();
    assert_eq!(assets.player.dimensions(), (16, 16));
    assert_eq!(assets.tileset.dimensions(), (352, 32));
    assert_eq!(assets.tilemap.layers[0].data, vec![1, 2, 3, 4]);
}

#[test]
fn missing_image_fails_whole_load() {
    let dir = tempfile::tempdir().unwrap();
    let paths = populate(dir.path());
    fs::remove_file(&paths.potion).unwrap();

    match Assets::load(&paths) {
        Err(GameError::AssetLoad { path, .. }) => assert_eq!(path, paths.potion),
        Err(other) => panic!("expected AssetLoad, got {other:?}"),
        Ok(_) => panic!("load succeeded without a potion image"),
    }
}

#[test]
fn corrupt_image_is_asset_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.png");
    fs::write(&path, b"definitely not a png").unwrap();
    assert!(matches!(
        load_image(&path),
        Err(GameError::AssetLoad { source: AssetError::Image(_), .. })
    ));
}

#[test]
fn malformed_map_fails_whole_load() {
    let dir = tempfile::tempdir().unwrap();
    let paths = populate(dir.path());
    fs::write(&paths.map, r#"{"layers":[{"data":[1],"height":2,"width":2}]}"#).unwrap();
    assert!(matches!(Assets::load(&paths), Err(GameError::MalformedTilemap(_))));
}
