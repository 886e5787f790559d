pub mod app;
pub mod assets;
pub mod atlas;
pub mod camera;
pub mod config;
pub mod entities;
pub mod error;
pub mod geometry;
pub mod input;
pub mod render;
pub mod renderer;
pub mod tilemap;
pub mod window;
pub mod world;

pub use app::GameBuilder;
pub use config::{GameConfig, HealRule, WorldSettings};
pub use error::GameError;
pub use world::World;
