use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::WindowId;

use crate::assets::{AssetPaths, Assets};
use crate::atlas::AtlasLayout;
use crate::config::{GameConfig, HealRule};
use crate::error::GameError;
use crate::input::{Action, ActionMap, InputState};
use crate::render;
use crate::renderer::Renderer;
use crate::window::window_attributes;
use crate::world::{Textures, World};

/// Longest wall-clock gap fed into the fixed-step accumulator. Anything
/// longer (debugger pause, window drag) is dropped rather than replayed.
const MAX_FRAME_DELTA: f32 = 0.25;

// ── GameBuilder ─────────────────────────────────────────────────────────────

pub struct GameBuilder {
    config: GameConfig,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self { config: GameConfig::default() }
    }
}

impl GameBuilder {
    pub fn new() -> Self { Self::default() }
    pub fn from_config(config: GameConfig) -> Self { Self { config } }

    pub fn with_title(mut self, title: &str) -> Self { self.config.window.title = title.into(); self }
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.config.window.physical_width = width; self.config.window.physical_height = height; self
    }
    pub fn with_logical_size(mut self, width: u32, height: u32) -> Self {
        self.config.window.logical_width = width; self.config.window.logical_height = height; self
    }
    pub fn with_ups(mut self, ups: u32) -> Self { self.config.target_ups = ups; self }
    pub fn with_heal_rule(mut self, rule: HealRule) -> Self { self.config.heal_rule = rule; self }
    pub fn with_atlas_columns(mut self, columns: u32) -> Self { self.config.atlas_columns = columns; self }

    /// Read assets from `root/images` and `root/maps` instead of `./assets`.
    pub fn with_asset_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.config.assets = AssetPaths::under(root.into()); self
    }

    pub fn config(&self) -> &GameConfig { &self.config }

    /// Load every asset, open the window and run until the window closes.
    ///
    /// Asset failures surface before any window is created.
    pub fn run(self) -> Result<(), GameError> {
        let assets = Assets::load(&self.config.assets)?;
        let event_loop = EventLoop::new()?;
        let fixed_dt = 1.0 / self.config.target_ups.max(1) as f32;
        let mut app = App {
            atlas: self.config.atlas_layout(),
            config: self.config,
            assets: Some(assets),
            session: None,
            input: InputState::new(),
            actions: ActionMap::default_bindings(),
            last_instant: None,
            accumulator: 0.0,
            fixed_dt,
            error: None,
        };
        event_loop.run_app(&mut app)?;
        match app.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

// ── App (winit ApplicationHandler) ──────────────────────────────────────────

/// Live state once the window and GPU exist.
struct Session {
    renderer: Renderer,
    world: World,
}

struct App {
    config: GameConfig,
    atlas: AtlasLayout,
    /// Decoded images and tilemap, consumed when the window first resumes.
    assets: Option<Assets>,
    session: Option<Session>,
    input: InputState,
    actions: ActionMap<Action>,
    last_instant: Option<Instant>,
    accumulator: f32,
    fixed_dt: f32,
    /// First fatal error; reported by `GameBuilder::run` after the loop exits.
    error: Option<GameError>,
}

impl App {
    fn start(&mut self, event_loop: &ActiveEventLoop) -> Result<Session, GameError> {
        let Some(assets) = self.assets.take() else {
            return Err(GameError::Renderer("window resumed without assets".into()));
        };

        let window = Arc::new(
            event_loop
                .create_window(window_attributes(&self.config.window))
                .map_err(GameError::Window)?,
        );
        let mut renderer = pollster::block_on(Renderer::new(
            window,
            self.config.window.clone(),
            self.config.clear_color,
        ))?;

        let textures = Textures {
            player: renderer.load_texture("player", &assets.player),
            enemy: renderer.load_texture("enemy", &assets.enemy),
            potion: renderer.load_texture("potion", &assets.potion),
            tileset: renderer.load_texture("tileset", &assets.tileset),
        };
        let world = World::spawn(assets.tilemap, textures, self.config.world_settings());
        log::info!(
            "world spawned: {} enemies, {} potions, heal rule {:?}",
            world.enemies.len(),
            world.potions.len(),
            world.settings.heal_rule
        );

        Ok(Session { renderer, world })
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(session) = self.session.as_mut() else { return };

        let now = Instant::now();
        let elapsed = match self.last_instant {
            Some(prev) => now.duration_since(prev).as_secs_f32().min(MAX_FRAME_DELTA),
            None => self.fixed_dt,
        };
        self.last_instant = Some(now);
        self.accumulator += elapsed;

        if self.actions.is_pressed(Action::Quit, &self.input) {
            event_loop.exit();
            return;
        }

        while self.accumulator >= self.fixed_dt {
            let movement = self.actions.movement(&self.input);
            session.world.tick(&movement);
            self.accumulator -= self.fixed_dt;
        }

        let commands = render::frame(&session.world, &self.atlas);
        match session.renderer.render(&commands) {
            Ok(_) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let size = session.renderer.window.inner_size();
                session.renderer.resize(size);
            }
            Err(e) => log::warn!("render error: {e}"),
        }

        self.input.clear_frame_state();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.session.is_some() {
            return;
        }
        match self.start(event_loop) {
            Ok(session) => self.session = Some(session),
            Err(e) => {
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(session) = self.session.as_ref() {
            session.renderer.window.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::Resized(size) => {
                if let Some(session) = self.session.as_mut() {
                    session.renderer.resize(size);
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            WindowEvent::KeyboardInput {
                event: KeyEvent { physical_key: PhysicalKey::Code(code), state, .. },
                ..
            } => match state {
                ElementState::Pressed => self.input.press(code),
                ElementState::Released => self.input.release(code),
            },

            WindowEvent::Focused(false) => {
                // Key-up events are lost while unfocused; don't keep walking.
                self.input.keys_held.clear();
            }

            _ => {}
        }
    }
}
