use std::collections::{HashMap, HashSet};
use std::hash::Hash;
pub use winit::keyboard::KeyCode;

/// Raw keyboard state for a single frame.
#[derive(Debug, Default)]
pub struct InputState {
    pub keys_held: HashSet<KeyCode>,
    pub keys_pressed: HashSet<KeyCode>,
    pub keys_released: HashSet<KeyCode>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key going down. Auto-repeat does not re-trigger `pressed`.
    pub fn press(&mut self, key: KeyCode) {
        if self.keys_held.insert(key) {
            self.keys_pressed.insert(key);
        }
    }

    pub fn release(&mut self, key: KeyCode) {
        self.keys_held.remove(&key);
        self.keys_released.insert(key);
    }

    /// Drop edge-triggered state; held keys persist across frames.
    pub fn clear_frame_state(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
    }

    pub fn is_key_held(&self, key: KeyCode) -> bool { self.keys_held.contains(&key) }
    pub fn is_key_pressed(&self, key: KeyCode) -> bool { self.keys_pressed.contains(&key) }
    pub fn is_key_released(&self, key: KeyCode) -> bool { self.keys_released.contains(&key) }
}

/// Logical actions understood by the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
    Quit,
}

/// Maps logical actions to one or more physical keys.
#[derive(Debug, Clone)]
pub struct ActionMap<A: Hash + Eq + Copy> {
    bindings: HashMap<A, Vec<KeyCode>>,
}

impl<A: Hash + Eq + Copy> ActionMap<A> {
    pub fn new() -> Self {
        Self { bindings: HashMap::new() }
    }

    pub fn bind(&mut self, action: A, key: KeyCode) {
        self.bindings.entry(action).or_default().push(key);
    }

    /// Returns true if any bound key went down this frame.
    pub fn is_pressed(&self, action: A, input: &InputState) -> bool {
        self.bindings
            .get(&action)
            .is_some_and(|keys| keys.iter().any(|&k| input.is_key_pressed(k)))
    }

    /// Returns true if any bound key is currently held.
    pub fn is_held(&self, action: A, input: &InputState) -> bool {
        self.bindings
            .get(&action)
            .is_some_and(|keys| keys.iter().any(|&k| input.is_key_held(k)))
    }
}

impl<A: Hash + Eq + Copy> Default for ActionMap<A> {
    fn default() -> Self { Self::new() }
}

impl ActionMap<Action> {
    /// Arrow keys move, WASD mirrors them, Escape quits.
    pub fn default_bindings() -> Self {
        let mut map = Self::new();
        map.bind(Action::Up, KeyCode::ArrowUp);
        map.bind(Action::Down, KeyCode::ArrowDown);
        map.bind(Action::Left, KeyCode::ArrowLeft);
        map.bind(Action::Right, KeyCode::ArrowRight);
        map.bind(Action::Up, KeyCode::KeyW);
        map.bind(Action::Down, KeyCode::KeyS);
        map.bind(Action::Left, KeyCode::KeyA);
        map.bind(Action::Right, KeyCode::KeyD);
        map.bind(Action::Quit, KeyCode::Escape);
        map
    }

    /// Sample the four movement directions for one simulation tick.
    pub fn movement(&self, input: &InputState) -> MoveInput {
        MoveInput {
            up: self.is_held(Action::Up, input),
            down: self.is_held(Action::Down, input),
            left: self.is_held(Action::Left, input),
            right: self.is_held(Action::Right, input),
        }
    }
}

/// Directional key snapshot consumed by `World::tick`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl MoveInput {
    pub const NONE: Self = Self { up: false, down: false, left: false, right: false };

    /// Unit-per-key direction; opposite keys cancel, diagonals are not normalised.
    pub fn direction(&self) -> glam::Vec2 {
        let axis = |neg: bool, pos: bool| pos as i8 as f32 - neg as i8 as f32;
        glam::Vec2::new(axis(self.left, self.right), axis(self.up, self.down))
    }
}
