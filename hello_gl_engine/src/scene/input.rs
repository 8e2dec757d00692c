/// Input polling collaborator

use rustc_hash::FxHashSet;

/// Keys the scenes react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Space,
    Up,
    Down,
    Left,
    Right,
}

/// Queried once per frame loop iteration
pub trait InputSource {
    /// The window was asked to close
    fn close_requested(&self) -> bool;

    /// `key` is currently held down
    fn is_key_pressed(&self, key: Key) -> bool;
}

/// Input state fed from window events
#[derive(Debug, Clone, Default)]
pub struct InputState {
    close_requested: bool,
    pressed: FxHashSet<Key>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_close(&mut self) {
        self.close_requested = true;
    }

    pub fn press(&mut self, key: Key) {
        self.pressed.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.pressed.remove(&key);
    }
}

impl InputSource for InputState {
    fn close_requested(&self) -> bool {
        self.close_requested
    }

    fn is_key_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }
}
