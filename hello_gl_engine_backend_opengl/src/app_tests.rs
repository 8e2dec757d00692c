//! Unit tests for app.rs
//!
//! Key mapping only; window creation needs a display.

use super::*;

#[test]
fn test_escape_maps_to_escape() {
    assert_eq!(map_key(KeyCode::Escape), Some(Key::Escape));
}

#[test]
fn test_arrows_and_wasd_map_to_directions() {
    assert_eq!(map_key(KeyCode::ArrowUp), Some(Key::Up));
    assert_eq!(map_key(KeyCode::KeyW), Some(Key::Up));
    assert_eq!(map_key(KeyCode::ArrowLeft), Some(Key::Left));
    assert_eq!(map_key(KeyCode::KeyD), Some(Key::Right));
    assert_eq!(map_key(KeyCode::KeyS), Some(Key::Down));
}

#[test]
fn test_unmapped_keys_ignored() {
    assert_eq!(map_key(KeyCode::KeyQ), None);
    assert_eq!(map_key(KeyCode::Enter), None);
}
