//! Keyboard input handling

use std::collections::HashSet;

use game_core::{Config, InputSnapshot};
#[cfg(target_arch = "wasm32")]
use web_sys::KeyboardEvent;

/// Keys currently held down, by `KeyboardEvent.key` name
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    held: HashSet<String>,
    /// A bound key went down since the last snapshot
    pressed: bool,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press; returns true if the key controls a paddle
    pub fn handle_key_down(&mut self, key: &str, config: &Config) -> bool {
        if config.control_for_key(key).is_none() {
            return false;
        }
        self.held.insert(key.to_string());
        self.pressed = true;
        true
    }

    /// Record a key release; returns true if the key controls a paddle
    pub fn handle_key_up(&mut self, key: &str, config: &Config) -> bool {
        if config.control_for_key(key).is_none() {
            return false;
        }
        self.held.remove(key);
        true
    }

    /// Drop every held key, e.g. when the page loses focus
    pub fn release_all(&mut self) {
        self.held.clear();
        self.pressed = false;
    }

    /// Held keys as a per-player snapshot for the next tick.
    ///
    /// Carries any press seen since the previous snapshot, so a key tapped
    /// and released between two frames still counts once.
    pub fn snapshot(&mut self, config: &Config) -> InputSnapshot {
        let snapshot =
            InputSnapshot::from_keys(self.held.iter().map(|key| (key.as_str(), true)), config);
        if std::mem::take(&mut self.pressed) {
            snapshot.with_press()
        } else {
            snapshot
        }
    }
}

/// Extract key from keyboard event
#[cfg(target_arch = "wasm32")]
pub fn key_from_event(event: &KeyboardEvent) -> String {
    event.key()
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::PlayerId;

    #[test]
    fn test_bound_keys_are_tracked() {
        let config = Config::new();
        let mut keys = KeyState::new();

        assert!(keys.handle_key_down("w", &config));
        assert!(keys.handle_key_down("ArrowDown", &config));
        assert!(!keys.handle_key_down("q", &config));

        let snapshot = keys.snapshot(&config);
        assert_eq!(snapshot.direction(PlayerId::One), -1);
        assert_eq!(snapshot.direction(PlayerId::Two), 1);
    }

    #[test]
    fn test_release_stops_movement() {
        let config = Config::new();
        let mut keys = KeyState::new();
        keys.handle_key_down("s", &config);
        keys.handle_key_up("s", &config);
        let tapped = keys.snapshot(&config);
        assert!(!tapped.any_held());
        assert!(tapped.pressed(), "the tap is reported once");
        assert!(!keys.snapshot(&config).pressed());

        keys.handle_key_down("ArrowUp", &config);
        keys.release_all();
        assert!(!keys.snapshot(&config).any_held());
    }

    #[test]
    fn test_unbound_key_is_not_a_press() {
        let config = Config::new();
        let mut keys = KeyState::new();
        keys.handle_key_down("Enter", &config);
        assert!(!keys.snapshot(&config).wants_start());
    }

    #[test]
    fn test_both_directions_cancel() {
        let config = Config::new();
        let mut keys = KeyState::new();
        keys.handle_key_down("w", &config);
        keys.handle_key_down("s", &config);
        let snapshot = keys.snapshot(&config);
        assert_eq!(snapshot.direction(PlayerId::One), 0);
        assert!(snapshot.any_held());
    }
}
