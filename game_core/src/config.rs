use crate::{Params, PlayerId};

/// Keys that drive one player's paddle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    pub up: String,
    pub down: String,
}

impl KeyBinding {
    pub fn new(up: &str, down: &str) -> Self {
        Self {
            up: up.to_string(),
            down: down.to_string(),
        }
    }
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub countdown_secs: u8,
    pub countdown_step_ms: f64,
    pub collision_debounce_ms: f64,
    pub powerup_interval_ms: f64,
    pub powerup_chance: f64,
    pub paddle_speed_ratio: f32,
    pub bindings: [KeyBinding; 2],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            countdown_secs: Params::COUNTDOWN_SECS,
            countdown_step_ms: Params::COUNTDOWN_STEP_MS,
            collision_debounce_ms: Params::COLLISION_DEBOUNCE_MS,
            powerup_interval_ms: Params::POWERUP_INTERVAL_MS,
            powerup_chance: Params::POWERUP_CHANCE,
            paddle_speed_ratio: Params::PADDLE_SPEED_RATIO,
            bindings: [KeyBinding::new("w", "s"), KeyBinding::new("ArrowUp", "ArrowDown")],
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn binding(&self, player: PlayerId) -> &KeyBinding {
        &self.bindings[player.index()]
    }

    /// Resolve a key name to the player and direction it controls
    pub fn control_for_key(&self, key: &str) -> Option<(PlayerId, i8)> {
        PlayerId::ALL.into_iter().find_map(|player| {
            let binding = self.binding(player);
            if binding.up == key {
                Some((player, -1))
            } else if binding.down == key {
                Some((player, 1))
            } else {
                None
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let config = Config::new();
        assert_eq!(config.control_for_key("w"), Some((PlayerId::One, -1)));
        assert_eq!(config.control_for_key("s"), Some((PlayerId::One, 1)));
        assert_eq!(config.control_for_key("ArrowUp"), Some((PlayerId::Two, -1)));
        assert_eq!(config.control_for_key("ArrowDown"), Some((PlayerId::Two, 1)));
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let config = Config::new();
        assert_eq!(config.control_for_key("x"), None);
        assert_eq!(config.control_for_key("W"), None, "Bindings are case-sensitive");
    }

    #[test]
    fn test_rebinding() {
        let mut config = Config::new();
        config.bindings[1] = KeyBinding::new("i", "k");
        assert_eq!(config.control_for_key("i"), Some((PlayerId::Two, -1)));
        assert_eq!(config.control_for_key("ArrowUp"), None);
    }
}
