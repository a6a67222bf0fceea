use rand::Rng;

use crate::{Config, PlayerId};

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Uniform in [0, 1)
    pub fn unit(&mut self) -> f32 {
        self.0.gen::<f32>()
    }

    /// Uniform in [-1, 1)
    pub fn signed_unit(&mut self) -> f32 {
        self.unit() * 2.0 - 1.0
    }

    pub fn coin(&mut self) -> bool {
        self.0.gen_bool(0.5)
    }

    /// True with probability `p`; `p` outside [0, 1] saturates
    pub fn chance(&mut self, p: f64) -> bool {
        self.0.gen::<f64>() < p
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Events {
    pub scored: Option<PlayerId>,
    pub game_over: Option<PlayerId>,
    pub powerups_collected: Vec<PlayerId>,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.scored = None;
        self.game_over = None;
        self.powerups_collected.clear();
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Power-up spawn timer; only advances while play is active
#[derive(Debug, Clone, Copy, Default)]
pub struct SpawnTimer {
    pub last_roll_ms: f64,
}

impl SpawnTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true once per elapsed interval and re-arms the timer
    pub fn due(&mut self, now: f64, interval_ms: f64) -> bool {
        if now - self.last_roll_ms >= interval_ms {
            self.last_roll_ms = now;
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.last_roll_ms = 0.0;
    }
}

/// Which control keys are held during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    up: [bool; 2],
    down: [bool; 2],
    /// A bound key went down since the previous tick, even if already released
    pressed: bool,
}

impl InputSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot from key-name/held pairs; unbound keys are ignored
    pub fn from_keys<'a, I>(keys: I, config: &Config) -> Self
    where
        I: IntoIterator<Item = (&'a str, bool)>,
    {
        let mut snapshot = Self::new();
        for (key, held) in keys {
            if let Some((player, dir)) = config.control_for_key(key) {
                snapshot.set(player, dir, held);
            }
        }
        snapshot
    }

    pub fn set(&mut self, player: PlayerId, dir: i8, held: bool) {
        match dir.signum() {
            -1 => self.up[player.index()] = held,
            1 => self.down[player.index()] = held,
            _ => {}
        }
    }

    pub fn with(mut self, player: PlayerId, dir: i8) -> Self {
        self.set(player, dir, true);
        self
    }

    /// Mark a bound key press that may no longer be held
    pub fn with_press(mut self) -> Self {
        self.pressed = true;
        self
    }

    pub fn pressed(&self) -> bool {
        self.pressed
    }

    pub fn up(&self, player: PlayerId) -> bool {
        self.up[player.index()]
    }

    pub fn down(&self, player: PlayerId) -> bool {
        self.down[player.index()]
    }

    /// Net direction: down minus up, so holding both cancels out
    pub fn direction(&self, player: PlayerId) -> i8 {
        self.down(player) as i8 - self.up(player) as i8
    }

    pub fn any_held(&self) -> bool {
        self.up.iter().chain(self.down.iter()).any(|held| *held)
    }

    /// True when this tick should leave the start screen
    pub fn wants_start(&self) -> bool {
        self.pressed() || self.any_held()
    }
}
