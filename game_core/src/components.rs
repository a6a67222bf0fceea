use glam::Vec2;

use crate::{Aabb, GameRng, Layout, Params};

/// Which side a player is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub const ALL: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    pub fn color(self) -> Color {
        match self {
            PlayerId::One => Color::Blue,
            PlayerId::Two => Color::Red,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PlayerId::One => "Player 1",
            PlayerId::Two => "Player 2",
        }
    }
}

/// Cosmetic colors handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Gray,
    Blue,
    Red,
    Yellow,
}

impl Color {
    pub fn css(self) -> &'static str {
        match self {
            Color::Gray => "gray",
            Color::Blue => "blue",
            Color::Red => "red",
            Color::Yellow => "yellow",
        }
    }
}

/// Movement intent for a player's paddles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = stop, 1 = down
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// One side of the game. Every paddle slot the player owns is drawn at `y`.
#[derive(Debug, Clone)]
pub struct Player {
    pub id: PlayerId,
    pub score: u8, // equals the number of pool slots owned
    pub y: f32,
    pub paddle_height: f32,
    pub intent: PaddleIntent,
    pub powerups: Vec<PowerUp>,
}

impl Player {
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            score: Params::STARTING_SCORE,
            y: 0.0,
            paddle_height: 0.0,
            intent: PaddleIntent::new(),
            powerups: Vec::new(),
        }
    }

    pub fn update_paddle_height(&mut self, layout: &Layout) {
        self.paddle_height = layout.paddle_height_for(self.score);
    }

    pub fn move_paddle(&mut self, amount: f32, layout: &Layout) {
        self.y = layout.clamp_paddle_y(self.y + amount, self.paddle_height);
    }

    pub fn color(&self) -> Color {
        self.id.color()
    }
}

/// Both players, indexed by [`PlayerId`]
#[derive(Debug, Clone)]
pub struct Players([Player; 2]);

impl Players {
    pub fn new() -> Self {
        Self([Player::new(PlayerId::One), Player::new(PlayerId::Two)])
    }

    pub fn get(&self, id: PlayerId) -> &Player {
        &self.0[id.index()]
    }

    pub fn get_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.0[id.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Player> {
        self.0.iter_mut()
    }

    /// Put both paddle centers back in the middle of the canvas
    pub fn center_paddles(&mut self, layout: &Layout) {
        for player in self.iter_mut() {
            player.y = layout.height / 2.0;
        }
    }

    pub fn update_paddle_heights(&mut self, layout: &Layout) {
        for player in self.iter_mut() {
            player.update_paddle_height(layout);
        }
    }
}

impl Default for Players {
    fn default() -> Self {
        Self::new()
    }
}

/// Ball component - the single shared ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    /// Player credited with the last paddle contact
    pub owner: Option<PlayerId>,
    pub last_paddle_hit_ms: f64,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, size: f32) -> Self {
        Self {
            pos,
            vel,
            size,
            owner: None,
            last_paddle_hit_ms: 0.0,
        }
    }

    /// Serve from the center: random horizontal direction, random vertical drift
    pub fn reset(&mut self, layout: &Layout, rng: &mut GameRng) {
        self.pos = layout.center();
        self.size = layout.ball_size;

        let dir_x = if rng.coin() { 1.0 } else { -1.0 };
        self.vel = Vec2::new(
            dir_x * layout.width * Params::BALL_SERVE_X_RATIO,
            rng.signed_unit() * layout.height * Params::BALL_SERVE_Y_RATIO,
        );
        self.owner = None;
    }

    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    pub fn reverse_x(&mut self) {
        self.vel.x = -self.vel.x;
        self.pos.x += nudge(self.vel.x);
    }

    /// Bounce vertically, never leaving the ball in a purely horizontal line
    pub fn reverse_y(&mut self) {
        self.vel.y = -self.vel.y;
        let min_vertical = self.vel.x.abs() * Params::MIN_VERTICAL_SPEED_RATIO;
        if self.vel.y.abs() < min_vertical {
            self.vel.y = if self.vel.y > 0.0 {
                min_vertical
            } else {
                -min_vertical
            };
        }
        self.pos.y += nudge(self.vel.y);
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    pub fn tag(&mut self, player: PlayerId) {
        self.owner = Some(player);
    }

    pub fn color(&self) -> Color {
        self.owner.map_or(Color::Gray, PlayerId::color)
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center_size(self.pos, Vec2::splat(self.size))
    }
}

/// One-unit push in the direction of travel so the same contact is not hit twice
fn nudge(speed: f32) -> f32 {
    if speed > 0.0 {
        Params::BALL_NUDGE
    } else {
        -Params::BALL_NUDGE
    }
}

/// Collectible dropped on the field by the spawner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerUp {
    pub pos: Vec2,
    pub size: f32,
}

impl PowerUp {
    pub fn new(pos: Vec2, size: f32) -> Self {
        Self { pos, size }
    }

    pub fn color(&self) -> Color {
        Color::Yellow
    }
}
