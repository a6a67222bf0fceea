/// Game tuning parameters for ten-paddle Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Pool
    pub const TOTAL_PADDLES: usize = 10;
    pub const STARTING_SCORE: u8 = (Self::TOTAL_PADDLES / 2) as u8;

    // Session timing (milliseconds of wall-clock time)
    pub const COUNTDOWN_SECS: u8 = 3;
    pub const COUNTDOWN_STEP_MS: f64 = 1000.0;
    pub const COLLISION_DEBOUNCE_MS: f64 = 50.0;

    // Power-ups
    pub const POWERUP_INTERVAL_MS: f64 = 10_000.0;
    pub const POWERUP_CHANCE: f64 = 0.0;

    // Geometry, as fractions of the canvas
    pub const PADDLE_WIDTH_RATIO: f32 = 0.01; // of width
    pub const BALL_SIZE_RATIO: f32 = 0.02; // of min(width, height)
    pub const BORDER_RATIO: f32 = 0.01; // of min(width, height)
    pub const WALL_HEIGHT_RATIO: f32 = 0.25; // of height
    pub const PADDLE_AREA_RATIO: f32 = 0.6; // of play area width
    pub const PADDLE_HEIGHT_DIVISOR: f32 = 3.0;
    pub const PADDLE_SPEED_RATIO: f32 = 0.01; // of height, per tick

    // Hud sizing handed to adapters
    pub const SCOREBOARD_FONT_RATIO: f32 = 0.03;
    pub const PROMPT_FONT_RATIO: f32 = 0.06;

    // Ball
    pub const BALL_SERVE_X_RATIO: f32 = 0.005; // of width
    pub const BALL_SERVE_Y_RATIO: f32 = 0.003; // of height
    pub const BALL_SPEED_DIAGONAL_RATIO: f32 = 0.005;
    pub const BALL_NUDGE: f32 = 1.0;
    pub const MIN_VERTICAL_SPEED_RATIO: f32 = 0.2;
    pub const WALL_JITTER: f32 = 0.25;
    pub const MAX_DEFLECTION: f32 = std::f32::consts::FRAC_PI_4;
}
