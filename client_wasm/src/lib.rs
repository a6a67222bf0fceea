//! Browser adapter for the ten-paddle Pong core
//!
//! Owns a [`Simulation`], turns keyboard events into input snapshots and
//! exposes each frame as flat arrays a canvas renderer can draw directly.
//! Drawing, the animation loop and the game-over alert stay in JavaScript.

pub mod input;

use game_core::{
    win_message, Config, Events, FrameState, PlayerId, SessionState, Simulation,
};
use input::KeyState;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Ignore the error if a logger is already installed
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Local two-player game driven by the page's animation loop
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub struct PongApp {
    sim: Simulation,
    keys: KeyState,
    frame: FrameState,
    last_events: Events,
    winner_message: Option<String>,
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
impl PongApp {
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(constructor))]
    pub fn new(width: f32, height: f32, seed: u64) -> Result<PongApp, String> {
        let sim = Simulation::new(width, height, Config::new(), seed).map_err(|e| e.to_string())?;
        log::info!("pong ready on a {}x{} canvas", width, height);
        let frame = sim.frame();
        Ok(Self {
            sim,
            keys: KeyState::new(),
            frame,
            last_events: Events::new(),
            winner_message: None,
        })
    }

    /// Canvas changed size
    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), String> {
        self.sim.resize(width, height).map_err(|e| e.to_string())?;
        self.frame = self.sim.frame();
        Ok(())
    }

    /// Returns true if the key is bound, so the page can prevent scrolling
    pub fn key_down(&mut self, key: &str) -> bool {
        self.keys.handle_key_down(key, self.sim.config())
    }

    pub fn key_up(&mut self, key: &str) -> bool {
        self.keys.handle_key_up(key, self.sim.config())
    }

    /// Forget held keys, e.g. on window blur
    pub fn release_keys(&mut self) {
        self.keys.release_all();
    }

    /// Advance one frame; `now` is the rAF timestamp in milliseconds
    pub fn tick(&mut self, now: f64) {
        let input = self.keys.snapshot(self.sim.config());
        let events = self.sim.step(&input, now);
        if let Some(winner) = events.game_over {
            self.winner_message = Some(win_message(winner));
        }
        self.last_events = events;
        self.frame = self.sim.frame();
    }

    /// Dismiss the game-over screen and reset to 5/5
    pub fn acknowledge_game_over(&mut self) -> bool {
        let reset = self.sim.acknowledge_game_over();
        if reset {
            self.keys.release_all();
            self.winner_message = None;
            self.frame = self.sim.frame();
        }
        reset
    }

    /// Winner text, handed out once per finished game
    pub fn take_winner_message(&mut self) -> Option<String> {
        self.winner_message.take()
    }

    pub fn state_name(&self) -> String {
        format!("{:?}", self.frame.state)
    }

    pub fn is_game_over(&self) -> bool {
        self.frame.state == SessionState::GameOver
    }

    pub fn countdown(&self) -> u8 {
        self.frame.countdown
    }

    pub fn width(&self) -> f32 {
        self.frame.width
    }

    pub fn height(&self) -> f32 {
        self.frame.height
    }

    pub fn score_one(&self) -> u8 {
        self.frame.score(PlayerId::One)
    }

    pub fn score_two(&self) -> u8 {
        self.frame.score(PlayerId::Two)
    }

    pub fn scoreboard(&self) -> String {
        self.frame.scoreboard()
    }

    pub fn prompt(&self) -> Option<String> {
        self.frame.prompt()
    }

    pub fn scoreboard_font_size(&self) -> f32 {
        self.frame.scoreboard_font_size
    }

    pub fn prompt_font_size(&self) -> f32 {
        self.frame.prompt_font_size
    }

    /// 1 or 2 for the player who scored last tick, 0 otherwise
    pub fn last_scored(&self) -> u8 {
        self.last_events.scored.map_or(0, player_number)
    }

    pub fn ball_hit_paddle(&self) -> bool {
        self.last_events.ball_hit_paddle
    }

    pub fn ball_hit_wall(&self) -> bool {
        self.last_events.ball_hit_wall
    }

    /// `[x, y, size]` of the ball center, empty if there is no ball
    pub fn ball(&self) -> Vec<f32> {
        self.frame
            .ball
            .map(|ball| vec![ball.pos.x, ball.pos.y, ball.size])
            .unwrap_or_default()
    }

    pub fn ball_color(&self) -> String {
        self.frame
            .ball
            .map(|ball| ball.color.css())
            .unwrap_or_default()
            .to_string()
    }

    /// Paddle rects as `[min_x, min_y, width, height]` per slot, slot order
    pub fn paddles(&self) -> Vec<f32> {
        self.frame
            .paddles
            .iter()
            .flat_map(|paddle| {
                let size = paddle.rect.size();
                [paddle.rect.min.x, paddle.rect.min.y, size.x, size.y]
            })
            .collect()
    }

    pub fn paddle_color(&self, slot: usize) -> String {
        self.frame
            .paddles
            .get(slot)
            .map(|paddle| paddle.color.css())
            .unwrap_or_default()
            .to_string()
    }

    /// Power-ups as `[x, y, size]` per power-up
    pub fn powerups(&self) -> Vec<f32> {
        self.frame
            .powerups
            .iter()
            .flat_map(|powerup| [powerup.pos.x, powerup.pos.y, powerup.size])
            .collect()
    }

    pub fn powerup_color(&self) -> String {
        game_core::Color::Yellow.css().to_string()
    }

    /// Border and wall-cap rects as `[min_x, min_y, width, height]`
    pub fn borders(&self) -> Vec<f32> {
        self.frame
            .borders
            .iter()
            .flat_map(|rect| {
                let size = rect.size();
                [rect.min.x, rect.min.y, size.x, size.y]
            })
            .collect()
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl PongApp {
    pub fn on_key_down(&mut self, event: &web_sys::KeyboardEvent) {
        if self.key_down(&input::key_from_event(event)) {
            event.prevent_default();
        }
    }

    pub fn on_key_up(&mut self, event: &web_sys::KeyboardEvent) {
        if self.key_up(&input::key_from_event(event)) {
            event.prevent_default();
        }
    }
}

fn player_number(player: PlayerId) -> u8 {
    player.index() as u8 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> PongApp {
        PongApp::new(1000.0, 600.0, 11).unwrap()
    }

    #[test]
    fn test_rejects_bad_canvas() {
        assert!(PongApp::new(0.0, 600.0, 1).is_err());
        let mut app = app();
        assert!(app.resize(100.0, -3.0).is_err());
    }

    #[test]
    fn test_initial_frame_arrays() {
        let app = app();
        assert_eq!(app.state_name(), "NotStarted");
        let ball = app.ball();
        assert_eq!(&ball[..2], &[500.0, 300.0]);
        assert!((ball[2] - 12.0).abs() < 1e-3);
        assert_eq!(app.paddles().len(), 40);
        assert_eq!(app.borders().len(), 24);
        assert!(app.powerups().is_empty());
        assert_eq!(app.scoreboard(), "Player 1: 5 | Player 2: 5");
        assert_eq!(app.prompt().as_deref(), Some("Press any key to start"));
        assert_eq!(app.paddle_color(0), "blue");
        assert_eq!(app.paddle_color(1), "red");
        assert_eq!(app.paddle_color(99), "");
        assert_eq!(app.ball_color(), "gray");
    }

    #[test]
    fn test_bound_key_starts_countdown() {
        let mut app = app();
        assert!(!app.key_down("Enter"));
        app.tick(0.0);
        assert_eq!(app.state_name(), "NotStarted");

        assert!(app.key_down("ArrowUp"));
        app.tick(16.0);
        assert_eq!(app.state_name(), "Countdown");
        assert_eq!(app.countdown(), 3);
        assert_eq!(app.prompt().as_deref(), Some("3"));

        assert!(app.key_up("ArrowUp"));
        for i in 1..=300 {
            app.tick(16.0 + i as f64 * 16.0);
        }
        assert_eq!(app.state_name(), "Active");
        assert_eq!(app.prompt(), None);
    }

    #[test]
    fn test_key_tapped_between_frames_starts_game() {
        let mut app = app();
        app.key_down("w");
        app.key_up("w");
        app.tick(16.0);
        assert_eq!(app.state_name(), "Countdown");
        assert_eq!(app.prompt().as_deref(), Some("3"));
    }

    #[test]
    fn test_winner_message_handed_out_once() {
        let mut app = app();
        app.key_down("w");
        app.tick(0.0);
        app.key_up("w");
        let mut now = 0.0;
        while app.state_name() != "Active" {
            now += 16.0;
            app.tick(now);
        }

        while !app.is_game_over() {
            if app.state_name() == "Active" {
                let mut ball = app.sim.ball().unwrap();
                ball.pos.x = app.width() + 20.0;
                app.sim.set_ball(ball);
            }
            now += 16.0;
            app.tick(now);
        }

        assert_eq!(app.last_scored(), 1);
        assert_eq!(
            app.take_winner_message().as_deref(),
            Some("Game Over! Player 1 wins!")
        );
        assert_eq!(app.take_winner_message(), None);

        assert!(app.acknowledge_game_over());
        assert_eq!(app.state_name(), "NotStarted");
        assert_eq!(app.score_one(), 5);
        assert_eq!(app.score_two(), 5);
    }
}
