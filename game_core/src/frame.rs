//! Renderable snapshot of one tick

use glam::Vec2;

use crate::{Aabb, Color, PlayerId, SessionState};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallView {
    pub pos: Vec2,
    pub size: f32,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleView {
    pub slot: usize,
    pub owner: PlayerId,
    pub rect: Aabb,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerUpView {
    pub pos: Vec2,
    pub size: f32,
    pub color: Color,
}

/// Everything an adapter needs to draw a frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameState {
    pub width: f32,
    pub height: f32,
    pub ball: Option<BallView>,
    pub paddles: Vec<PaddleView>,
    pub powerups: Vec<PowerUpView>,
    pub borders: [Aabb; 6],
    pub state: SessionState,
    pub countdown: u8,
    pub scores: [u8; 2],
    pub scoreboard_font_size: f32,
    pub prompt_font_size: f32,
}

impl FrameState {
    pub fn score(&self, player: PlayerId) -> u8 {
        self.scores[player.index()]
    }

    pub fn scoreboard(&self) -> String {
        format!(
            "{}: {} | {}: {}",
            PlayerId::One.label(),
            self.score(PlayerId::One),
            PlayerId::Two.label(),
            self.score(PlayerId::Two)
        )
    }

    /// Centered overlay text, if any
    pub fn prompt(&self) -> Option<String> {
        match self.state {
            SessionState::NotStarted => Some("Press any key to start".to_string()),
            SessionState::Countdown if self.countdown > 0 => Some(self.countdown.to_string()),
            _ => None,
        }
    }
}

pub fn win_message(winner: PlayerId) -> String {
    format!("Game Over! {} wins!", winner.label())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(state: SessionState, countdown: u8) -> FrameState {
        FrameState {
            width: 800.0,
            height: 600.0,
            ball: None,
            paddles: Vec::new(),
            powerups: Vec::new(),
            borders: [Aabb::new(Vec2::ZERO, Vec2::ZERO); 6],
            state,
            countdown,
            scores: [4, 6],
            scoreboard_font_size: 18.0,
            prompt_font_size: 36.0,
        }
    }

    #[test]
    fn test_scoreboard_text() {
        assert_eq!(
            frame(SessionState::Active, 0).scoreboard(),
            "Player 1: 4 | Player 2: 6"
        );
    }

    #[test]
    fn test_prompt_by_state() {
        assert_eq!(
            frame(SessionState::NotStarted, 3).prompt().as_deref(),
            Some("Press any key to start")
        );
        assert_eq!(frame(SessionState::Countdown, 2).prompt().as_deref(), Some("2"));
        assert_eq!(frame(SessionState::Countdown, 0).prompt(), None);
        assert_eq!(frame(SessionState::Active, 0).prompt(), None);
    }

    #[test]
    fn test_win_message() {
        assert_eq!(win_message(PlayerId::Two), "Game Over! Player 2 wins!");
    }
}
