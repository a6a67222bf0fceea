//! Session state machine
//!
//! Pre-start, countdown, active play and game over, with a countdown that
//! ticks on wall-clock time rather than frames.

/// Session states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NotStarted,
    Countdown,
    Active,
    GameOver,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    Start,
    CountdownDone,
    Scored,
    Won,
    Acknowledge,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: SessionState,
    pub to_state: SessionState,
    pub action: SessionAction,
}

#[derive(Debug, Clone)]
pub struct Session {
    state: SessionState,
    countdown: u8,
    countdown_secs: u8,
    anchor_ms: f64,
}

impl Session {
    pub fn new(countdown_secs: u8) -> Self {
        Self {
            state: SessionState::NotStarted,
            countdown: countdown_secs,
            countdown_secs,
            anchor_ms: 0.0,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Seconds left on the countdown
    pub fn countdown(&self) -> u8 {
        self.countdown
    }

    pub fn is_active(&self) -> bool {
        self.state == SessionState::Active
    }

    pub fn is_game_over(&self) -> bool {
        self.state == SessionState::GameOver
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: SessionAction) -> bool {
        self.next_state(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: SessionAction) -> TransitionResult {
        let from_state = self.state;

        match self.next_state(action) {
            Some(next_state) => {
                self.state = next_state;
                log::info!("session {:?} -> {:?} ({:?})", from_state, next_state, action);
                TransitionResult {
                    success: true,
                    from_state,
                    to_state: next_state,
                    action,
                }
            }
            None => {
                log::warn!("rejected {:?} while {:?}", action, from_state);
                TransitionResult {
                    success: false,
                    from_state,
                    to_state: from_state,
                    action,
                }
            }
        }
    }

    fn next_state(&self, action: SessionAction) -> Option<SessionState> {
        use SessionAction::*;
        use SessionState::*;

        match (self.state, action) {
            (NotStarted, Start) => Some(Countdown),
            (Countdown, CountdownDone) => Some(Active),
            (Active, Scored) => Some(Countdown),
            (Active, Won) | (Countdown, Won) => Some(GameOver),
            (GameOver, Acknowledge) => Some(NotStarted),
            _ => None,
        }
    }

    /// First key press: begin the countdown anchored at `now`
    pub fn start(&mut self, now: f64) -> bool {
        let started = self.transition(SessionAction::Start).success;
        if started {
            self.arm_countdown(now);
        }
        started
    }

    /// A point was scored during play: count down again from the top
    pub fn restart_countdown(&mut self, now: f64) -> bool {
        let restarted = self.transition(SessionAction::Scored).success;
        if restarted {
            self.arm_countdown(now);
        }
        restarted
    }

    /// Decrement the countdown once per elapsed step; switches to Active at zero.
    ///
    /// Returns true on the tick the countdown finishes.
    pub fn tick_countdown(&mut self, now: f64, step_ms: f64) -> bool {
        if self.state != SessionState::Countdown {
            return false;
        }
        if self.countdown > 0 && now - self.anchor_ms >= step_ms {
            self.countdown -= 1;
            self.anchor_ms = now;
        }
        if self.countdown == 0 {
            return self.transition(SessionAction::CountdownDone).success;
        }
        false
    }

    /// Back to a fresh, not-yet-started session
    pub fn reset(&mut self) {
        self.state = SessionState::NotStarted;
        self.countdown = self.countdown_secs;
        self.anchor_ms = 0.0;
    }

    fn arm_countdown(&mut self, now: f64) {
        self.countdown = self.countdown_secs;
        self.anchor_ms = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let session = Session::new(3);
        assert_eq!(session.state(), SessionState::NotStarted);
        assert_eq!(session.countdown(), 3);
    }

    #[test]
    fn test_invalid_transition() {
        let mut session = Session::new(3);
        let result = session.transition(SessionAction::Won);
        assert!(!result.success);
        assert_eq!(result.to_state, SessionState::NotStarted);
        assert_eq!(session.state(), SessionState::NotStarted);
        assert!(!session.can_transition(SessionAction::Scored));
    }

    #[test]
    fn test_countdown_uses_wall_clock() {
        let mut session = Session::new(3);
        assert!(session.start(1_000.0));
        assert_eq!(session.state(), SessionState::Countdown);

        // Many frames inside the same second do not move the timer
        for t in [1_016.0, 1_500.0, 1_999.0] {
            assert!(!session.tick_countdown(t, 1_000.0));
        }
        assert_eq!(session.countdown(), 3);

        assert!(!session.tick_countdown(2_000.0, 1_000.0));
        assert_eq!(session.countdown(), 2);
        assert!(!session.tick_countdown(3_000.0, 1_000.0));
        assert_eq!(session.countdown(), 1);
        assert!(session.tick_countdown(4_000.0, 1_000.0));
        assert_eq!(session.countdown(), 0);
        assert!(session.is_active());
    }

    #[test]
    fn test_full_cycle() {
        let mut session = Session::new(1);
        session.start(0.0);
        session.tick_countdown(1_000.0, 1_000.0);
        assert!(session.is_active());

        assert!(session.restart_countdown(5_000.0));
        assert_eq!(session.state(), SessionState::Countdown);
        assert_eq!(session.countdown(), 1);

        assert!(session.transition(SessionAction::Won).success);
        assert!(session.is_game_over());
        assert!(!session.start(6_000.0), "game over ignores key presses");

        assert!(session.transition(SessionAction::Acknowledge).success);
        assert_eq!(session.state(), SessionState::NotStarted);
    }

    #[test]
    fn test_reset_from_any_state() {
        let mut session = Session::new(3);
        session.start(10.0);
        session.tick_countdown(1_010.0, 1_000.0);
        session.reset();
        assert_eq!(session.state(), SessionState::NotStarted);
        assert_eq!(session.countdown(), 3);
    }
}
