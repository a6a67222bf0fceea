use hecs::World;

use crate::frame::{BallView, FrameState, PaddleView, PowerUpView};
use crate::systems::*;
use crate::{
    create_ball, Ball, Config, Events, GameRng, InputSnapshot, Layout, LayoutError,
    OwnershipPool, Params, PlayerId, Players, PowerUp, Session, SessionAction, SessionState,
    SpawnTimer,
};

/// The whole game: world, geometry, players, pool and session.
///
/// State is only reachable read-only from outside; scores and paddle slots
/// change together through `step`.
pub struct Simulation {
    world: World,
    layout: Layout,
    config: Config,
    players: Players,
    pool: OwnershipPool,
    session: Session,
    spawn_timer: SpawnTimer,
    rng: GameRng,
}

impl Simulation {
    pub fn new(width: f32, height: f32, config: Config, seed: u64) -> Result<Self, LayoutError> {
        let layout = Layout::new(width, height)?;
        let mut rng = GameRng::new(seed);
        let mut world = World::new();

        let mut ball = Ball::new(layout.center(), glam::Vec2::ZERO, layout.ball_size);
        ball.reset(&layout, &mut rng);
        create_ball(&mut world, ball.pos, ball.vel, ball.size);

        let mut players = Players::new();
        players.center_paddles(&layout);
        players.update_paddle_heights(&layout);

        let session = Session::new(config.countdown_secs);

        Ok(Self {
            world,
            layout,
            config,
            players,
            pool: OwnershipPool::new(),
            session,
            spawn_timer: SpawnTimer::new(),
            rng,
        })
    }

    /// Run one frame at wall-clock time `now` (milliseconds)
    pub fn step(&mut self, input: &InputSnapshot, now: f64) -> Events {
        let mut events = Events::new();

        let was_active = match self.session.state() {
            SessionState::GameOver => return events,
            SessionState::NotStarted => {
                if input.wants_start() {
                    self.session.start(now);
                }
                false
            }
            SessionState::Countdown => {
                self.session
                    .tick_countdown(now, self.config.countdown_step_ms);
                false
            }
            SessionState::Active => true,
        };

        // Paddles move in every state but game over
        ingest_inputs(&mut self.players, input);
        move_paddles(&mut self.players, &self.layout, &self.config);

        if !was_active {
            return events;
        }

        spawn_powerups(
            &mut self.world,
            &self.layout,
            &self.config,
            &mut self.spawn_timer,
            &mut self.rng,
            now,
        );
        move_ball(&mut self.world);
        check_wall_collisions(&mut self.world, &self.layout, &mut self.rng, &mut events);
        check_paddle_collisions(
            &mut self.world,
            &self.layout,
            &self.players,
            &self.pool,
            &self.config,
            now,
            &mut events,
        );
        collect_powerups(&mut self.world, &mut self.players, &mut events);

        if let Some(winner) = check_scoring(&self.world, &self.layout) {
            self.on_point(winner, now, &mut events);
        }

        events
    }

    fn on_point(&mut self, winner: PlayerId, now: f64, events: &mut Events) {
        let slot = award_point(&mut self.players, &mut self.pool, winner);
        events.scored = Some(winner);
        log::info!(
            "{} scores and takes slot {} ({} - {})",
            winner.label(),
            slot,
            self.players.get(PlayerId::One).score,
            self.players.get(PlayerId::Two).score
        );

        self.reset_ball();
        self.players.center_paddles(&self.layout);
        self.players.update_paddle_heights(&self.layout);

        if self.players.get(winner).score as usize == Params::TOTAL_PADDLES {
            if self.session.transition(SessionAction::Won).success {
                events.game_over = Some(winner);
                log::info!("game over, {} wins", winner.label());
            }
        } else {
            self.session.restart_countdown(now);
        }
    }

    /// Canvas changed size: rebuild geometry and put ball and paddles back in the middle
    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), LayoutError> {
        self.layout = Layout::new(width, height)?;
        self.reset_ball();
        self.players.center_paddles(&self.layout);
        self.players.update_paddle_heights(&self.layout);
        log::debug!("resized to {}x{}", width, height);
        Ok(())
    }

    /// Leave the game-over screen; ignored in any other state
    pub fn acknowledge_game_over(&mut self) -> bool {
        if !self.session.transition(SessionAction::Acknowledge).success {
            return false;
        }
        self.reset();
        true
    }

    /// Back to a fresh 5/5 session waiting for the first key press
    pub fn reset(&mut self) {
        self.session.reset();
        self.pool.reset();
        self.spawn_timer.clear();
        clear_powerups(&mut self.world);

        self.players = Players::new();
        self.players.center_paddles(&self.layout);
        self.players.update_paddle_heights(&self.layout);

        self.reset_ball();
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.last_paddle_hit_ms = 0.0;
        }
    }

    fn reset_ball(&mut self) {
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.reset(&self.layout, &mut self.rng);
        }
    }

    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn players(&self) -> &Players {
        &self.players
    }

    pub fn pool(&self) -> &OwnershipPool {
        &self.pool
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn spawn_timer(&self) -> &SpawnTimer {
        &self.spawn_timer
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    /// Overwrite the ball, e.g. to replay a recorded position
    pub fn set_ball(&mut self, ball: Ball) {
        for (_entity, current) in self.world.query_mut::<&mut Ball>() {
            *current = ball;
        }
    }

    /// Live power-ups in spawn order
    pub fn powerups(&self) -> Vec<PowerUp> {
        let mut powerups: Vec<_> = self
            .world
            .query::<&PowerUp>()
            .iter()
            .map(|(e, powerup)| (e.id(), *powerup))
            .collect();
        powerups.sort_by_key(|(id, _)| *id);
        powerups.into_iter().map(|(_, powerup)| powerup).collect()
    }

    pub fn frame(&self) -> FrameState {
        let ball = self.ball().map(|ball| BallView {
            pos: ball.pos,
            size: ball.size,
            color: ball.color(),
        });

        let paddles = (0..Params::TOTAL_PADDLES)
            .map(|slot| {
                let owner = self.pool.owner(slot);
                let player = self.players.get(owner);
                PaddleView {
                    slot,
                    owner,
                    rect: self.layout.paddle_rect(slot, player.y, player.paddle_height),
                    color: player.color(),
                }
            })
            .collect();

        let powerups = self
            .powerups()
            .into_iter()
            .map(|powerup| PowerUpView {
                pos: powerup.pos,
                size: powerup.size,
                color: powerup.color(),
            })
            .collect();

        FrameState {
            width: self.layout.width,
            height: self.layout.height,
            ball,
            paddles,
            powerups,
            borders: self.layout.border_rects(),
            state: self.session.state(),
            countdown: self.session.countdown(),
            scores: [
                self.players.get(PlayerId::One).score,
                self.players.get(PlayerId::Two).score,
            ],
            scoreboard_font_size: self.layout.scoreboard_font_size(),
            prompt_font_size: self.layout.prompt_font_size(),
        }
    }
}
