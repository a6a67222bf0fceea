use crate::{Ball, Config, Events, GameRng, Layout, OwnershipPool, Params, Players};
use glam::Vec2;
use hecs::World;

/// Bounce the ball off the top/bottom borders and the side-wall caps.
///
/// Any bounce jitters the velocity a little and renormalizes it to the
/// layout's target speed, so corner loops break up and speed never drifts.
pub fn check_wall_collisions(
    world: &mut World,
    layout: &Layout,
    rng: &mut GameRng,
    events: &mut Events,
) {
    let target_speed = layout.target_ball_speed();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let mut hit = false;

        let bounds = ball.bounds();
        if bounds.min.y <= layout.border_width || bounds.max.y >= layout.height - layout.border_width
        {
            ball.reverse_y();
            hit = true;
        }

        let bounds = ball.bounds();
        let at_side = bounds.min.x <= layout.border_width
            || bounds.max.x >= layout.width - layout.border_width;
        if at_side && layout.in_wall_cap_band(bounds.min.y, bounds.max.y) {
            ball.reverse_x();
            hit = true;
        }

        if hit {
            ball.vel.x += rng.signed_unit() * Params::WALL_JITTER;
            ball.vel.y += rng.signed_unit() * Params::WALL_JITTER;
            normalize_speed(ball, target_speed);
            events.ball_hit_wall = true;
            log::debug!("wall bounce at {:?}", ball.pos);
        }
    }
}

/// Rescale velocity to `target` without changing its direction
pub fn normalize_speed(ball: &mut Ball, target: f32) {
    let dir = ball.vel.normalize_or_zero();
    let dir = if dir == Vec2::ZERO { Vec2::X } else { dir };
    ball.vel = dir * target;
}

/// Deflect the ball off the first overlapping paddle slot.
///
/// Contacts within the debounce window of the previous hit are ignored.
/// The hit point on the paddle picks the outgoing angle (up to 45 degrees);
/// speed is preserved and the horizontal direction flips.
pub fn check_paddle_collisions(
    world: &mut World,
    layout: &Layout,
    players: &Players,
    pool: &OwnershipPool,
    config: &Config,
    now: f64,
    events: &mut Events,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if now - ball.last_paddle_hit_ms < config.collision_debounce_ms {
            continue;
        }

        let ball_bounds = ball.bounds();
        for slot in 0..Params::TOTAL_PADDLES {
            let owner = pool.owner(slot);
            let player = players.get(owner);
            let paddle = layout.paddle_rect(slot, player.y, player.paddle_height);
            if !paddle.overlaps(&ball_bounds) {
                continue;
            }

            let half_height = player.paddle_height / 2.0;
            let hit_point = if half_height > 0.0 {
                ((ball.pos.y - player.y) / half_height).clamp(-1.0, 1.0)
            } else {
                0.0
            };
            let angle = hit_point * Params::MAX_DEFLECTION;

            let speed = ball.speed();
            let outgoing_x = speed * angle.cos();
            ball.vel.x = if ball.vel.x > 0.0 {
                -outgoing_x
            } else {
                outgoing_x
            };
            ball.vel.y = speed * angle.sin();

            ball.tag(owner);
            ball.last_paddle_hit_ms = now;
            ball.pos.x += if ball.vel.x > 0.0 {
                Params::BALL_NUDGE
            } else {
                -Params::BALL_NUDGE
            };

            events.ball_hit_paddle = true;
            log::debug!("paddle hit on slot {} by {}", slot, owner.label());
            break;
        }
    }
}
