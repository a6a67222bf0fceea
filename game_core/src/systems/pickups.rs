use crate::{Ball, Config, Events, GameRng, Layout, Players, PowerUp, SpawnTimer};
use glam::Vec2;
use hecs::World;

/// Roll for a power-up once per spawn interval
pub fn spawn_powerups(
    world: &mut World,
    layout: &Layout,
    config: &Config,
    timer: &mut SpawnTimer,
    rng: &mut GameRng,
    now: f64,
) {
    if !timer.due(now, config.powerup_interval_ms) {
        return;
    }
    if !rng.chance(config.powerup_chance) {
        return;
    }

    // Keep the whole power-up inside the borders
    let size = layout.ball_size;
    let inset = layout.border_width + size / 2.0;
    let pos = Vec2::new(
        rng.unit() * (layout.width - 2.0 * layout.border_width - size) + inset,
        rng.unit() * (layout.height - 2.0 * layout.border_width - size) + inset,
    );
    world.spawn((PowerUp::new(pos, size),));
    log::debug!("power-up spawned at {:?}", pos);
}

/// Remove every power-up the ball touches and credit the ball's owner
pub fn collect_powerups(world: &mut World, players: &mut Players, events: &mut Events) {
    let ball = match world.query::<&Ball>().iter().next().map(|(_e, ball)| *ball) {
        Some(ball) => ball,
        None => return,
    };

    // Deterministic: sort by entity ID
    let mut touched: Vec<_> = world
        .query::<&PowerUp>()
        .iter()
        .filter(|(_e, powerup)| {
            ball.pos.distance(powerup.pos) < (ball.size + powerup.size) / 2.0
        })
        .map(|(e, powerup)| (e, *powerup))
        .collect();
    touched.sort_by_key(|(e, _)| e.id());

    for (entity, powerup) in touched {
        if world.despawn(entity).is_err() {
            continue;
        }
        if let Some(owner) = ball.owner {
            players.get_mut(owner).powerups.push(powerup);
            events.powerups_collected.push(owner);
            log::info!("{} collected a power-up", owner.label());
        }
    }
}

/// Remove every live power-up from the field
pub fn clear_powerups(world: &mut World) {
    let entities: Vec<_> = world
        .query::<&PowerUp>()
        .iter()
        .map(|(e, _)| e)
        .collect();
    for entity in entities {
        let _ = world.despawn(entity);
    }
}
