pub mod components;
pub mod config;
pub mod frame;
pub mod layout;
pub mod params;
pub mod pool;
pub mod resources;
pub mod session;
pub mod simulation;
pub mod systems;

pub use components::*;
pub use config::*;
pub use frame::*;
pub use layout::*;
pub use params::*;
pub use pool::*;
pub use resources::*;
pub use session::*;
pub use simulation::*;

use hecs::World;

/// Run one tick, taking and handing back ownership of the whole game state
pub fn tick(mut sim: Simulation, input: &InputSnapshot, now: f64) -> (Simulation, Events) {
    let events = sim.step(input, now);
    (sim, events)
}

/// Drive the simulation through recorded frames, one `step` per frame
pub fn replay<I>(sim: &mut Simulation, frames: I) -> Vec<Events>
where
    I: IntoIterator<Item = (InputSnapshot, f64)>,
{
    frames
        .into_iter()
        .map(|(input, now)| sim.step(&input, now))
        .collect()
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2, size: f32) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, size),))
}

/// Helper to create a power-up entity
pub fn create_powerup(world: &mut World, pos: glam::Vec2, size: f32) -> hecs::Entity {
    world.spawn((PowerUp::new(pos, size),))
}
