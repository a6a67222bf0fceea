use crate::{Ball, Config, Layout, Players};
use hecs::World;

/// Apply paddle movement based on intents
pub fn move_paddles(players: &mut Players, layout: &Layout, config: &Config) {
    let speed = layout.height * config.paddle_speed_ratio;
    for player in players.iter_mut() {
        if player.intent.dir != 0 {
            player.move_paddle(player.intent.dir as f32 * speed, layout);
        }
    }
}

/// Move ball by one tick of velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.advance();
    }
}
