use crate::{InputSnapshot, Players};

/// Turn the held keys into a movement intent for each player
pub fn ingest_inputs(players: &mut Players, input: &InputSnapshot) {
    for player in players.iter_mut() {
        player.intent.dir = input.direction(player.id);
    }
}
