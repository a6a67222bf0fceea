use crate::{Ball, Layout, OwnershipPool, PlayerId, Players};
use hecs::World;

/// Check if the ball left the canvas; returns the side that scored
pub fn check_scoring(world: &World, layout: &Layout) -> Option<PlayerId> {
    let mut query = world.query::<&Ball>();
    let (_e, ball) = query.iter().next()?;

    if ball.pos.x < 0.0 {
        Some(PlayerId::Two)
    } else if ball.pos.x > layout.width {
        Some(PlayerId::One)
    } else {
        None
    }
}

/// Move one paddle slot to `winner` and update both scores to match.
///
/// Panics if the pool cannot give up a slot or if any score drifts from
/// the number of slots its player owns; both mean the game state is
/// already corrupt.
pub fn award_point(players: &mut Players, pool: &mut OwnershipPool, winner: PlayerId) -> usize {
    let loser = winner.opponent();
    let slot = match pool.transfer(loser, winner) {
        Ok(Some(slot)) => slot,
        Ok(None) => unreachable!("a player never transfers to themselves"),
        Err(err) => panic!("paddle ownership invariant violated: {err}"),
    };

    players.get_mut(winner).score += 1;
    players.get_mut(loser).score -= 1;
    assert_lockstep(players, pool);
    slot
}

/// Every score must equal the number of slots that player owns
pub fn assert_lockstep(players: &Players, pool: &OwnershipPool) {
    for player in players.iter() {
        assert_eq!(
            player.score as usize,
            pool.count(player.id),
            "{} score is out of step with owned paddle slots",
            player.id.label()
        );
    }
}
