//! Paddle ownership pool
//!
//! Ten fixed slots, each owned by exactly one player. Ownership only moves
//! through [`OwnershipPool::transfer`], one slot per point scored, so a
//! player's slot count always mirrors their score.

use std::fmt;

use crate::{Params, PlayerId};

const SLOTS: usize = Params::TOTAL_PADDLES;

/// Slot count a player may hold before transfers stop restoring slots
/// toward the canonical split and start spilling instead.
const BALANCED_LIMIT: usize = SLOTS / 2;

/// Transfer preconditions that only fail when upstream invariants are broken
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolError {
    /// Every canonical slot of `to` is already owned by `to`
    NoSlotToRestore { to: PlayerId },
    /// `from` owns no slot that could be handed over
    DonorExhausted { from: PlayerId },
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSlotToRestore { to } => {
                write!(f, "no canonical slot left to restore to {}", to.label())
            }
            Self::DonorExhausted { from } => {
                write!(f, "{} owns no paddle slot to give away", from.label())
            }
        }
    }
}

impl std::error::Error for PoolError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnershipPool {
    slots: [PlayerId; SLOTS],
}

impl OwnershipPool {
    /// Even slots to player one, odd slots to player two
    pub const CANONICAL: [PlayerId; SLOTS] = canonical();

    pub fn new() -> Self {
        Self {
            slots: Self::CANONICAL,
        }
    }

    pub fn owner(&self, slot: usize) -> PlayerId {
        self.slots[slot]
    }

    pub fn slots(&self) -> &[PlayerId; SLOTS] {
        &self.slots
    }

    pub fn count(&self, player: PlayerId) -> usize {
        self.slots.iter().filter(|owner| **owner == player).count()
    }

    pub fn reset(&mut self) {
        self.slots = Self::CANONICAL;
    }

    /// Move one slot from `from` to `to`, returning the slot index.
    ///
    /// `Ok(None)` when `from == to`. While the pool is balanced (`from`
    /// still has a slot and `to` holds fewer than half) the slot is picked
    /// by walking `to`'s canonical slots from `to`'s end of the field and
    /// taking the first one it does not currently own. Otherwise any slot
    /// of `to`'s opponent is taken: player two's first slot when giving to
    /// player one, player one's last slot when giving to player two.
    pub fn transfer(&mut self, from: PlayerId, to: PlayerId) -> Result<Option<usize>, PoolError> {
        if from == to {
            return Ok(None);
        }

        let from_count = self.count(from);
        let to_count = self.count(to);

        let slot = if from_count > 0 && to_count < BALANCED_LIMIT {
            self.restore_slot(to)?
        } else {
            self.spill_slot(to)?
        };

        self.slots[slot] = to;
        log::debug!(
            "slot {} moved from {} to {} ({} / {})",
            slot,
            from.label(),
            to.label(),
            self.count(PlayerId::One),
            self.count(PlayerId::Two)
        );
        Ok(Some(slot))
    }

    fn restore_slot(&self, to: PlayerId) -> Result<usize, PoolError> {
        let is_candidate = |slot: &usize| Self::CANONICAL[*slot] == to && self.slots[*slot] != to;
        let found = match to {
            PlayerId::One => (0..SLOTS).rev().find(is_candidate),
            PlayerId::Two => (0..SLOTS).find(is_candidate),
        };
        found.ok_or(PoolError::NoSlotToRestore { to })
    }

    fn spill_slot(&self, to: PlayerId) -> Result<usize, PoolError> {
        let donor = to.opponent();
        let owned_by_donor = |slot: &usize| self.slots[*slot] == donor;
        let found = match to {
            PlayerId::One => (0..SLOTS).find(owned_by_donor),
            PlayerId::Two => (0..SLOTS).rev().find(owned_by_donor),
        };
        found.ok_or(PoolError::DonorExhausted { from: donor })
    }
}

impl Default for OwnershipPool {
    fn default() -> Self {
        Self::new()
    }
}

const fn canonical() -> [PlayerId; SLOTS] {
    let mut slots = [PlayerId::One; SLOTS];
    let mut i = 1;
    while i < SLOTS {
        slots[i] = PlayerId::Two;
        i += 2;
    }
    slots
}
