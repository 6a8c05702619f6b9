//! Owners of recently removed projectiles.
//!
//! Hosts may report the pawn side of a hit a frame after the round itself
//! was removed. Keeping the owner for a short while lets own-round immunity
//! hold across that gap.

use raptor_core::types::EntityId;

/// Seconds a removed round's owner is remembered.
pub const SPENT_ROUND_MEMORY_SECS: f64 = 1.0;

#[derive(Debug, Clone, Copy)]
struct SpentRound {
    projectile: EntityId,
    owner: EntityId,
    removed_secs: f64,
}

#[derive(Debug, Default)]
pub struct SpentRounds {
    rounds: Vec<SpentRound>,
}

impl SpentRounds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, projectile: EntityId, owner: EntityId, now_secs: f64) {
        self.rounds.push(SpentRound {
            projectile,
            owner,
            removed_secs: now_secs,
        });
    }

    /// Owner of a removed round, if it is still remembered.
    pub fn owner_of(&self, projectile: EntityId) -> Option<EntityId> {
        self.rounds
            .iter()
            .find(|r| r.projectile == projectile)
            .map(|r| r.owner)
    }

    /// Forget rounds removed more than `SPENT_ROUND_MEMORY_SECS` ago.
    pub fn prune(&mut self, now_secs: f64) {
        self.rounds
            .retain(|r| now_secs - r.removed_secs <= SPENT_ROUND_MEMORY_SECS);
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }
}
