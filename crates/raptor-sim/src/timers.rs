//! Single-shot delayed callbacks keyed by entity.
//!
//! `hecs::Entity` carries a generation, so a timer whose entity was
//! despawned (even if the slot was reused) resolves to nothing and is
//! dropped by the expiry system.

use hecs::Entity;

/// What happens when a timer comes due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Re-enable a pawn's weapon after its fire-rate cooldown.
    ShotCooldown,
    /// Remove a projectile at the end of its lifespan.
    LifeSpan,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timer {
    pub entity: Entity,
    pub kind: TimerKind,
    /// Simulation time (seconds) at which the timer fires.
    pub due_secs: f64,
    seq: u64,
}

/// Pending timers. Due timers come out ordered by due time, then by the
/// order they were scheduled.
#[derive(Debug, Default)]
pub struct TimerQueue {
    pending: Vec<Timer>,
    next_seq: u64,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `kind` for `entity`, `delay_secs` after `now_secs`.
    pub fn schedule(&mut self, entity: Entity, kind: TimerKind, now_secs: f64, delay_secs: f32) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Timer {
            entity,
            kind,
            due_secs: now_secs + delay_secs.max(0.0) as f64,
            seq,
        });
    }

    /// Move every timer due at or before `now_secs` into `out`.
    pub fn drain_due(&mut self, now_secs: f64, out: &mut Vec<Timer>) {
        let start = out.len();
        let mut i = 0;
        while i < self.pending.len() {
            if self.pending[i].due_secs <= now_secs {
                out.push(self.pending.swap_remove(i));
            } else {
                i += 1;
            }
        }
        out[start..].sort_by(|a, b| a.due_secs.total_cmp(&b.due_secs).then(a.seq.cmp(&b.seq)));
    }

    /// Whether a timer of `kind` is pending for `entity`.
    pub fn is_pending(&self, entity: Entity, kind: TimerKind) -> bool {
        self.pending
            .iter()
            .any(|t| t.entity == entity && t.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
