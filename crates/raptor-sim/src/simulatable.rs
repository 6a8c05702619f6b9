//! Host-facing callback interface.
//!
//! A host (engine integration, replay tool, test harness) owns the
//! simulation and calls these once per frame and per event.

use raptor_core::commands::{CollisionReport, InputEvent};
use raptor_core::state::SimSnapshot;
use raptor_core::types::EntityId;

use crate::engine::SimulationEngine;

pub trait Simulatable {
    /// Advance one frame.
    fn on_tick(&mut self, dt: f32) -> SimSnapshot;
    /// Deliver a control input to `target`.
    fn on_input(&mut self, target: EntityId, event: InputEvent);
    /// Deliver a blocking hit reported by the host's physics.
    fn on_collision(&mut self, report: CollisionReport);
}

impl Simulatable for SimulationEngine {
    fn on_tick(&mut self, dt: f32) -> SimSnapshot {
        self.tick(dt)
    }

    fn on_input(&mut self, target: EntityId, event: InputEvent) {
        self.queue_input(target, event);
    }

    fn on_collision(&mut self, report: CollisionReport) {
        self.report_collision(report);
    }
}

/// Tick `sim` for `frames` frames of `dt` seconds. Returns the last
/// snapshot, or `None` when `frames` is zero.
pub fn run_frames<S: Simulatable + ?Sized>(sim: &mut S, frames: u32, dt: f32) -> Option<SimSnapshot> {
    let mut last = None;
    for _ in 0..frames {
        last = Some(sim.on_tick(dt));
    }
    last
}
