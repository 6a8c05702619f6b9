//! Simulation engine: the core of the pawn simulation.
//!
//! `SimulationEngine` owns the hecs ECS world, queues host inputs and
//! collision reports, runs all systems once per host frame, and produces
//! `SimSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::{Entity, World};
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use raptor_core::commands::{CollisionReport, InputEvent};
use raptor_core::config::{ConfigError, SimConfig};
use raptor_core::events::{AudioEvent, GameEvent};
use raptor_core::state::SimSnapshot;
use raptor_core::types::{sanitize_dt, EntityId, SimTime, Transform};

use crate::spent_rounds::SpentRounds;
use crate::systems;
use crate::timers::{Timer, TimerQueue};
use crate::world_setup;

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    config: SimConfig,
    rng: ChaCha8Rng,
    timers: TimerQueue,
    spent_rounds: SpentRounds,
    input_queue: VecDeque<(EntityId, InputEvent)>,
    collision_queue: VecDeque<CollisionReport>,
    due_buffer: Vec<Timer>,
    despawn_buffer: Vec<Entity>,
    audio_events: Vec<AudioEvent>,
    game_events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            timers: TimerQueue::new(),
            spent_rounds: SpentRounds::new(),
            input_queue: VecDeque::new(),
            collision_queue: VecDeque::new(),
            due_buffer: Vec::new(),
            despawn_buffer: Vec::new(),
            audio_events: Vec::new(),
            game_events: Vec::new(),
        }
    }

    /// Validate the config, then create the engine.
    pub fn try_new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Spawn a pawn and start its turbine. Returns its host id.
    pub fn spawn_pawn(&mut self, transform: Transform) -> EntityId {
        let entity = world_setup::spawn_pawn(&mut self.world, transform, &self.config);
        let pawn = world_setup::entity_id(entity);
        self.audio_events.push(AudioEvent::TurbineStartup { pawn });
        self.audio_events.push(AudioEvent::TurbineLoopStart { pawn });
        info!("spawned pawn {pawn:?} at {:?}", transform.position);
        pawn
    }

    /// Queue an input for processing at the next tick boundary.
    pub fn queue_input(&mut self, pawn: EntityId, event: InputEvent) {
        self.input_queue.push_back((pawn, event));
    }

    /// Queue multiple inputs.
    pub fn queue_inputs(&mut self, inputs: impl IntoIterator<Item = (EntityId, InputEvent)>) {
        self.input_queue.extend(inputs);
    }

    /// Queue a host collision report for processing at the next tick boundary.
    pub fn report_collision(&mut self, report: CollisionReport) {
        self.collision_queue.push_back(report);
    }

    /// Advance the simulation by one host frame of `dt` seconds and return
    /// the resulting snapshot.
    pub fn tick(&mut self, dt: f32) -> SimSnapshot {
        let dt = sanitize_dt(dt);
        self.time.advance(dt);
        self.run_systems(dt);

        let audio_events = std::mem::take(&mut self.audio_events);
        let game_events = std::mem::take(&mut self.game_events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            &self.config.pawn,
            audio_events,
            game_events,
        )
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Resolve a host id to a live entity.
    pub fn entity(&self, id: EntityId) -> Option<Entity> {
        world_setup::resolve(&self.world, id)
    }

    /// Number of pending timers (cooldowns and lifespans).
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Removed rounds whose owners are still remembered.
    #[cfg(test)]
    pub fn spent_rounds(&self) -> &SpentRounds {
        &self.spent_rounds
    }

    /// Get a read-only reference to the timer queue.
    #[cfg(test)]
    pub fn timers(&self) -> &TimerQueue {
        &self.timers
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f32) {
        let now = self.time.elapsed_secs;

        // 1. Host inputs
        systems::input::run(
            &mut self.world,
            &mut self.input_queue,
            self.config.weapon.trigger_mode,
            &mut self.audio_events,
        );
        // 2. Due timers (cooldown expiry, projectile lifespan)
        systems::timer_expiry::run(
            &mut self.world,
            &mut self.timers,
            now,
            &mut self.due_buffer,
            &mut self.despawn_buffer,
            &mut self.game_events,
        );
        // 3. Host collision reports
        systems::collision::run(
            &mut self.world,
            &mut self.collision_queue,
            &self.config,
            &self.spent_rounds,
            &mut self.despawn_buffer,
            &mut self.audio_events,
            &mut self.game_events,
        );
        // 4. Cleanup (expired and destroyed projectiles)
        systems::cleanup::run(
            &mut self.world,
            &mut self.despawn_buffer,
            &mut self.spent_rounds,
            now,
        );
        // 5. Flight integration
        systems::flight::run(&mut self.world, &self.config.pawn, dt);
        // 6. Weapons (fire gate, projectile spawn)
        systems::weapon::run(
            &mut self.world,
            &self.config,
            &mut self.rng,
            &mut self.timers,
            now,
            &mut self.audio_events,
            &mut self.game_events,
        );
        // 7. Projectile movement
        systems::projectile::run(&mut self.world, dt);
    }
}
