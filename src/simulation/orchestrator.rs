//! Main simulation orchestrator
//!
//! This module contains the SimulationOrchestrator, which wires the room pool,
//! the registry, the day events and the event log together, starts the arrival
//! generator and the clock, and waits for the clock alone. Clients still in the
//! hotel when the clock finishes are not waited for.

use crate::events::{EventLog, HotelEvent};
use crate::facility::{OccupantRegistry, RoomPool};
use crate::occupant::{ArrivalGenerator, OccupantContext};
use crate::simulation::{Clock, DayEvents, SimulationError, SimulationReport, SimulationResult};
use crate::types::{ClockState, RunId, SimulationConfig};
use chrono::Utc;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, info_span, instrument, warn};

/// Coordinates one run of the hotel
#[derive(Debug)]
pub struct SimulationOrchestrator {
    config: SimulationConfig,
    run_id: RunId,
    ctx: OccupantContext,
    seed: Option<u64>,
    clock_state: ClockState,
}

impl SimulationOrchestrator {
    /// Create an orchestrator writing events to stdout
    pub fn new(config: SimulationConfig) -> SimulationResult<Self> {
        Self::with_event_log(config, EventLog::stdout())
    }

    /// Create an orchestrator writing events to the given log
    #[instrument(skip(config, log), fields(rooms = config.room_count, days = config.number_of_days))]
    pub fn with_event_log(config: SimulationConfig, log: EventLog) -> SimulationResult<Self> {
        config.validate()?;

        let run_id = RunId::new();
        info!(
            "Initializing hotel with {} rooms for {} days (run {})",
            config.room_count, config.number_of_days, run_id
        );

        let ctx = OccupantContext {
            pool: Arc::new(RoomPool::new(config.room_count)),
            registry: Arc::new(OccupantRegistry::new(config.max_client_count)),
            events: Arc::new(DayEvents::new()),
            log,
        };

        Ok(Self { config, run_id, ctx, seed: None, clock_state: ClockState::NotStarted })
    }

    /// Draw arrivals from a fixed seed instead of entropy
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Run the hotel until the clock finishes and report what happened
    pub fn run(&mut self) -> SimulationResult<SimulationReport> {
        if self.clock_state != ClockState::NotStarted {
            return Err(SimulationError::AlreadyRun);
        }

        let span = info_span!("simulation", run_id = %self.run_id);
        let _enter = span.enter();

        let started_at = Utc::now();
        let timer = Instant::now();
        self.clock_state = ClockState::Running { day: 0 };
        self.ctx.log.record(HotelEvent::HotelOpened { rooms: self.config.room_count });

        // Subscribed before the clock starts so the opening evening is seen
        let day_ends = self.ctx.events.subscribe();
        let generator = match self.seed {
            Some(seed) => ArrivalGenerator::with_seed(
                self.ctx.clone(),
                self.config.max_new_clients_per_day,
                day_ends,
                seed,
            ),
            None => ArrivalGenerator::new(
                self.ctx.clone(),
                self.config.max_new_clients_per_day,
                day_ends,
            ),
        };
        generator
            .spawn()
            .map_err(|e| SimulationError::thread_spawn_error("arrival-generator", e))?;
        debug!("Arrival generator started");

        let clock = Clock::new(
            self.config.number_of_days,
            self.config.settle_interval(),
            Arc::clone(&self.ctx.events),
            self.ctx.log.clone(),
        );
        let handle = match clock.spawn() {
            Ok(handle) => handle,
            Err(e) => {
                self.shut_down();
                return Err(SimulationError::thread_spawn_error("clock", e));
            }
        };

        let clock = match handle.join() {
            Ok(clock) => clock,
            Err(_) => {
                self.shut_down();
                self.clock_state = ClockState::Finished;
                return Err(SimulationError::ClockPanicked);
            }
        };
        self.clock_state = clock.state();

        let registry = self.ctx.registry.snapshot();
        let peak_rooms_in_use = self.ctx.pool.peak_in_use();
        self.shut_down();

        let report = SimulationReport::new(
            self.run_id,
            started_at,
            Utc::now(),
            timer.elapsed(),
            self.config.room_count,
            clock.day_index(),
            peak_rooms_in_use,
            registry,
            self.ctx.log.tally(),
        );

        if registry.housed > 0 || registry.waiting > 0 {
            warn!(
                housed = registry.housed,
                waiting = registry.waiting,
                "Hotel closed with clients still inside"
            );
        }
        info!("Simulation finished after {} days", report.days_completed);
        Ok(report)
    }

    fn shut_down(&self) {
        self.ctx.events.finish();
        self.ctx.pool.close();
        self.ctx.log.flush();
    }

    /// The configuration this run uses
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Identifier of this run
    pub fn run_id(&self) -> RunId {
        self.run_id
    }

    /// Lifecycle of the clock as last observed
    pub fn clock_state(&self) -> ClockState {
        self.clock_state
    }

    /// The shared room pool
    pub fn pool(&self) -> &Arc<RoomPool> {
        &self.ctx.pool
    }

    /// The shared client registry
    pub fn registry(&self) -> &Arc<OccupantRegistry> {
        &self.ctx.registry
    }

    /// The event log
    pub fn event_log(&self) -> &EventLog {
        &self.ctx.log
    }
}
