//! Arrival generation
//!
//! This module contains the ArrivalGenerator. After every day-end it draws a
//! random number of arrivals, admits them one by one through the registry and
//! starts each admitted client on its own thread. Once the waiting cap is
//! reached the rest of that day's arrivals are turned away with a single
//! "full" notice.

use crate::events::HotelEvent;
use crate::facility::Admission;
use crate::occupant::{Occupant, OccupantContext, MAX_STAY_DAYS, MIN_STAY_DAYS};
use crate::simulation::DayListener;
use crate::types::ClientId;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io;
use std::thread::{self, JoinHandle};
use tracing::{debug, error, info, instrument};

/// What one day's batch of arrivals produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    /// Clients admitted and started, in ID order
    pub admitted: Vec<ClientId>,
    /// Whether the waiting cap cut the batch short
    pub hit_cap: bool,
}

/// Spawns new clients once per day-end
#[derive(Debug)]
pub struct ArrivalGenerator {
    ctx: OccupantContext,
    max_new_per_day: usize,
    day_ends: DayListener,
    rng: StdRng,
}

impl ArrivalGenerator {
    /// Create a generator listening on `day_ends`
    pub fn new(ctx: OccupantContext, max_new_per_day: usize, day_ends: DayListener) -> Self {
        Self { ctx, max_new_per_day, day_ends, rng: StdRng::from_entropy() }
    }

    /// Create a generator whose draws come from a fixed seed
    pub fn with_seed(
        ctx: OccupantContext,
        max_new_per_day: usize,
        day_ends: DayListener,
        seed: u64,
    ) -> Self {
        Self { ctx, max_new_per_day, day_ends, rng: StdRng::seed_from_u64(seed) }
    }

    /// Handle every day-end until the clock finishes
    #[instrument(skip(self), fields(max_new_per_day = self.max_new_per_day))]
    pub fn run(mut self) {
        while let Some(boundary) = self.day_ends.next_day_end() {
            let outcome = self.spawn_batch(boundary.day);
            debug!(day = boundary.day, admitted = outcome.admitted.len(), "Arrivals processed");
        }
        info!("Arrival generator stopped: the clock has finished");
    }

    /// Run on a dedicated thread
    pub fn spawn(self) -> io::Result<JoinHandle<()>> {
        thread::Builder::new().name("arrival-generator".to_string()).spawn(move || self.run())
    }

    /// Bring in the arrivals for the end of `day`
    pub fn spawn_batch(&mut self, day: u64) -> BatchOutcome {
        let count = self.draw_arrival_count();
        let mut outcome = BatchOutcome::default();

        for _ in 0..count {
            let id = match self.ctx.registry.try_admit() {
                Admission::Admitted(id) => id,
                Admission::Full => {
                    self.ctx.log.record(HotelEvent::HotelFull { day });
                    outcome.hit_cap = true;
                    break;
                }
            };

            let stay_length = self.draw_stay_length();
            let started = self.start_client(id, stay_length, day, |occupant, ctx| {
                occupant.spawn(ctx).map(drop)
            });
            if !started {
                break;
            }
            outcome.admitted.push(id);
        }

        self.ctx.log.record(HotelEvent::WaitingSummary { waiting: self.ctx.registry.waiting(), day });
        outcome
    }

    /// Announce an admitted client and start it; a failed start is undone and announced
    fn start_client<F>(&self, id: ClientId, stay_length: u32, day: u64, start: F) -> bool
    where
        F: FnOnce(Occupant, OccupantContext) -> io::Result<()>,
    {
        self.ctx.log.record(HotelEvent::ClientArrived { client: id, stay_length, day });

        match start(Occupant::new(id, stay_length), self.ctx.clone()) {
            Ok(()) => true,
            Err(e) => {
                error!(client = %id, "Failed to start client thread: {}", e);
                self.ctx.registry.rollback(id);
                self.ctx.log.record(HotelEvent::ArrivalCancelled { client: id, day });
                false
            }
        }
    }

    /// Number of clients arriving this evening: 1..=max, or none when max is 0
    pub fn draw_arrival_count(&mut self) -> usize {
        if self.max_new_per_day == 0 {
            0
        } else {
            self.rng.gen_range(1..=self.max_new_per_day)
        }
    }

    /// Nights a new client wants to stay
    pub fn draw_stay_length(&mut self) -> u32 {
        self.rng.gen_range(MIN_STAY_DAYS..=MAX_STAY_DAYS)
    }
}
