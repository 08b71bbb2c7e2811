//! A single hotel client
//!
//! This module contains the Occupant and the handles it shares with the rest
//! of the hotel. An occupant runs on its own thread through a strict sequence:
//! wait for a room, count exactly `stay_length` day-starts, check out. The
//! check-out line is written while the room is still held, so for any single
//! room the log never shows two clients inside at once.

use crate::events::{EventLog, HotelEvent};
use crate::facility::{Acquisition, OccupantRegistry, RoomPool};
use crate::simulation::DayEvents;
use crate::types::{ClientId, OccupantState};
use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tracing::{debug, instrument};

/// Shortest stay a client asks for
pub const MIN_STAY_DAYS: u32 = 1;

/// Longest stay a client asks for
pub const MAX_STAY_DAYS: u32 = 7;

/// Shared hotel state every client works against
#[derive(Debug, Clone)]
pub struct OccupantContext {
    /// The rooms
    pub pool: Arc<RoomPool>,
    /// Live clients and the waiting cap
    pub registry: Arc<OccupantRegistry>,
    /// Day boundaries from the clock
    pub events: Arc<DayEvents>,
    /// Where every event goes
    pub log: EventLog,
}

/// A client wanting one room for a fixed number of days
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occupant {
    id: ClientId,
    stay_length: u32,
    days_elapsed: u32,
    state: OccupantState,
}

impl Occupant {
    /// Create a waiting client; the stay is clamped to 1..=7 days
    pub fn new(id: ClientId, stay_length: u32) -> Self {
        Self {
            id,
            stay_length: stay_length.clamp(MIN_STAY_DAYS, MAX_STAY_DAYS),
            days_elapsed: 0,
            state: OccupantState::Waiting,
        }
    }

    /// Client identifier
    pub fn id(&self) -> ClientId {
        self.id
    }

    /// Days the client wants to stay
    pub fn stay_length(&self) -> u32 {
        self.stay_length
    }

    /// Day-starts observed while holding a room
    pub fn days_elapsed(&self) -> u32 {
        self.days_elapsed
    }

    /// Lifecycle state
    pub fn state(&self) -> OccupantState {
        self.state
    }

    /// Wait for a room, stay, check out; returns the client in its final state
    #[instrument(skip_all, fields(client = %self.id, stay = self.stay_length))]
    pub fn run(mut self, ctx: &OccupantContext) -> Self {
        if ctx.pool.acquire() == Acquisition::Closed {
            self.abandon(ctx);
            return self;
        }

        let mut days = ctx.events.subscribe();
        self.state = OccupantState::Housed;
        ctx.log.record(HotelEvent::CheckedIn { client: self.id, day: days.day() });
        ctx.registry.mark_housed(self.id);

        while self.days_elapsed < self.stay_length {
            let Some(boundary) = days.next_day_start() else {
                self.abandon(ctx);
                return self;
            };
            self.days_elapsed += 1;
            ctx.log.record(HotelEvent::Stayed {
                client: self.id,
                days_elapsed: self.days_elapsed,
                day: boundary.day,
            });
        }

        ctx.log.record(HotelEvent::CheckedOut { client: self.id, day: days.day() });
        ctx.pool.release();
        ctx.registry.mark_checked_out(self.id);
        self.state = OccupantState::CheckedOut;
        self
    }

    /// Run on a dedicated, named thread
    pub fn spawn(self, ctx: OccupantContext) -> io::Result<JoinHandle<Occupant>> {
        thread::Builder::new().name(format!("client-{}", self.id)).spawn(move || self.run(&ctx))
    }

    fn abandon(&mut self, ctx: &OccupantContext) {
        debug!(state = %self.state, days = self.days_elapsed, "Left behind at closing");
        self.state = OccupantState::Abandoned;
        ctx.registry.mark_abandoned(self.id);
        ctx.log.record(HotelEvent::Abandoned { client: self.id, days_elapsed: self.days_elapsed });
    }
}
