//! The day clock
//!
//! This module contains the Clock, which drives the simulation: it opens the
//! first evening (day-end of day 0) so the first clients can arrive, then runs
//! every configured day as day-start, pause, day-end, pause. When the last day
//! is over it finishes the [`DayEvents`] surface for good and returns; it never
//! waits for clients still in the hotel.

use crate::events::{EventLog, HotelEvent};
use crate::simulation::DayEvents;
use crate::types::{ClockState, DayPhase};
use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Drives day boundaries for a fixed number of days
#[derive(Debug)]
pub struct Clock {
    total_days: u64,
    settle_interval: Duration,
    events: Arc<DayEvents>,
    log: EventLog,
    state: ClockState,
}

impl Clock {
    /// Create a clock that will run `total_days` days
    pub fn new(
        total_days: u64,
        settle_interval: Duration,
        events: Arc<DayEvents>,
        log: EventLog,
    ) -> Self {
        Self { total_days, settle_interval, events, log, state: ClockState::NotStarted }
    }

    /// Current lifecycle state
    pub fn state(&self) -> ClockState {
        self.state
    }

    /// Current day index (0 before the first day-start)
    pub fn day_index(&self) -> u64 {
        match self.state {
            ClockState::NotStarted => 0,
            ClockState::Running { day } => day,
            ClockState::Finished => self.total_days,
        }
    }

    /// Number of days this clock runs
    pub fn total_days(&self) -> u64 {
        self.total_days
    }

    /// Run every day, then finish
    #[instrument(skip(self), fields(total_days = self.total_days))]
    pub fn run(&mut self) {
        if self.state != ClockState::NotStarted {
            warn!("Clock already ran ({}); ignoring", self.state);
            return;
        }

        info!("Clock started");
        self.state = ClockState::Running { day: 0 };
        self.broadcast(DayPhase::DayEnd, 0);
        self.settle();

        for day in 1..=self.total_days {
            self.state = ClockState::Running { day };
            self.broadcast(DayPhase::DayStart, day);
            self.settle();
            self.broadcast(DayPhase::DayEnd, day);
            self.settle();
        }

        self.state = ClockState::Finished;
        self.events.finish();
        self.log.record(HotelEvent::HotelClosed);
        info!("Clock finished after {} days", self.total_days);
    }

    /// Run on a dedicated thread; joining the handle gives the finished clock back
    pub fn spawn(mut self) -> io::Result<JoinHandle<Clock>> {
        thread::Builder::new().name("clock".to_string()).spawn(move || {
            self.run();
            self
        })
    }

    fn broadcast(&self, phase: DayPhase, day: u64) {
        // The line goes out before the broadcast so listeners' reactions follow it
        let event = match phase {
            DayPhase::DayStart => HotelEvent::DayStarted { day },
            DayPhase::DayEnd => HotelEvent::DayEnded { day },
        };
        self.log.record(event);

        match self.events.advance() {
            Some(boundary) => {
                debug_assert_eq!((boundary.phase, boundary.day), (phase, day));
                debug!(seq = boundary.seq, %phase, day, "Broadcast");
            }
            None => warn!(%phase, day, "Day events finished early; boundary dropped"),
        }
    }

    fn settle(&self) {
        if !self.settle_interval.is_zero() {
            thread::sleep(self.settle_interval);
        }
    }
}
