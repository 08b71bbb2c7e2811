//! Day boundary broadcasting
//!
//! The clock publishes day boundaries through [`DayEvents`], a single
//! monotonically increasing sequence number guarded by one lock and one
//! condition variable. Sequence 1 is the opening evening (day-end of day 0),
//! sequence `2d` is day-start(d) and sequence `2d + 1` is day-end(d).
//!
//! Each [`DayListener`] remembers the last sequence number it consumed and
//! walks forward one boundary at a time, so a listener never misses a boundary
//! and never sees one twice, however late it wakes up. Waiting happens under
//! the same lock the clock holds while advancing, so no broadcast can slip in
//! between a listener's check and its wait.

use crate::types::DayPhase;
use parking_lot::{Condvar, Mutex};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// One day boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boundary {
    /// Position in the total order of boundaries, starting at 1
    pub seq: u64,
    /// Start or end of the day
    pub phase: DayPhase,
    /// Day index
    pub day: u64,
}

impl Boundary {
    /// The boundary with the given sequence number (0 is "nothing happened yet")
    pub fn from_seq(seq: u64) -> Option<Self> {
        match seq {
            0 => None,
            seq if seq % 2 == 0 => Some(Self { seq, phase: DayPhase::DayStart, day: seq / 2 }),
            seq => Some(Self { seq, phase: DayPhase::DayEnd, day: seq / 2 }),
        }
    }
}

/// Broadcast surface for day boundaries
#[derive(Debug, Default)]
pub struct DayEvents {
    state: Mutex<BoundaryState>,
    boundary: Condvar,
}

#[derive(Debug, Default)]
struct BoundaryState {
    seq: u64,
    finished: bool,
}

impl DayEvents {
    /// Create a surface on which nothing has been broadcast yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Broadcast the next boundary to every listener
    ///
    /// Returns `None` once [`DayEvents::finish`] has been called; a finished
    /// surface never broadcasts again.
    pub fn advance(&self) -> Option<Boundary> {
        let mut state = self.state.lock();
        if state.finished {
            return None;
        }
        state.seq += 1;
        let boundary = Boundary::from_seq(state.seq);
        debug!(seq = state.seq, "Day boundary broadcast");
        self.boundary.notify_all();
        boundary
    }

    /// Stop broadcasting for good and wake every listener
    pub fn finish(&self) {
        let mut state = self.state.lock();
        state.finished = true;
        self.boundary.notify_all();
    }

    /// Whether the surface has finished
    pub fn is_finished(&self) -> bool {
        self.state.lock().finished
    }

    /// Most recent boundary, if any
    pub fn current(&self) -> Option<Boundary> {
        Boundary::from_seq(self.state.lock().seq)
    }

    /// Listen for boundaries broadcast after this call
    pub fn subscribe(self: &Arc<Self>) -> DayListener {
        let last_seen = self.state.lock().seq;
        DayListener { events: Arc::clone(self), last_seen }
    }

    /// Listen for every boundary, including those already broadcast
    pub fn subscribe_from_start(self: &Arc<Self>) -> DayListener {
        DayListener { events: Arc::clone(self), last_seen: 0 }
    }
}

/// A listener's private cursor into the boundary sequence
#[derive(Debug)]
pub struct DayListener {
    events: Arc<DayEvents>,
    last_seen: u64,
}

impl DayListener {
    /// Block for the next boundary of any phase; `None` once the clock has finished
    pub fn next_boundary(&mut self) -> Option<Boundary> {
        self.next_matching(None)
    }

    /// Block for the next day-start; `None` once the clock has finished
    pub fn next_day_start(&mut self) -> Option<Boundary> {
        self.next_matching(Some(DayPhase::DayStart))
    }

    /// Block for the next day-end; `None` once the clock has finished
    pub fn next_day_end(&mut self) -> Option<Boundary> {
        self.next_matching(Some(DayPhase::DayEnd))
    }

    /// Sequence number of the last boundary consumed
    pub fn last_seen(&self) -> u64 {
        self.last_seen
    }

    /// Day the listener is currently in
    pub fn day(&self) -> u64 {
        self.last_seen / 2
    }

    fn next_matching(&mut self, phase: Option<DayPhase>) -> Option<Boundary> {
        let mut state = self.events.state.lock();
        loop {
            while self.last_seen < state.seq {
                self.last_seen += 1;
                if let Some(boundary) = Boundary::from_seq(self.last_seen) {
                    if phase.map_or(true, |wanted| wanted == boundary.phase) {
                        return Some(boundary);
                    }
                }
            }
            if state.finished {
                return None;
            }
            self.events.boundary.wait(&mut state);
        }
    }
}
