//! Room pool and blocking check-in
//!
//! This module contains the RoomPool, the fixed set of interchangeable rooms
//! that clients contend for. A client blocks in [`RoomPool::acquire`] until a
//! room is free; every [`RoomPool::release`] wakes all waiters, which re-check
//! availability, so exactly one of them takes the freed room.
//!
//! Waiters are not served in arrival order: a client that starts waiting late
//! can win a freed room over one that has been waiting for days.

use parking_lot::{Condvar, Mutex};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Outcome of waiting for a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Acquisition {
    /// The caller now holds one room
    Housed,
    /// The hotel closed while the caller was waiting; nothing is held
    Closed,
}

/// Fixed pool of rooms shared by every client
#[derive(Debug)]
pub struct RoomPool {
    capacity: usize,
    state: Mutex<PoolState>,
    room_freed: Condvar,
}

#[derive(Debug)]
struct PoolState {
    available: usize,
    peak_in_use: usize,
    closed: bool,
}

impl PoolState {
    fn in_use(&self, capacity: usize) -> usize {
        capacity - self.available
    }
}

impl RoomPool {
    /// Create a pool with every room free
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            state: Mutex::new(PoolState { available: capacity, peak_in_use: 0, closed: false }),
            room_freed: Condvar::new(),
        }
    }

    /// Block until a room is free and take it, or until the pool is closed
    pub fn acquire(&self) -> Acquisition {
        let mut state = self.state.lock();
        while !state.closed && state.available == 0 {
            self.room_freed.wait(&mut state);
        }
        if state.closed {
            return Acquisition::Closed;
        }

        self.take(&mut state);
        Acquisition::Housed
    }

    /// Take a room only if one is free right now
    pub fn try_acquire(&self) -> bool {
        let mut state = self.state.lock();
        if state.closed || state.available == 0 {
            return false;
        }
        self.take(&mut state);
        true
    }

    fn take(&self, state: &mut PoolState) {
        state.available -= 1;
        state.peak_in_use = state.peak_in_use.max(state.in_use(self.capacity));
        debug!(available = state.available, "Room taken");
    }

    /// Give a room back and wake every waiting client
    pub fn release(&self) {
        let mut state = self.state.lock();
        if state.available == self.capacity {
            warn!("Room released while every room was already free; ignoring");
            return;
        }
        state.available += 1;
        debug!(available = state.available, "Room freed");
        self.room_freed.notify_all();
    }

    /// Close the hotel: wake every waiter and refuse further check-ins
    pub fn close(&self) {
        let mut state = self.state.lock();
        state.closed = true;
        self.room_freed.notify_all();
    }

    /// Total number of rooms
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Rooms free right now
    pub fn available(&self) -> usize {
        self.state.lock().available
    }

    /// Rooms held right now
    pub fn in_use(&self) -> usize {
        self.state.lock().in_use(self.capacity)
    }

    /// Highest number of rooms held at the same time
    pub fn peak_in_use(&self) -> usize {
        self.state.lock().peak_in_use
    }

    /// Whether the pool has been closed
    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }
}
