//! Client registry and the waiting cap
//!
//! This module contains the OccupantRegistry, which hands out sequential client
//! IDs, enforces the cap on clients waiting near the hotel and tracks every
//! client that has not finished yet. Entries are dropped as soon as a client
//! checks out or is abandoned; only the counters remember it.

use crate::types::{ClientId, OccupantState};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Result of asking the registry to let one more client arrive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// The client may arrive under this ID
    Admitted(ClientId),
    /// The waiting cap is reached
    Full,
}

/// Point-in-time view of the registry counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    /// Clients waiting for a room
    pub waiting: usize,
    /// Clients holding a room
    pub housed: usize,
    /// Clients admitted since the start
    pub arrived: u64,
    /// Clients that got a room at some point
    pub checked_in: u64,
    /// Clients that finished their stay
    pub checked_out: u64,
    /// Clients left behind when the hotel closed
    pub abandoned: u64,
    /// Highest number of clients waiting at once
    pub peak_waiting: usize,
}

/// Tracks live clients and the waiting cap
#[derive(Debug)]
pub struct OccupantRegistry {
    max_waiting: usize,
    state: Mutex<RegistryState>,
}

#[derive(Debug)]
struct RegistryState {
    next_id: ClientId,
    waiting: usize,
    peak_waiting: usize,
    active: BTreeMap<ClientId, OccupantState>,
    arrived: u64,
    checked_in: u64,
    checked_out: u64,
    abandoned: u64,
}

impl OccupantRegistry {
    /// Create a registry allowing at most `max_waiting` clients near the hotel
    pub fn new(max_waiting: usize) -> Self {
        Self {
            max_waiting,
            state: Mutex::new(RegistryState {
                next_id: ClientId::FIRST,
                waiting: 0,
                peak_waiting: 0,
                active: BTreeMap::new(),
                arrived: 0,
                checked_in: 0,
                checked_out: 0,
                abandoned: 0,
            }),
        }
    }

    /// Admit one more waiting client unless the cap is reached
    pub fn try_admit(&self) -> Admission {
        let mut state = self.state.lock();
        if state.waiting >= self.max_waiting {
            return Admission::Full;
        }

        let id = state.next_id;
        state.next_id = id.next();
        state.waiting += 1;
        state.peak_waiting = state.peak_waiting.max(state.waiting);
        state.arrived += 1;
        state.active.insert(id, OccupantState::Waiting);
        debug!(client = %id, waiting = state.waiting, "Client admitted");
        Admission::Admitted(id)
    }

    /// Undo an admission whose client never started
    pub fn rollback(&self, id: ClientId) {
        let mut state = self.state.lock();
        if state.active.remove(&id) == Some(OccupantState::Waiting) {
            state.waiting -= 1;
            state.arrived -= 1;
        }
    }

    /// The client got a room and no longer counts against the waiting cap
    pub fn mark_housed(&self, id: ClientId) {
        let mut state = self.state.lock();
        if let Some(entry) = state.active.get_mut(&id) {
            if *entry == OccupantState::Waiting {
                *entry = OccupantState::Housed;
                state.waiting -= 1;
                state.checked_in += 1;
            }
        }
    }

    /// The client finished its stay
    pub fn mark_checked_out(&self, id: ClientId) {
        let mut state = self.state.lock();
        if state.active.remove(&id).is_some() {
            state.checked_out += 1;
        }
    }

    /// The client was left behind when the hotel closed
    pub fn mark_abandoned(&self, id: ClientId) {
        let mut state = self.state.lock();
        match state.active.remove(&id) {
            Some(OccupantState::Waiting) => {
                state.waiting -= 1;
                state.abandoned += 1;
            }
            Some(_) => state.abandoned += 1,
            None => {}
        }
    }

    /// Current state of a client that has not finished yet
    pub fn state_of(&self, id: ClientId) -> Option<OccupantState> {
        self.state.lock().active.get(&id).copied()
    }

    /// Clients waiting for a room right now
    pub fn waiting(&self) -> usize {
        self.state.lock().waiting
    }

    /// The configured waiting cap
    pub fn max_waiting(&self) -> usize {
        self.max_waiting
    }

    /// Copy out every counter at once
    pub fn snapshot(&self) -> RegistrySnapshot {
        let state = self.state.lock();
        RegistrySnapshot {
            waiting: state.waiting,
            housed: state.active.values().filter(|s| **s == OccupantState::Housed).count(),
            arrived: state.arrived,
            checked_in: state.checked_in,
            checked_out: state.checked_out,
            abandoned: state.abandoned,
            peak_waiting: state.peak_waiting,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_sequential() {
        let registry = OccupantRegistry::new(10);
        assert_eq!(registry.try_admit(), Admission::Admitted(ClientId(1)));
        assert_eq!(registry.try_admit(), Admission::Admitted(ClientId(2)));
        assert_eq!(registry.try_admit(), Admission::Admitted(ClientId(3)));
        assert_eq!(registry.waiting(), 3);
    }

    #[test]
    fn test_cap_enforced_and_reopened_by_check_in() {
        let registry = OccupantRegistry::new(2);
        let Admission::Admitted(first) = registry.try_admit() else {
            panic!("first client should be admitted");
        };
        assert!(matches!(registry.try_admit(), Admission::Admitted(_)));
        assert_eq!(registry.try_admit(), Admission::Full);

        registry.mark_housed(first);
        assert_eq!(registry.state_of(first), Some(OccupantState::Housed));
        assert_eq!(registry.waiting(), 1);
        assert_eq!(registry.try_admit(), Admission::Admitted(ClientId(3)));
        assert_eq!(registry.snapshot().peak_waiting, 2);
    }

    #[test]
    fn test_zero_cap_admits_nobody() {
        let registry = OccupantRegistry::new(0);
        assert_eq!(registry.try_admit(), Admission::Full);
        assert_eq!(registry.snapshot(), RegistrySnapshot::default());
    }

    #[test]
    fn test_lifecycle_counters() {
        let registry = OccupantRegistry::new(5);
        let ids: Vec<ClientId> = (0..3)
            .filter_map(|_| match registry.try_admit() {
                Admission::Admitted(id) => Some(id),
                Admission::Full => None,
            })
            .collect();

        registry.mark_housed(ids[0]);
        registry.mark_housed(ids[1]);
        registry.mark_checked_out(ids[0]);
        registry.mark_abandoned(ids[1]);
        registry.mark_abandoned(ids[2]);

        let snapshot = registry.snapshot();
        assert_eq!(snapshot.arrived, 3);
        assert_eq!(snapshot.checked_in, 2);
        assert_eq!(snapshot.checked_out, 1);
        assert_eq!(snapshot.abandoned, 2);
        assert_eq!(snapshot.waiting, 0);
        assert_eq!(snapshot.housed, 0);
        assert_eq!(registry.state_of(ids[0]), None);
    }

    #[test]
    fn test_repeated_transitions_are_ignored() {
        let registry = OccupantRegistry::new(5);
        let Admission::Admitted(id) = registry.try_admit() else {
            panic!("client should be admitted");
        };
        registry.mark_housed(id);
        registry.mark_housed(id);
        assert_eq!(registry.waiting(), 0);

        registry.mark_checked_out(id);
        registry.mark_abandoned(id);
        let snapshot = registry.snapshot();
        assert_eq!(snapshot.checked_out, 1);
        assert_eq!(snapshot.abandoned, 0);
    }

    #[test]
    fn test_rollback_frees_the_slot() {
        let registry = OccupantRegistry::new(1);
        let Admission::Admitted(id) = registry.try_admit() else {
            panic!("client should be admitted");
        };
        registry.rollback(id);
        assert_eq!(registry.waiting(), 0);
        assert_eq!(registry.snapshot().arrived, 0);
        assert!(matches!(registry.try_admit(), Admission::Admitted(_)));
    }
}
