//! End-to-end hotel scenarios
//!
//! These tests run the full orchestrator with a short settle interval and
//! check the properties every run must have, whatever the random draws.

use hotel_occupancy_simulator::events::{EventLog, HotelEvent};
use hotel_occupancy_simulator::simulation::{SimulationOrchestrator, SimulationReport};
use hotel_occupancy_simulator::types::{ClientId, ClockState, SimulationConfig};
use std::collections::{BTreeMap, HashSet};

fn config(rooms: usize, max_new: usize, cap: usize, days: u64) -> SimulationConfig {
    SimulationConfig {
        room_count: rooms,
        max_new_clients_per_day: max_new,
        max_client_count: cap,
        number_of_days: days,
        settle_interval_ms: 5,
        output: None,
    }
}

fn run(config: SimulationConfig, seed: u64) -> (SimulationReport, Vec<HotelEvent>) {
    let log = EventLog::capturing();
    let mut orchestrator =
        SimulationOrchestrator::with_event_log(config, log.clone()).unwrap().with_seed(seed);
    let report = orchestrator.run().unwrap();
    assert_eq!(orchestrator.clock_state(), ClockState::Finished);

    // Clients woken at closing may still be writing; only look up to the close
    let journal = log.journal();
    let closed = journal
        .iter()
        .position(|event| *event == HotelEvent::HotelClosed)
        .expect("the hotel should have closed");
    (report, journal[..=closed].to_vec())
}

/// One room: only one client is housed at a time and check-ins alternate with check-outs
#[test]
fn test_single_room_alternates() {
    let (report, journal) = run(config(1, 1, 10, 3), 11);
    assert!(report.peak_rooms_in_use <= 1);

    let mut housed: Option<ClientId> = None;
    for event in &journal {
        match event {
            HotelEvent::CheckedIn { client, .. } => {
                assert_eq!(housed, None, "client {} checked in while the room was taken", client);
                housed = Some(*client);
            }
            HotelEvent::CheckedOut { client, .. } => {
                assert_eq!(housed, Some(*client));
                housed = None;
            }
            _ => {}
        }
    }
}

/// No arrivals: the hotel stays empty and the clock still runs every day
#[test]
fn test_no_arrivals() {
    let (report, journal) = run(config(30, 0, 10, 5), 3);

    assert!(journal.iter().all(|event| event.client().is_none()));
    let starts = journal.iter().filter(|e| matches!(e, HotelEvent::DayStarted { .. })).count();
    let ends = journal.iter().filter(|e| matches!(e, HotelEvent::DayEnded { .. })).count();
    assert_eq!(starts, 5);
    assert_eq!(ends, 6);

    assert_eq!(report.days_completed, 5);
    assert_eq!(report.clients_arrived, 0);
    assert_eq!(report.peak_rooms_in_use, 0);
}

/// The waiting cap holds and the full notice is given at most once per day
#[test]
fn test_waiting_cap_holds() {
    let (report, journal) = run(config(100, 10, 5, 10), 5);
    assert!(report.peak_waiting <= 5);

    let mut notices_per_day: BTreeMap<u64, usize> = BTreeMap::new();
    for event in &journal {
        match event {
            HotelEvent::WaitingSummary { waiting, .. } => assert!(*waiting <= 5),
            HotelEvent::HotelFull { day } => *notices_per_day.entry(*day).or_default() += 1,
            _ => {}
        }
    }
    assert!(notices_per_day.values().all(|count| *count == 1));
    assert_eq!(report.full_notices as usize, notices_per_day.len());

    // The cap is reached, and later evenings let clients in again
    assert!(report.full_notices > 0);
    let first_full_day = *notices_per_day.keys().next().unwrap();
    assert!(journal.iter().any(|event| matches!(
        event,
        HotelEvent::ClientArrived { day, .. } if *day > first_full_day
    )));
}

/// Every client that checks out saw exactly the day-starts after its check-in
#[test]
fn test_stay_length_fidelity() {
    let (_, journal) = run(config(3, 4, 20, 12), 17);

    let mut wanted: BTreeMap<ClientId, u32> = BTreeMap::new();
    let mut check_in_day: BTreeMap<ClientId, u64> = BTreeMap::new();
    let mut nights: BTreeMap<ClientId, Vec<(u32, u64)>> = BTreeMap::new();
    let mut checked_out: HashSet<ClientId> = HashSet::new();

    for event in &journal {
        match event {
            HotelEvent::ClientArrived { client, stay_length, .. } => {
                wanted.insert(*client, *stay_length);
            }
            HotelEvent::CheckedIn { client, day } => {
                check_in_day.insert(*client, *day);
            }
            HotelEvent::Stayed { client, days_elapsed, day } => {
                nights.entry(*client).or_default().push((*days_elapsed, *day));
            }
            HotelEvent::CheckedOut { client, .. } => {
                checked_out.insert(*client);
            }
            _ => {}
        }
    }

    assert!(!checked_out.is_empty(), "some clients should finish within twelve days");
    for client in &checked_out {
        let stay = wanted[client];
        let first_day = check_in_day[client] + 1;
        let expected: Vec<(u32, u64)> =
            (1..=stay).map(|n| (n, first_day + u64::from(n) - 1)).collect();
        assert_eq!(nights[client], expected, "client {}", client);
    }
}

/// Client IDs are handed out in arrival order starting at 1
#[test]
fn test_client_ids_are_sequential() {
    let (report, journal) = run(config(10, 3, 50, 4), 23);

    let arrivals: Vec<u64> = journal
        .iter()
        .filter_map(|event| match event {
            HotelEvent::ClientArrived { client, .. } => Some(client.value()),
            _ => None,
        })
        .collect();
    let expected: Vec<u64> = (1..=arrivals.len() as u64).collect();
    assert_eq!(arrivals, expected);
    assert_eq!(report.clients_arrived, arrivals.len() as u64);
}
