//! Tests for the clock and day boundary broadcasting
//!
//! These tests verify that every listener sees every boundary once and in
//! order, however the threads are scheduled, and that the clock terminates
//! with exactly N day-starts and N + 1 day-ends.

use hotel_occupancy_simulator::events::{EventLog, HotelEvent};
use hotel_occupancy_simulator::simulation::{Boundary, Clock, DayEvents};
use hotel_occupancy_simulator::types::{ClockState, DayPhase};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn run_clock(days: u64, settle: Duration) -> (Clock, Arc<DayEvents>, EventLog) {
    let events = Arc::new(DayEvents::new());
    let log = EventLog::capturing();
    let clock = Clock::new(days, settle, Arc::clone(&events), log.clone());
    let clock = clock.spawn().unwrap().join().unwrap();
    (clock, events, log)
}

/// Every listener observes the same ordered sequence of boundaries
#[test]
fn test_listeners_see_every_boundary_in_order() {
    let days = 6;
    let events = Arc::new(DayEvents::new());
    let log = EventLog::capturing();

    let listeners: Vec<_> = (0..8)
        .map(|i| {
            let mut listener = events.subscribe();
            thread::spawn(move || {
                let mut seen = Vec::new();
                while let Some(boundary) = listener.next_boundary() {
                    seen.push(boundary);
                    if i % 2 == 0 {
                        // Slow listeners must still catch every boundary
                        thread::sleep(Duration::from_millis(1));
                    }
                }
                seen
            })
        })
        .collect();

    let clock = Clock::new(days, Duration::ZERO, Arc::clone(&events), log);
    clock.spawn().unwrap().join().unwrap();

    let expected: Vec<Boundary> = (1..=2 * days + 1).filter_map(Boundary::from_seq).collect();
    for listener in listeners {
        assert_eq!(listener.join().unwrap(), expected);
    }
}

/// Day-start(d) comes before day-end(d), which comes before day-start(d + 1)
#[test]
fn test_boundary_ordering() {
    let (_, _, log) = run_clock(4, Duration::ZERO);
    let boundaries: Vec<(DayPhase, u64)> =
        log.journal().iter().filter_map(HotelEvent::boundary).collect();

    assert_eq!(boundaries.first(), Some(&(DayPhase::DayEnd, 0)));
    for pair in boundaries.windows(2) {
        match pair[0] {
            (DayPhase::DayEnd, day) => assert_eq!(pair[1], (DayPhase::DayStart, day + 1)),
            (DayPhase::DayStart, day) => assert_eq!(pair[1], (DayPhase::DayEnd, day)),
        }
    }
}

/// Exactly N day-starts and N + 1 day-ends, then finished for good
#[test]
fn test_clock_termination() {
    let (clock, events, log) = run_clock(5, Duration::from_millis(1));
    assert_eq!(clock.state(), ClockState::Finished);
    assert_eq!(clock.day_index(), 5);

    let tally = log.tally();
    assert_eq!(tally.day_starts, 5);
    assert_eq!(tally.day_ends, 6);
    assert_eq!(log.journal().last(), Some(&HotelEvent::HotelClosed));

    assert!(events.is_finished());
    assert_eq!(events.advance(), None);
    assert_eq!(events.subscribe().next_boundary(), None);
}

/// A listener that joins late only sees what comes after it joined
#[test]
fn test_late_subscriber_starts_from_current_boundary() {
    let events = Arc::new(DayEvents::new());
    events.advance();
    events.advance();

    let mut late = events.subscribe();
    let mut replay = events.subscribe_from_start();
    assert_eq!(late.day(), 1);

    events.advance();
    events.finish();

    let late_seen: Vec<_> = std::iter::from_fn(|| late.next_boundary()).collect();
    assert_eq!(late_seen.len(), 1);
    assert_eq!((late_seen[0].phase, late_seen[0].day), (DayPhase::DayEnd, 1));

    let replayed: Vec<_> = std::iter::from_fn(|| replay.next_day_start()).collect();
    assert_eq!(replayed.len(), 1);
    assert_eq!(replayed[0].day, 1);
}

/// Zero days still opens the first evening and closes
#[test]
fn test_zero_day_run() {
    let (clock, _, log) = run_clock(0, Duration::ZERO);
    assert_eq!(clock.state(), ClockState::Finished);
    let tally = log.tally();
    assert_eq!(tally.day_starts, 0);
    assert_eq!(tally.day_ends, 1);
}
