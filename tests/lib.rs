// Integration tests test your crate's public API. They only have access to items
// in your crate that are marked pub. See the Cargo Targets page of the Cargo Book
// for more information.
//
//   https://doc.rust-lang.org/cargo/reference/cargo-targets.html#integration-tests
//

use hotel_occupancy_simulator::*;
use std::sync::Arc;
use std::time::Duration;

mod day_cycle_tests;
mod scenario_tests;

#[test]
fn test_core_id_types() {
    let run_id = RunId::new();
    assert_ne!(run_id, RunId::new());
    assert!(run_id.to_string().starts_with("RUN_"));

    assert_eq!(ClientId::FIRST, ClientId(1));
    assert_eq!(ClientId::FIRST.next().to_string(), "2");
}

#[test]
fn test_enum_types() {
    assert_eq!(DayPhase::DayEnd.to_string(), "day-end");
    assert!(ClockState::Finished.is_finished());
    assert!(OccupantState::Abandoned.is_terminal());
    assert!(!OccupantState::Housed.is_terminal());
}

#[test]
fn test_default_configuration() {
    let config = SimulationConfig::default();
    assert_eq!(config.room_count, 30);
    assert_eq!(config.max_new_clients_per_day, 10);
    assert_eq!(config.max_client_count, 100);
    assert_eq!(config.number_of_days, 10);
    assert_eq!(config.settle_interval(), Duration::from_secs(1));
    assert!(config.validate().is_ok());
}

#[test]
fn test_event_lines() {
    assert_eq!(
        HotelEvent::ClientArrived { client: ClientId(3), stay_length: 4, day: 1 }.to_string(),
        "Came client 3. Wants to stay for 4 days."
    );
    assert_eq!(
        HotelEvent::CheckedIn { client: ClientId(3), day: 1 }.to_string(),
        "I am client 3. I am checking in."
    );
    assert_eq!(
        HotelEvent::WaitingSummary { waiting: 2, day: 1 }.to_string(),
        "2 clients are waiting near the hotel."
    );
}

#[test]
fn test_room_pool_and_registry_basics() {
    let pool = Arc::new(RoomPool::new(2));
    assert_eq!(pool.acquire(), Acquisition::Housed);
    assert_eq!(pool.available(), 1);
    pool.release();
    assert_eq!(pool.available(), 2);

    let registry = OccupantRegistry::new(1);
    assert_eq!(registry.try_admit(), Admission::Admitted(ClientId(1)));
    assert_eq!(registry.try_admit(), Admission::Full);
}

#[test]
fn test_single_occupant_stays_and_leaves() {
    let ctx = OccupantContext {
        pool: Arc::new(RoomPool::new(1)),
        registry: Arc::new(OccupantRegistry::new(5)),
        events: Arc::new(DayEvents::new()),
        log: EventLog::capturing(),
    };
    let Admission::Admitted(id) = ctx.registry.try_admit() else {
        panic!("client should be admitted");
    };

    let handle = Occupant::new(id, 2).spawn(ctx.clone()).unwrap();
    while ctx.registry.state_of(id) != Some(OccupantState::Housed) {
        std::thread::sleep(Duration::from_millis(1));
    }

    let clock = Clock::new(3, Duration::ZERO, Arc::clone(&ctx.events), ctx.log.clone());
    clock.spawn().unwrap().join().unwrap();

    let occupant = handle.join().unwrap();
    assert_eq!(occupant.state(), OccupantState::CheckedOut);
    assert_eq!(occupant.days_elapsed(), 2);
    assert_eq!(ctx.pool.available(), 1);
    assert_eq!(ctx.registry.snapshot().checked_out, 1);
}
