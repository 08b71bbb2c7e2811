//! Hotel Occupancy Simulator
//!
//! A concurrent simulation of a hotel with a fixed number of rooms. A clock
//! drives day-start and day-end boundaries, an arrival generator brings in a
//! random number of clients every evening, and every client runs on its own
//! thread: it waits for a free room, stays for a fixed number of days and
//! leaves.
//!
//! # Overview
//!
//! Every shared piece of state sits behind its own lock and condition variable:
//! the [`facility::RoomPool`] hands out rooms, the [`facility::OccupantRegistry`]
//! caps the number of clients waiting near the hotel, and
//! [`simulation::DayEvents`] broadcasts day boundaries so that every listener
//! sees each boundary exactly once. Everything that happens is written as one
//! line to an [`events::EventLog`].
//!
//! ## Quick Start
//!
//! ```rust
//! use hotel_occupancy_simulator::*;
//!
//! let config = SimulationConfig {
//!     room_count: 2,
//!     max_new_clients_per_day: 3,
//!     max_client_count: 6,
//!     number_of_days: 2,
//!     settle_interval_ms: 1,
//!     output: None,
//! };
//!
//! let mut orchestrator = SimulationOrchestrator::with_event_log(config, EventLog::capturing())?;
//! let report = orchestrator.run()?;
//! println!("{}", report.summary());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: Identifiers, enums and configuration
//! - [`facility`]: The room pool and the client registry
//! - [`events`]: Hotel events and the event log
//! - [`occupant`]: Clients and the arrival generator
//! - [`simulation`]: Clock, day boundaries, orchestration and reporting
//!
//! ## Architecture
//!
//! ```text
//!                 ┌──────────────┐
//!                 │    Clock     │
//!                 └──────┬───────┘
//!                        │ day-start / day-end
//!                        ▼
//!                 ┌──────────────┐
//!        ┌────────┤  DayEvents   ├────────┐
//!        │        └──────────────┘        │
//!        ▼ day-end                day-start ▼
//! ┌──────────────┐  spawns  ┌──────────────┐
//! │  Arrival     ├─────────►│  Occupant    │
//! │  Generator   │          │  (thread)    │
//! └──────┬───────┘          └──────┬───────┘
//!        │ admit                   │ acquire / release
//!        ▼                         ▼
//! ┌──────────────┐          ┌──────────────┐
//! │  Occupant    │          │   RoomPool   │
//! │  Registry    │          │              │
//! └──────────────┘          └──────────────┘
//! ```
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod events;
pub mod facility;
pub mod occupant;
pub mod simulation;
pub mod types;

// Core types and identifiers
pub use types::{
    ClientId, ClockState, ConfigError, ConfigValidationError, DayPhase, OccupantState, RunId,
    SimulationConfig,
};

// Facility types
pub use facility::{Acquisition, Admission, OccupantRegistry, RoomPool};

// Event types
pub use events::{EventLog, EventTally, HotelEvent};

// Client types
pub use occupant::{ArrivalGenerator, Occupant, OccupantContext};

// Simulation types
pub use simulation::{
    Clock, DayEvents, DayListener, SimulationError, SimulationOrchestrator, SimulationReport,
    SimulationResult,
};
