//! Simulation orchestration and control
//!
//! This module contains the clock and the day-boundary broadcast it drives, the
//! orchestrator that runs one hotel, the run report, error types and logging
//! setup.
//!
//! # Overview
//!
//! - **SimulationOrchestrator**: wires every component together and runs the hotel
//! - **Clock**: broadcasts day-start and day-end for a fixed number of days
//! - **DayEvents** / **DayListener**: the broadcast surface; every listener sees
//!   every boundary exactly once, in order
//! - **SimulationReport**: counters gathered over one run
//! - **SimulationError**: errors that stop a run from starting
//!
//! # Usage Example
//!
//! ```rust
//! use hotel_occupancy_simulator::events::EventLog;
//! use hotel_occupancy_simulator::simulation::*;
//! use hotel_occupancy_simulator::types::*;
//!
//! let config = SimulationConfig {
//!     room_count: 3,
//!     max_new_clients_per_day: 2,
//!     max_client_count: 5,
//!     number_of_days: 2,
//!     settle_interval_ms: 1,
//!     output: None,
//! };
//!
//! let mut orchestrator =
//!     SimulationOrchestrator::with_event_log(config, EventLog::capturing()).unwrap();
//! let report = orchestrator.run().unwrap();
//! assert_eq!(report.days_completed, 2);
//! ```

pub mod clock;
pub mod day_events;
pub mod error;
pub mod logging;
pub mod orchestrator;
pub mod statistics;

// Re-export all public types for convenience
pub use clock::*;
pub use day_events::*;
pub use error::*;
pub use logging::*;
pub use orchestrator::*;
pub use statistics::*;
