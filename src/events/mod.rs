//! Hotel events and the event log
//!
//! This module defines what the simulation reports and where it goes.
//!
//! # Overview
//!
//! - **HotelEvent**: one line of the human-readable event log
//! - **EventLog**: shared sink that writes, counts and optionally journals events
//!
//! # Usage Example
//!
//! ```rust
//! use hotel_occupancy_simulator::events::*;
//!
//! let log = EventLog::capturing();
//! log.record(HotelEvent::DayStarted { day: 1 });
//! assert_eq!(log.tally().day_starts, 1);
//! assert_eq!(log.journal()[0].to_string(), "Day 1 started.---------------------------------");
//! ```

pub mod hotel_event;
pub mod log;

// Re-export all public types for convenience
pub use hotel_event::*;
pub use log::*;
