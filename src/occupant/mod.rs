//! Hotel clients and their arrival
//!
//! This module models the clients of the hotel and the generator that brings
//! them in.
//!
//! # Overview
//!
//! - **Occupant**: one client on its own thread: wait for a room, stay, leave
//! - **OccupantContext**: the shared handles every client works against
//! - **ArrivalGenerator**: spawns a random batch of clients after every day-end
//!
//! # Usage Example
//!
//! ```rust
//! use hotel_occupancy_simulator::occupant::*;
//! use hotel_occupancy_simulator::types::*;
//!
//! let client = Occupant::new(ClientId::FIRST, 3);
//! assert_eq!(client.stay_length(), 3);
//! assert_eq!(client.state(), OccupantState::Waiting);
//! ```

pub mod generator;
pub mod occupant;

// Re-export all public types for convenience
pub use generator::{ArrivalGenerator, BatchOutcome};
pub use occupant::{Occupant, OccupantContext, MAX_STAY_DAYS, MIN_STAY_DAYS};
