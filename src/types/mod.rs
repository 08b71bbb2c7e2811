//! Core types and identifiers for the hotel occupancy simulator
//!
//! This module contains fundamental types, identifiers, and configuration structures
//! used throughout the simulation system.
//!
//! # Overview
//!
//! - **Identifiers**: sequential client IDs and UUID-based run IDs
//! - **Enums**: day phases, clock states and client states
//! - **Configuration**: simulation configuration with validation and CLI support
//!
//! # Usage Example
//!
//! ```rust
//! use hotel_occupancy_simulator::types::*;
//!
//! let first = ClientId::FIRST;
//! assert_eq!(first.next(), ClientId(2));
//!
//! let config = SimulationConfig {
//!     room_count: 5,
//!     number_of_days: 3,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

pub mod config;
pub mod enums;
pub mod identifiers;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
pub use identifiers::*;
