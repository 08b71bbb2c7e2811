//! The hotel itself: rooms and the clients waiting for them
//!
//! This module holds the two pieces of shared state clients contend for.
//!
//! # Overview
//!
//! - **RoomPool**: the fixed set of rooms with blocking check-in
//! - **OccupantRegistry**: sequential client IDs, the waiting cap and the
//!   lifecycle of every client that has not finished yet
//!
//! # Usage Example
//!
//! ```rust
//! use hotel_occupancy_simulator::facility::*;
//!
//! let pool = RoomPool::new(2);
//! assert_eq!(pool.acquire(), Acquisition::Housed);
//! assert_eq!(pool.available(), 1);
//! pool.release();
//!
//! let registry = OccupantRegistry::new(1);
//! assert!(matches!(registry.try_admit(), Admission::Admitted(_)));
//! assert_eq!(registry.try_admit(), Admission::Full);
//! ```

pub mod registry;
pub mod room;

// Re-export all public types for convenience
pub use registry::{Admission, OccupantRegistry, RegistrySnapshot};
pub use room::{Acquisition, RoomPool};
