//! Enumeration types for the hotel occupancy simulator
//!
//! This module contains the day phases broadcast by the clock, the clock's own
//! lifecycle states and the lifecycle states of a client.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two boundaries the clock broadcasts every day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayPhase {
    /// The day begins; housed clients count one more night
    DayStart,
    /// The day is over; new clients may arrive
    DayEnd,
}

impl fmt::Display for DayPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayPhase::DayStart => write!(f, "day-start"),
            DayPhase::DayEnd => write!(f, "day-end"),
        }
    }
}

impl FromStr for DayPhase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "day-start" | "daystart" | "start" => Ok(DayPhase::DayStart),
            "day-end" | "dayend" | "end" => Ok(DayPhase::DayEnd),
            _ => Err(format!("Unknown day phase: {}", s)),
        }
    }
}

/// Lifecycle of the simulation clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClockState {
    /// Constructed, nothing broadcast yet
    NotStarted,
    /// Broadcasting; `day` is the current day index (0 before the first day-start)
    Running {
        /// Current day index
        day: u64,
    },
    /// All days elapsed; no boundary will ever be broadcast again
    Finished,
}

impl ClockState {
    /// Whether the clock has stopped for good
    pub fn is_finished(&self) -> bool {
        matches!(self, ClockState::Finished)
    }
}

impl fmt::Display for ClockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClockState::NotStarted => write!(f, "Not Started"),
            ClockState::Running { day } => write!(f, "Running (day {})", day),
            ClockState::Finished => write!(f, "Finished"),
        }
    }
}

/// Lifecycle of a client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OccupantState {
    /// Arrived and waiting near the hotel for a free room
    Waiting,
    /// Holding a room
    Housed,
    /// Stayed the whole requested length and gave the room back
    CheckedOut,
    /// Left behind when the clock finished, either still waiting or mid-stay
    Abandoned,
}

impl OccupantState {
    /// Whether the client will never change state again
    pub fn is_terminal(&self) -> bool {
        matches!(self, OccupantState::CheckedOut | OccupantState::Abandoned)
    }
}

impl fmt::Display for OccupantState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OccupantState::Waiting => write!(f, "Waiting"),
            OccupantState::Housed => write!(f, "Housed"),
            OccupantState::CheckedOut => write!(f, "Checked Out"),
            OccupantState::Abandoned => write!(f, "Abandoned"),
        }
    }
}
