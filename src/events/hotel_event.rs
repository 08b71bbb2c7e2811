//! Hotel events
//!
//! This module contains every event the simulation reports, together with the
//! exact line each one prints in the event log.

use crate::types::{ClientId, DayPhase};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Something that happened in the hotel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HotelEvent {
    /// The hotel opened its doors
    HotelOpened {
        /// Number of rooms
        rooms: usize,
    },
    /// The clock broadcast a day-start
    DayStarted {
        /// Day index
        day: u64,
    },
    /// The clock broadcast a day-end (day 0 is the opening evening)
    DayEnded {
        /// Day index
        day: u64,
    },
    /// A new client showed up
    ClientArrived {
        /// Who arrived
        client: ClientId,
        /// Nights the client wants to stay
        stay_length: u32,
        /// Day whose end brought the client
        day: u64,
    },
    /// An arrived client could not be started and was sent away again
    ArrivalCancelled {
        /// Who was sent away
        client: ClientId,
        /// Day whose end brought the client
        day: u64,
    },
    /// A client got a room
    CheckedIn {
        /// Who checked in
        client: ClientId,
        /// Last day started when the room was taken
        day: u64,
    },
    /// A housed client saw one more day start
    Stayed {
        /// Who stayed
        client: ClientId,
        /// Days stayed so far
        days_elapsed: u32,
        /// Day that just started
        day: u64,
    },
    /// A client gave its room back
    CheckedOut {
        /// Who checked out
        client: ClientId,
        /// Day during which the client left
        day: u64,
    },
    /// Arrivals stopped for the day because the waiting cap was reached
    HotelFull {
        /// Day whose arrivals were cut short
        day: u64,
    },
    /// Waiting count after a batch of arrivals
    WaitingSummary {
        /// Clients waiting near the hotel
        waiting: usize,
        /// Day whose arrivals were just processed
        day: u64,
    },
    /// The clock finished before the client could finish its stay
    Abandoned {
        /// Who was left behind
        client: ClientId,
        /// Days stayed before the hotel closed
        days_elapsed: u32,
    },
    /// The clock finished
    HotelClosed,
}

impl HotelEvent {
    /// The client this event is about, if any
    pub fn client(&self) -> Option<ClientId> {
        match self {
            HotelEvent::ClientArrived { client, .. }
            | HotelEvent::ArrivalCancelled { client, .. }
            | HotelEvent::CheckedIn { client, .. }
            | HotelEvent::Stayed { client, .. }
            | HotelEvent::CheckedOut { client, .. }
            | HotelEvent::Abandoned { client, .. } => Some(*client),
            _ => None,
        }
    }

    /// The day boundary this event marks, if it is one
    pub fn boundary(&self) -> Option<(DayPhase, u64)> {
        match self {
            HotelEvent::DayStarted { day } => Some((DayPhase::DayStart, *day)),
            HotelEvent::DayEnded { day } => Some((DayPhase::DayEnd, *day)),
            _ => None,
        }
    }
}

impl fmt::Display for HotelEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HotelEvent::HotelOpened { rooms } => write!(
                f,
                "Hotel opened with {} rooms.--------------------------------------------",
                rooms
            ),
            HotelEvent::DayStarted { day } => {
                write!(f, "Day {} started.---------------------------------", day)
            }
            HotelEvent::DayEnded { day } => {
                write!(f, "Day {} ended.-----------------------------------", day)
            }
            HotelEvent::ClientArrived { client, stay_length, .. } => {
                write!(f, "Came client {}. Wants to stay for {} days.", client, stay_length)
            }
            HotelEvent::ArrivalCancelled { client, .. } => {
                write!(f, "Client {} could not be let in and went away.", client)
            }
            HotelEvent::CheckedIn { client, .. } => {
                write!(f, "I am client {}. I am checking in.", client)
            }
            HotelEvent::Stayed { client, days_elapsed, .. } => {
                write!(f, "I am client {}, stayed here for {} days.", client, days_elapsed)
            }
            HotelEvent::CheckedOut { client, .. } => {
                write!(f, "I am client {}. I am checking out.", client)
            }
            HotelEvent::HotelFull { .. } => write!(
                f,
                "The hotel and benches in front of it are FULL. No more clients can come right now."
            ),
            HotelEvent::WaitingSummary { waiting, .. } => {
                write!(f, "{} clients are waiting near the hotel.", waiting)
            }
            HotelEvent::Abandoned { client, .. } => write!(
                f,
                "I am client {}. The hotel closed before I could finish my stay.",
                client
            ),
            HotelEvent::HotelClosed => {
                write!(f, "Hotel takes a break for an unknown amount of time.-------------------")
            }
        }
    }
}
