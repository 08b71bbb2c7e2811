//! Run report
//!
//! This module contains the SimulationReport, the summary the orchestrator
//! hands back once the clock has finished.

use crate::events::EventTally;
use crate::facility::RegistrySnapshot;
use crate::types::RunId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Summary of one finished simulation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Identifier of the run
    pub run_id: RunId,
    /// When the hotel opened
    pub started_at: DateTime<Utc>,
    /// When the clock finished
    pub finished_at: DateTime<Utc>,
    /// Wall-clock duration of the run
    pub duration: Duration,

    /// Rooms in the hotel
    pub room_count: usize,
    /// Days the clock ran through
    pub days_completed: u64,

    /// Clients that arrived
    pub clients_arrived: u64,
    /// Clients that got a room
    pub clients_checked_in: u64,
    /// Clients that finished their stay before closing
    pub clients_checked_out: u64,
    /// Days on which arrivals were turned away
    pub full_notices: u64,
    /// Nights stayed, summed over all clients
    pub nights_stayed: u64,

    /// Highest number of rooms held at once
    pub peak_rooms_in_use: usize,
    /// Highest number of clients waiting at once
    pub peak_waiting: usize,
    /// Clients still holding a room at closing
    pub housed_at_close: usize,
    /// Clients still waiting at closing
    pub waiting_at_close: usize,
}

impl SimulationReport {
    /// Assemble a report from the counters gathered during a run
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        run_id: RunId,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
        duration: Duration,
        room_count: usize,
        days_completed: u64,
        peak_rooms_in_use: usize,
        registry: RegistrySnapshot,
        tally: EventTally,
    ) -> Self {
        Self {
            run_id,
            started_at,
            finished_at,
            duration,
            room_count,
            days_completed,
            clients_arrived: registry.arrived,
            clients_checked_in: registry.checked_in,
            clients_checked_out: registry.checked_out,
            full_notices: tally.full_notices,
            nights_stayed: tally.nights,
            peak_rooms_in_use,
            peak_waiting: registry.peak_waiting,
            housed_at_close: registry.housed,
            waiting_at_close: registry.waiting,
        }
    }

    /// Share of room-nights that were occupied, as a percentage
    pub fn occupancy_rate(&self) -> f64 {
        let capacity = self.room_count as u64 * self.days_completed;
        if capacity == 0 {
            return 0.0;
        }
        (self.nights_stayed as f64 / capacity as f64) * 100.0
    }

    /// Multi-line text summary
    pub fn summary(&self) -> String {
        format!(
            "Run {run_id}\n\
             Days completed: {days} ({duration:.2}s)\n\
             Rooms: {rooms} (peak in use: {peak_rooms})\n\
             Clients arrived: {arrived}\n\
             Clients checked in: {checked_in}\n\
             Clients checked out: {checked_out}\n\
             Nights stayed: {nights} (occupancy {occupancy:.1}%)\n\
             Full notices: {full}\n\
             Peak waiting: {peak_waiting}\n\
             At close: {housed} housed, {waiting} waiting",
            run_id = self.run_id,
            days = self.days_completed,
            duration = self.duration.as_secs_f64(),
            rooms = self.room_count,
            peak_rooms = self.peak_rooms_in_use,
            arrived = self.clients_arrived,
            checked_in = self.clients_checked_in,
            checked_out = self.clients_checked_out,
            nights = self.nights_stayed,
            occupancy = self.occupancy_rate(),
            full = self.full_notices,
            peak_waiting = self.peak_waiting,
            housed = self.housed_at_close,
            waiting = self.waiting_at_close,
        )
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> SimulationReport {
        let now = Utc::now();
        let registry = RegistrySnapshot {
            waiting: 2,
            housed: 3,
            arrived: 12,
            checked_in: 10,
            checked_out: 7,
            abandoned: 0,
            peak_waiting: 5,
        };
        let tally = EventTally { full_notices: 1, nights: 20, ..Default::default() };
        SimulationReport::new(RunId::new(), now, now, Duration::from_millis(1500), 4, 10, 4, registry, tally)
    }

    #[test]
    fn test_report_takes_counters() {
        let report = sample_report();
        assert_eq!(report.clients_arrived, 12);
        assert_eq!(report.clients_checked_in, 10);
        assert_eq!(report.clients_checked_out, 7);
        assert_eq!(report.full_notices, 1);
        assert_eq!(report.nights_stayed, 20);
        assert_eq!(report.housed_at_close, 3);
        assert_eq!(report.waiting_at_close, 2);
        assert_eq!(report.peak_waiting, 5);
    }

    #[test]
    fn test_occupancy_rate() {
        let report = sample_report();
        assert!((report.occupancy_rate() - 50.0).abs() < f64::EPSILON);

        let empty = SimulationReport { days_completed: 0, ..report };
        assert_eq!(empty.occupancy_rate(), 0.0);
    }

    #[test]
    fn test_summary_and_json() {
        let report = sample_report();
        let summary = report.summary();
        assert!(summary.contains("Days completed: 10"));
        assert!(summary.contains("Full notices: 1"));
        assert!(summary.contains("At close: 3 housed, 2 waiting"));

        let json = serde_json::to_string(&report).unwrap();
        let parsed: SimulationReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.run_id, report.run_id);
        assert_eq!(parsed.clients_arrived, report.clients_arrived);
    }
}
