//! The event log
//!
//! Every component reports through a cloned [`EventLog`]. Each event is written
//! as one line to the configured writer, counted, mirrored to `tracing` and,
//! when a journal is enabled, kept in memory in the order it was recorded.

use crate::events::HotelEvent;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{self, LineWriter, Write};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

/// Counts of recorded events by kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EventTally {
    /// Day-starts broadcast
    pub day_starts: u64,
    /// Day-ends broadcast, including the opening evening
    pub day_ends: u64,
    /// Clients that arrived, not counting arrivals cancelled afterwards
    pub arrivals: u64,
    /// Check-ins
    pub check_ins: u64,
    /// Nights stayed, summed over all clients
    pub nights: u64,
    /// Check-outs
    pub check_outs: u64,
    /// Days on which arrivals were cut short
    pub full_notices: u64,
    /// Clients left behind at closing
    pub abandoned: u64,
}

impl EventTally {
    fn count(&mut self, event: &HotelEvent) {
        match event {
            HotelEvent::DayStarted { .. } => self.day_starts += 1,
            HotelEvent::DayEnded { .. } => self.day_ends += 1,
            HotelEvent::ClientArrived { .. } => self.arrivals += 1,
            HotelEvent::ArrivalCancelled { .. } => self.arrivals = self.arrivals.saturating_sub(1),
            HotelEvent::CheckedIn { .. } => self.check_ins += 1,
            HotelEvent::Stayed { .. } => self.nights += 1,
            HotelEvent::CheckedOut { .. } => self.check_outs += 1,
            HotelEvent::HotelFull { .. } => self.full_notices += 1,
            HotelEvent::Abandoned { .. } => self.abandoned += 1,
            HotelEvent::HotelOpened { .. }
            | HotelEvent::WaitingSummary { .. }
            | HotelEvent::HotelClosed => {}
        }
    }
}

/// Shared, line-oriented sink for hotel events
#[derive(Clone)]
pub struct EventLog {
    sink: Arc<Mutex<LogSink>>,
}

struct LogSink {
    writer: Box<dyn Write + Send>,
    journal: Option<Vec<HotelEvent>>,
    tally: EventTally,
}

impl fmt::Debug for EventLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sink = self.sink.lock();
        f.debug_struct("EventLog")
            .field("tally", &sink.tally)
            .field("journaled", &sink.journal.as_ref().map(Vec::len))
            .finish()
    }
}

impl EventLog {
    /// Write event lines to the given writer
    pub fn to_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self::build(Box::new(writer), false)
    }

    /// Create (or truncate) a file and write each event line to it as it is recorded
    ///
    /// Lines are pushed to the file one at a time, so lines recorded after the
    /// last [`EventLog::flush`] still land in the file.
    pub fn to_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Ok(Self::to_writer(LineWriter::new(File::create(path)?)))
    }

    /// Write event lines to stdout
    pub fn stdout() -> Self {
        Self::to_writer(io::stdout())
    }

    /// Discard the lines but keep every event in memory
    pub fn capturing() -> Self {
        Self::build(Box::new(io::sink()), true)
    }

    /// Write event lines to the given writer and keep every event in memory
    pub fn capturing_to<W: Write + Send + 'static>(writer: W) -> Self {
        Self::build(Box::new(writer), true)
    }

    fn build(writer: Box<dyn Write + Send>, journal: bool) -> Self {
        Self {
            sink: Arc::new(Mutex::new(LogSink {
                writer,
                journal: journal.then(Vec::new),
                tally: EventTally::default(),
            })),
        }
    }

    /// Record one event
    pub fn record(&self, event: HotelEvent) {
        let mut sink = self.sink.lock();
        if let Err(e) = writeln!(sink.writer, "{}", event) {
            warn!("Failed to write event log line: {}", e);
        }
        debug!(event = %event, "Hotel event");
        sink.tally.count(&event);
        if let Some(journal) = sink.journal.as_mut() {
            journal.push(event);
        }
    }

    /// Every event recorded so far, in order (empty without a journal)
    pub fn journal(&self) -> Vec<HotelEvent> {
        self.sink.lock().journal.clone().unwrap_or_default()
    }

    /// Counts of recorded events
    pub fn tally(&self) -> EventTally {
        self.sink.lock().tally
    }

    /// Flush the underlying writer
    pub fn flush(&self) {
        if let Err(e) = self.sink.lock().writer.flush() {
            warn!("Failed to flush event log: {}", e);
        }
    }
}
