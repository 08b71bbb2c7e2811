//! Identifier types for the hotel occupancy simulator
//!
//! This module contains the sequential client identifier assigned by the
//! arrival generator and the UUID-based identifier of a simulation run.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

/// Sequential identifier of a client, starting at 1 for the first arrival
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(pub u64);

impl ClientId {
    /// Identifier handed to the very first client of a run
    pub const FIRST: ClientId = ClientId(1);

    /// Identifier of the client arriving right after this one
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Raw sequence number
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for one simulation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RunId(pub Uuid);

impl RunId {
    /// Create a new random run ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RUN_{}", self.0.simple())
    }
}

impl Serialize for RunId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for RunId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let raw = s.strip_prefix("RUN_").unwrap_or(&s);
        let uuid = Uuid::parse_str(raw).map_err(serde::de::Error::custom)?;
        Ok(RunId(uuid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_ids_are_sequential() {
        let first = ClientId::FIRST;
        assert_eq!(first.value(), 1);
        assert_eq!(first.next(), ClientId(2));
        assert!(first < first.next());
        assert_eq!(ClientId(42).to_string(), "42");
    }

    #[test]
    fn test_run_id_uniqueness_and_format() {
        let run_id = RunId::new();
        assert_ne!(run_id, RunId::new());
        assert!(run_id.to_string().starts_with("RUN_"));
    }

    #[test]
    fn test_run_id_serde_accepts_prefixed_and_raw() {
        let run_id = RunId::new();
        let json = serde_json::to_string(&run_id).unwrap();
        let parsed: RunId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, run_id);

        let raw = format!("\"{}\"", run_id.0);
        let parsed: RunId = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, run_id);
    }
}
