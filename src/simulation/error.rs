//! Error types and handling
//!
//! This module contains the errors that can stop a simulation from starting.
//! Once running, the coordination core never fails: a full hotel or a client
//! that never gets a room are ordinary outcomes, not errors.

use crate::types::{ConfigError, ConfigValidationError};
use thiserror::Error;

/// Errors that can occur while setting up or launching a simulation
#[derive(Debug, Error)]
pub enum SimulationError {
    /// Configuration could not be loaded or failed validation
    #[error("Configuration validation failed: {0}")]
    ConfigurationError(String),

    /// A thread for one of the simulation actors could not be started
    #[error("Failed to start the {role} thread: {source}")]
    ThreadSpawnError {
        /// Which actor the thread was for
        role: &'static str,
        /// Underlying OS error
        #[source]
        source: std::io::Error,
    },

    /// The clock thread panicked
    #[error("The clock thread panicked")]
    ClockPanicked,

    /// The orchestrator was asked to run a second time
    #[error("This simulation has already run")]
    AlreadyRun,
}

impl From<ConfigError> for SimulationError {
    fn from(error: ConfigError) -> Self {
        SimulationError::ConfigurationError(error.to_string())
    }
}

impl From<ConfigValidationError> for SimulationError {
    fn from(error: ConfigValidationError) -> Self {
        SimulationError::ConfigurationError(error.to_string())
    }
}

impl SimulationError {
    /// Create a configuration error
    pub fn configuration_error(msg: impl Into<String>) -> Self {
        Self::ConfigurationError(msg.into())
    }

    /// Create a thread start error for the named actor
    pub fn thread_spawn_error(role: &'static str, source: std::io::Error) -> Self {
        Self::ThreadSpawnError { role, source }
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            SimulationError::ConfigurationError(_) => "Configuration",
            SimulationError::ThreadSpawnError { .. } => "Thread Startup",
            SimulationError::ClockPanicked => "Clock",
            SimulationError::AlreadyRun => "Lifecycle",
        }
    }
}

/// Result type for simulation operations
pub type SimulationResult<T> = Result<T, SimulationError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_categories() {
        assert_eq!(SimulationError::configuration_error("bad").category(), "Configuration");
        assert_eq!(SimulationError::ClockPanicked.category(), "Clock");
        assert_eq!(SimulationError::AlreadyRun.category(), "Lifecycle");

        let spawn = SimulationError::thread_spawn_error(
            "clock",
            io::Error::new(io::ErrorKind::Other, "no threads left"),
        );
        assert_eq!(spawn.category(), "Thread Startup");
        assert_eq!(spawn.to_string(), "Failed to start the clock thread: no threads left");
    }

    #[test]
    fn test_config_errors_convert() {
        let error: SimulationError = ConfigValidationError::InvalidRoomCount(0).into();
        assert!(matches!(error, SimulationError::ConfigurationError(_)));
        assert!(error.to_string().contains("Room count must be greater than 0"));

        let error: SimulationError = ConfigError::MissingValue("number of days").into();
        assert!(error.to_string().contains("Missing value for number of days"));
    }
}
