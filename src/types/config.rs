//! Configuration structures for the hotel occupancy simulator
//!
//! This module contains the simulation configuration, the command line
//! arguments and the readers for the three configuration sources: a JSON
//! config file, a plain-text input file and interactive prompts.

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;
use std::time::Duration;

/// Default values and hard limits
pub mod defaults {
    /// Rooms in the hotel when nothing else is configured
    pub const ROOM_COUNT: usize = 30;

    /// Upper bound of the random number of arrivals per day
    pub const MAX_NEW_CLIENTS_PER_DAY: usize = 10;

    /// Clients allowed to wait near the hotel at once
    pub const MAX_CLIENT_COUNT: usize = 100;

    /// Days the clock runs for
    pub const NUMBER_OF_DAYS: u64 = 10;

    /// Pause after every day boundary, in milliseconds
    pub const SETTLE_INTERVAL_MS: u64 = 1_000;

    /// Every client is an OS thread, so the waiting cap is bounded
    pub const CLIENT_COUNT_LIMIT: usize = 10_000;

    /// Longest accepted settling interval, in milliseconds
    pub const SETTLE_INTERVAL_LIMIT_MS: u64 = 60_000;
}

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "hotel-simulator",
    version = "0.1.0",
    about = "Hotel occupancy simulator - clients, rooms and a day clock running on threads",
    long_about = "Simulates a hotel with a fixed number of rooms. A clock advances day by day, a generator brings new clients after every day, and each client waits for a free room, stays a random number of days and checks out.

EXAMPLES:
    # Run with default settings
    hotel-simulator

    # Read the three counts from a file and write the event log to another file
    hotel-simulator --input counts.txt --output events.log

    # Answer prompts for the three counts
    hotel-simulator --interactive

    # Override specific settings
    hotel-simulator --max-new-clients-per-day 5 --max-client-count 20 --days 7

    # Generate configuration template
    hotel-simulator --print-config > my-config.json

CONFIGURATION:
    Values are taken from, lowest priority first:
    1. Default values
    2. Configuration file (--config, JSON)
    3. Input file (--input) or interactive prompts (--interactive)
    4. Command line arguments

    The input file holds three whitespace-separated integers: max new clients
    per day, max client count, number of days."
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. Input file, prompts and CLI arguments override file settings."
    )]
    pub config: Option<String>,

    /// Plain-text file with the three counts
    #[arg(
        long,
        conflicts_with = "interactive",
        help = "Read max new clients per day, max client count and number of days from a file"
    )]
    pub input: Option<String>,

    /// Prompt for the three counts on the terminal
    #[arg(short, long, help = "Prompt for the three counts on the terminal")]
    pub interactive: bool,

    /// Event log destination
    #[arg(
        short,
        long,
        help = "Write the event log to a file instead of stdout"
    )]
    pub output: Option<String>,

    /// Upper bound of arrivals per day
    #[arg(
        long,
        help = "Maximum number of new clients per day",
        long_help = "Every day-end a random number of clients between 1 and this value arrives. 0 disables arrivals. Default: 10"
    )]
    pub max_new_clients_per_day: Option<usize>,

    /// Cap on clients waiting near the hotel
    #[arg(
        long,
        help = "Maximum number of clients waiting near the hotel",
        long_help = "Clients that arrived but have no room yet count against this cap. Default: 100"
    )]
    pub max_client_count: Option<usize>,

    /// Number of days the clock runs
    #[arg(long, help = "Number of days for the hotel to run")]
    pub days: Option<u64>,

    /// Number of rooms in the hotel
    #[arg(long, help = "Number of rooms in the hotel (default: 30)")]
    pub room_count: Option<usize>,

    /// Settling interval between day boundaries in milliseconds
    #[arg(long, help = "Pause after each day boundary in milliseconds (default: 1000)")]
    pub settle_ms: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Emit diagnostics as JSON
    #[arg(long, help = "Format diagnostic logs as JSON")]
    pub json_logs: bool,

    /// Directory for rolling diagnostic log files
    #[arg(long, help = "Also write diagnostic logs to daily files in this directory")]
    pub log_dir: Option<String>,

    /// Dry run mode - validate configuration without running simulation
    #[arg(long, help = "Validate configuration without running simulation")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Number of rooms in the hotel
    pub room_count: Option<usize>,

    /// Upper bound of arrivals per day
    pub max_new_clients_per_day: Option<usize>,

    /// Cap on clients waiting near the hotel
    pub max_client_count: Option<usize>,

    /// Number of days the clock runs
    pub number_of_days: Option<u64>,

    /// Settling interval in milliseconds
    pub settle_interval_ms: Option<u64>,

    /// Event log destination
    pub output: Option<String>,
}

/// The three counts every configuration source has to provide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrivalCounts {
    /// Upper bound of arrivals per day
    pub max_new_clients_per_day: usize,
    /// Cap on clients waiting near the hotel
    pub max_client_count: usize,
    /// Number of days the clock runs
    pub number_of_days: u64,
}

/// Configuration for the hotel simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of rooms in the hotel
    pub room_count: usize,

    /// Upper bound of arrivals per day
    pub max_new_clients_per_day: usize,

    /// Cap on clients waiting near the hotel
    pub max_client_count: usize,

    /// Number of days the clock runs
    pub number_of_days: u64,

    /// Pause after each day boundary in milliseconds
    pub settle_interval_ms: u64,

    /// Event log destination (stdout when absent)
    pub output: Option<String>,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),

    /// A count is not a non-negative integer
    #[error("Invalid value for {field}: {value:?} (expected a non-negative integer)")]
    InvalidValue {
        /// Name of the count being read
        field: &'static str,
        /// The rejected input
        value: String,
    },

    /// Input ended before all counts were read
    #[error("Missing value for {0}")]
    MissingValue(&'static str),
}

/// Validation errors for simulation configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// The hotel has no rooms
    #[error("Room count must be greater than 0, got {0}")]
    InvalidRoomCount(usize),

    /// Too many clients would be allowed to wait at once
    #[error("Max client count {value} exceeds the limit of {limit}")]
    TooManyClients {
        /// Configured cap
        value: usize,
        /// Highest accepted cap
        limit: usize,
    },

    /// Settling interval is too long
    #[error("Settle interval {value}ms exceeds the limit of {limit}ms")]
    SettleIntervalTooLong {
        /// Configured interval
        value: u64,
        /// Highest accepted interval
        limit: u64,
    },
}

const MAX_NEW_CLIENTS_FIELD: &str = "max new clients per day";
const MAX_CLIENT_COUNT_FIELD: &str = "max client count";
const NUMBER_OF_DAYS_FIELD: &str = "number of days";

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            room_count: defaults::ROOM_COUNT,
            max_new_clients_per_day: defaults::MAX_NEW_CLIENTS_PER_DAY,
            max_client_count: defaults::MAX_CLIENT_COUNT,
            number_of_days: defaults::NUMBER_OF_DAYS,
            settle_interval_ms: defaults::SETTLE_INTERVAL_MS,
            output: None,
        }
    }
}

impl SimulationConfig {
    /// Create configuration from parsed CLI arguments, prompting on the terminal if asked to
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        let stdin = std::io::stdin();
        let mut reader = stdin.lock();
        let mut prompt = std::io::stderr();
        Self::from_cli_args_with_io(args, &mut reader, &mut prompt)
    }

    /// Create configuration from parsed CLI arguments with explicit prompt streams
    pub fn from_cli_args_with_io<R: BufRead, W: Write>(
        args: CliArgs,
        reader: &mut R,
        prompt: &mut W,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        if let Some(input_path) = &args.input {
            config.apply_counts(read_counts_file(input_path)?);
        } else if args.interactive {
            config.apply_counts(prompt_for_counts(reader, prompt)?);
        }

        Self::apply_cli_overrides(&mut config, args);

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let content = fs::read_to_string(path)?;
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Create configuration from a config file, merging with defaults
    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            room_count: config_file.room_count.unwrap_or(defaults.room_count),
            max_new_clients_per_day: config_file
                .max_new_clients_per_day
                .unwrap_or(defaults.max_new_clients_per_day),
            max_client_count: config_file.max_client_count.unwrap_or(defaults.max_client_count),
            number_of_days: config_file.number_of_days.unwrap_or(defaults.number_of_days),
            settle_interval_ms: config_file
                .settle_interval_ms
                .unwrap_or(defaults.settle_interval_ms),
            output: config_file.output.or(defaults.output),
        }
    }

    fn apply_counts(&mut self, counts: ArrivalCounts) {
        self.max_new_clients_per_day = counts.max_new_clients_per_day;
        self.max_client_count = counts.max_client_count;
        self.number_of_days = counts.number_of_days;
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(config: &mut Self, args: CliArgs) {
        if let Some(value) = args.max_new_clients_per_day {
            config.max_new_clients_per_day = value;
        }
        if let Some(value) = args.max_client_count {
            config.max_client_count = value;
        }
        if let Some(value) = args.days {
            config.number_of_days = value;
        }
        if let Some(value) = args.room_count {
            config.room_count = value;
        }
        if let Some(value) = args.settle_ms {
            config.settle_interval_ms = value;
        }
        if let Some(value) = args.output {
            config.output = Some(value);
        }
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.room_count == 0 {
            return Err(ConfigValidationError::InvalidRoomCount(self.room_count));
        }

        if self.max_client_count > defaults::CLIENT_COUNT_LIMIT {
            return Err(ConfigValidationError::TooManyClients {
                value: self.max_client_count,
                limit: defaults::CLIENT_COUNT_LIMIT,
            });
        }

        if self.settle_interval_ms > defaults::SETTLE_INTERVAL_LIMIT_MS {
            return Err(ConfigValidationError::SettleIntervalTooLong {
                value: self.settle_interval_ms,
                limit: defaults::SETTLE_INTERVAL_LIMIT_MS,
            });
        }

        Ok(())
    }

    /// Pause the clock holds after each boundary
    pub fn settle_interval(&self) -> Duration {
        Duration::from_millis(self.settle_interval_ms)
    }
}

fn parse_count<T: std::str::FromStr>(field: &'static str, token: &str) -> Result<T, ConfigError> {
    token
        .trim()
        .parse::<T>()
        .map_err(|_| ConfigError::InvalidValue { field, value: token.trim().to_string() })
}

/// Parse the three counts from whitespace-separated text
pub fn parse_counts(text: &str) -> Result<ArrivalCounts, ConfigError> {
    let mut tokens = text.split_whitespace();
    let mut next = |field: &'static str| tokens.next().ok_or(ConfigError::MissingValue(field));

    let max_new_clients_per_day = parse_count(MAX_NEW_CLIENTS_FIELD, next(MAX_NEW_CLIENTS_FIELD)?)?;
    let max_client_count = parse_count(MAX_CLIENT_COUNT_FIELD, next(MAX_CLIENT_COUNT_FIELD)?)?;
    let number_of_days = parse_count(NUMBER_OF_DAYS_FIELD, next(NUMBER_OF_DAYS_FIELD)?)?;

    Ok(ArrivalCounts { max_new_clients_per_day, max_client_count, number_of_days })
}

/// Read the three counts from a plain-text input file
pub fn read_counts_file<P: AsRef<Path>>(path: P) -> Result<ArrivalCounts, ConfigError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }
    parse_counts(&fs::read_to_string(path)?)
}

/// Ask for the three counts one line at a time
pub fn prompt_for_counts<R: BufRead, W: Write>(
    reader: &mut R,
    prompt: &mut W,
) -> Result<ArrivalCounts, ConfigError> {
    let max_new_clients_per_day =
        ask(reader, prompt, "Enter max clients per day: ", MAX_NEW_CLIENTS_FIELD)?;
    let max_client_count = ask(reader, prompt, "Enter max clients count: ", MAX_CLIENT_COUNT_FIELD)?;
    let number_of_days =
        ask(reader, prompt, "Enter number of days for hotel to run: ", NUMBER_OF_DAYS_FIELD)?;

    Ok(ArrivalCounts { max_new_clients_per_day, max_client_count, number_of_days })
}

fn ask<T: std::str::FromStr, R: BufRead, W: Write>(
    reader: &mut R,
    prompt: &mut W,
    question: &str,
    field: &'static str,
) -> Result<T, ConfigError> {
    write!(prompt, "{}", question)?;
    prompt.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(ConfigError::MissingValue(field));
    }
    parse_count(field, &line)
}
