// Hotel Occupancy Simulator - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/hotel-occupancy-simulator --interactive
// ```
//
// Or with the counts given up front:
//
// ```console
// $ ./target/release/hotel-occupancy-simulator --max-new-clients-per-day 5 --max-client-count 20 --days 7 --room-count 10
// ```

use anyhow::{Context, Result};
use clap::Parser;
use hotel_occupancy_simulator::events::EventLog;
use hotel_occupancy_simulator::simulation::{LoggingConfig, SimulationOrchestrator};
use hotel_occupancy_simulator::types::config::CliArgs;
use hotel_occupancy_simulator::types::SimulationConfig;
use std::process;
use tracing::{error, info};

fn main() {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    // Handle special CLI flags that don't require full initialization
    if args.print_config {
        match SimulationConfig::default().print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    // Initialize logging based on CLI flags
    let mut logging = LoggingConfig::from_flags(args.verbose, args.debug);
    if args.json_logs {
        logging = logging.with_json_format();
    }
    if let Some(directory) = &args.log_dir {
        logging = logging.with_file_logging(directory.clone());
    }

    let _logging_guard = match logging.init() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            process::exit(1);
        }
    };

    info!("Starting Hotel Occupancy Simulator");

    // Load configuration from CLI arguments, optional config file and input
    let config = match SimulationConfig::from_cli_args(args.clone()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    // Validate configuration
    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    info!("Configuration loaded and validated successfully");

    // Handle dry run mode
    if args.dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - simulation will not be executed.");
        print_configuration_summary(&config);
        return;
    }

    print_startup_banner(&config);

    if let Err(e) = run_simulation(config) {
        error!("Simulation failed: {:#}", e);
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }

    info!("Hotel Occupancy Simulator completed successfully");
}

/// Run the hotel and print the report
fn run_simulation(config: SimulationConfig) -> Result<()> {
    let log = match &config.output {
        Some(path) => {
            let log = EventLog::to_file(path)
                .with_context(|| format!("Failed to create output file '{}'", path))?;
            info!("Writing hotel events to {}", path);
            log
        }
        None => EventLog::stdout(),
    };

    let mut orchestrator = SimulationOrchestrator::with_event_log(config, log)
        .context("Failed to initialize the simulation")?;
    let report = orchestrator.run().context("Simulation run failed")?;

    eprintln!();
    eprintln!("Simulation Complete!");
    eprintln!("====================");
    eprintln!("{}", report.summary());
    Ok(())
}

/// Print startup banner and configuration summary
fn print_startup_banner(config: &SimulationConfig) {
    eprintln!("Hotel Occupancy Simulator");
    eprintln!("=========================");
    eprintln!();

    print_configuration_summary(config);
}

/// Print configuration summary
fn print_configuration_summary(config: &SimulationConfig) {
    eprintln!("Configuration:");
    eprintln!("  Rooms: {}", config.room_count);
    eprintln!("  Max New Clients per Day: {}", config.max_new_clients_per_day);
    eprintln!("  Max Waiting Clients: {}", config.max_client_count);
    eprintln!("  Days: {}", config.number_of_days);
    eprintln!("  Settle Interval: {}ms", config.settle_interval_ms);
    match &config.output {
        Some(path) => eprintln!("  Output: {}", path),
        None => eprintln!("  Output: stdout"),
    }
    eprintln!();
}
