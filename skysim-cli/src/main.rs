//! SkySim CLI - runs the flight simulation backend.
//!
//! Loads settings from an INI file, initializes logging, starts the
//! simulation actor, and shuts it down cleanly on Ctrl-C. Transport
//! front-ends attach to the library API; this binary only hosts the core.

mod error;
mod runner;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use error::CliError;
use skysim::config::ConfigFile;
use skysim::environment::Environment;
use skysim::logging::init_logging;
use skysim::simulator::{SimulationConfig, Simulator, SimulatorError};

#[derive(Parser)]
#[command(name = "skysim")]
#[command(version = skysim::VERSION)]
#[command(about = "Real-time single-aircraft flight simulation backend", long_about = None)]
struct Cli {
    /// Path to the configuration file
    #[arg(long, default_value = "skysim.ini")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Logging may not be initialized yet; print directly
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = ConfigFile::load_from(&cli.config)?;
    let _logging_guard = init_logging(&config.logging)?;

    info!(version = skysim::VERSION, config = %cli.config.display(), "Starting SkySim");

    let simulation_config = SimulationConfig::from(&config.simulation);
    let environment = Environment::from_settings(&config.environment);
    let (simulator, handle) = Simulator::new(simulation_config, environment)?;

    let shutdown = CancellationToken::new();
    if tracing::enabled!(tracing::Level::DEBUG) {
        runner::spawn_snapshot_logger(handle.publisher(), shutdown.clone());
    }
    let run_task = tokio::spawn(simulator.run(shutdown.clone()));

    tokio::signal::ctrl_c().await.map_err(CliError::Io)?;
    info!("Shutdown signal received, stopping simulation");
    shutdown.cancel();

    match run_task.await {
        // Cancellation is the loop's normal exit path
        Ok(Err(SimulatorError::Cancelled)) | Ok(Ok(())) => {
            info!("Shutdown complete");
            Ok(())
        }
        Ok(Err(err)) => {
            error!(error = %err, "Simulator terminated abnormally");
            Err(err.into())
        }
        Err(join_err) => {
            error!(error = %join_err, "Simulator task panicked");
            Ok(())
        }
    }
}
