//! Availability monitor.
//!
//! # Architecture Overview
//!
//! ```text
//!   config file ──▶ config::load_config ──▶ MonitorConfig
//!                                               │
//!                                               ▼
//!   ┌──────────────────────── HealthMonitor ───────────────────────┐
//!   │                                                               │
//!   │   for each endpoint ──▶ CheckExecutor ──▶ Aggregator          │
//!   │   (in order)            (timeout,         (per-domain         │
//!   │                          classify)         success/total)     │
//!   │                                               │               │
//!   │                                               ▼               │
//!   │                                           Reporter ──▶ stdout │
//!   │                                               │               │
//!   │                                             sleep             │
//!   └───────────────────────────────────────────────────────────────┘
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use availability_monitor::config::{load_config, validate_config, ConfigError, LogFormat};
use availability_monitor::lifecycle::{signals, Shutdown};
use availability_monitor::observability::{logging, metrics};
use availability_monitor::report::{self, Reporter};
use availability_monitor::{Aggregator, HealthMonitor};

#[derive(Parser)]
#[command(name = "availability-monitor", version)]
#[command(about = "Poll HTTP endpoints and report availability per domain", long_about = None)]
struct Cli {
    /// Endpoint list (YAML) or full configuration (YAML or TOML).
    config: PathBuf,

    /// Seconds to sleep between cycles.
    #[arg(long)]
    interval_secs: Option<u64>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long)]
    log_level: Option<String>,

    /// Emit logs as JSON.
    #[arg(long)]
    json_logs: bool,

    /// Run a single cycle and exit.
    #[arg(long)]
    once: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match load_config(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("availability-monitor: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(interval_secs) = cli.interval_secs {
        config.schedule.interval_secs = interval_secs;
    }
    if let Some(log_level) = cli.log_level {
        config.observability.log_level = log_level;
    }
    if cli.json_logs {
        config.observability.log_format = LogFormat::Json;
    }
    if let Err(errors) = validate_config(&config) {
        let e = ConfigError::Validation {
            path: cli.config.clone(),
            errors,
        };
        eprintln!("availability-monitor: {e}");
        return ExitCode::FAILURE;
    }

    logging::init_logging(&config.observability);

    tracing::info!(
        path = %cli.config.display(),
        endpoints = config.endpoints.len(),
        interval_secs = config.schedule.interval_secs,
        timeout_ms = config.check.timeout_ms,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        // Validation already guarantees the address parses.
        let started = config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .map_err(|e| e.to_string())
            .and_then(|addr| metrics::init_metrics(addr).map_err(|e| e.to_string()));
        if let Err(e) = started {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                error = %e,
                "Failed to start metrics endpoint"
            );
            return ExitCode::FAILURE;
        }
    }

    let reporter: Arc<dyn Reporter> = Arc::from(report::from_sink(config.report.sink));
    let monitor = match HealthMonitor::from_config(&config, Arc::new(Aggregator::new()), reporter) {
        Ok(monitor) => monitor,
        Err(e) => {
            tracing::error!(error = %e, "Failed to build HTTP client");
            return ExitCode::FAILURE;
        }
    };

    if cli.once {
        monitor.run_cycle().await;
        return ExitCode::SUCCESS;
    }

    let shutdown = Shutdown::new();
    let handle = tokio::spawn(monitor.run(shutdown.subscribe()));

    signals::shutdown_on_signal(&shutdown).await;

    if let Err(e) = handle.await {
        tracing::error!(error = %e, "Health monitor task failed");
        return ExitCode::FAILURE;
    }

    tracing::info!("Shutdown complete");
    ExitCode::SUCCESS
}
