//! Configuration validation.
//!
//! Serde handles syntax; this checks values a well-formed file can still get
//! wrong. Every problem is reported, not just the first.

use std::net::SocketAddr;

use thiserror::Error;
use tracing_subscriber::filter::LevelFilter;

use crate::config::schema::MonitorConfig;

/// A single semantic problem in a loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("endpoint #{index} ({name:?}) has no url")]
    MissingUrl { index: usize, name: String },

    #[error("{field} must be greater than zero")]
    ZeroValue { field: &'static str },

    #[error("observability.log_level {0:?} is not one of off, error, warn, info, debug, trace")]
    InvalidLogLevel(String),

    #[error("observability.metrics_address {0:?} is not a socket address")]
    InvalidMetricsAddress(String),
}

/// Validate a parsed configuration.
pub fn validate_config(config: &MonitorConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for (index, endpoint) in config.endpoints.iter().enumerate() {
        if endpoint.url.trim().is_empty() {
            errors.push(ValidationError::MissingUrl {
                index,
                name: endpoint.name.clone(),
            });
        }
    }

    if config.check.timeout_ms == 0 {
        errors.push(ValidationError::ZeroValue {
            field: "check.timeout_ms",
        });
    }
    if config.check.latency_threshold_ms == 0 {
        errors.push(ValidationError::ZeroValue {
            field: "check.latency_threshold_ms",
        });
    }
    if config.check.max_concurrency == 0 {
        errors.push(ValidationError::ZeroValue {
            field: "check.max_concurrency",
        });
    }
    if config.schedule.interval_secs == 0 {
        errors.push(ValidationError::ZeroValue {
            field: "schedule.interval_secs",
        });
    }

    let observability = &config.observability;
    if observability.log_level.parse::<LevelFilter>().is_err() {
        errors.push(ValidationError::InvalidLogLevel(
            observability.log_level.clone(),
        ));
    }
    if observability.metrics_enabled
        && observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
