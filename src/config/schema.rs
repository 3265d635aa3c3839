//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the monitor.
//! All types derive Serde traits for deserialization from config files.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration for the availability monitor.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct MonitorConfig {
    /// Endpoints checked on every cycle, in this order.
    pub endpoints: Vec<EndpointConfig>,

    /// Per-check settings (timeout, latency threshold, concurrency).
    pub check: CheckConfig,

    /// Cycle cadence.
    pub schedule: ScheduleConfig,

    /// Where availability lines go.
    pub report: ReportConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// One HTTP target to check.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct EndpointConfig {
    /// Display label. Not required to be unique.
    #[serde(default)]
    pub name: String,

    /// Target address.
    pub url: String,

    /// HTTP verb. Blank means GET; matched case-insensitively.
    #[serde(default)]
    pub method: String,

    /// Headers set verbatim on every request to this endpoint.
    #[serde(default)]
    pub headers: HashMap<String, String>,

    /// Literal payload, only sent with POST, PUT and PATCH.
    #[serde(default)]
    pub body: String,
}

/// Health check configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckConfig {
    /// Abort the request if no response arrives within this many milliseconds.
    pub timeout_ms: u64,

    /// A 2xx response counts as healthy only below this latency.
    pub latency_threshold_ms: u64,

    /// Checks in flight at once within a pass (1 = sequential).
    pub max_concurrency: usize,
}

impl CheckConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn latency_threshold(&self) -> Duration {
        Duration::from_millis(self.latency_threshold_ms)
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 500,
            latency_threshold_ms: 500,
            max_concurrency: 1,
        }
    }
}

/// Cycle cadence.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScheduleConfig {
    /// Sleep between the end of one report and the start of the next pass.
    pub interval_secs: u64,
}

impl ScheduleConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self { interval_secs: 15 }
    }
}

/// Report destination.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReportSink {
    /// Plain lines on standard output.
    #[default]
    Stdout,
    /// One INFO event per domain.
    Log,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    pub sink: ReportSink,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Human-readable or JSON log lines.
    pub log_format: LogFormat,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MonitorConfig::default();
        assert!(config.endpoints.is_empty());
        assert_eq!(config.check.timeout(), Duration::from_millis(500));
        assert_eq!(config.check.latency_threshold(), Duration::from_millis(500));
        assert_eq!(config.check.max_concurrency, 1);
        assert_eq!(config.schedule.interval(), Duration::from_secs(15));
        assert_eq!(config.report.sink, ReportSink::Stdout);
        assert!(!config.observability.metrics_enabled);
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let err = toml::from_str::<MonitorConfig>("[schedule]\ninterval = 5\n").unwrap_err();
        assert!(err.to_string().contains("interval"), "{err}");

        let err = toml::from_str::<EndpointConfig>("url = \"https://a.test/\"\nheader = 1\n")
            .unwrap_err();
        assert!(err.to_string().contains("header"), "{err}");
    }

    #[test]
    fn test_endpoint_optional_fields() {
        let ep: EndpointConfig = toml::from_str(r#"url = "https://a.test/x""#).unwrap();
        assert_eq!(ep.url, "https://a.test/x");
        assert!(ep.name.is_empty());
        assert!(ep.method.is_empty());
        assert!(ep.headers.is_empty());
        assert!(ep.body.is_empty());
    }
}
