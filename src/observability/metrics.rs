//! Metrics collection and exposition.
//!
//! # Metrics
//! - `monitor_checks_total` (counter): checks by domain and outcome
//! - `monitor_check_duration_seconds` (histogram): check latency by domain
//! - `monitor_domain_availability_percent` (gauge): last reported percentage
//! - `monitor_cycles_total` (counter): completed cycles
//!
//! Without an installed recorder every call here is a no-op.

use std::net::SocketAddr;
use std::time::Duration;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape listener.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

pub fn record_check(domain: &str, outcome: &'static str, latency: Option<Duration>) {
    ::metrics::counter!(
        "monitor_checks_total",
        "domain" => domain.to_string(),
        "outcome" => outcome
    )
    .increment(1);

    if let Some(latency) = latency {
        ::metrics::histogram!("monitor_check_duration_seconds", "domain" => domain.to_string())
            .record(latency.as_secs_f64());
    }
}

pub fn record_availability(domain: &str, percent: u8) {
    ::metrics::gauge!("monitor_domain_availability_percent", "domain" => domain.to_string())
        .set(f64::from(percent));
}

pub fn record_cycle() {
    ::metrics::counter!("monitor_cycles_total").increment(1);
}
