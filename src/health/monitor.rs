//! Polling scheduler.
//!
//! # Cycle
//! ```text
//! RUN_PASS → REPORT → SLEEP → RUN_PASS → ...
//! ```
//! The sleep starts after the report, so slow endpoints stretch the period.

use std::sync::Arc;
use std::time::Duration;

use futures_util::stream::{self, StreamExt};
use tokio::sync::broadcast;
use tokio::time;

use crate::config::MonitorConfig;
use crate::health::check::{CheckExecutor, CheckOutcome, CheckPolicy};
use crate::health::endpoint::Endpoint;
use crate::health::stats::Aggregator;
use crate::observability::metrics;
use crate::report::Reporter;

pub struct HealthMonitor {
    endpoints: Vec<Endpoint>,
    executor: CheckExecutor,
    reporter: Arc<dyn Reporter>,
    interval: Duration,
    max_concurrency: usize,
}

impl HealthMonitor {
    /// Create a monitor and register a bucket for every endpoint's domain.
    pub fn new(endpoints: Vec<Endpoint>, executor: CheckExecutor, reporter: Arc<dyn Reporter>) -> Self {
        for endpoint in &endpoints {
            executor.aggregator().ensure(&endpoint.domain);
        }

        Self {
            endpoints,
            executor,
            reporter,
            interval: Duration::from_secs(15),
            max_concurrency: 1,
        }
    }

    /// Build everything the config describes around a caller-owned aggregator.
    pub fn from_config(
        config: &MonitorConfig,
        aggregator: Arc<Aggregator>,
        reporter: Arc<dyn Reporter>,
    ) -> Result<Self, reqwest::Error> {
        let executor = CheckExecutor::new(CheckPolicy::from(&config.check), aggregator)?;
        let endpoints = config.endpoints.iter().cloned().map(Endpoint::from).collect();

        Ok(Self::new(endpoints, executor, reporter)
            .with_interval(config.schedule.interval())
            .with_max_concurrency(config.check.max_concurrency))
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Checks in flight at once. 1 keeps the pass strictly sequential.
    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency.max(1);
        self
    }

    pub fn endpoints(&self) -> &[Endpoint] {
        &self.endpoints
    }

    pub fn aggregator(&self) -> &Arc<Aggregator> {
        self.executor.aggregator()
    }

    /// Check every endpoint once. Outcomes come back in configured order.
    pub async fn run_pass(&self) -> Vec<CheckOutcome> {
        // Futures are built up front; a closure inside the stream would make
        // the pass future fail the Send bound that tokio::spawn needs.
        let checks: Vec<_> = self
            .endpoints
            .iter()
            .map(|endpoint| self.executor.check(endpoint))
            .collect();

        stream::iter(checks)
            .buffered(self.max_concurrency)
            .collect()
            .await
    }

    /// Hand the current counters to the reporter.
    pub fn report(&self) {
        let rows = self.aggregator().snapshot();
        for row in &rows {
            metrics::record_availability(&row.domain, row.percent);
        }
        self.reporter.report(&rows);
    }

    /// One pass followed by one report.
    pub async fn run_cycle(&self) -> Vec<CheckOutcome> {
        let outcomes = self.run_pass().await;
        self.report();
        metrics::record_cycle();
        outcomes
    }

    /// Cycle until a shutdown signal arrives.
    ///
    /// Shutdown is observed between cycles; a pass in progress always
    /// completes and reports first.
    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) {
        tracing::info!(
            endpoints = self.endpoints.len(),
            domains = self.aggregator().len(),
            interval_secs = self.interval.as_secs_f64(),
            max_concurrency = self.max_concurrency,
            "Health monitor starting"
        );

        let mut cycles: u64 = 0;
        loop {
            let outcomes = self.run_cycle().await;
            cycles += 1;
            tracing::debug!(
                cycle = cycles,
                checks = outcomes.len(),
                healthy = outcomes.iter().filter(|o| o.is_success()).count(),
                "Cycle complete"
            );

            tokio::select! {
                _ = time::sleep(self.interval) => {}
                _ = shutdown.recv() => {
                    tracing::info!(cycles, "Health monitor received shutdown signal, exiting loop");
                    break;
                }
            }
        }
    }
}
