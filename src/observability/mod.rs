//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! health checks / scheduler produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, gauges, histograms)
//!
//! Consumers:
//!     → Log aggregation (stdout/stderr, text or JSON)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Structured fields (endpoint, domain, status, latency) on every check event
//! - Metrics are off unless enabled in config

pub mod logging;
pub mod metrics;
