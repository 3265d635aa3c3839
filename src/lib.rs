//! Periodic endpoint availability monitor.
//!
//! Checks a fixed list of HTTP endpoints on an interval, classifies each
//! response, and reports a running availability percentage per domain.

pub mod config;
pub mod health;
pub mod lifecycle;
pub mod observability;
pub mod report;

pub use config::MonitorConfig;
pub use health::{Aggregator, HealthMonitor};
pub use lifecycle::Shutdown;
