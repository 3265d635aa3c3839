//! Health checking subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     EndpointConfig → endpoint.rs (derive domain via domain.rs)
//!     → stats.rs bucket registered for each domain
//!
//! Each cycle (monitor.rs):
//!     for each endpoint, in order
//!     → check.rs (build request, send with timeout, classify)
//!     → stats.rs (total += 1, success += healthy)
//!     → report snapshot of stats.rs
//!     → sleep
//! ```
//!
//! # Design Decisions
//! - Counters are per-domain, not per-endpoint
//! - Percentages are cumulative since process start
//! - No per-endpoint failure can stop the loop

pub mod check;
pub mod domain;
pub mod endpoint;
pub mod monitor;
pub mod stats;

pub use check::{BuildError, CheckExecutor, CheckOutcome, CheckPolicy, TransportError};
pub use domain::extract_domain;
pub use endpoint::Endpoint;
pub use monitor::HealthMonitor;
pub use stats::{Aggregator, DomainAvailability, DomainStats};
