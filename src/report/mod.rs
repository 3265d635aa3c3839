//! Availability reporting.
//!
//! # Data Flow
//! ```text
//! end of pass
//!     → Aggregator::snapshot()
//!     → Reporter::report(rows)
//!     → one "<domain> has <n>% availability" line per domain
//! ```
//!
//! # Design Decisions
//! - Reporters only see a snapshot, never the live counters
//! - Row order is unspecified

pub mod sinks;

use crate::config::ReportSink;
use crate::health::stats::DomainAvailability;

pub use sinks::{LogReporter, MemoryReporter, StdoutReporter};

/// Destination for per-cycle availability lines.
pub trait Reporter: Send + Sync {
    fn report(&self, rows: &[DomainAvailability]);
}

/// Reporter for the configured sink.
pub fn from_sink(sink: ReportSink) -> Box<dyn Reporter> {
    match sink {
        ReportSink::Stdout => Box::new(StdoutReporter),
        ReportSink::Log => Box::new(LogReporter),
    }
}
