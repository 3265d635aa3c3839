//! Reporter implementations.

use std::io::Write;
use std::sync::Mutex;

use crate::health::stats::DomainAvailability;
use crate::report::Reporter;

/// Writes plain lines to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutReporter;

impl Reporter for StdoutReporter {
    fn report(&self, rows: &[DomainAvailability]) {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        for row in rows {
            if let Err(e) = writeln!(out, "{row}") {
                tracing::error!(error = %e, "Failed to write availability report");
                return;
            }
        }
    }
}

/// Emits one INFO event per domain.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&self, rows: &[DomainAvailability]) {
        for row in rows {
            tracing::info!(
                domain = %row.domain,
                success = row.success,
                total = row.total,
                availability = row.percent,
                "{row}"
            );
        }
    }
}

/// Keeps every report in memory, one `Vec` of lines per cycle.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    cycles: Mutex<Vec<Vec<String>>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All reports so far, oldest first.
    pub fn cycles(&self) -> Vec<Vec<String>> {
        self.cycles.lock().expect("memory reporter mutex poisoned").clone()
    }

    /// Lines of the most recent report, sorted.
    pub fn last_sorted(&self) -> Option<Vec<String>> {
        let mut last = self.cycles().pop()?;
        last.sort();
        Some(last)
    }
}

impl Reporter for MemoryReporter {
    fn report(&self, rows: &[DomainAvailability]) {
        let lines = rows.iter().map(ToString::to_string).collect();
        self.cycles
            .lock()
            .expect("memory reporter mutex poisoned")
            .push(lines);
    }
}
