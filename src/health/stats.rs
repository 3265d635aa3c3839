//! Per-domain availability counters.
//!
//! # Responsibilities
//! - Hold one `DomainStats` bucket per domain key, for the whole run
//! - Apply check results atomically per bucket
//! - Produce a snapshot for the reporter
//!
//! # Design Decisions
//! - Counters are cumulative, never reset per cycle
//! - Buckets are created on first sight and never removed
//! - `DashMap` shard locks make concurrent updates to one bucket exclusive

use std::fmt;

use dashmap::DashMap;

/// Cumulative counters for one domain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DomainStats {
    /// Checks classified as healthy.
    pub success: u64,
    /// Checks attempted.
    pub total: u64,
}

impl DomainStats {
    /// Record one attempt. `success` never exceeds `total`.
    pub fn record(&mut self, healthy: bool) {
        self.total += 1;
        if healthy {
            self.success += 1;
        }
    }

    /// Integer percentage of healthy checks, truncated. Zero attempts report 0.
    pub fn availability(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        // success <= total, so the quotient is at most 100.
        ((100 * self.success) / self.total) as u8
    }
}

/// One reported row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainAvailability {
    pub domain: String,
    pub success: u64,
    pub total: u64,
    pub percent: u8,
}

impl fmt::Display for DomainAvailability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} has {}% availability", self.domain, self.percent)
    }
}

/// Owner of every domain's counters.
#[derive(Debug, Default)]
pub struct Aggregator {
    buckets: DashMap<String, DomainStats>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty bucket for `domain` if none exists yet.
    pub fn ensure(&self, domain: &str) {
        if !self.buckets.contains_key(domain) {
            self.buckets.entry(domain.to_string()).or_default();
        }
    }

    /// Count one attempt against `domain`, creating its bucket if needed.
    pub fn record(&self, domain: &str, healthy: bool) {
        match self.buckets.get_mut(domain) {
            Some(mut stats) => stats.record(healthy),
            None => self.buckets.entry(domain.to_string()).or_default().record(healthy),
        }
    }

    /// Current counters for `domain`, if it has been seen.
    pub fn get(&self, domain: &str) -> Option<DomainStats> {
        self.buckets.get(domain).map(|stats| *stats)
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Copy out every bucket. Order is unspecified.
    pub fn snapshot(&self) -> Vec<DomainAvailability> {
        self.buckets
            .iter()
            .map(|entry| {
                let stats = *entry.value();
                DomainAvailability {
                    domain: entry.key().clone(),
                    success: stats.success,
                    total: stats.total,
                    percent: stats.availability(),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_zero_attempts_is_zero_percent() {
        let stats = DomainStats::default();
        assert_eq!(stats.availability(), 0);
    }

    #[test]
    fn test_percentage_truncates() {
        let stats = DomainStats { success: 2, total: 3 };
        assert_eq!(stats.availability(), 66);

        let stats = DomainStats { success: 1, total: 3 };
        assert_eq!(stats.availability(), 33);

        let stats = DomainStats { success: 199, total: 200 };
        assert_eq!(stats.availability(), 99);
    }

    #[test]
    fn test_percentage_matches_floor_for_all_small_counts() {
        for total in 1..=50u64 {
            for success in 0..=total {
                let stats = DomainStats { success, total };
                let expected = (100.0 * success as f64 / total as f64).floor() as u8;
                assert_eq!(stats.availability(), expected, "{success}/{total}");
                assert!(stats.availability() <= 100);
            }
        }
    }

    #[test]
    fn test_record_and_ensure() {
        let agg = Aggregator::new();
        agg.ensure("a.test");
        assert_eq!(agg.get("a.test"), Some(DomainStats::default()));

        agg.record("a.test", true);
        agg.record("a.test", false);
        // Defensive creation for a domain never ensured.
        agg.record("b.test", true);

        assert_eq!(agg.get("a.test"), Some(DomainStats { success: 1, total: 2 }));
        assert_eq!(agg.get("b.test"), Some(DomainStats { success: 1, total: 1 }));
        assert_eq!(agg.len(), 2);

        // ensure() never resets an existing bucket.
        agg.ensure("a.test");
        assert_eq!(agg.get("a.test").unwrap().total, 2);
    }

    #[test]
    fn test_display_line() {
        let row = DomainAvailability {
            domain: "a.test".into(),
            success: 1,
            total: 2,
            percent: 50,
        };
        assert_eq!(row.to_string(), "a.test has 50% availability");
    }

    #[test]
    fn test_concurrent_updates_do_not_race() {
        let agg = Arc::new(Aggregator::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let agg = agg.clone();
                std::thread::spawn(move || {
                    for _ in 0..1000 {
                        agg.record("shared.test", i % 2 == 0);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let stats = agg.get("shared.test").unwrap();
        assert_eq!(stats.total, 8000);
        assert_eq!(stats.success, 4000);
        assert_eq!(stats.availability(), 50);
    }
}
