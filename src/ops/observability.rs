//! Counter registry.
//!
//! Counters are registered by name on first use and only ever grow.

use crate::annotation::StatementCounter;
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Well-known counter names.
pub mod metrics {
    /// DML statements annotated as filtered-replication-unfriendly.
    pub const FILTERED_REPLICATION_UNFRIENDLY_STATEMENTS: &str =
        "FilteredReplicationUnfriendlyStatementsCount";
}

/// Named monotonic counters.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    counters: RwLock<HashMap<String, AtomicU64>>,
}

impl MetricsRegistry {
    /// Create a new metrics registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment a counter.
    pub fn counter_inc(&self, name: &str) {
        self.counter_add(name, 1);
    }

    /// Add to a counter.
    pub fn counter_add(&self, name: &str, value: u64) {
        let counters = self.counters.read();
        if let Some(counter) = counters.get(name) {
            counter.fetch_add(value, Ordering::Relaxed);
            return;
        }
        drop(counters);

        let mut counters = self.counters.write();
        counters
            .entry(name.to_string())
            .or_insert_with(|| AtomicU64::new(0))
            .fetch_add(value, Ordering::Relaxed);
    }

    /// Get counter value. Unknown counters read as zero.
    pub fn counter_get(&self, name: &str) -> u64 {
        self.counters
            .read()
            .get(name)
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Get all counter names, sorted.
    pub fn counter_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.counters.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Point-in-time copy of every counter.
    pub fn snapshot(&self) -> BTreeMap<String, u64> {
        self.counters
            .read()
            .iter()
            .map(|(name, value)| (name.clone(), value.load(Ordering::Relaxed)))
            .collect()
    }

    /// Export all counters as a JSON object.
    pub fn export_json(&self) -> String {
        serde_json::to_string_pretty(&self.snapshot()).unwrap_or_default()
    }
}

/// A [`StatementCounter`] backed by one named counter in a registry.
#[derive(Debug, Clone)]
pub struct RegistryCounter {
    registry: Arc<MetricsRegistry>,
    name: String,
}

impl RegistryCounter {
    /// Bind a counter name in `registry`.
    pub fn new(registry: Arc<MetricsRegistry>, name: impl Into<String>) -> Self {
        Self {
            registry,
            name: name.into(),
        }
    }

    /// Counter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current value.
    pub fn get(&self) -> u64 {
        self.registry.counter_get(&self.name)
    }
}

impl StatementCounter for RegistryCounter {
    fn increment(&self) {
        self.registry.counter_inc(&self.name);
    }
}
