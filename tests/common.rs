//! Common test utilities.
//!
//! This module contains shared helpers for integration tests.
//! Import with `mod common;` in test files.

#![allow(dead_code)]

use parking_lot::Mutex;
use sqlannotation::annotation::{Annotator, WarningLogger};
use sqlannotation::core::time::{ManualClock, Tick};
use sqlannotation::ops::observability::{metrics, MetricsRegistry, RegistryCounter};
use sqlannotation::ops::telemetry::ThrottledLogger;
use std::fmt;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use tempfile::NamedTempFile;

/// Write `content` to a temporary config file.
pub fn config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write config");
    file
}

/// Warning logger that keeps every message.
#[derive(Default)]
pub struct RecordingLogger {
    messages: Mutex<Vec<String>>,
}

impl RecordingLogger {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }
}

impl WarningLogger for RecordingLogger {
    fn warn(&self, args: fmt::Arguments<'_>) {
        self.messages.lock().push(args.to_string());
    }
}

/// Annotator wired to a fresh registry and a recording logger.
pub struct RecordingHarness {
    pub annotator: Annotator,
    pub registry: Arc<MetricsRegistry>,
    pub logger: Arc<RecordingLogger>,
}

impl RecordingHarness {
    pub fn new() -> Self {
        let registry = Arc::new(MetricsRegistry::new());
        let logger = Arc::new(RecordingLogger::default());
        let counter = RegistryCounter::new(
            registry.clone(),
            metrics::FILTERED_REPLICATION_UNFRIENDLY_STATEMENTS,
        );
        Self {
            annotator: Annotator::new(Arc::new(counter), logger.clone()),
            registry,
            logger,
        }
    }

    pub fn unfriendly_count(&self) -> u64 {
        self.registry
            .counter_get(metrics::FILTERED_REPLICATION_UNFRIENDLY_STATEMENTS)
    }
}

/// Annotator wired to a throttled logger driven by a manual clock.
pub struct ThrottledHarness {
    pub annotator: Annotator,
    pub registry: Arc<MetricsRegistry>,
    pub logger: Arc<ThrottledLogger>,
    pub clock: Arc<ManualClock>,
}

impl ThrottledHarness {
    pub fn new(interval: Duration) -> Self {
        let registry = Arc::new(MetricsRegistry::new());
        let clock = Arc::new(ManualClock::new(Tick::zero()));
        let logger = Arc::new(ThrottledLogger::new(
            "FilteredReplicationUnfriendlyStatement",
            interval,
            clock.clone(),
        ));
        let counter = RegistryCounter::new(
            registry.clone(),
            metrics::FILTERED_REPLICATION_UNFRIENDLY_STATEMENTS,
        );
        Self {
            annotator: Annotator::new(Arc::new(counter), logger.clone()),
            registry,
            logger,
            clock,
        }
    }

    pub fn unfriendly_count(&self) -> u64 {
        self.registry
            .counter_get(metrics::FILTERED_REPLICATION_UNFRIENDLY_STATEMENTS)
    }
}
