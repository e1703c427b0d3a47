//! Logging setup and rate-limited warnings.
//!
//! Events are emitted through `tracing`. The binary installs a
//! `tracing-subscriber` formatter when the `telemetry` feature is enabled.

use crate::annotation::WarningLogger;
use crate::core::config::TelemetryConfig;
use crate::core::time::{Clock, Tick};
use parking_lot::Mutex;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level.
#[cfg(feature = "telemetry")]
pub fn init_tracing(config: &TelemetryConfig) -> anyhow::Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    if config.json_output {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .with(filter)
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(filter)
            .try_init()?;
    }
    Ok(())
}

#[cfg(not(feature = "telemetry"))]
pub fn init_tracing(_config: &TelemetryConfig) -> anyhow::Result<()> {
    Ok(())
}

/// Outcome of a throttled log call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrottleDecision {
    /// The message was written.
    Emitted,
    /// The message fell inside the current window and was dropped.
    Suppressed,
}

/// Totals since the logger was created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThrottleStats {
    /// Messages written.
    pub emitted: u64,
    /// Messages dropped by the throttle.
    pub skipped: u64,
}

#[derive(Debug, Default)]
struct Window {
    last_emit: Option<Tick>,
    pending_skipped: u64,
}

/// Logs at most one warning per interval.
///
/// Messages are prefixed with the logger's name. Messages arriving inside
/// the window are dropped and counted; the count is reported as
/// "skipped N log messages" just before the next message that gets through.
pub struct ThrottledLogger {
    name: String,
    interval_ms: u64,
    clock: Arc<dyn Clock>,
    window: Mutex<Window>,
    emitted: AtomicU64,
    skipped: AtomicU64,
}

impl ThrottledLogger {
    /// Create a logger named `name` emitting at most once per `interval`.
    pub fn new(name: impl Into<String>, interval: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            name: name.into(),
            interval_ms: u64::try_from(interval.as_millis()).unwrap_or(u64::MAX),
            clock,
            window: Mutex::new(Window::default()),
            emitted: AtomicU64::new(0),
            skipped: AtomicU64::new(0),
        }
    }

    /// Logger name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Minimum interval between two messages.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Log a warning unless one was logged within the interval.
    pub fn log_warning(&self, args: fmt::Arguments<'_>) -> ThrottleDecision {
        let now = self.clock.now();
        let mut window = self.window.lock();

        if let Some(last) = window.last_emit {
            if !now.is_at_or_after(last.add_ms(self.interval_ms)) {
                window.pending_skipped += 1;
                self.skipped.fetch_add(1, Ordering::Relaxed);
                return ThrottleDecision::Suppressed;
            }
        }

        if window.pending_skipped > 0 {
            self.emit_skipped(window.pending_skipped);
            window.pending_skipped = 0;
        }
        window.last_emit = Some(now);
        self.emitted.fetch_add(1, Ordering::Relaxed);
        tracing::warn!(logger = %self.name, "{}: {}", self.name, args);
        ThrottleDecision::Emitted
    }

    /// Report dropped messages now instead of waiting for the next one.
    ///
    /// Returns the number of messages reported.
    pub fn flush(&self) -> u64 {
        let mut window = self.window.lock();
        let skipped = std::mem::take(&mut window.pending_skipped);
        if skipped > 0 {
            self.emit_skipped(skipped);
        }
        skipped
    }

    /// Milliseconds until the next message would be emitted.
    pub fn ms_until_open(&self) -> u64 {
        let window = self.window.lock();
        match window.last_emit {
            Some(last) => self.clock.now().ms_until(last.add_ms(self.interval_ms)),
            None => 0,
        }
    }

    /// Emitted and skipped totals.
    pub fn stats(&self) -> ThrottleStats {
        ThrottleStats {
            emitted: self.emitted.load(Ordering::Relaxed),
            skipped: self.skipped.load(Ordering::Relaxed),
        }
    }

    fn emit_skipped(&self, skipped: u64) {
        tracing::warn!(
            logger = %self.name,
            skipped,
            "{}: skipped {} log messages",
            self.name,
            skipped
        );
    }
}

impl WarningLogger for ThrottledLogger {
    fn warn(&self, args: fmt::Arguments<'_>) {
        self.log_warning(args);
    }
}

impl fmt::Debug for ThrottledLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThrottledLogger")
            .field("name", &self.name)
            .field("interval_ms", &self.interval_ms)
            .field("stats", &self.stats())
            .finish()
    }
}
