//! Time utilities.
//!
//! Rate limiting reads time only through the [`Clock`] trait so the
//! throttle window can be driven explicitly in tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// A monotonic point in time, in milliseconds since the clock's origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Tick {
    /// Milliseconds since the clock's origin.
    pub ms: u64,
}

impl Tick {
    /// Create a new tick with the given millisecond value.
    pub const fn new(ms: u64) -> Self {
        Self { ms }
    }

    /// Create a tick at the clock's origin.
    pub const fn zero() -> Self {
        Self { ms: 0 }
    }

    /// Add milliseconds to this tick, saturating at `u64::MAX`.
    pub const fn add_ms(self, ms: u64) -> Self {
        Self {
            ms: self.ms.saturating_add(ms),
        }
    }

    /// Check if this tick is at or after the given deadline.
    pub const fn is_at_or_after(self, deadline: Tick) -> bool {
        self.ms >= deadline.ms
    }

    /// Milliseconds until a deadline.
    ///
    /// Returns 0 if the deadline has already passed.
    pub fn ms_until(self, deadline: Tick) -> u64 {
        deadline.ms.saturating_sub(self.ms)
    }
}

impl std::fmt::Display for Tick {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tick({}ms)", self.ms)
    }
}

/// Source of monotonic time.
pub trait Clock: Send + Sync {
    /// Get the current tick.
    fn now(&self) -> Tick;
}

/// Wall-clock backed monotonic clock whose origin is its creation.
#[derive(Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Create a clock starting at zero now.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Tick {
        let elapsed = self.origin.elapsed().as_millis();
        Tick::new(u64::try_from(elapsed).unwrap_or(u64::MAX))
    }
}

/// Manually advanced clock.
#[derive(Debug, Default)]
pub struct ManualClock {
    ms: AtomicU64,
}

impl ManualClock {
    /// Create a clock at the given tick.
    pub fn new(start: Tick) -> Self {
        Self {
            ms: AtomicU64::new(start.ms),
        }
    }

    /// Move the clock forward.
    pub fn advance(&self, by: Duration) {
        let ms = u64::try_from(by.as_millis()).unwrap_or(u64::MAX);
        self.ms.fetch_add(ms, Ordering::AcqRel);
    }

    /// Jump the clock to an absolute tick.
    pub fn set(&self, tick: Tick) {
        self.ms.store(tick.ms, Ordering::Release);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Tick {
        Tick::new(self.ms.load(Ordering::Acquire))
    }
}
