//! Connection pool counters
//!
//! sqlx reports pool size; checkouts, waits, and eviction counts are
//! tracked here by the acquire path and the `before_acquire` hook.

use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::time::Duration;

use serde::{Serialize, Serializer};

/// Cumulative counters shared between the pool hooks and the health probe.
#[derive(Debug, Default)]
pub struct PoolMetrics {
    checked_out: AtomicU32,
    wait_count: AtomicU64,
    wait_nanos: AtomicU64,
    max_idle_closed: AtomicU64,
    max_lifetime_closed: AtomicU64,
}

impl PoolMetrics {
    /// Connections currently held by callers.
    pub fn checked_out(&self) -> u32 {
        self.checked_out.load(Ordering::Acquire)
    }

    pub fn record_checkout(&self) {
        self.checked_out.fetch_add(1, Ordering::AcqRel);
    }

    pub fn record_checkin(&self) {
        // Saturating: a checkin without a matching checkout must not wrap.
        let _ = self
            .checked_out
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| n.checked_sub(1));
    }

    /// Record one acquisition that had to wait for a connection to be returned.
    pub fn record_wait(&self, waited: Duration) {
        let nanos = u64::try_from(waited.as_nanos()).unwrap_or(u64::MAX);
        self.wait_count.fetch_add(1, Ordering::Relaxed);
        self.wait_nanos.fetch_add(nanos, Ordering::Relaxed);
    }

    pub fn record_idle_closed(&self) {
        self.max_idle_closed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_lifetime_closed(&self) {
        self.max_lifetime_closed.fetch_add(1, Ordering::Relaxed);
    }

    /// Combine the counters with the pool's current size.
    ///
    /// `in_use` comes from the checkout count, which drops as soon as a
    /// caller releases its connection; the rest of the pool is idle.
    pub fn snapshot(&self, open_connections: u32) -> PoolStats {
        let in_use = self.checked_out().min(open_connections);
        PoolStats {
            open_connections,
            in_use,
            idle: open_connections - in_use,
            wait_count: self.wait_count.load(Ordering::Relaxed),
            wait_duration: Duration::from_nanos(self.wait_nanos.load(Ordering::Relaxed)),
            max_idle_closed: self.max_idle_closed.load(Ordering::Relaxed),
            max_lifetime_closed: self.max_lifetime_closed.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time pool diagnostics reported by the health check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PoolStats {
    pub open_connections: u32,
    pub in_use: u32,
    pub idle: u32,
    pub wait_count: u64,
    #[serde(serialize_with = "duration_text")]
    pub wait_duration: Duration,
    pub max_idle_closed: u64,
    pub max_lifetime_closed: u64,
}

/// `1.5s`, `250ms`, and `0s` for an empty total.
fn duration_text<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    if duration.is_zero() {
        return serializer.serialize_str("0s");
    }
    serializer.collect_str(&format_args!("{:?}", duration))
}
