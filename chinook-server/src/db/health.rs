//! Health report and pool advisories

use std::fmt::Display;
use std::time::Duration;

use serde::Serialize;

use super::stats::PoolStats;

/// Upper bound on the liveness probe.
pub const HEALTH_PROBE_TIMEOUT: Duration = Duration::from_secs(1);

const HEAVY_LOAD_OPEN_CONNECTIONS: u32 = 40;
const BOTTLENECK_WAIT_COUNT: u64 = 1000;

const HEALTHY: &str = "It's healthy";
const HEAVY_LOAD: &str = "The database is experiencing heavy load.";
const BOTTLENECK: &str =
    "The database has a high number of wait events, indicating potential bottlenecks.";
const IDLE_CHURN: &str =
    "Many idle connections are being closed, consider revising the connection pool settings.";
const LIFETIME_CHURN: &str = "Many connections are being closed due to max lifetime, consider increasing max lifetime or revising the connection usage pattern.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Up,
    Down,
}

/// Result of one health probe.
///
/// An `up` report carries the pool statistics flattened alongside the
/// status; a `down` report carries only the error.
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub stats: Option<PoolStats>,
}

impl HealthReport {
    pub fn up(stats: PoolStats) -> Self {
        Self {
            status: HealthStatus::Up,
            message: Some(advisory(&stats).to_string()),
            error: None,
            stats: Some(stats),
        }
    }

    pub fn down(cause: impl Display) -> Self {
        Self {
            status: HealthStatus::Down,
            message: None,
            error: Some(format!("db down: {}", cause)),
            stats: None,
        }
    }

    pub fn is_up(&self) -> bool {
        self.status == HealthStatus::Up
    }
}

/// Pick the advisory message for a set of pool statistics.
///
/// Rules are checked in order and a later match replaces an earlier one.
pub fn advisory(stats: &PoolStats) -> &'static str {
    let half_open = u64::from(stats.open_connections) / 2;
    let mut message = HEALTHY;

    if stats.open_connections > HEAVY_LOAD_OPEN_CONNECTIONS {
        message = HEAVY_LOAD;
    }
    if stats.wait_count > BOTTLENECK_WAIT_COUNT {
        message = BOTTLENECK;
    }
    if stats.max_idle_closed > half_open {
        message = IDLE_CHURN;
    }
    if stats.max_lifetime_closed > half_open {
        message = LIFETIME_CHURN;
    }

    message
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(open: u32) -> PoolStats {
        PoolStats {
            open_connections: open,
            idle: open,
            ..PoolStats::default()
        }
    }

    #[test]
    fn quiet_pool_is_healthy() {
        assert_eq!(advisory(&stats(0)), HEALTHY);
        assert_eq!(advisory(&stats(40)), HEALTHY);
    }

    #[test]
    fn more_than_forty_open_is_heavy_load() {
        let report = HealthReport::up(stats(41));
        assert!(report.is_up());
        assert_eq!(report.message.as_deref(), Some(HEAVY_LOAD));
    }

    #[test]
    fn wait_count_overrides_heavy_load() {
        let s = PoolStats {
            wait_count: 1001,
            ..stats(41)
        };
        assert_eq!(advisory(&s), BOTTLENECK);
    }

    #[test]
    fn idle_churn_compares_against_half_open() {
        let s = PoolStats {
            max_idle_closed: 3,
            ..stats(6)
        };
        assert_eq!(advisory(&s), HEALTHY);

        let s = PoolStats {
            max_idle_closed: 4,
            ..stats(6)
        };
        assert_eq!(advisory(&s), IDLE_CHURN);
    }

    #[test]
    fn lifetime_churn_wins_last() {
        let s = PoolStats {
            wait_count: 5000,
            max_idle_closed: 10,
            max_lifetime_closed: 10,
            ..stats(2)
        };
        assert_eq!(advisory(&s), LIFETIME_CHURN);
    }

    #[test]
    fn down_report_serializes_error_only() {
        let report = HealthReport::down("connection refused");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["status"], "down");
        assert_eq!(json["error"], "db down: connection refused");
        assert!(json.get("open_connections").is_none());
        assert!(json.get("message").is_none());
    }

    #[test]
    fn up_report_flattens_stats() {
        let json = serde_json::to_value(HealthReport::up(stats(3))).unwrap();
        assert_eq!(json["status"], "up");
        assert_eq!(json["message"], HEALTHY);
        assert_eq!(json["open_connections"], 3);
        assert_eq!(json["idle"], 3);
        assert_eq!(json["in_use"], 0);
    }
}
