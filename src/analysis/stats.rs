/// Headline statistics over the current engine state.
///
/// The numbers a dashboard's stat bar shows: how many stations exist, how
/// many reported in the latest snapshot, how deep the alert log is, and
/// when the state was last refreshed.

use chrono::{DateTime, Utc};

use crate::alert::AlertLog;
use crate::registry::StationRegistry;

/// Snapshot of headline counters, computed on demand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsSummary {
    pub station_count: usize,
    pub online_count: usize,
    pub alert_count: usize,
    /// `None` until the first successful reading fetch.
    pub last_updated: Option<DateTime<Utc>>,
}

/// Computes the summary from the engine's current state.
pub fn summarize(
    registry: &StationRegistry,
    alerts: &AlertLog,
    last_updated: Option<DateTime<Utc>>,
) -> StatsSummary {
    StatsSummary {
        station_count: registry.len(),
        online_count: registry.online_count(),
        alert_count: alerts.len(),
        last_updated,
    }
}
