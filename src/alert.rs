/// Alert event log and event derivation.
///
/// The log is a capped, recency-ordered sequence of status-crossing events:
/// new events are prepended, the tail is truncated at `ALERT_LOG_CAPACITY`,
/// and no event is ever mutated after creation.
///
/// There is deliberately no cooldown or deduplication — a station that stays
/// elevated emits one event every cycle until the level drops. The cap is
/// the only bound on growth.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};

use crate::model::{AlertEvent, AlertKind, Station, StationStatus};

/// Maximum number of events retained in the log.
pub const ALERT_LOG_CAPACITY: usize = 200;

// ---------------------------------------------------------------------------
// Event derivation
// ---------------------------------------------------------------------------

/// Builds the alert event for a freshly classified station, if its new
/// status qualifies.
///
/// `Ok` never produces an event, including on a transition back down from
/// `watch` or `alert`. Callers must additionally suppress events on the
/// designated initial cycle; that decision belongs to the update cycle, not
/// to this function.
pub fn event_for(station: &Station, ts: DateTime<Utc>) -> Option<AlertEvent> {
    let kind = match station.status {
        StationStatus::Ok => return None,
        StationStatus::Watch => AlertKind::Watch,
        StationStatus::Alert => AlertKind::Alert,
    };

    Some(AlertEvent {
        ts,
        station_id: station.id.clone(),
        station_name: station.name.clone(),
        kind,
        level_m: station.level_m,
        delta_m: station.delta_m(),
    })
}

// ---------------------------------------------------------------------------
// Alert log
// ---------------------------------------------------------------------------

/// Capped log of alert events, newest first.
#[derive(Debug, Default)]
pub struct AlertLog {
    events: VecDeque<AlertEvent>,
}

impl AlertLog {
    /// Prepends a single event and truncates the tail.
    pub fn record(&mut self, event: AlertEvent) {
        self.events.push_front(event);
        self.events.truncate(ALERT_LOG_CAPACITY);
    }

    /// Prepends one cycle's batch of events, preserving the batch's own
    /// order at the front of the log, then truncates the tail.
    pub fn record_batch(&mut self, batch: Vec<AlertEvent>) {
        for event in batch.into_iter().rev() {
            self.events.push_front(event);
        }
        self.events.truncate(ALERT_LOG_CAPACITY);
    }

    /// Iterates events newest first.
    pub fn iter(&self) -> impl Iterator<Item = &AlertEvent> {
        self.events.iter()
    }

    /// The `n` most recent events, newest first.
    pub fn latest_n(&self, n: usize) -> Vec<&AlertEvent> {
        self.events.iter().take(n).collect()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
