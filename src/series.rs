/// Per-station bounded rolling history.
///
/// Each station owns one `Series`: an ordered sequence of samples, oldest
/// first, capped at the most recent `SERIES_CAPACITY` entries. The update
/// cycle pushes exactly one point per station per successful cycle; the only
/// other mutation is FIFO eviction when the cap is exceeded.

use std::collections::{HashMap, VecDeque};

use crate::model::SeriesPoint;

/// Maximum number of samples retained per station (~5 minutes of history
/// at the default 5-second refresh interval).
pub const SERIES_CAPACITY: usize = 60;

/// Rolling history for a single station, oldest first.
#[derive(Debug, Default, Clone)]
pub struct Series {
    points: VecDeque<SeriesPoint>,
}

impl Series {
    /// Appends a sample, evicting the oldest when over capacity.
    pub fn append(&mut self, point: SeriesPoint) {
        self.points.push_back(point);
        if self.points.len() > SERIES_CAPACITY {
            self.points.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Sample at position `index` (0 = oldest retained).
    pub fn get(&self, index: usize) -> Option<&SeriesPoint> {
        self.points.get(index)
    }

    /// Iterates samples oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &SeriesPoint> {
        self.points.iter()
    }

    /// The most recent `n` samples, in original (oldest-first) order.
    pub fn latest_n(&self, n: usize) -> Vec<SeriesPoint> {
        let skip = self.points.len().saturating_sub(n);
        self.points.iter().skip(skip).copied().collect()
    }
}

/// All station series, keyed by station id.
///
/// Series are created alongside their stations at startup and never
/// destroyed; `append` on an id unknown at initialization is ignored, in
/// line with the registry's fixed station set.
#[derive(Debug, Default)]
pub struct SeriesSet {
    by_station: HashMap<String, Series>,
}

impl SeriesSet {
    /// Creates one empty series per station id.
    pub fn initialize<I, S>(station_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let by_station = station_ids
            .into_iter()
            .map(|id| (id.into(), Series::default()))
            .collect();
        Self { by_station }
    }

    /// Appends a sample to the given station's series.
    pub fn append(&mut self, station_id: &str, point: SeriesPoint) {
        if let Some(series) = self.by_station.get_mut(station_id) {
            series.append(point);
        }
    }

    /// Read-only access to one station's series.
    pub fn get(&self, station_id: &str) -> Option<&Series> {
        self.by_station.get(station_id)
    }

    /// The most recent `n` samples for a station, oldest first. Unknown
    /// ids yield an empty vector.
    pub fn latest_n(&self, station_id: &str, n: usize) -> Vec<SeriesPoint> {
        self.by_station
            .get(station_id)
            .map(|series| series.latest_n(n))
            .unwrap_or_default()
    }

    /// Iterates all series in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Series> {
        self.by_station.values()
    }

    /// Length of the longest series.
    pub fn max_len(&self) -> usize {
        self.by_station.values().map(Series::len).max().unwrap_or(0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
