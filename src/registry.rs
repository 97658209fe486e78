/// Station registry: the canonical set of monitored stations.
///
/// The registry is built once at startup from the reading provider's initial
/// snapshot and holds the authoritative mutable state for every station.
/// Each cycle `apply_update` folds a fresh snapshot into it in place.
///
/// The station set is fixed at initialization. Ids appearing in a later
/// snapshot that were unknown at startup are silently ignored, and stations
/// missing from a snapshot are marked offline rather than removed — their
/// last level persists and keeps feeding classification.

use std::collections::HashMap;

use crate::model::{round2, Station, StationReading, StationStatus};

/// Ordered collection of monitored stations. Order follows the initial
/// snapshot and never changes afterwards.
#[derive(Debug, Default)]
pub struct StationRegistry {
    stations: Vec<Station>,
}

impl StationRegistry {
    /// Builds the registry from the provider's initial snapshot.
    ///
    /// `previous_m` is seeded equal to the current level so the first
    /// classification pass sees zero deltas, and every station starts
    /// online with status `Ok`.
    pub fn initialize(snapshot: &[StationReading]) -> Self {
        let stations = snapshot
            .iter()
            .map(|reading| Station {
                id: reading.station_id.clone(),
                name: reading.station_name.clone(),
                latitude: reading.latitude,
                longitude: reading.longitude,
                level_m: round2(reading.level_m),
                previous_m: round2(reading.level_m),
                status: StationStatus::Ok,
                online: true,
            })
            .collect();

        Self { stations }
    }

    /// Folds a fresh snapshot into the registry.
    ///
    /// For every known station: `previous_m` takes the old current level;
    /// if the station appears in the snapshot its level is updated (rounded)
    /// and it is online, otherwise it goes offline and keeps its stale
    /// level. Snapshot entries for unknown ids are ignored.
    pub fn apply_update(&mut self, snapshot: &[StationReading]) {
        let by_id: HashMap<&str, &StationReading> = snapshot
            .iter()
            .map(|reading| (reading.station_id.as_str(), reading))
            .collect();

        for station in &mut self.stations {
            station.previous_m = station.level_m;
            match by_id.get(station.id.as_str()) {
                Some(reading) => {
                    station.level_m = round2(reading.level_m);
                    station.online = true;
                }
                None => station.online = false,
            }
        }
    }

    /// Read-only view of all stations, in initial-snapshot order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Mutable iteration for the classification pass. Only the update cycle
    /// calls this; consumers go through `stations()`.
    pub fn stations_mut(&mut self) -> impl Iterator<Item = &mut Station> {
        self.stations.iter_mut()
    }

    /// Looks up a station by id.
    pub fn get(&self, station_id: &str) -> Option<&Station> {
        self.stations.iter().find(|s| s.id == station_id)
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Number of stations present in the latest snapshot.
    pub fn online_count(&self) -> usize {
        self.stations.iter().filter(|s| s.online).count()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
