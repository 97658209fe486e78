/// Update cycle orchestration.
///
/// The `Monitor` owns every piece of mutable engine state — station
/// registry, series, alert log, forecast, last-updated timestamp — and is
/// its single writer. Each cycle:
///
/// 1. Fetch a reading snapshot; on failure, log and skip to step 5 without
///    mutating anything (the cycle is lost, the process continues).
/// 2. Apply the snapshot to the registry.
/// 3. Classify every station, collecting alert events unless this is the
///    initial cycle.
/// 4. Append one series point per station; fetch the forecast best-effort.
/// 5. Stamp `last_updated` (successful fetch only).
/// 6. Sleep the fixed refresh interval and go again, unconditionally.
///
/// Everything runs on one thread with blocking I/O, so cycles never overlap
/// and consumers reading through the accessors between cycles always see a
/// consistent (if possibly stale) view. There is no backoff, no retry
/// cutoff, and no way for a single cycle's failure to stop the loop.

use chrono::{DateTime, Utc};
use std::thread;
use std::time::Duration;

use crate::alert::{self, AlertLog};
use crate::analysis::stats::{self, StatsSummary};
use crate::classify::classify;
use crate::config::MonitorConfig;
use crate::logging::{self, DataSource};
use crate::model::{AlertEvent, ProviderError, SeriesPoint, Station, WeatherDay};
use crate::provider::{ForecastProvider, ReadingProvider};
use crate::registry::StationRegistry;
use crate::series::{Series, SeriesSet};

/// The monitoring engine. Generic over the two providers so tests can
/// substitute scripted mocks for the HTTP clients.
pub struct Monitor<R: ReadingProvider, F: ForecastProvider> {
    config: MonitorConfig,
    readings: R,
    forecast: F,

    registry: StationRegistry,
    series: SeriesSet,
    alerts: AlertLog,
    weather: Vec<WeatherDay>,
    last_updated: Option<DateTime<Utc>>,

    /// True from `initialize` until the first cycle has run; that cycle
    /// never emits alert events, even for stations starting above the
    /// alert threshold.
    initial: bool,
}

impl<R: ReadingProvider, F: ForecastProvider> Monitor<R, F> {
    pub fn new(config: MonitorConfig, readings: R, forecast: F) -> Self {
        Self {
            config,
            readings,
            forecast,
            registry: StationRegistry::default(),
            series: SeriesSet::default(),
            alerts: AlertLog::default(),
            weather: Vec::new(),
            last_updated: None,
            initial: true,
        }
    }

    // -----------------------------------------------------------------------
    // Lifecycle
    // -----------------------------------------------------------------------

    /// Fetches the initial snapshot and builds the station registry and the
    /// per-station series.
    ///
    /// Unlike cycle failures, a failure here propagates: the engine has no
    /// station set yet and nothing to monitor.
    pub fn initialize(&mut self) -> Result<(), ProviderError> {
        let snapshot = self.readings.fetch_readings()?;
        self.registry = StationRegistry::initialize(&snapshot);
        self.series =
            SeriesSet::initialize(self.registry.stations().iter().map(|s| s.id.clone()));
        self.initial = true;

        logging::info(
            DataSource::Engine,
            None,
            &format!("initialized with {} stations", self.registry.len()),
        );
        Ok(())
    }

    /// Runs one update cycle. Never fails: every provider error is
    /// recovered here and the engine is left in a consistent state.
    pub fn run_cycle(&mut self) {
        let initial = self.initial;
        self.initial = false;

        let snapshot = match self.readings.fetch_readings() {
            Ok(snapshot) => snapshot,
            Err(e) => {
                // Lost cycle: no registry mutation, no series points, no
                // alerts, no forecast refresh. The next cycle starts clean.
                logging::log_fetch_failure(DataSource::Rid, "waterlevel fetch", &e);
                return;
            }
        };

        let now = Utc::now();
        self.registry.apply_update(&snapshot);

        let mut events: Vec<AlertEvent> = Vec::new();
        for station in self.registry.stations_mut() {
            station.status = classify(station.previous_m, station.level_m, &self.config.thresholds);
            if !initial {
                if let Some(event) = alert::event_for(station, now) {
                    events.push(event);
                }
            }
        }

        for station in self.registry.stations() {
            self.series.append(
                &station.id,
                SeriesPoint {
                    ts: now,
                    level_m: station.level_m,
                    status: station.status,
                },
            );
        }

        if !events.is_empty() {
            logging::info(
                DataSource::Engine,
                None,
                &format!("{} alert event(s) this cycle", events.len()),
            );
        }
        self.alerts.record_batch(events);

        // Forecast is best-effort and independently fallible; a failure
        // leaves the previous forecast in place.
        match self.forecast.fetch_forecast() {
            Ok(days) => self.weather = days,
            Err(e) => logging::log_fetch_failure(DataSource::Tmd, "forecast fetch", &e),
        }

        self.last_updated = Some(now);
    }

    /// Initializes the engine, then runs cycles forever at the configured
    /// interval.
    ///
    /// The sleep-and-loop is the unconditional final action of every cycle,
    /// succeeded or failed; nothing past initialization can end the loop.
    pub fn run(&mut self) -> Result<(), ProviderError> {
        self.initialize()?;
        let interval = Duration::from_millis(self.config.refresh_interval_ms);
        loop {
            self.run_cycle();
            thread::sleep(interval);
        }
    }

    // -----------------------------------------------------------------------
    // Read-only accessors for consumers
    // -----------------------------------------------------------------------

    /// All stations, in initial-snapshot order.
    pub fn stations(&self) -> &[Station] {
        self.registry.stations()
    }

    /// One station's rolling history.
    pub fn series(&self, station_id: &str) -> Option<&Series> {
        self.series.get(station_id)
    }

    /// All series, for trend aggregation.
    pub fn series_set(&self) -> &SeriesSet {
        &self.series
    }

    /// The alert log, newest first.
    pub fn alerts(&self) -> &AlertLog {
        &self.alerts
    }

    /// The latest forecast list (empty until the first successful fetch).
    pub fn weather(&self) -> &[WeatherDay] {
        &self.weather
    }

    /// Timestamp of the last successful reading fetch.
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.last_updated
    }

    /// Headline counters for a stats display.
    pub fn summary(&self) -> StatsSummary {
        stats::summarize(&self.registry, &self.alerts, self.last_updated)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
//
// Unit tests here cover the cycle's failure isolation; the full multi-cycle
// scenarios live in tests/engine_lifecycle.rs with scripted providers.
