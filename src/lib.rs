/// levelmon_engine: real-time river water-level monitoring engine.
///
/// Periodically ingests per-station readings, classifies each station into a
/// severity state, maintains a bounded rolling history per station, and emits
/// threshold-crossing alert events. Presentation layers consume the engine's
/// read-only state between cycles; they own no logic of their own.
///
/// # Module structure
///
/// ```text
/// levelmon_engine
/// ├── model       — shared data types (Station, SeriesPoint, AlertEvent, ProviderError, …)
/// ├── config      — monitoring thresholds and refresh interval (compiled-in defaults)
/// ├── provider    — ReadingProvider / ForecastProvider traits
/// ├── registry    — canonical station set, updated in place each cycle
/// ├── classify    — pure severity classification (ok / watch / alert)
/// ├── series      — per-station bounded rolling history (last 60 samples)
/// ├── alert       — capped, recency-ordered alert event log
/// ├── monitor     — update cycle orchestration and the permanent polling loop
/// ├── ingest
/// │   ├── rid     — RID water-level API: HTTP fetch + JSON parsing
/// │   ├── tmd     — TMD 7-day forecast API client
/// │   └── fixtures (test only) — representative API response payloads
/// ├── analysis
/// │   └── trend   — cross-station aligned averages and stats summary
/// └── logging     — leveled, source-tagged console/file logging
/// ```

/// Public modules
pub mod alert;
pub mod analysis;
pub mod classify;
pub mod config;
pub mod ingest;
pub mod logging;
pub mod model;
pub mod monitor;
pub mod provider;
pub mod registry;
pub mod series;
