/// Engine configuration: refresh interval and classification thresholds.
///
/// All values are fixed at construction time. The engine is embedded, so
/// there is no CLI, no configuration file, and no environment lookup — a
/// host that wants different thresholds builds a `MonitorConfig` by hand.

/// Fraction of the per-tick surge threshold that triggers a `watch`.
///
/// A station does not need a full configured surge in one cycle to be worth
/// watching; three quarters of one is enough.
pub const SURGE_WATCH_FRACTION: f64 = 0.75;

/// Classification thresholds, in metres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Absolute level at or above which a station is in `alert`.
    pub alert_level_m: f64,
    /// Reference rise per cycle; `watch` triggers at
    /// `SURGE_WATCH_FRACTION` of this value.
    pub surge_per_tick_m: f64,
}

impl Thresholds {
    /// Minimum per-cycle rise that classifies as a surge (`watch`).
    pub fn surge_watch_m(&self) -> f64 {
        self.surge_per_tick_m * SURGE_WATCH_FRACTION
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            alert_level_m: 1.20,
            surge_per_tick_m: 0.15,
        }
    }
}

/// Full engine configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonitorConfig {
    /// Interval between update cycles, in milliseconds.
    pub refresh_interval_ms: u64,
    /// Classification thresholds.
    pub thresholds: Thresholds,
    /// Request timeout applied by the HTTP provider adapters, in seconds.
    ///
    /// The underlying data sources define no timeout of their own; without
    /// one a hung fetch would stall the loop indefinitely.
    pub fetch_timeout_secs: u64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            refresh_interval_ms: 5_000,
            thresholds: Thresholds::default(),
            fetch_timeout_secs: 10,
        }
    }
}
