/// Core data types for the water-level monitoring engine.
///
/// This module defines the shared domain model imported by all other modules.
/// It contains no I/O and no engine logic — only types, display impls, and
/// the rounding helper applied at every numeric boundary.

use chrono::{DateTime, Utc};

// ---------------------------------------------------------------------------
// Rounding
// ---------------------------------------------------------------------------

/// Rounds a level or delta to 2-decimal precision (centimetre resolution).
///
/// Applied wherever a numeric value enters or leaves the engine: readings
/// from the provider, and level/delta values recorded on alert events.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ---------------------------------------------------------------------------
// Severity status
// ---------------------------------------------------------------------------

/// Severity state of a station, in ascending order of severity.
///
/// There is no "falling" status — a drop in level, however rapid, is `Ok`
/// unless the absolute level remains above the alert threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StationStatus {
    Ok,
    Watch,
    Alert,
}

impl std::fmt::Display for StationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StationStatus::Ok => write!(f, "ok"),
            StationStatus::Watch => write!(f, "watch"),
            StationStatus::Alert => write!(f, "alert"),
        }
    }
}

// ---------------------------------------------------------------------------
// Station types
// ---------------------------------------------------------------------------

/// A single station reading as delivered by the reading provider.
///
/// One snapshot is a `Vec<StationReading>` covering every station the
/// provider currently reports. Levels are in metres.
#[derive(Debug, Clone, PartialEq)]
pub struct StationReading {
    pub station_id: String,
    pub station_name: String,
    pub level_m: f64,
    pub latitude: f64,
    pub longitude: f64,
}

/// A monitored water-level station with its last-known reading.
///
/// Created once at startup from the provider's initial snapshot and mutated
/// in place every cycle. A station absent from a later snapshot is marked
/// offline, never removed; its last level persists for classification.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    /// Provider-assigned station id, unique and stable across cycles.
    pub id: String,
    /// Human-readable station name.
    pub name: String,
    /// WGS84 latitude, immutable once loaded.
    pub latitude: f64,
    /// WGS84 longitude, immutable once loaded.
    pub longitude: f64,
    /// Current water level in metres, 2-decimal precision.
    pub level_m: f64,
    /// Level from the prior cycle, used only for delta computation.
    pub previous_m: f64,
    /// Severity computed on the most recent classification pass.
    pub status: StationStatus,
    /// Whether the station appeared in the latest provider snapshot.
    pub online: bool,
}

impl Station {
    /// Signed level change since the previous cycle, 2-decimal precision.
    pub fn delta_m(&self) -> f64 {
        round2(self.level_m - self.previous_m)
    }
}

// ---------------------------------------------------------------------------
// Series types
// ---------------------------------------------------------------------------

/// An immutable sample in a station's rolling history.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    pub ts: DateTime<Utc>,
    pub level_m: f64,
    pub status: StationStatus,
}

// ---------------------------------------------------------------------------
// Alert types
// ---------------------------------------------------------------------------

/// Which severity produced an alert event. `Ok` never produces one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Watch,
    Alert,
}

impl std::fmt::Display for AlertKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertKind::Watch => write!(f, "WATCH"),
            AlertKind::Alert => write!(f, "ALERT"),
        }
    }
}

/// An immutable record of a status crossing, never mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertEvent {
    pub ts: DateTime<Utc>,
    pub station_id: String,
    pub station_name: String,
    pub kind: AlertKind,
    /// Level at the crossing, 2-decimal precision.
    pub level_m: f64,
    /// Signed change from the previous cycle, 2-decimal precision.
    pub delta_m: f64,
}

// ---------------------------------------------------------------------------
// Forecast types
// ---------------------------------------------------------------------------

/// One day of the auxiliary weather forecast.
///
/// The full forecast list is replaced atomically each cycle; days are never
/// merged or accumulated across fetches.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherDay {
    /// Forecast date as reported by the provider (e.g. "2026-08-29").
    pub date: String,
    pub rain_mm: f64,
    pub temp_min_c: f64,
    pub temp_max_c: f64,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise when fetching or parsing provider data.
///
/// Provider failures are always recovered locally by the update cycle: a
/// reading-fetch failure degrades that cycle to a no-op, a forecast-fetch
/// failure only skips the forecast replacement. Neither stops the loop.
#[derive(Debug, PartialEq)]
pub enum ProviderError {
    /// Non-2xx HTTP response from the provider.
    Http(u16),
    /// Connection, DNS, or timeout failure before a response arrived.
    Network(String),
    /// The response body could not be deserialized.
    Parse(String),
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderError::Http(code) => write!(f, "HTTP error: {}", code),
            ProviderError::Network(msg) => write!(f, "Network error: {}", msg),
            ProviderError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for ProviderError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2_truncates_to_centimetres() {
        assert_eq!(round2(1.005_4), 1.01);
        assert_eq!(round2(1.234_9), 1.23);
        assert_eq!(round2(-0.125), -0.13);
        assert_eq!(round2(1.20), 1.20);
    }

    #[test]
    fn test_station_delta_is_rounded() {
        let station = Station {
            id: "ST001".to_string(),
            name: "Chao Phraya at Pak Kret".to_string(),
            latitude: 13.91,
            longitude: 100.5,
            level_m: 1.25,
            previous_m: 1.0,
            status: StationStatus::Alert,
            online: true,
        };
        assert_eq!(station.delta_m(), 0.25);
    }

    #[test]
    fn test_status_ordering_ascends_with_severity() {
        assert!(StationStatus::Ok < StationStatus::Watch);
        assert!(StationStatus::Watch < StationStatus::Alert);
    }

    #[test]
    fn test_status_display_matches_wire_tags() {
        assert_eq!(StationStatus::Watch.to_string(), "watch");
        assert_eq!(AlertKind::Alert.to_string(), "ALERT");
    }

    #[test]
    fn test_provider_error_display() {
        assert_eq!(ProviderError::Http(502).to_string(), "HTTP error: 502");
        assert!(
            ProviderError::Parse("bad json".to_string())
                .to_string()
                .contains("bad json")
        );
    }
}
