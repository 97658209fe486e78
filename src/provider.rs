/// Provider traits: the engine's only seams to the outside world.
///
/// The update cycle consumes two abstract collaborators — a reading provider
/// returning a complete snapshot of current station measurements, and a
/// forecast provider returning a short sequence of day records. Production
/// implementations live under `ingest/`; tests substitute scripted mocks.

use crate::model::{ProviderError, StationReading, WeatherDay};

/// Source of station water-level snapshots.
///
/// One call returns the complete set of readings the source currently has.
/// A station missing from a snapshot is interpreted by the registry as
/// offline, not as an error.
pub trait ReadingProvider {
    fn fetch_readings(&mut self) -> Result<Vec<StationReading>, ProviderError>;
}

/// Source of the auxiliary multi-day weather forecast.
///
/// Implementations should return an empty list (not an error) when the
/// source responds successfully but carries no forecast payload.
pub trait ForecastProvider {
    fn fetch_forecast(&mut self) -> Result<Vec<WeatherDay>, ProviderError>;
}
