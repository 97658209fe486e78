/// RID (Royal Irrigation Department) water-level API client.
///
/// Fetches the current water level for every telemetered station from the
/// RID open-data endpoint:
///   http://water.rid.go.th/api/v1/waterlevel
///
/// The endpoint returns a flat JSON array, one entry per station, covering
/// the entire network in a single response. See `fixtures.rs` for annotated
/// example payloads.

use serde::Deserialize;
use std::time::Duration;

use crate::model::{ProviderError, StationReading};
use crate::provider::ReadingProvider;

const RID_WATERLEVEL_URL: &str = "http://water.rid.go.th/api/v1/waterlevel";

// ---------------------------------------------------------------------------
// Serde structures for API response deserialization
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct RidStationEntry {
    station_id: String,
    station_name: String,
    level_m: f64,
    lat: f64,
    lng: f64,
}

// ---------------------------------------------------------------------------
// Response parsing
// ---------------------------------------------------------------------------

/// Parses a RID waterlevel response body into station readings.
///
/// Rounding to 2 decimals is left to the registry; readings carry the raw
/// value the API reported.
pub fn parse_waterlevel_response(json: &str) -> Result<Vec<StationReading>, ProviderError> {
    let entries: Vec<RidStationEntry> = serde_json::from_str(json)
        .map_err(|e| ProviderError::Parse(format!("JSON deserialization failed: {}", e)))?;

    Ok(entries
        .into_iter()
        .map(|entry| StationReading {
            station_id: entry.station_id,
            station_name: entry.station_name,
            level_m: entry.level_m,
            latitude: entry.lat,
            longitude: entry.lng,
        })
        .collect())
}

// ---------------------------------------------------------------------------
// HTTP client
// ---------------------------------------------------------------------------

/// Blocking HTTP client for the RID waterlevel endpoint.
pub struct RidClient {
    client: reqwest::blocking::Client,
    url: String,
}

impl RidClient {
    /// Builds a client with the given request timeout. The upstream API
    /// defines no timeout of its own; without one a hung request would
    /// stall the update loop.
    pub fn new(timeout: Duration) -> Result<Self, ProviderError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        Ok(Self {
            client,
            url: RID_WATERLEVEL_URL.to_string(),
        })
    }

    /// Points the client at a non-default endpoint (test servers).
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    fn fetch(&self) -> Result<Vec<StationReading>, ProviderError> {
        let response = self
            .client
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ProviderError::Http(response.status().as_u16()));
        }

        let body = response
            .text()
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        parse_waterlevel_response(&body)
    }
}

impl ReadingProvider for RidClient {
    fn fetch_readings(&mut self) -> Result<Vec<StationReading>, ProviderError> {
        self.fetch()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::fixtures;

    #[test]
    fn test_parse_waterlevel_fixture() {
        let readings = parse_waterlevel_response(fixtures::rid_waterlevel_json())
            .expect("fixture should parse");

        assert_eq!(readings.len(), 3);

        let pak_kret = &readings[0];
        assert_eq!(pak_kret.station_id, "CPY012");
        assert_eq!(pak_kret.station_name, "Chao Phraya at Pak Kret");
        assert_eq!(pak_kret.level_m, 1.034);
        assert_eq!(pak_kret.latitude, 13.9125);
        assert_eq!(pak_kret.longitude, 100.4933);
    }

    #[test]
    fn test_parse_empty_array_yields_empty_snapshot() {
        let readings = parse_waterlevel_response("[]").expect("empty array is valid");
        assert!(readings.is_empty());
    }

    #[test]
    fn test_parse_malformed_json_is_a_parse_error() {
        let result = parse_waterlevel_response("{\"not\": \"an array\"}");
        assert!(matches!(result, Err(ProviderError::Parse(_))));
    }

    #[test]
    fn test_parse_missing_field_is_a_parse_error() {
        let json = r#"[{"station_id": "CPY012", "station_name": "Pak Kret"}]"#;
        let result = parse_waterlevel_response(json);
        assert!(matches!(result, Err(ProviderError::Parse(_))));
    }
}
