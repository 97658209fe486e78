/// TMD (Thai Meteorological Department) 7-day forecast API client.
///
/// Fetches the auxiliary rainfall/temperature forecast from:
///   https://data.tmd.go.th/api/WeatherForecast/7-day/?type=json
///
/// The forecast is best-effort context for the water-level picture; every
/// failure here is recovered by the update cycle without touching station
/// data.

use serde::Deserialize;
use std::time::Duration;

use crate::model::{ProviderError, WeatherDay};
use crate::provider::ForecastProvider;

const TMD_FORECAST_URL: &str = "https://data.tmd.go.th/api/WeatherForecast/7-day/?type=json";

// ---------------------------------------------------------------------------
// Serde structures for API response deserialization
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct TmdForecastResponse {
    /// Absent on some responses; treated as an empty forecast, not an error.
    forecast: Option<Vec<TmdForecastDay>>,
}

#[derive(Deserialize)]
struct TmdForecastDay {
    date: String,
    rain: f64,
    temp_min: f64,
    temp_max: f64,
}

// ---------------------------------------------------------------------------
// Response parsing
// ---------------------------------------------------------------------------

/// Parses a TMD forecast response body. A missing `forecast` field yields
/// an empty list.
pub fn parse_forecast_response(json: &str) -> Result<Vec<WeatherDay>, ProviderError> {
    let response: TmdForecastResponse = serde_json::from_str(json)
        .map_err(|e| ProviderError::Parse(format!("JSON deserialization failed: {}", e)))?;

    Ok(response
        .forecast
        .unwrap_or_default()
        .into_iter()
        .map(|day| WeatherDay {
            date: day.date,
            rain_mm: day.rain,
            temp_min_c: day.temp_min,
            temp_max_c: day.temp_max,
        })
        .collect())
}

// ---------------------------------------------------------------------------
// HTTP client
// ---------------------------------------------------------------------------

/// Blocking HTTP client for the TMD 7-day forecast endpoint.
pub struct TmdClient {
    client: reqwest::blocking::Client,
    url: String,
}

impl TmdClient {
    pub fn new(timeout: Duration) -> Result<Self, ProviderError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        Ok(Self {
            client,
            url: TMD_FORECAST_URL.to_string(),
        })
    }

    /// Points the client at a non-default endpoint (test servers).
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    fn fetch(&self) -> Result<Vec<WeatherDay>, ProviderError> {
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

        parse_forecast_response(&body)
    }
}

impl ForecastProvider for TmdClient {
    fn fetch_forecast(&mut self) -> Result<Vec<WeatherDay>, ProviderError> {
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
    fn test_parse_forecast_fixture() {
        let days = parse_forecast_response(fixtures::tmd_forecast_json())
            .expect("fixture should parse");

        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, "2026-08-29");
        assert_eq!(days[0].rain_mm, 12.5);
        assert_eq!(days[0].temp_min_c, 24.0);
        assert_eq!(days[0].temp_max_c, 33.0);
    }

    #[test]
    fn test_missing_forecast_field_yields_empty_list() {
        let days = parse_forecast_response("{}").expect("missing field is not an error");
        assert!(days.is_empty());
    }

    #[test]
    fn test_malformed_body_is_a_parse_error() {
        let result = parse_forecast_response("not json");
        assert!(matches!(result, Err(ProviderError::Parse(_))));
    }
}
