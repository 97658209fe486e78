/// Representative API response payloads for parser tests.
///
/// Trimmed to a handful of stations/days but structurally faithful to the
/// live endpoints, so parse tests exercise the real field names and types.

/// RID waterlevel response: flat array, one entry per station. `level_m`
/// arrives with more precision than the engine stores.
pub fn rid_waterlevel_json() -> &'static str {
    r#"[
        {
            "station_id": "CPY012",
            "station_name": "Chao Phraya at Pak Kret",
            "level_m": 1.034,
            "lat": 13.9125,
            "lng": 100.4933
        },
        {
            "station_id": "CPY015",
            "station_name": "Chao Phraya at Memorial Bridge",
            "level_m": 0.872,
            "lat": 13.7402,
            "lng": 100.4976
        },
        {
            "station_id": "TCN004",
            "station_name": "Tha Chin at Nakhon Chai Si",
            "level_m": 1.215,
            "lat": 13.8012,
            "lng": 100.1871
        }
    ]"#
}

/// TMD 7-day forecast response, trimmed to two days.
pub fn tmd_forecast_json() -> &'static str {
    r#"{
        "forecast": [
            { "date": "2026-08-29", "rain": 12.5, "temp_min": 24.0, "temp_max": 33.0 },
            { "date": "2026-08-30", "rain": 3.1, "temp_min": 25.0, "temp_max": 34.5 }
        ]
    }"#
}
