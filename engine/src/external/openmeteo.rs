//! Open-Meteo archive client for hourly irradiance and wind speed

use chrono::NaiveDateTime;
use reqwest::Client;
use serde::Deserialize;

use shared::{GeoCoordinates, TimeSpan, WeatherRecord, WeatherSeries};

use crate::error::{EngineError, EngineResult};

/// Open-Meteo archive API client
#[derive(Clone)]
pub struct OpenMeteoClient {
    client: Client,
    base_url: String,
    reference_height_m: f64,
}

/// Open-Meteo archive response
#[derive(Debug, Deserialize)]
struct ArchiveResponse {
    hourly: Option<HourlyBlock>,
}

#[derive(Debug, Deserialize)]
struct HourlyBlock {
    #[serde(default)]
    time: Vec<String>,
    #[serde(default)]
    shortwave_radiation: Vec<Option<f64>>,
    #[serde(default)]
    wind_speed_10m: Vec<Option<f64>>,
}

impl OpenMeteoClient {
    pub fn new(base_url: String, reference_height_m: f64) -> Self {
        Self {
            client: Client::new(),
            base_url,
            reference_height_m,
        }
    }

    /// Fetch the hourly weather series for a coordinate and time span.
    /// Hours where the provider has no irradiance or wind value are
    /// skipped, so the returned series may have gaps.
    pub async fn fetch_hourly(
        &self,
        coordinates: &GeoCoordinates,
        span: &TimeSpan,
    ) -> EngineResult<WeatherSeries> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("latitude", coordinates.latitude.to_string()),
                ("longitude", coordinates.longitude.to_string()),
                ("start_date", span.start.format("%Y-%m-%d").to_string()),
                ("end_date", span.end.format("%Y-%m-%d").to_string()),
                (
                    "hourly",
                    "shortwave_radiation,wind_speed_10m".to_string(),
                ),
                ("wind_speed_unit", "ms".to_string()),
                ("timezone", "UTC".to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(EngineError::DataUnavailable(format!(
                "weather provider returned {}",
                response.status()
            )));
        }

        let data: ArchiveResponse = response.json().await.map_err(|e| {
            EngineError::DataUnavailable(format!("failed to parse weather response: {e}"))
        })?;

        Ok(self.convert_response(data))
    }

    fn convert_response(&self, data: ArchiveResponse) -> WeatherSeries {
        let Some(hourly) = data.hourly else {
            return WeatherSeries::new(self.reference_height_m, Vec::new());
        };

        let records = hourly
            .time
            .iter()
            .enumerate()
            .filter_map(|(i, stamp)| {
                let timestamp = NaiveDateTime::parse_from_str(stamp, "%Y-%m-%dT%H:%M")
                    .ok()?
                    .and_utc();
                let irradiance = hourly.shortwave_radiation.get(i).copied().flatten()?;
                let wind_speed = hourly.wind_speed_10m.get(i).copied().flatten()?;
                Some(WeatherRecord {
                    timestamp,
                    irradiance_w_m2: irradiance,
                    wind_speed_ms: wind_speed,
                })
            })
            .collect();

        WeatherSeries::new(self.reference_height_m, records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gaps_in_provider_data_are_skipped() {
        let client = OpenMeteoClient::new("http://unused".to_string(), 10.0);
        let data: ArchiveResponse = serde_json::from_str(
            r#"{
                "hourly": {
                    "time": ["2023-06-01T00:00", "2023-06-01T01:00", "2023-06-01T02:00"],
                    "shortwave_radiation": [0.0, null, 120.5],
                    "wind_speed_10m": [3.2, 4.0, 4.4]
                }
            }"#,
        )
        .unwrap();

        let series = client.convert_response(data);
        assert_eq!(series.reference_height_m, 10.0);
        assert_eq!(series.records.len(), 2);
        assert_eq!(series.records[1].irradiance_w_m2, 120.5);
        assert_eq!(series.records[1].wind_speed_ms, 4.4);
    }

    #[test]
    fn missing_hourly_block_yields_empty_series() {
        let client = OpenMeteoClient::new("http://unused".to_string(), 10.0);
        let data: ArchiveResponse = serde_json::from_str("{}").unwrap();
        assert!(client.convert_response(data).is_empty());
    }
}
