//! Shared fixtures for the engine integration tests
#![allow(dead_code)]

use std::time::Duration;

use chrono::{TimeZone, Utc};

use land_potential_engine::error::{EngineError, EngineResult};
use land_potential_engine::external::WeatherSoilGateway;
use land_potential_engine::EngineConfig;
use shared::{GeoCoordinates, SoilData, SoilValue, TimeSpan, WeatherRecord, WeatherSeries};

/// Gateway stub serving canned data, optionally after a delay
pub struct StubGateway {
    pub soil: Option<SoilData>,
    pub weather: Option<WeatherSeries>,
    pub delay: Option<Duration>,
}

impl StubGateway {
    pub fn new(soil: SoilData, weather: WeatherSeries) -> Self {
        Self {
            soil: Some(soil),
            weather: Some(weather),
            delay: None,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            soil: None,
            weather: None,
            delay: None,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

impl WeatherSoilGateway for StubGateway {
    async fn fetch_soil(&self, _coordinates: &GeoCoordinates) -> EngineResult<SoilData> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.soil
            .clone()
            .ok_or_else(|| EngineError::DataUnavailable("stub has no soil data".to_string()))
    }

    async fn fetch_weather(
        &self,
        _coordinates: &GeoCoordinates,
        _span: &TimeSpan,
    ) -> EngineResult<WeatherSeries> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.weather
            .clone()
            .ok_or_else(|| EngineError::DataUnavailable("stub has no weather data".to_string()))
    }
}

/// Hourly series of identical records starting 2023-06-01 00:00 UTC
pub fn hourly_series(hours: u32, irradiance_w_m2: f64, wind_speed_ms: f64) -> WeatherSeries {
    let records = (0..hours)
        .map(|h| WeatherRecord {
            timestamp: Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap()
                + chrono::Duration::hours(h as i64),
            irradiance_w_m2,
            wind_speed_ms,
        })
        .collect();
    WeatherSeries::new(10.0, records)
}

/// Scalar soil data that suits the wheat tolerance ranges exactly
pub fn fertile_soil() -> SoilData {
    let mut soil = SoilData::new();
    soil.insert("phh2o".to_string(), SoilValue::Scalar(6.5));
    soil.insert("soc".to_string(), SoilValue::Scalar(12.0));
    soil.insert("nitrogen".to_string(), SoilValue::Scalar(1.2));
    soil.insert("clay".to_string(), SoilValue::Scalar(25.0));
    soil.insert("sand".to_string(), SoilValue::Scalar(35.0));
    soil
}

/// Engine config with a round tariff so revenue assertions stay exact
pub fn test_config() -> EngineConfig {
    let mut config = EngineConfig::default();
    config.tariff.rate_per_kwh = 5.0;
    config
}
