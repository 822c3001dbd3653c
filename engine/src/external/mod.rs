//! Gateway clients for external soil and weather providers

pub mod openmeteo;
pub mod soilgrids;

use std::future::Future;
use std::time::Duration;

use shared::{GeoCoordinates, SoilData, TimeSpan, WeatherSeries};

use crate::error::{EngineError, EngineResult};

pub use openmeteo::OpenMeteoClient;
pub use soilgrids::SoilGridsClient;

/// Contract the engine expects from a weather/soil data provider.
///
/// Either call may return empty or partial data; the pipeline treats that
/// the same as a failure and degrades the affected branch.
#[allow(async_fn_in_trait)]
pub trait WeatherSoilGateway {
    async fn fetch_soil(&self, coordinates: &GeoCoordinates) -> EngineResult<SoilData>;

    async fn fetch_weather(
        &self,
        coordinates: &GeoCoordinates,
        span: &TimeSpan,
    ) -> EngineResult<WeatherSeries>;
}

/// Bound a gateway call with a timeout. A timeout is indistinguishable
/// from the provider having no data.
pub async fn with_timeout<T>(
    duration: Duration,
    what: &str,
    fut: impl Future<Output = EngineResult<T>>,
) -> EngineResult<T> {
    match tokio::time::timeout(duration, fut).await {
        Ok(result) => result,
        Err(_) => Err(EngineError::DataUnavailable(format!(
            "{what} request timed out after {}s",
            duration.as_secs_f64()
        ))),
    }
}

/// Production gateway backed by the SoilGrids and Open-Meteo public APIs
#[derive(Clone)]
pub struct HttpGateway {
    soil: SoilGridsClient,
    weather: OpenMeteoClient,
}

impl HttpGateway {
    pub fn new(config: &crate::config::GatewayConfig) -> Self {
        Self {
            soil: SoilGridsClient::new(config.soil_endpoint.clone()),
            weather: OpenMeteoClient::new(
                config.weather_endpoint.clone(),
                config.reference_height_m,
            ),
        }
    }
}

impl WeatherSoilGateway for HttpGateway {
    async fn fetch_soil(&self, coordinates: &GeoCoordinates) -> EngineResult<SoilData> {
        self.soil.fetch_properties(coordinates).await
    }

    async fn fetch_weather(
        &self,
        coordinates: &GeoCoordinates,
        span: &TimeSpan,
    ) -> EngineResult<WeatherSeries> {
        self.weather.fetch_hourly(coordinates, span).await
    }
}
