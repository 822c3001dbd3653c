//! Configuration for the analysis engine
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with LP_ prefix

use config::{Environment, File};
use serde::Deserialize;

use crate::error::EngineResult;

/// Main engine configuration
#[derive(Debug, Deserialize, Clone)]
pub struct EngineConfig {
    /// Current environment (development, production)
    pub environment: String,

    /// Weather/soil gateway configuration
    pub gateway: GatewayConfig,

    /// Energy tariff configuration
    pub tariff: TariffConfig,

    /// Scenario optimizer configuration
    pub optimizer: OptimizerConfig,

    /// Agricultural revenue configuration
    pub agri: AgriConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GatewayConfig {
    /// Soil properties endpoint
    pub soil_endpoint: String,

    /// Weather archive endpoint
    pub weather_endpoint: String,

    /// Timeout applied to each gateway call, in seconds
    pub timeout_secs: u64,

    /// Measurement height of the provider's wind speeds (m)
    pub reference_height_m: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TariffConfig {
    /// Feed-in rate applied to every generated kWh
    pub rate_per_kwh: f64,

    /// Display currency for revenue figures
    pub currency: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OptimizerConfig {
    /// Resolution of the allocation-fraction grid (0.25 evaluates
    /// {0, 0.25, 0.5, 0.75, 1.0})
    pub allocation_step: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AgriConfig {
    /// Number of top-ranked crops included in the revenue aggregate
    pub max_crops: usize,
}

impl EngineConfig {
    /// Load configuration from files and environment variables. Any
    /// loading or deserialization failure maps to a `Configuration` error.
    pub fn load() -> EngineResult<Self> {
        let environment = std::env::var("LP_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default(
                "gateway.soil_endpoint",
                "https://rest.isric.org/soilgrids/v2.0/properties/query",
            )?
            .set_default(
                "gateway.weather_endpoint",
                "https://archive-api.open-meteo.com/v1/archive",
            )?
            .set_default("gateway.timeout_secs", 20)?
            .set_default("gateway.reference_height_m", 10.0)?
            .set_default("tariff.rate_per_kwh", 4.5)?
            .set_default("tariff.currency", "INR")?
            .set_default("optimizer.allocation_step", 0.25)?
            .set_default("agri.max_crops", 3)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (LP_ prefix)
            .add_source(
                Environment::with_prefix("LP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            gateway: GatewayConfig {
                soil_endpoint: "https://rest.isric.org/soilgrids/v2.0/properties/query"
                    .to_string(),
                weather_endpoint: "https://archive-api.open-meteo.com/v1/archive".to_string(),
                timeout_secs: 20,
                reference_height_m: 10.0,
            },
            tariff: TariffConfig {
                rate_per_kwh: 4.5,
                currency: "INR".to_string(),
            },
            optimizer: OptimizerConfig {
                allocation_step: 0.25,
            },
            agri: AgriConfig { max_crops: 3 },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    #[test]
    fn load_failures_map_to_configuration_errors() {
        let err: EngineError = config::ConfigError::Message("bad value".to_string()).into();
        assert!(matches!(err, EngineError::Configuration(_)));
    }
}
