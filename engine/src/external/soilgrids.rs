//! SoilGrids REST client for fetching soil property profiles
//!
//! Converts the API's mapped units (pH × 10, dg/kg, cg/kg, g/kg) into
//! conventional units at the boundary, so the engine only ever sees pH,
//! g/kg and percent values.

use std::collections::BTreeMap;

use reqwest::Client;
use serde::Deserialize;

use shared::{GeoCoordinates, SoilData, SoilValue};

use crate::error::{EngineError, EngineResult};

/// Soil properties requested for crop scoring
const SOIL_PROPERTIES: &[&str] = &["phh2o", "soc", "nitrogen", "clay", "sand"];

/// Depth layers the engine works with
const SOIL_DEPTHS: &[&str] = &["0-5cm", "5-15cm", "15-30cm"];

/// SoilGrids API client
#[derive(Clone)]
pub struct SoilGridsClient {
    client: Client,
    base_url: String,
}

/// SoilGrids properties query response
#[derive(Debug, Deserialize)]
struct SoilGridsResponse {
    properties: SoilGridsProperties,
}

#[derive(Debug, Deserialize)]
struct SoilGridsProperties {
    #[serde(default)]
    layers: Vec<SoilGridsLayer>,
}

#[derive(Debug, Deserialize)]
struct SoilGridsLayer {
    name: String,
    unit_measure: SoilGridsUnit,
    #[serde(default)]
    depths: Vec<SoilGridsDepth>,
}

#[derive(Debug, Deserialize)]
struct SoilGridsUnit {
    #[serde(default = "default_d_factor")]
    d_factor: f64,
}

fn default_d_factor() -> f64 {
    1.0
}

#[derive(Debug, Deserialize)]
struct SoilGridsDepth {
    label: String,
    values: SoilGridsValues,
}

#[derive(Debug, Deserialize)]
struct SoilGridsValues {
    mean: Option<f64>,
}

impl SoilGridsClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Fetch mean soil property values for a coordinate, per depth layer.
    /// Properties or layers the provider cannot supply are simply absent
    /// from the returned mapping.
    pub async fn fetch_properties(&self, coordinates: &GeoCoordinates) -> EngineResult<SoilData> {
        let mut query: Vec<(&str, String)> = vec![
            ("lat", coordinates.latitude.to_string()),
            ("lon", coordinates.longitude.to_string()),
            ("value", "mean".to_string()),
        ];
        for property in SOIL_PROPERTIES {
            query.push(("property", (*property).to_string()));
        }
        for depth in SOIL_DEPTHS {
            query.push(("depth", (*depth).to_string()));
        }

        let response = self
            .client
            .get(&self.base_url)
            .query(&query)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(EngineError::DataUnavailable(format!(
                "soil provider returned {}",
                response.status()
            )));
        }

        let data: SoilGridsResponse = response.json().await.map_err(|e| {
            EngineError::DataUnavailable(format!("failed to parse soil response: {e}"))
        })?;

        Ok(convert_response(data))
    }
}

/// Convert a SoilGrids response to the raw gateway shape, dividing each
/// mapped value by the layer's d_factor.
fn convert_response(data: SoilGridsResponse) -> SoilData {
    let mut soil = SoilData::new();
    for layer in data.properties.layers {
        let d_factor = if layer.unit_measure.d_factor > 0.0 {
            layer.unit_measure.d_factor
        } else {
            1.0
        };
        let values: BTreeMap<String, f64> = layer
            .depths
            .into_iter()
            .filter_map(|depth| depth.values.mean.map(|mean| (depth.label, mean / d_factor)))
            .collect();
        if !values.is_empty() {
            soil.insert(layer.name, SoilValue::Layered(values));
        }
    }
    soil
}
