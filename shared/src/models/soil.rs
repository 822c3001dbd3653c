//! Soil property profiles and the raw shapes providers return

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Raw soil data as returned by a provider: property name to either a
/// single scalar or a per-depth-layer mapping. May be empty or partial.
pub type SoilData = BTreeMap<String, SoilValue>;

/// One raw soil property value
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum SoilValue {
    Scalar(f64),
    Layered(BTreeMap<String, f64>),
}

/// Values for the three standard depth layers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SoilLayers {
    #[serde(rename = "0-5cm")]
    pub l0_5cm: f64,
    #[serde(rename = "5-15cm")]
    pub l5_15cm: f64,
    #[serde(rename = "15-30cm")]
    pub l15_30cm: f64,
}

impl SoilLayers {
    /// Broadcast a scalar value to all three layers
    pub fn broadcast(value: f64) -> Self {
        Self {
            l0_5cm: value,
            l5_15cm: value,
            l15_30cm: value,
        }
    }

    pub fn mean(&self) -> f64 {
        (self.l0_5cm + self.l5_15cm + self.l15_30cm) / 3.0
    }

    /// Build layers from a raw provider value. A layered mapping with gaps
    /// fills missing layers with the mean of the supplied ones; a mapping
    /// with no recognized layers yields `None`.
    pub fn from_value(value: &SoilValue) -> Option<Self> {
        match value {
            SoilValue::Scalar(v) => Some(Self::broadcast(*v)),
            SoilValue::Layered(map) => {
                let l0 = map.get("0-5cm").copied();
                let l5 = map.get("5-15cm").copied();
                let l15 = map.get("15-30cm").copied();
                let present: Vec<f64> = [l0, l5, l15].into_iter().flatten().collect();
                if present.is_empty() {
                    return None;
                }
                let fill = present.iter().sum::<f64>() / present.len() as f64;
                Some(Self {
                    l0_5cm: l0.unwrap_or(fill),
                    l5_15cm: l5.unwrap_or(fill),
                    l15_30cm: l15.unwrap_or(fill),
                })
            }
        }
    }
}

/// Normalized soil profile: every property carries all three depth layers
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SoilProfile {
    #[serde(flatten)]
    pub properties: BTreeMap<String, SoilLayers>,
}

impl SoilProfile {
    /// Normalize raw provider data, broadcasting scalars to all layers and
    /// dropping properties with no usable values.
    pub fn from_raw(raw: &SoilData) -> Self {
        let properties = raw
            .iter()
            .filter_map(|(name, value)| {
                SoilLayers::from_value(value).map(|layers| (name.clone(), layers))
            })
            .collect();
        Self { properties }
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Depth-averaged value of a property, if present
    pub fn mean_of(&self, property: &str) -> Option<f64> {
        self.properties.get(property).map(SoilLayers::mean)
    }
}
