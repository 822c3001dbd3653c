//! Land-use allocation scenarios

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One candidate split of the parcel between energy generation and
/// agriculture. `energy_fraction + agri_fraction = 1`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    pub energy_fraction: f64,
    pub agri_fraction: f64,
    pub energy_area_ha: f64,
    pub agri_area_ha: f64,
    pub revenue: Decimal,
}

/// All evaluated scenarios plus the revenue-maximizing one
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MixedAnalysisResult {
    #[serde(default)]
    pub scenarios: Vec<Scenario>,
    #[serde(default)]
    pub best_scenario: Scenario,
}
