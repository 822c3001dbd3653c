//! Photovoltaic and wind system configurations

use serde::{Deserialize, Serialize};

/// Photovoltaic array configuration. All fields are fractions in [0, 1].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PvConfig {
    /// Module conversion efficiency
    pub efficiency: f64,
    /// Performance ratio covering soiling, mismatch and wiring losses
    pub performance_ratio: f64,
    /// Fraction of the parcel covered by modules
    pub land_coverage: f64,
    /// Inverter and balance-of-system efficiency
    pub system_efficiency: f64,
}

impl Default for PvConfig {
    fn default() -> Self {
        Self {
            efficiency: 0.20,
            performance_ratio: 0.80,
            land_coverage: 0.70,
            system_efficiency: 0.95,
        }
    }
}

/// Wind turbine configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WindConfig {
    pub rated_power_kw: f64,
    pub rotor_diameter_m: f64,
    pub hub_height_m: f64,
    /// Below this hub-height wind speed the turbine produces nothing
    pub cut_in_ms: f64,
    /// At and above this speed (up to cut-out) the turbine produces rated power
    pub rated_ws_ms: f64,
    /// At and above this speed the turbine shuts down
    pub cut_out_ms: f64,
    /// Wind-shear exponent for the power-law profile
    pub alpha: f64,
    pub system_efficiency: f64,
}

impl Default for WindConfig {
    fn default() -> Self {
        Self {
            rated_power_kw: 250.0,
            rotor_diameter_m: 30.0,
            hub_height_m: 50.0,
            cut_in_ms: 3.0,
            rated_ws_ms: 12.0,
            cut_out_ms: 25.0,
            alpha: 0.14,
            system_efficiency: 0.90,
        }
    }
}
