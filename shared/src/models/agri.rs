//! Agricultural revenue estimates

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Revenue contribution of one recommended crop
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CropRevenueDetail {
    pub crop: String,
    /// Expected yield in tonnes per hectare
    pub yield_factor: f64,
    pub price_per_tonne: Decimal,
    pub revenue: Decimal,
}

/// Aggregate agricultural revenue for a parcel
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AgriRevenueResult {
    #[serde(default)]
    pub details: Vec<CropRevenueDetail>,
    #[serde(default)]
    pub aggregate_revenue: Decimal,
}

impl AgriRevenueResult {
    /// Fail-safe default when no crops are recommended
    pub fn empty() -> Self {
        Self::default()
    }
}
