//! Crop recommendations produced from a soil profile

use serde::{Deserialize, Serialize};

/// One crop ranked by how well the soil matches its tolerance ranges
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CropRecommendation {
    pub crop: String,
    /// Suitability score in [0, 1]
    pub suitability: f64,
    /// Expected yield in tonnes per hectare, scaled by suitability
    pub yield_factor: f64,
}
