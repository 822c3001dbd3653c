//! The single document an analysis run produces

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AgriRevenueResult, CropRecommendation, EnergyResult, MixedAnalysisResult, SoilProfile};

/// Current document schema version
pub const ANALYSIS_SCHEMA_VERSION: u32 = 1;

/// Energy section of the document. Agricultural revenue and the mixed
/// analysis are nested here deliberately so the whole analysis persists
/// as one blob; callers should treat it as a single versioned document,
/// not as independently queryable fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EnergyReport {
    #[serde(flatten)]
    pub energy: EnergyResult,
    #[serde(default)]
    pub agri_revenue: AgriRevenueResult,
    #[serde(default)]
    pub mixed_analysis: MixedAnalysisResult,
}

/// Normalized result of one pipeline run. Every section is present even
/// when its stage degraded to a zero/empty default.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisDocument {
    pub id: Uuid,
    pub schema_version: u32,
    pub generated_at: DateTime<Utc>,
    /// Display currency for every revenue figure in the document
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub soil_data: SoilProfile,
    #[serde(default)]
    pub crop_recommendations: Vec<CropRecommendation>,
    #[serde(default)]
    pub energy_results: EnergyReport,
}
