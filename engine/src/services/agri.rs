//! Agricultural revenue estimation from crop recommendations

use rust_decimal::Decimal;

use shared::{AgriRevenueResult, CropRecommendation, CropRevenueDetail};

use crate::config::EngineConfig;
use crate::services::crops;

/// Converts ranked crop recommendations into a parcel revenue estimate.
///
/// Policy: the aggregate sums the top-N recommended crops (N from config,
/// default 3). Land can be multi-cropped across a season, so a single-crop
/// aggregate would understate the parcel; an unbounded sum would overstate
/// it.
pub struct AgriRevenueEstimator {
    max_crops: usize,
}

impl AgriRevenueEstimator {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            max_crops: config.agri.max_crops,
        }
    }

    /// Estimate revenue for an area in hectares. Empty recommendations or
    /// a non-positive area yield an empty result; this stage never fails.
    pub fn estimate(
        &self,
        recommendations: &[CropRecommendation],
        area_ha: f64,
    ) -> AgriRevenueResult {
        if recommendations.is_empty() || area_ha <= 0.0 {
            return AgriRevenueResult::empty();
        }

        let details: Vec<CropRevenueDetail> = recommendations
            .iter()
            .take(self.max_crops)
            .filter_map(|recommendation| {
                let Some(price_per_tonne) = crops::price_for(&recommendation.crop) else {
                    tracing::debug!(crop = %recommendation.crop, "no reference price, skipping");
                    return None;
                };
                let tonnes = Decimal::from_f64_retain(recommendation.yield_factor * area_ha)
                    .unwrap_or_default();
                Some(CropRevenueDetail {
                    crop: recommendation.crop.clone(),
                    yield_factor: recommendation.yield_factor,
                    price_per_tonne,
                    revenue: tonnes * price_per_tonne,
                })
            })
            .collect();

        let aggregate_revenue = details.iter().map(|detail| detail.revenue).sum();

        AgriRevenueResult {
            details,
            aggregate_revenue,
        }
    }
}
