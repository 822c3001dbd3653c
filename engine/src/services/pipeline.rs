//! The analysis pipeline orchestrator
//!
//! Sequences the gateway, the two analysis branches and the optimizer into
//! one normalized result document. This is the only component allowed to
//! substitute defaults for a failed branch: after input validation passes,
//! a run always completes with a document, never an error.

use std::time::Duration;

use chrono::Utc;
use uuid::Uuid;

use shared::{
    validate_coordinates, validate_dc_voltage, validate_pv_config, validate_time_span,
    validate_wind_config, AgriRevenueResult, AnalysisDocument, CropRecommendation, EnergyReport,
    EnergyResult, GeoCoordinates, Parcel, PvConfig, SoilProfile, TimeSpan, WindConfig,
    ANALYSIS_SCHEMA_VERSION,
};

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::external::{with_timeout, WeatherSoilGateway};
use crate::services::{
    AgriRevenueEstimator, CropRecommender, EnergyEstimator, ScenarioOptimizer,
};

/// Orchestrates one land potential analysis
pub struct AnalysisPipeline<G> {
    gateway: G,
    energy: EnergyEstimator,
    crops: CropRecommender,
    agri: AgriRevenueEstimator,
    optimizer: ScenarioOptimizer,
    gateway_timeout: Duration,
    currency: String,
}

impl<G: WeatherSoilGateway> AnalysisPipeline<G> {
    pub fn new(config: &EngineConfig, gateway: G) -> Self {
        Self {
            gateway,
            energy: EnergyEstimator::new(config),
            crops: CropRecommender::new(),
            agri: AgriRevenueEstimator::new(config),
            optimizer: ScenarioOptimizer::new(config),
            gateway_timeout: Duration::from_secs(config.gateway.timeout_secs),
            currency: config.tariff.currency.clone(),
        }
    }

    /// Run the full analysis for a parcel over a time span.
    ///
    /// Inputs are validated before any stage runs; a `Validation` error
    /// here is the only way the pipeline fails. The energy branch and the
    /// soil branch run concurrently and each degrades independently to its
    /// zero/empty default on failure.
    pub async fn run(
        &self,
        parcel: &Parcel,
        time_span: &TimeSpan,
        pv_config: &PvConfig,
        wind_config: &WindConfig,
        dc_voltage: f64,
    ) -> EngineResult<AnalysisDocument> {
        validate_coordinates(&parcel.coordinates)
            .map_err(|e| EngineError::Validation(e.to_string()))?;
        validate_time_span(time_span).map_err(|e| EngineError::Validation(e.to_string()))?;
        validate_pv_config(pv_config).map_err(|e| EngineError::Validation(e.to_string()))?;
        validate_wind_config(wind_config).map_err(|e| EngineError::Validation(e.to_string()))?;
        validate_dc_voltage(dc_voltage).map_err(|e| EngineError::Validation(e.to_string()))?;

        tracing::info!(
            latitude = parcel.coordinates.latitude,
            longitude = parcel.coordinates.longitude,
            area_ha = parcel.area.area_ha(),
            days = time_span.days(),
            "starting land potential analysis"
        );

        // The two branches have no data dependency; the optimizer below is
        // the single synchronization point.
        let energy_branch = self.energy.estimate(
            &self.gateway,
            &parcel.coordinates,
            time_span,
            parcel.area.area_m2(),
            pv_config,
            wind_config,
            dc_voltage,
        );
        let agri_branch = self.agri_branch(&parcel.coordinates, parcel.area.area_ha());

        let (energy_outcome, (soil_data, crop_recommendations, agri_revenue)) =
            tokio::join!(energy_branch, agri_branch);

        let energy_result = match energy_outcome {
            Ok(result) => result,
            Err(err) => {
                tracing::warn!(stage = "energy", error = %err, "degrading to zero result");
                EnergyResult::zero()
            }
        };

        let mixed_analysis =
            self.optimizer
                .optimize(&energy_result, &agri_revenue, parcel.area.area_ha());

        Ok(AnalysisDocument {
            id: Uuid::new_v4(),
            schema_version: ANALYSIS_SCHEMA_VERSION,
            generated_at: Utc::now(),
            currency: self.currency.clone(),
            soil_data,
            crop_recommendations,
            energy_results: EnergyReport {
                energy: energy_result,
                agri_revenue,
                mixed_analysis,
            },
        })
    }

    /// Soil → crop → agricultural revenue branch. A gateway failure or
    /// timeout degrades to an empty profile; the downstream stages already
    /// map empty input to empty output, so this branch never fails.
    async fn agri_branch(
        &self,
        coordinates: &GeoCoordinates,
        area_ha: f64,
    ) -> (SoilProfile, Vec<CropRecommendation>, AgriRevenueResult) {
        let soil_data = match with_timeout(
            self.gateway_timeout,
            "soil",
            self.gateway.fetch_soil(coordinates),
        )
        .await
        {
            Ok(raw) => SoilProfile::from_raw(&raw),
            Err(err) => {
                tracing::warn!(stage = "soil", error = %err, "degrading to empty profile");
                SoilProfile::default()
            }
        };

        let crop_recommendations = self.crops.recommend(&soil_data);
        let agri_revenue = self.agri.estimate(&crop_recommendations, area_ha);

        (soil_data, crop_recommendations, agri_revenue)
    }
}
