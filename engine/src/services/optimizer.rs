//! Land-use scenario search over a discrete allocation grid

use rust_decimal::Decimal;

use shared::{AgriRevenueResult, EnergyResult, MixedAnalysisResult, Scenario};

use crate::config::EngineConfig;

/// Blends energy and agricultural revenue over a grid of allocation
/// fractions and picks the revenue-maximizing split.
///
/// Scenario revenue assumes both revenues scale linearly with the area
/// share each use receives. That is a modelling assumption, not a physical
/// law; it ignores e.g. turbine spacing thresholds and per-crop minimum
/// plots.
pub struct ScenarioOptimizer {
    allocation_step: f64,
}

impl ScenarioOptimizer {
    pub fn new(config: &EngineConfig) -> Self {
        Self::with_step(config.optimizer.allocation_step)
    }

    /// A step outside (0, 1] falls back to the default 0.25 grid
    pub fn with_step(allocation_step: f64) -> Self {
        let allocation_step = if allocation_step > 0.0 && allocation_step <= 1.0 {
            allocation_step
        } else {
            0.25
        };
        Self { allocation_step }
    }

    /// Evaluate every grid fraction and select the best scenario.
    ///
    /// Tie-break on exact revenue ties: the scenario closest to the 0.5
    /// split wins, and of two equally close the smaller fraction wins.
    /// When both revenues are zero every scenario ties, so the best
    /// scenario defaults to the 0.5 split.
    pub fn optimize(
        &self,
        energy_result: &EnergyResult,
        agri_result: &AgriRevenueResult,
        area_ha: f64,
    ) -> MixedAnalysisResult {
        let steps = (1.0 / self.allocation_step).round().max(1.0) as usize;

        let scenarios: Vec<Scenario> = (0..=steps)
            .map(|i| {
                let energy_fraction = i as f64 / steps as f64;
                let agri_fraction = 1.0 - energy_fraction;
                let share = Decimal::from_f64_retain(energy_fraction).unwrap_or_default();
                let revenue = share * energy_result.total_revenue
                    + (Decimal::ONE - share) * agri_result.aggregate_revenue;
                Scenario {
                    energy_fraction,
                    agri_fraction,
                    energy_area_ha: energy_fraction * area_ha,
                    agri_area_ha: agri_fraction * area_ha,
                    revenue,
                }
            })
            .collect();

        let best_scenario = scenarios
            .iter()
            .min_by(|a, b| {
                b.revenue
                    .cmp(&a.revenue)
                    .then_with(|| {
                        distance_from_half(a)
                            .partial_cmp(&distance_from_half(b))
                            .unwrap_or(std::cmp::Ordering::Equal)
                    })
                    .then_with(|| {
                        a.energy_fraction
                            .partial_cmp(&b.energy_fraction)
                            .unwrap_or(std::cmp::Ordering::Equal)
                    })
            })
            .cloned()
            .unwrap_or_default();

        MixedAnalysisResult {
            scenarios,
            best_scenario,
        }
    }
}

fn distance_from_half(scenario: &Scenario) -> f64 {
    (scenario.energy_fraction - 0.5).abs()
}
