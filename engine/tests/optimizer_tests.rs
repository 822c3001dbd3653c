//! Scenario grid evaluation and best-split selection

mod common;

use rust_decimal::Decimal;

use common::test_config;
use land_potential_engine::services::ScenarioOptimizer;
use shared::{AgriRevenueResult, EnergyResult};

fn energy_with_revenue(revenue: i64) -> EnergyResult {
    EnergyResult {
        total_revenue: Decimal::from(revenue),
        ..EnergyResult::zero()
    }
}

fn agri_with_revenue(revenue: i64) -> AgriRevenueResult {
    AgriRevenueResult {
        details: Vec::new(),
        aggregate_revenue: Decimal::from(revenue),
    }
}

#[test]
fn default_grid_blends_linearly() {
    let optimizer = ScenarioOptimizer::new(&test_config());
    let result = optimizer.optimize(&energy_with_revenue(1000), &agri_with_revenue(600), 10.0);

    assert_eq!(result.scenarios.len(), 5);

    let fractions: Vec<f64> = result.scenarios.iter().map(|s| s.energy_fraction).collect();
    assert_eq!(fractions, vec![0.0, 0.25, 0.5, 0.75, 1.0]);

    assert_eq!(result.scenarios[0].revenue, Decimal::from(600));
    assert_eq!(result.scenarios[1].revenue, Decimal::from(700));
    assert_eq!(result.scenarios[2].revenue, Decimal::from(800));
    assert_eq!(result.scenarios[3].revenue, Decimal::from(900));
    assert_eq!(result.scenarios[4].revenue, Decimal::from(1000));

    // Energy dominates, so the all-energy split wins
    assert_eq!(result.best_scenario.energy_fraction, 1.0);
    assert_eq!(result.best_scenario.agri_fraction, 0.0);
    assert_eq!(result.best_scenario.energy_area_ha, 10.0);
    assert_eq!(result.best_scenario.agri_area_ha, 0.0);
    assert_eq!(result.best_scenario.revenue, Decimal::from(1000));
}

#[test]
fn agri_dominant_picks_all_agri() {
    let optimizer = ScenarioOptimizer::new(&test_config());
    let result = optimizer.optimize(&energy_with_revenue(100), &agri_with_revenue(900), 4.0);

    assert_eq!(result.best_scenario.energy_fraction, 0.0);
    assert_eq!(result.best_scenario.agri_area_ha, 4.0);
    assert_eq!(result.best_scenario.revenue, Decimal::from(900));
}

#[test]
fn revenue_tie_prefers_the_balanced_split() {
    let optimizer = ScenarioOptimizer::new(&test_config());
    // Equal revenues make every scenario worth the same
    let result = optimizer.optimize(&energy_with_revenue(500), &agri_with_revenue(500), 10.0);

    assert!(result
        .scenarios
        .iter()
        .all(|s| s.revenue == Decimal::from(500)));
    assert_eq!(result.best_scenario.energy_fraction, 0.5);
}

#[test]
fn zero_revenues_default_to_the_balanced_split() {
    let optimizer = ScenarioOptimizer::new(&test_config());
    let result = optimizer.optimize(&energy_with_revenue(0), &agri_with_revenue(0), 10.0);

    assert_eq!(result.best_scenario.energy_fraction, 0.5);
    assert_eq!(result.best_scenario.revenue, Decimal::ZERO);
}

#[test]
fn custom_step_controls_grid_resolution() {
    let optimizer = ScenarioOptimizer::with_step(0.5);
    let result = optimizer.optimize(&energy_with_revenue(1000), &agri_with_revenue(0), 10.0);

    let fractions: Vec<f64> = result.scenarios.iter().map(|s| s.energy_fraction).collect();
    assert_eq!(fractions, vec![0.0, 0.5, 1.0]);
}

#[test]
fn invalid_step_falls_back_to_default_grid() {
    let optimizer = ScenarioOptimizer::with_step(0.0);
    let result = optimizer.optimize(&energy_with_revenue(1000), &agri_with_revenue(0), 10.0);
    assert_eq!(result.scenarios.len(), 5);

    let optimizer = ScenarioOptimizer::with_step(1.5);
    let result = optimizer.optimize(&energy_with_revenue(1000), &agri_with_revenue(0), 10.0);
    assert_eq!(result.scenarios.len(), 5);
}

#[test]
fn fractions_always_sum_to_one() {
    let optimizer = ScenarioOptimizer::with_step(0.2);
    let result = optimizer.optimize(&energy_with_revenue(300), &agri_with_revenue(200), 7.0);

    assert_eq!(result.scenarios.len(), 6);
    for scenario in &result.scenarios {
        assert!((scenario.energy_fraction + scenario.agri_fraction - 1.0).abs() < 1e-12);
        assert!((scenario.energy_area_ha + scenario.agri_area_ha - 7.0).abs() < 1e-9);
    }
}
