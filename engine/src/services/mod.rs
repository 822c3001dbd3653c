//! Analysis stages of the land potential pipeline

pub mod agri;
pub mod crops;
pub mod energy;
pub mod optimizer;
pub mod pipeline;
pub mod plots;

pub use agri::AgriRevenueEstimator;
pub use crops::CropRecommender;
pub use energy::{hub_height_wind_speed, pv_step_power_w, wind_power_kw, EnergyEstimator};
pub use optimizer::ScenarioOptimizer;
pub use pipeline::AnalysisPipeline;
