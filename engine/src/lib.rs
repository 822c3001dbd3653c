//! Land potential analysis engine
//!
//! Estimates the economic potential of a land parcel under competing uses:
//! photovoltaic generation, wind generation, and agriculture. The pipeline
//! fetches soil and weather data for the parcel, runs the energy and
//! agriculture branches concurrently, and blends both revenues into a set
//! of land-use scenarios with a recommended best allocation.

pub mod config;
pub mod error;
pub mod external;
pub mod services;

pub use config::EngineConfig;
pub use error::{EngineError, EngineResult};
