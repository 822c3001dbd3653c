//! Shared types and models for the land potential analysis engine
//!
//! This crate contains the value records passed between pipeline stages:
//! parcel geometry, system configurations, weather and soil inputs, and the
//! result documents the engine produces.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
