//! Common geometry and time types used across the engine

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Geographic coordinates in decimal degrees
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeoCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Inclusive date range for an analysis
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TimeSpan {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl TimeSpan {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Number of days covered, inclusive of both endpoints
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// Parcel area normalized to both units at construction.
///
/// Both `area_m2` and `area_ha` are derived once; downstream code never
/// recomputes one from the other. Non-positive input normalizes to zero,
/// which every model treats as zero yield.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ParcelArea {
    area_m2: f64,
    area_ha: f64,
}

pub const SQUARE_METERS_PER_HECTARE: f64 = 10_000.0;

/// A land parcel under analysis
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Parcel {
    pub coordinates: GeoCoordinates,
    pub area: ParcelArea,
}

impl Parcel {
    pub fn new(coordinates: GeoCoordinates, area: ParcelArea) -> Self {
        Self { coordinates, area }
    }
}

impl ParcelArea {
    pub fn from_square_meters(area_m2: f64) -> Self {
        let area_m2 = area_m2.max(0.0);
        Self {
            area_m2,
            area_ha: area_m2 / SQUARE_METERS_PER_HECTARE,
        }
    }

    pub fn from_hectares(area_ha: f64) -> Self {
        let area_ha = area_ha.max(0.0);
        Self {
            area_m2: area_ha * SQUARE_METERS_PER_HECTARE,
            area_ha,
        }
    }

    pub fn area_m2(&self) -> f64 {
        self.area_m2
    }

    pub fn area_ha(&self) -> f64 {
        self.area_ha
    }

    pub fn is_zero(&self) -> bool {
        self.area_m2 <= 0.0
    }
}
