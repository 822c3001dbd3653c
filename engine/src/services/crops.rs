//! Rule-based crop recommendation from soil properties

use std::cmp::Ordering;

use rust_decimal::Decimal;

use shared::{CropRecommendation, SoilProfile};

/// Tolerance range for one soil property, in engine units
/// (pH for phh2o, g/kg for soc and nitrogen, percent for clay and sand)
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    pub property: &'static str,
    pub min: f64,
    pub max: f64,
}

const fn tol(property: &'static str, min: f64, max: f64) -> Tolerance {
    Tolerance { property, min, max }
}

/// One crop in the reference catalog
#[derive(Debug, Clone, Copy)]
pub struct CropProfile {
    pub name: &'static str,
    pub tolerances: &'static [Tolerance],
    /// Reference yield at full suitability, tonnes per hectare
    pub base_yield_t_ha: f64,
    /// Market price per tonne, from the reference table
    pub price_per_tonne: u64,
}

/// Fixed reference catalog. Order matters: score ties keep catalog order.
pub const CROP_CATALOG: &[CropProfile] = &[
    CropProfile {
        name: "wheat",
        tolerances: &[
            tol("phh2o", 6.0, 7.5),
            tol("soc", 5.0, 20.0),
            tol("nitrogen", 0.5, 2.5),
            tol("clay", 20.0, 35.0),
            tol("sand", 20.0, 45.0),
        ],
        base_yield_t_ha: 3.2,
        price_per_tonne: 21_250,
    },
    CropProfile {
        name: "rice",
        tolerances: &[
            tol("phh2o", 5.5, 7.0),
            tol("soc", 8.0, 25.0),
            tol("nitrogen", 0.8, 3.0),
            tol("clay", 25.0, 50.0),
            tol("sand", 10.0, 35.0),
        ],
        base_yield_t_ha: 3.8,
        price_per_tonne: 20_400,
    },
    CropProfile {
        name: "maize",
        tolerances: &[
            tol("phh2o", 5.8, 7.2),
            tol("soc", 6.0, 22.0),
            tol("nitrogen", 0.6, 2.8),
            tol("clay", 15.0, 35.0),
            tol("sand", 25.0, 55.0),
        ],
        base_yield_t_ha: 3.0,
        price_per_tonne: 19_620,
    },
    CropProfile {
        name: "soybean",
        tolerances: &[
            tol("phh2o", 6.0, 7.5),
            tol("soc", 6.0, 20.0),
            tol("nitrogen", 0.4, 2.0),
            tol("clay", 15.0, 30.0),
            tol("sand", 25.0, 50.0),
        ],
        base_yield_t_ha: 1.2,
        price_per_tonne: 43_000,
    },
    CropProfile {
        name: "cotton",
        tolerances: &[
            tol("phh2o", 6.0, 8.0),
            tol("soc", 4.0, 15.0),
            tol("nitrogen", 0.4, 2.0),
            tol("clay", 20.0, 40.0),
            tol("sand", 20.0, 50.0),
        ],
        base_yield_t_ha: 1.6,
        price_per_tonne: 60_800,
    },
    CropProfile {
        name: "sugarcane",
        tolerances: &[
            tol("phh2o", 6.0, 7.8),
            tol("soc", 8.0, 30.0),
            tol("nitrogen", 0.8, 3.5),
            tol("clay", 25.0, 45.0),
            tol("sand", 15.0, 40.0),
        ],
        base_yield_t_ha: 70.0,
        price_per_tonne: 3_050,
    },
    CropProfile {
        name: "mustard",
        tolerances: &[
            tol("phh2o", 6.0, 7.5),
            tol("soc", 4.0, 18.0),
            tol("nitrogen", 0.4, 2.2),
            tol("clay", 15.0, 35.0),
            tol("sand", 25.0, 55.0),
        ],
        base_yield_t_ha: 1.3,
        price_per_tonne: 54_500,
    },
    CropProfile {
        name: "chickpea",
        tolerances: &[
            tol("phh2o", 6.0, 8.0),
            tol("soc", 4.0, 16.0),
            tol("nitrogen", 0.3, 1.8),
            tol("clay", 15.0, 35.0),
            tol("sand", 30.0, 60.0),
        ],
        base_yield_t_ha: 1.0,
        price_per_tonne: 53_500,
    },
];

/// Market price per tonne for a catalog crop
pub fn price_for(crop: &str) -> Option<Decimal> {
    CROP_CATALOG
        .iter()
        .find(|profile| profile.name == crop)
        .map(|profile| Decimal::from(profile.price_per_tonne))
}

/// Score of one property value against a tolerance range: 1.0 inside the
/// range, linear falloff outside over half the range width, clamped at 0.
fn range_score(value: f64, min: f64, max: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    if value >= min && value <= max {
        return 1.0;
    }
    let falloff = (max - min) / 2.0;
    if falloff <= 0.0 {
        return 0.0;
    }
    let distance = if value < min { min - value } else { value - max };
    (1.0 - distance / falloff).max(0.0)
}

/// Ranks catalog crops by how well a soil profile matches their tolerances
#[derive(Debug, Clone, Copy, Default)]
pub struct CropRecommender;

impl CropRecommender {
    pub fn new() -> Self {
        Self
    }

    /// Rank crops by suitability, descending. Properties absent from the
    /// profile are skipped; a crop with no overlapping properties, or a
    /// zero score, is dropped. An empty profile yields an empty list. This
    /// stage is pure and infallible, so it can never block the pipeline.
    pub fn recommend(&self, profile: &SoilProfile) -> Vec<CropRecommendation> {
        if profile.is_empty() {
            return Vec::new();
        }

        let mut recommendations: Vec<CropRecommendation> = CROP_CATALOG
            .iter()
            .filter_map(|crop| {
                let suitability = Self::suitability(crop, profile)?;
                if suitability <= 0.0 {
                    return None;
                }
                Some(CropRecommendation {
                    crop: crop.name.to_string(),
                    suitability,
                    yield_factor: crop.base_yield_t_ha * suitability,
                })
            })
            .collect();

        // Stable sort keeps catalog order for exact score ties
        recommendations.sort_by(|a, b| {
            b.suitability
                .partial_cmp(&a.suitability)
                .unwrap_or(Ordering::Equal)
        });
        recommendations
    }

    /// Mean range score over the properties present in both the profile
    /// and the crop's tolerance list; `None` when nothing overlaps.
    fn suitability(crop: &CropProfile, profile: &SoilProfile) -> Option<f64> {
        let mut total = 0.0;
        let mut count = 0usize;
        for tolerance in crop.tolerances {
            if let Some(value) = profile.mean_of(tolerance.property) {
                total += range_score(value, tolerance.min, tolerance.max);
                count += 1;
            }
        }
        if count == 0 {
            None
        } else {
            Some(total / count as f64)
        }
    }
}
