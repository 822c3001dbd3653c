//! Energy yield results and the monthly breakdown normalization

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One normalized month of the breakdown. Every field is always present;
/// construction goes through [`MonthlyBucket::normalize`].
///
/// The combined value persists under the stable key `energy`, unlike the
/// top-level and per-source fields which carry the `_kwh` suffix.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MonthlyBucket {
    /// Month key in "YYYY-MM" form
    pub month: String,
    #[serde(rename = "energy")]
    pub energy_kwh: f64,
    pub revenue: Decimal,
    pub pv_energy_kwh: f64,
    pub wind_energy_kwh: f64,
}

/// Monthly bucket as it may arrive from an older document or a partial
/// producer: any numeric field can be missing, revenue may appear under
/// its legacy `revenue_inr` name, and the combined energy under a legacy
/// `energy_kwh` key.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RawMonthlyBucket {
    #[serde(default)]
    pub month: String,
    #[serde(default, rename = "energy", alias = "energy_kwh")]
    pub energy_kwh: Option<f64>,
    #[serde(default, alias = "revenue_inr")]
    pub revenue: Option<Decimal>,
    #[serde(default)]
    pub pv_energy_kwh: Option<f64>,
    #[serde(default)]
    pub wind_energy_kwh: Option<f64>,
}

impl MonthlyBucket {
    /// Pure defaulting step: missing PV/wind energies become zero, missing
    /// combined energy defaults to their sum, missing revenue to zero.
    /// Idempotent: normalizing an already-normalized bucket is a no-op.
    pub fn normalize(raw: RawMonthlyBucket) -> Self {
        let pv_energy_kwh = raw.pv_energy_kwh.unwrap_or(0.0);
        let wind_energy_kwh = raw.wind_energy_kwh.unwrap_or(0.0);
        Self {
            month: raw.month,
            energy_kwh: raw.energy_kwh.unwrap_or(pv_energy_kwh + wind_energy_kwh),
            revenue: raw.revenue.unwrap_or(Decimal::ZERO),
            pv_energy_kwh,
            wind_energy_kwh,
        }
    }
}

impl From<MonthlyBucket> for RawMonthlyBucket {
    fn from(bucket: MonthlyBucket) -> Self {
        Self {
            month: bucket.month,
            energy_kwh: Some(bucket.energy_kwh),
            revenue: Some(bucket.revenue),
            pv_energy_kwh: Some(bucket.pv_energy_kwh),
            wind_energy_kwh: Some(bucket.wind_energy_kwh),
        }
    }
}

/// One day of accumulated energy, used for the daily plot artifact
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DailyBucket {
    pub date: NaiveDate,
    pub energy_kwh: f64,
    pub pv_energy_kwh: f64,
    pub wind_energy_kwh: f64,
}

/// Renewable energy yield and revenue over the analysis span
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EnergyResult {
    #[serde(default)]
    pub total_energy_kwh: f64,
    #[serde(default)]
    pub pv_energy_kwh: f64,
    #[serde(default)]
    pub wind_energy_kwh: f64,
    #[serde(default)]
    pub total_revenue: Decimal,
    #[serde(default)]
    pub monthly_breakdown: Vec<MonthlyBucket>,
    /// Opaque base64-encoded plot artifacts, empty when not rendered
    #[serde(default)]
    pub hourly_plot: String,
    #[serde(default)]
    pub daily_plot: String,
}

impl EnergyResult {
    /// Fail-safe default returned when weather data is unavailable
    pub fn zero() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn normalize_fills_energy_from_pv_plus_wind() {
        let raw = RawMonthlyBucket {
            month: "2023-06".to_string(),
            pv_energy_kwh: Some(120.0),
            wind_energy_kwh: Some(30.0),
            ..Default::default()
        };
        let bucket = MonthlyBucket::normalize(raw);
        assert_eq!(bucket.energy_kwh, 150.0);
        assert_eq!(bucket.revenue, Decimal::ZERO);
    }

    #[test]
    fn normalize_keeps_supplied_energy() {
        let raw = RawMonthlyBucket {
            month: "2023-06".to_string(),
            energy_kwh: Some(99.0),
            pv_energy_kwh: Some(120.0),
            ..Default::default()
        };
        assert_eq!(MonthlyBucket::normalize(raw).energy_kwh, 99.0);
    }

    #[test]
    fn normalize_is_idempotent() {
        let raw = RawMonthlyBucket {
            month: "2023-06".to_string(),
            pv_energy_kwh: Some(120.0),
            wind_energy_kwh: Some(30.0),
            revenue: Some(Decimal::from(675)),
            ..Default::default()
        };
        let once = MonthlyBucket::normalize(raw);
        let twice = MonthlyBucket::normalize(once.clone().into());
        assert_eq!(once, twice);
    }

    #[test]
    fn legacy_revenue_key_is_accepted() {
        let raw: RawMonthlyBucket =
            serde_json::from_str(r#"{"month": "2023-06", "revenue_inr": "450"}"#).unwrap();
        let bucket = MonthlyBucket::normalize(raw);
        assert_eq!(bucket.revenue, Decimal::from(450));
    }

    #[test]
    fn bucket_persists_combined_value_under_the_energy_key() {
        let bucket = MonthlyBucket::normalize(RawMonthlyBucket {
            month: "2023-06".to_string(),
            pv_energy_kwh: Some(120.0),
            wind_energy_kwh: Some(30.0),
            revenue: Some(Decimal::from(675)),
            ..Default::default()
        });

        let value = serde_json::to_value(&bucket).unwrap();
        assert_eq!(value.get("energy").and_then(|v| v.as_f64()), Some(150.0));
        assert!(value.get("energy_kwh").is_none());
        assert!(value.get("pv_energy_kwh").is_some());
        assert!(value.get("wind_energy_kwh").is_some());
    }

    #[test]
    fn raw_bucket_reads_both_energy_key_spellings() {
        let current: RawMonthlyBucket =
            serde_json::from_str(r#"{"month": "2023-06", "energy": 150.0}"#).unwrap();
        assert_eq!(current.energy_kwh, Some(150.0));

        let legacy: RawMonthlyBucket =
            serde_json::from_str(r#"{"month": "2023-06", "energy_kwh": 150.0}"#).unwrap();
        assert_eq!(legacy.energy_kwh, Some(150.0));
    }

    #[test]
    fn zero_result_has_all_defaults() {
        let zero = EnergyResult::zero();
        assert_eq!(zero.total_energy_kwh, 0.0);
        assert_eq!(zero.total_revenue, Decimal::ZERO);
        assert!(zero.monthly_breakdown.is_empty());
        assert!(zero.hourly_plot.is_empty());
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent_for_any_partial_bucket(
            energy in proptest::option::of(0.0f64..1.0e6),
            pv in proptest::option::of(0.0f64..1.0e6),
            wind in proptest::option::of(0.0f64..1.0e6),
            revenue in proptest::option::of(0i64..1_000_000),
        ) {
            let raw = RawMonthlyBucket {
                month: "2023-06".to_string(),
                energy_kwh: energy,
                revenue: revenue.map(Decimal::from),
                pv_energy_kwh: pv,
                wind_energy_kwh: wind,
            };
            let once = MonthlyBucket::normalize(raw);
            let twice = MonthlyBucket::normalize(once.clone().into());
            prop_assert_eq!(once, twice);
        }
    }
}
