//! Photovoltaic and wind energy yield estimation

use std::collections::BTreeMap;
use std::time::Duration;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

use shared::{
    validate_dc_voltage, validate_pv_config, validate_wind_config, DailyBucket, EnergyResult,
    GeoCoordinates, MonthlyBucket, PvConfig, RawMonthlyBucket, TimeSpan, WindConfig,
};

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::external::{with_timeout, WeatherSoilGateway};
use crate::services::plots;

/// Instantaneous PV power for one weather sample, in watts.
///
/// Linear in area: the parcel share covered by modules collects the
/// irradiance, and every efficiency factor scales the result. A
/// non-positive area yields zero.
pub fn pv_step_power_w(config: &PvConfig, irradiance_w_m2: f64, area_m2: f64) -> f64 {
    if area_m2 <= 0.0 || irradiance_w_m2 <= 0.0 {
        return 0.0;
    }
    irradiance_w_m2
        * area_m2
        * config.land_coverage
        * config.efficiency
        * config.performance_ratio
        * config.system_efficiency
}

/// Extrapolate a reference-height wind speed to hub height with the
/// power-law wind profile.
pub fn hub_height_wind_speed(
    config: &WindConfig,
    reference_speed_ms: f64,
    reference_height_m: f64,
) -> f64 {
    reference_speed_ms * (config.hub_height_m / reference_height_m).powf(config.alpha)
}

/// Turbine output at a hub-height wind speed, in kilowatts, including
/// system efficiency.
///
/// Zero below cut-in and at or above cut-out (cut-out is exclusive on the
/// producing side), rated power on [rated, cut-out), linear interpolation
/// between cut-in and rated.
pub fn wind_power_kw(config: &WindConfig, hub_speed_ms: f64) -> f64 {
    if hub_speed_ms < config.cut_in_ms || hub_speed_ms >= config.cut_out_ms {
        return 0.0;
    }
    let raw_kw = if hub_speed_ms >= config.rated_ws_ms {
        config.rated_power_kw
    } else {
        config.rated_power_kw * (hub_speed_ms - config.cut_in_ms)
            / (config.rated_ws_ms - config.cut_in_ms)
    };
    raw_kw * config.system_efficiency
}

fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64_retain(value).unwrap_or_default()
}

/// Estimates renewable energy yield and revenue over a time span
pub struct EnergyEstimator {
    tariff_per_kwh: Decimal,
    gateway_timeout: Duration,
}

impl EnergyEstimator {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            tariff_per_kwh: to_decimal(config.tariff.rate_per_kwh),
            gateway_timeout: Duration::from_secs(config.gateway.timeout_secs),
        }
    }

    /// Estimate PV and wind yield for a parcel.
    ///
    /// Malformed configuration fails with a `Validation` error; a gateway
    /// failure, timeout or empty series fails with `DataUnavailable`. The
    /// pipeline downgrades the latter to `EnergyResult::zero()`.
    pub async fn estimate<G: WeatherSoilGateway>(
        &self,
        gateway: &G,
        coordinates: &GeoCoordinates,
        span: &TimeSpan,
        area_m2: f64,
        pv_config: &PvConfig,
        wind_config: &WindConfig,
        dc_voltage: f64,
    ) -> EngineResult<EnergyResult> {
        validate_pv_config(pv_config).map_err(|e| EngineError::Validation(e.to_string()))?;
        validate_wind_config(wind_config).map_err(|e| EngineError::Validation(e.to_string()))?;
        validate_dc_voltage(dc_voltage).map_err(|e| EngineError::Validation(e.to_string()))?;
        tracing::debug!(dc_voltage, area_m2, "starting energy estimation");

        let series = with_timeout(
            self.gateway_timeout,
            "weather",
            gateway.fetch_weather(coordinates, span),
        )
        .await?;

        if series.is_empty() {
            return Err(EngineError::DataUnavailable(
                "weather provider returned an empty series".to_string(),
            ));
        }
        if series.reference_height_m <= 0.0 {
            return Err(EngineError::Computation(
                "weather series has a non-positive reference height".to_string(),
            ));
        }

        let mut monthly: BTreeMap<String, (f64, f64)> = BTreeMap::new();
        let mut daily: BTreeMap<NaiveDate, (f64, f64)> = BTreeMap::new();
        let mut hourly_power: Vec<(DateTime<Utc>, f64)> = Vec::with_capacity(series.records.len());
        let mut pv_total_kwh = 0.0;
        let mut wind_total_kwh = 0.0;

        for (index, record) in series.records.iter().enumerate() {
            let step_hours = series.step_hours(index);

            let pv_kw = pv_step_power_w(pv_config, record.irradiance_w_m2, area_m2) / 1000.0;
            let hub_speed =
                hub_height_wind_speed(wind_config, record.wind_speed_ms, series.reference_height_m);
            let wind_kw = wind_power_kw(wind_config, hub_speed);

            let pv_kwh = pv_kw * step_hours;
            let wind_kwh = wind_kw * step_hours;
            pv_total_kwh += pv_kwh;
            wind_total_kwh += wind_kwh;

            let month = record.timestamp.format("%Y-%m").to_string();
            let month_entry = monthly.entry(month).or_insert((0.0, 0.0));
            month_entry.0 += pv_kwh;
            month_entry.1 += wind_kwh;

            let day_entry = daily
                .entry(record.timestamp.date_naive())
                .or_insert((0.0, 0.0));
            day_entry.0 += pv_kwh;
            day_entry.1 += wind_kwh;

            hourly_power.push((record.timestamp, pv_kw + wind_kw));
        }

        let monthly_breakdown: Vec<MonthlyBucket> = monthly
            .into_iter()
            .map(|(month, (pv_kwh, wind_kwh))| {
                MonthlyBucket::normalize(RawMonthlyBucket {
                    month,
                    energy_kwh: None,
                    revenue: Some(to_decimal(pv_kwh + wind_kwh) * self.tariff_per_kwh),
                    pv_energy_kwh: Some(pv_kwh),
                    wind_energy_kwh: Some(wind_kwh),
                })
            })
            .collect();

        let daily_buckets: Vec<DailyBucket> = daily
            .into_iter()
            .map(|(date, (pv_kwh, wind_kwh))| DailyBucket {
                date,
                energy_kwh: pv_kwh + wind_kwh,
                pv_energy_kwh: pv_kwh,
                wind_energy_kwh: wind_kwh,
            })
            .collect();

        let total_revenue = monthly_breakdown
            .iter()
            .map(|bucket| bucket.revenue)
            .sum::<Decimal>();

        tracing::info!(
            pv_kwh = pv_total_kwh,
            wind_kwh = wind_total_kwh,
            months = monthly_breakdown.len(),
            "energy estimation complete"
        );

        Ok(EnergyResult {
            total_energy_kwh: pv_total_kwh + wind_total_kwh,
            pv_energy_kwh: pv_total_kwh,
            wind_energy_kwh: wind_total_kwh,
            total_revenue,
            monthly_breakdown,
            hourly_plot: plots::render_hourly_plot(&hourly_power),
            daily_plot: plots::render_daily_plot(&daily_buckets),
        })
    }
}
