//! Validation helpers for pipeline inputs
//!
//! The pipeline validates every input before any stage runs; these checks
//! are the fail-fast half of the error policy.

use crate::models::{PvConfig, WindConfig};
use crate::types::{GeoCoordinates, TimeSpan};

/// Validate coordinates are within valid degree ranges
pub fn validate_coordinates(coordinates: &GeoCoordinates) -> Result<(), &'static str> {
    if !coordinates.latitude.is_finite() || !coordinates.longitude.is_finite() {
        return Err("Coordinates must be finite numbers");
    }
    if coordinates.latitude < -90.0 || coordinates.latitude > 90.0 {
        return Err("Latitude must be between -90 and 90 degrees");
    }
    if coordinates.longitude < -180.0 || coordinates.longitude > 180.0 {
        return Err("Longitude must be between -180 and 180 degrees");
    }
    Ok(())
}

/// Validate a time span is ordered
pub fn validate_time_span(span: &TimeSpan) -> Result<(), &'static str> {
    if span.start > span.end {
        return Err("Time span start must not be after its end");
    }
    Ok(())
}

fn validate_fraction(value: f64, name: &'static str) -> Result<(), &'static str> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(name);
    }
    Ok(())
}

/// Validate all PV config fields are fractions in [0, 1]
pub fn validate_pv_config(config: &PvConfig) -> Result<(), &'static str> {
    validate_fraction(config.efficiency, "PV efficiency must be a fraction in [0, 1]")?;
    validate_fraction(
        config.performance_ratio,
        "PV performance ratio must be a fraction in [0, 1]",
    )?;
    validate_fraction(
        config.land_coverage,
        "PV land coverage must be a fraction in [0, 1]",
    )?;
    validate_fraction(
        config.system_efficiency,
        "PV system efficiency must be a fraction in [0, 1]",
    )?;
    Ok(())
}

/// Validate turbine geometry and the cut-in < rated < cut-out ordering
pub fn validate_wind_config(config: &WindConfig) -> Result<(), &'static str> {
    if config.rated_power_kw < 0.0 {
        return Err("Wind rated power cannot be negative");
    }
    if config.hub_height_m <= 0.0 {
        return Err("Wind hub height must be positive");
    }
    if config.rotor_diameter_m <= 0.0 {
        return Err("Wind rotor diameter must be positive");
    }
    if !(config.cut_in_ms < config.rated_ws_ms && config.rated_ws_ms < config.cut_out_ms) {
        return Err("Wind speeds must satisfy cut-in < rated < cut-out");
    }
    if config.cut_in_ms < 0.0 {
        return Err("Wind cut-in speed cannot be negative");
    }
    if config.alpha < 0.0 || config.alpha > 1.0 {
        return Err("Wind shear exponent must be in [0, 1]");
    }
    validate_fraction(
        config.system_efficiency,
        "Wind system efficiency must be a fraction in [0, 1]",
    )?;
    Ok(())
}

/// Validate the DC system voltage is positive
pub fn validate_dc_voltage(dc_voltage: f64) -> Result<(), &'static str> {
    if !dc_voltage.is_finite() || dc_voltage <= 0.0 {
        return Err("DC voltage must be positive");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn coordinates_in_range_pass() {
        assert!(validate_coordinates(&GeoCoordinates::new(12.97, 77.59)).is_ok());
        assert!(validate_coordinates(&GeoCoordinates::new(-90.0, 180.0)).is_ok());
    }

    #[test]
    fn coordinates_out_of_range_fail() {
        assert!(validate_coordinates(&GeoCoordinates::new(91.0, 0.0)).is_err());
        assert!(validate_coordinates(&GeoCoordinates::new(0.0, -181.0)).is_err());
        assert!(validate_coordinates(&GeoCoordinates::new(f64::NAN, 0.0)).is_err());
    }

    #[test]
    fn inverted_time_span_fails() {
        let span = TimeSpan::new(
            NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
            NaiveDate::from_ymd_opt(2023, 5, 1).unwrap(),
        );
        assert!(validate_time_span(&span).is_err());
    }

    #[test]
    fn single_day_span_passes() {
        let day = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
        assert!(validate_time_span(&TimeSpan::new(day, day)).is_ok());
    }

    #[test]
    fn default_configs_validate() {
        assert!(validate_pv_config(&PvConfig::default()).is_ok());
        assert!(validate_wind_config(&WindConfig::default()).is_ok());
    }

    #[test]
    fn pv_efficiency_above_one_fails() {
        let config = PvConfig {
            efficiency: 1.2,
            ..Default::default()
        };
        assert!(validate_pv_config(&config).is_err());
    }

    #[test]
    fn inverted_wind_thresholds_fail() {
        let config = WindConfig {
            cut_in_ms: 13.0,
            rated_ws_ms: 12.0,
            ..Default::default()
        };
        assert!(validate_wind_config(&config).is_err());

        let config = WindConfig {
            rated_ws_ms: 26.0,
            cut_out_ms: 25.0,
            ..Default::default()
        };
        assert!(validate_wind_config(&config).is_err());
    }

    #[test]
    fn dc_voltage_must_be_positive() {
        assert!(validate_dc_voltage(48.0).is_ok());
        assert!(validate_dc_voltage(0.0).is_err());
        assert!(validate_dc_voltage(-12.0).is_err());
    }
}
