//! Weather time series consumed by the energy models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One timestamped weather sample
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WeatherRecord {
    pub timestamp: DateTime<Utc>,
    /// Global horizontal irradiance (W/m²)
    pub irradiance_w_m2: f64,
    /// Wind speed at the series reference height (m/s)
    pub wind_speed_ms: f64,
}

/// Ordered weather series for a coordinate and time span. May be empty or
/// have gaps; step durations are derived from consecutive timestamps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherSeries {
    /// Measurement height of the wind speed values (m)
    pub reference_height_m: f64,
    pub records: Vec<WeatherRecord>,
}

impl WeatherSeries {
    pub fn new(reference_height_m: f64, records: Vec<WeatherRecord>) -> Self {
        Self {
            reference_height_m,
            records,
        }
    }

    pub fn empty() -> Self {
        Self {
            reference_height_m: 10.0,
            records: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Duration of the step starting at `index`, in hours.
    ///
    /// The last record reuses the preceding step; a singleton series
    /// assumes one hour. Out-of-order timestamps clamp to zero so a
    /// malformed series cannot produce negative energy.
    pub fn step_hours(&self, index: usize) -> f64 {
        let n = self.records.len();
        if n < 2 {
            return 1.0;
        }
        let (a, b) = if index + 1 < n {
            (index, index + 1)
        } else {
            (n - 2, n - 1)
        };
        let seconds = (self.records[b].timestamp - self.records[a].timestamp).num_seconds();
        (seconds as f64 / 3600.0).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(hour: u32) -> WeatherRecord {
        WeatherRecord {
            timestamp: Utc.with_ymd_and_hms(2023, 6, 1, hour, 0, 0).unwrap(),
            irradiance_w_m2: 500.0,
            wind_speed_ms: 5.0,
        }
    }

    #[test]
    fn step_hours_from_consecutive_timestamps() {
        let series = WeatherSeries::new(10.0, vec![record(0), record(1), record(3)]);
        assert_eq!(series.step_hours(0), 1.0);
        assert_eq!(series.step_hours(1), 2.0);
        // Last record reuses the preceding step
        assert_eq!(series.step_hours(2), 2.0);
    }

    #[test]
    fn singleton_series_assumes_one_hour() {
        let series = WeatherSeries::new(10.0, vec![record(12)]);
        assert_eq!(series.step_hours(0), 1.0);
    }

    #[test]
    fn out_of_order_steps_clamp_to_zero() {
        let series = WeatherSeries::new(10.0, vec![record(5), record(2)]);
        assert_eq!(series.step_hours(0), 0.0);
    }
}
