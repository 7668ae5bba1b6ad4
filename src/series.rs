//! Batch estimation over an observation time series, plus the running sums
//! a host charts alongside it (cumulative ETo, growing degree units).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, EstimateError};
use crate::eto::Estimator;
use crate::period::validate_period_minutes;
use crate::types::{EtoResult, WeatherObservation};

/// Base temperature for cotton growing degree units, °C (60 °F).
pub const COTTON_BASE_TEMPERATURE: f64 = 15.6;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimedObservation {
    pub observed_at: DateTime<Utc>,
    pub weather: WeatherObservation,
}

pub fn periods_per_day(period_minutes: u32) -> Result<u32, DomainError> {
    validate_period_minutes(period_minutes)?;
    Ok(1440 / period_minutes)
}

/// Scale a per-period ETo to mm/day.
pub fn daily_equivalent(eto: f64, period_minutes: u32) -> Result<f64, DomainError> {
    Ok(eto * periods_per_day(period_minutes)? as f64)
}

impl Estimator {
    /// Estimate every observation independently. The output keeps the
    /// input order; a failed element does not stop the others.
    pub fn estimate_series(
        &self,
        observations: &[TimedObservation],
    ) -> Vec<Result<EtoResult, EstimateError>> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            observations
                .par_iter()
                .map(|obs| self.estimate(&obs.weather, obs.observed_at))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            observations
                .iter()
                .map(|obs| self.estimate(&obs.weather, obs.observed_at))
                .collect()
        }
    }
}

/// Running total, left to right.
pub fn cumulative_sum<I: IntoIterator<Item = f64>>(values: I) -> Vec<f64> {
    values
        .into_iter()
        .scan(0.0, |total, v| {
            *total += v;
            Some(*total)
        })
        .collect()
}

/// Cumulative ETo over a series, counting failed estimates as zero.
pub fn cumulative_eto(results: &[Result<EtoResult, EstimateError>]) -> Vec<f64> {
    cumulative_sum(results.iter().map(|r| r.as_ref().map_or(0.0, |ok| ok.eto)))
}

/// Growing degree units accrued in one period: the daily mean-temperature
/// excess over `base`, prorated by the period's share of a day.
pub fn growing_degree_units(weather: &WeatherObservation, base: f64, period_minutes: u32) -> f64 {
    let mean = (weather.air_temp_min + weather.air_temp_max) / 2.0;
    (mean - base).max(0.0) * period_minutes as f64 / 1440.0
}

pub fn cumulative_growing_degree_units(
    observations: &[TimedObservation],
    base: f64,
    period_minutes: u32,
) -> Vec<f64> {
    cumulative_sum(
        observations
            .iter()
            .map(|obs| growing_degree_units(&obs.weather, base, period_minutes)),
    )
}
