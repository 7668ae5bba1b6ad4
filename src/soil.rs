use chrono::{DateTime, FixedOffset};

use crate::config::Coefficients;
use crate::types::SunTimes;

pub fn soil_heat_flux(r_n: f64, is_daytime: bool, coefficients: &Coefficients) -> f64 {
    let factor = if is_daytime {
        coefficients.day_soil_flux_factor
    } else {
        coefficients.night_soil_flux_factor
    };
    factor * r_n
}

pub fn soil_heat_flux_at(
    r_n: f64,
    sun: &SunTimes,
    instant: &DateTime<FixedOffset>,
    coefficients: &Coefficients,
) -> f64 {
    soil_heat_flux(r_n, sun.is_daytime(instant), coefficients)
}
