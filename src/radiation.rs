//! Radiation balance for one estimation period.
//!
//! All quantities are MJ m⁻² per period. R_a integrates the solar constant
//! over the period's solar time angles, so every downstream term inherits
//! the configured period length.

use std::f64::consts::PI;

use tracing::warn;

use crate::angles;
use crate::config::Coefficients;
use crate::error::DomainError;
use crate::types::{ClockPeriod, Location, PeriodConfig};

/// Solar constant G_sc, MJ m⁻² min⁻¹.
pub const SOLAR_CONSTANT: f64 = 0.0820;
/// Stefan-Boltzmann constant, MJ K⁻⁴ m⁻² day⁻¹.
pub const STEFAN_BOLTZMANN_DAILY: f64 = 4.903e-9;
/// Celsius to Kelvin offset of FAO-56 eq. 39, which tabulates σT⁴ with 273.16.
pub const KELVIN_OFFSET: f64 = 273.16;
const SECONDS_PER_DAY: f64 = 86_400.0;
const CLEAR_SKY_EPSILON: f64 = 1e-9;

/// Solar time angles (ω₁, ω₂) at the start and end of the period, clipped
/// to the sunlit arc [-ω_s, ω_s].
pub fn period_time_angles(
    location: &Location,
    period: &PeriodConfig,
    day_of_year: u32,
    clock: &ClockPeriod,
) -> (f64, f64) {
    let omega = angles::solar_time_angle(
        clock.mid,
        period.zone_meridian_west(),
        location.longitude_west(),
        angles::seasonal_correction(day_of_year),
    );
    let half_width = PI * period.period_hours() / 24.0;
    let omega_s =
        angles::sunset_hour_angle(location.latitude, angles::solar_declination(day_of_year));
    (
        (omega - half_width).clamp(-omega_s, omega_s),
        (omega + half_width).clamp(-omega_s, omega_s),
    )
}

/// Extraterrestrial radiation R_a for the period (FAO-56 eq. 28).
/// Zero while the sun is below the horizon.
pub fn extraterrestrial_radiation(
    location: &Location,
    period: &PeriodConfig,
    day_of_year: u32,
    clock: &ClockPeriod,
) -> f64 {
    let phi = angles::deg_to_rad(location.latitude);
    let delta = angles::solar_declination(day_of_year);
    let d_r = angles::inverse_relative_distance(day_of_year);
    let (omega_1, omega_2) = period_time_angles(location, period, day_of_year, clock);

    let r_a = (12.0 * 60.0 / PI)
        * SOLAR_CONSTANT
        * d_r
        * ((omega_2 - omega_1) * phi.sin() * delta.sin()
            + phi.cos() * delta.cos() * (omega_2.sin() - omega_1.sin()));
    // The integral over the sunlit arc is non-negative; drop rounding noise.
    r_a.max(0.0)
}

fn check_extraterrestrial(r_a: f64) -> Result<(), DomainError> {
    if !(r_a >= 0.0 && r_a.is_finite()) {
        return Err(DomainError::invalid(
            "extraterrestrial_radiation",
            r_a,
            "must be finite and non-negative",
        ));
    }
    Ok(())
}

/// R_s by the Angstrom formula.
pub fn solar_radiation(r_a: f64, coefficients: &Coefficients) -> Result<f64, DomainError> {
    check_extraterrestrial(r_a)?;
    let fraction =
        coefficients.angstrom_a + coefficients.angstrom_b * coefficients.relative_sunshine;
    Ok(fraction * r_a)
}

pub fn clear_sky_radiation(
    r_a: f64,
    elevation: f64,
    coefficients: &Coefficients,
) -> Result<f64, DomainError> {
    check_extraterrestrial(r_a)?;
    Ok((coefficients.clear_sky_a + coefficients.clear_sky_b * elevation) * r_a)
}

pub fn net_shortwave_radiation(r_s: f64, coefficients: &Coefficients) -> f64 {
    (1.0 - coefficients.albedo) * r_s
}

pub fn stefan_boltzmann_per_period(period_minutes: u32) -> f64 {
    STEFAN_BOLTZMANN_DAILY * (period_minutes as f64 * 60.0) / SECONDS_PER_DAY
}

/// R_s/R_so as it enters the cloudiness factor.
pub fn relative_shortwave(
    r_s: f64,
    r_so: f64,
    coefficients: &Coefficients,
) -> Result<f64, DomainError> {
    if r_so.abs() <= CLEAR_SKY_EPSILON {
        return match coefficients.night_radiation_ratio {
            Some(ratio) => {
                warn!(ratio, "clear-sky radiation is zero, using the night ratio");
                Ok(ratio)
            }
            None => Err(DomainError::UndefinedRatio {
                name: "solar/clear_sky radiation",
            }),
        };
    }
    let ratio = r_s / r_so;
    if coefficients.clamp_clear_sky_ratio && ratio > 1.0 {
        warn!(ratio, "solar radiation exceeds clear-sky radiation, clamping to 1");
        return Ok(1.0);
    }
    Ok(ratio)
}

fn check_period_temperature(name: &'static str, t: f64) -> Result<f64, DomainError> {
    if !t.is_finite() {
        return Err(DomainError::invalid(name, t, "must be finite"));
    }
    let kelvin = t + KELVIN_OFFSET;
    if kelvin <= 0.0 {
        return Err(DomainError::invalid(name, t, "below absolute zero"));
    }
    Ok(kelvin)
}

/// Net outgoing longwave radiation R_nl (FAO-56 eq. 39, per period).
/// Temperatures are the period's min and max in °C.
pub fn net_longwave_radiation(
    t_min: f64,
    t_max: f64,
    e_a: f64,
    r_s: f64,
    r_so: f64,
    period_minutes: u32,
    coefficients: &Coefficients,
) -> Result<f64, DomainError> {
    let t_min_k = check_period_temperature("air_temp_min", t_min)?;
    let t_max_k = check_period_temperature("air_temp_max", t_max)?;
    if t_min > t_max {
        return Err(DomainError::invalid(
            "air_temp_min",
            t_min,
            "exceeds the period maximum",
        ));
    }
    if !(e_a >= 0.0 && e_a.is_finite()) {
        return Err(DomainError::invalid(
            "actual_vapor_pressure",
            e_a,
            "must be finite and non-negative",
        ));
    }
    let ratio = relative_shortwave(r_s, r_so, coefficients)?;
    Ok(stefan_boltzmann_per_period(period_minutes)
        * ((t_max_k.powi(4) + t_min_k.powi(4)) / 2.0)
        * (0.34 - 0.14 * e_a.sqrt())
        * (1.35 * ratio - 0.35))
}

pub fn net_radiation(r_ns: f64, r_nl: f64) -> f64 {
    r_ns - r_nl
}
