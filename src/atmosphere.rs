use crate::config::Coefficients;
use crate::error::DomainError;
use crate::types::VaporPressureBundle;

pub const TETENS_FLOOR: f64 = -237.3;

fn check_temperature(t: f64) -> Result<(), DomainError> {
    if !(t > TETENS_FLOOR && t.is_finite()) {
        return Err(DomainError::invalid(
            "air_temp",
            t,
            "must be finite and above -237.3 °C",
        ));
    }
    Ok(())
}

/// e°(T), kPa.
pub fn saturation_vapor_pressure(
    t: f64,
    coefficients: &Coefficients,
) -> Result<f64, DomainError> {
    check_temperature(t)?;
    Ok(coefficients.saturation_coefficient * ((17.27 * t) / (t + 237.3)).exp())
}

/// Δ from e°(T) at the same temperature.
pub fn saturation_slope(t: f64, e_sat: f64) -> Result<f64, DomainError> {
    check_temperature(t)?;
    Ok(4098.0 * e_sat / (t + 237.3).powi(2))
}

pub fn actual_vapor_pressure(e_sat: f64, relative_humidity: f64) -> Result<f64, DomainError> {
    if !(0.0..=1.0).contains(&relative_humidity) {
        return Err(DomainError::invalid(
            "relative_humidity",
            relative_humidity,
            "must be a fraction in [0, 1]",
        ));
    }
    Ok(e_sat * relative_humidity)
}

pub fn vapor_pressures(
    t: f64,
    relative_humidity: f64,
    coefficients: &Coefficients,
) -> Result<VaporPressureBundle, DomainError> {
    let saturation = saturation_vapor_pressure(t, coefficients)?;
    Ok(VaporPressureBundle {
        saturation,
        slope: saturation_slope(t, saturation)?,
        actual: actual_vapor_pressure(saturation, relative_humidity)?,
    })
}

/// γ, kPa °C⁻¹, for pressure in kPa.
pub fn psychrometric_constant(
    pressure: f64,
    coefficients: &Coefficients,
) -> Result<f64, DomainError> {
    if !(pressure > 0.0 && pressure.is_finite()) {
        return Err(DomainError::invalid(
            "pressure",
            pressure,
            "must be a finite, positive pressure in kPa",
        ));
    }
    let c = coefficients;
    Ok((c.specific_heat * pressure) / (c.molecular_weight_ratio * c.latent_heat))
}

/// Standard-atmosphere pressure at `elevation` metres, kPa (FAO-56 eq. 7).
pub fn atmospheric_pressure(elevation: f64) -> f64 {
    101.3 * ((293.0 - 0.0065 * elevation) / 293.0).powf(5.26)
}

/// Wind speed at 2 m from a reading `u_z` taken `height` metres above
/// ground (FAO-56 eq. 47).
pub fn wind_speed_at_2m(u_z: f64, height: f64) -> Result<f64, DomainError> {
    // ln(67.8 z - 5.42) must be positive
    if !(height > 6.42 / 67.8 && height.is_finite()) {
        return Err(DomainError::invalid(
            "measurement_height",
            height,
            "must be above 0.095 m",
        ));
    }
    Ok(u_z * 4.87 / (67.8 * height - 5.42).ln())
}
