//! Empirical coefficients of the FAO-56 sub-daily model.
//!
//! Defaults are the FAO-56 recommendations for the grass reference crop.
//! The struct deserializes with `#[serde(default)]`, so a host configuration
//! file only needs to name the values it overrides.

use serde::{Deserialize, Serialize};

/// FAO-56 eq. 11 leading coefficient, kPa.
pub const FAO56_SATURATION_COEFFICIENT: f64 = 0.6108;

/// Saturation coefficient of the legacy half-hourly estimator.
pub const LEGACY_SATURATION_COEFFICIENT: f64 = 0.6018;

/// What the aerodynamic term C_n/(x + 273) divides by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AerodynamicTemperature {
    /// Period mean air temperature in °C (FAO-56 eq. 53).
    #[default]
    MeanAir,
    /// Period length in minutes, as the legacy estimator computed it.
    PeriodLength,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Coefficients {
    pub angstrom_a: f64,
    pub angstrom_b: f64,
    /// n/N. Sub-daily periods have no separate sunshine record.
    pub relative_sunshine: f64,
    /// a_s' in R_so = (a_s' + b_s'·z)·R_a.
    pub clear_sky_a: f64,
    pub clear_sky_b: f64,
    pub albedo: f64,
    pub saturation_coefficient: f64,
    pub clamp_clear_sky_ratio: bool,
    /// R_s/R_so to use when R_so vanishes. `None` makes a zero R_so an error.
    pub night_radiation_ratio: Option<f64>,
    pub day_soil_flux_factor: f64,
    pub night_soil_flux_factor: f64,
    /// c_p, MJ kg⁻¹ °C⁻¹.
    pub specific_heat: f64,
    pub molecular_weight_ratio: f64,
    /// λ, MJ kg⁻¹.
    pub latent_heat: f64,
    /// C_n.
    pub aerodynamic_coefficient: f64,
    pub aerodynamic_temperature: AerodynamicTemperature,
}

impl Default for Coefficients {
    fn default() -> Self {
        Self {
            angstrom_a: 0.25,
            angstrom_b: 0.50,
            relative_sunshine: 1.0,
            clear_sky_a: 0.75,
            clear_sky_b: 2e-5,
            albedo: 0.23,
            saturation_coefficient: FAO56_SATURATION_COEFFICIENT,
            clamp_clear_sky_ratio: true,
            night_radiation_ratio: None,
            day_soil_flux_factor: 0.1,
            night_soil_flux_factor: 0.5,
            specific_heat: 1.1013e-3,
            molecular_weight_ratio: 0.622,
            latent_heat: 2.45,
            aerodynamic_coefficient: 37.0,
            aerodynamic_temperature: AerodynamicTemperature::MeanAir,
        }
    }
}

impl Coefficients {
    /// Defaults with the legacy saturation coefficient and aerodynamic
    /// denominator, for reproducing records made by the old estimator.
    pub fn legacy() -> Self {
        Self {
            saturation_coefficient: LEGACY_SATURATION_COEFFICIENT,
            aerodynamic_temperature: AerodynamicTemperature::PeriodLength,
            ..Self::default()
        }
    }

    /// C_n/(x + 273) with x picked by `aerodynamic_temperature`.
    pub fn aerodynamic_factor(&self, air_temp: f64, period_minutes: u32) -> f64 {
        let x = match self.aerodynamic_temperature {
            AerodynamicTemperature::MeanAir => air_temp,
            AerodynamicTemperature::PeriodLength => period_minutes as f64,
        };
        self.aerodynamic_coefficient / (x + 273.0)
    }
}
