//! The ETo combiner: runs every stage in dependency order and assembles the
//! FAO-56 Penman-Monteith equation for one sub-daily period.
//!
//! The result is mm of water per configured period. See
//! [`crate::series::daily_equivalent`] for a daily-equivalent rate.

use chrono::{DateTime, Datelike, Utc};
use tracing::debug;

use crate::atmosphere;
use crate::config::Coefficients;
use crate::error::{AtStage, DomainError, EstimateError, Stage};
use crate::period;
use crate::radiation;
use crate::soil;
use crate::sun;
use crate::types::{
    EtoResult, Location, PeriodConfig, RadiationBundle, VaporPressureBundle, WeatherObservation,
};

/// Penman-Monteith combination for one period.
///
/// `net_radiation` and `soil_heat_flux` are MJ m⁻² per period. The weather
/// supplies the period mean air temperature and the wind speed at 2 m.
pub fn combine(
    net_radiation: f64,
    soil_heat_flux: f64,
    vapor: &VaporPressureBundle,
    psychrometric: f64,
    weather: &WeatherObservation,
    period_minutes: u32,
    coefficients: &Coefficients,
) -> Result<f64, DomainError> {
    let wind_speed = weather.wind_speed;
    if !(wind_speed >= 0.0 && wind_speed.is_finite()) {
        return Err(DomainError::invalid(
            "wind_speed",
            wind_speed,
            "must be a finite, non-negative speed",
        ));
    }
    let aerodynamic = coefficients.aerodynamic_factor(weather.air_temp, period_minutes);
    let numerator = 0.408 * vapor.slope * (net_radiation - soil_heat_flux)
        + psychrometric * aerodynamic * wind_speed * vapor.deficit();
    let denominator = vapor.slope + psychrometric * (1.0 + 0.34 * wind_speed);
    if denominator.abs() < f64::EPSILON {
        return Err(DomainError::UndefinedRatio {
            name: "Penman-Monteith denominator",
        });
    }
    Ok(numerator / denominator)
}

/// A configured estimator for one site.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Estimator {
    pub location: Location,
    pub period: PeriodConfig,
    pub coefficients: Coefficients,
}

impl Estimator {
    pub fn new(location: Location, period: PeriodConfig) -> Self {
        Self {
            location,
            period,
            coefficients: Coefficients::default(),
        }
    }

    pub fn with_coefficients(self, coefficients: Coefficients) -> Self {
        Self { coefficients, ..self }
    }

    /// Estimate ETo for the period containing `reference_time`.
    #[tracing::instrument(
        level = "debug",
        skip(self, weather),
        fields(latitude = self.location.latitude, longitude = self.location.longitude)
    )]
    pub fn estimate(
        &self,
        weather: &WeatherObservation,
        reference_time: DateTime<Utc>,
    ) -> Result<EtoResult, EstimateError> {
        let result = self.run(weather, reference_time);
        if let Err(e) = &result {
            debug!(stage = %e.stage, error = %e.source, "estimation failed");
        }
        result
    }

    pub fn estimate_now(&self, weather: &WeatherObservation) -> Result<EtoResult, EstimateError> {
        self.estimate(weather, Utc::now())
    }

    fn run(
        &self,
        weather: &WeatherObservation,
        reference_time: DateTime<Utc>,
    ) -> Result<EtoResult, EstimateError> {
        let c = &self.coefficients;

        self.location.validate().at(Stage::SunPosition)?;
        let offset = self.period.offset().at(Stage::ClockPeriod)?;
        let local = reference_time.with_timezone(&offset);

        let clock = period::resolve_period(&local, self.period.period_minutes)
            .at(Stage::ClockPeriod)?;
        debug!(begin = clock.begin, mid = clock.mid, end = clock.end, "period resolved");

        let sun = sun::sun_times(&self.location, local.date_naive(), &offset)
            .at(Stage::SunPosition)?;
        debug!(sunrise = %sun.sunrise, sunset = %sun.sunset, "sun times");

        let day_of_year = local.ordinal();
        let r_a = radiation::extraterrestrial_radiation(
            &self.location,
            &self.period,
            day_of_year,
            &clock,
        );
        debug!(r_a, day_of_year, "extraterrestrial radiation");

        let r_s = radiation::solar_radiation(r_a, c).at(Stage::SurfaceRadiation)?;
        let r_so = radiation::clear_sky_radiation(r_a, self.location.elevation, c)
            .at(Stage::SurfaceRadiation)?;
        let r_ns = radiation::net_shortwave_radiation(r_s, c);
        debug!(r_s, r_so, r_ns, "surface radiation");

        let vapor = atmosphere::vapor_pressures(weather.air_temp, weather.relative_humidity, c)
            .at(Stage::VaporPressure)?;
        debug!(
            saturation = vapor.saturation,
            slope = vapor.slope,
            actual = vapor.actual,
            "vapor pressure"
        );

        let r_nl = radiation::net_longwave_radiation(
            weather.air_temp_min,
            weather.air_temp_max,
            vapor.actual,
            r_s,
            r_so,
            self.period.period_minutes,
            c,
        )
        .at(Stage::LongwaveRadiation)?;
        let r_n = radiation::net_radiation(r_ns, r_nl);
        debug!(r_nl, r_n, "net radiation");

        let is_daytime = sun.is_daytime(&local);
        let g = soil::soil_heat_flux(r_n, is_daytime, c);
        debug!(g, is_daytime, "soil heat flux");

        let gamma =
            atmosphere::psychrometric_constant(weather.pressure, c).at(Stage::Psychrometric)?;
        debug!(gamma, "psychrometric constant");

        let eto = combine(r_n, g, &vapor, gamma, weather, self.period.period_minutes, c)
            .at(Stage::Combination)?;
        debug!(eto, "reference evapotranspiration");

        Ok(EtoResult {
            reference_time: local,
            day_of_year,
            period: clock,
            sun,
            is_daytime,
            radiation: RadiationBundle {
                extraterrestrial: r_a,
                solar: r_s,
                clear_sky: r_so,
                net_shortwave: r_ns,
                net_longwave: r_nl,
                net: r_n,
            },
            vapor,
            soil_heat_flux: g,
            psychrometric: gamma,
            eto,
        })
    }
}

/// Estimate with default coefficients.
pub fn estimate(
    location: &Location,
    period: &PeriodConfig,
    weather: &WeatherObservation,
    reference_time: DateTime<Utc>,
) -> Result<EtoResult, EstimateError> {
    Estimator::new(*location, *period).estimate(weather, reference_time)
}

/// [`estimate`] at the current system time.
pub fn estimate_now(
    location: &Location,
    period: &PeriodConfig,
    weather: &WeatherObservation,
) -> Result<EtoResult, EstimateError> {
    Estimator::new(*location, *period).estimate_now(weather)
}
