use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A measurement site. Longitude is geographic: degrees east positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default = "default_elevation")]
    pub elevation: f64,
}

pub const DEFAULT_ELEVATION: f64 = 976.0;

fn default_elevation() -> f64 {
    DEFAULT_ELEVATION
}

impl Default for Location {
    fn default() -> Self {
        Self {
            latitude: 33.576698,
            longitude: -101.855072,
            elevation: DEFAULT_ELEVATION,
        }
    }
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            elevation: DEFAULT_ELEVATION,
        }
    }

    pub fn with_elevation(self, elevation: f64) -> Self {
        Self { elevation, ..self }
    }

    /// Longitude in the astronomical convention, degrees west positive.
    pub fn longitude_west(&self) -> f64 {
        -self.longitude
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(DomainError::invalid(
                "latitude",
                self.latitude,
                "must be within [-90, 90] degrees",
            ));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(DomainError::invalid(
                "longitude",
                self.longitude,
                "must be within [-180, 180] degrees",
            ));
        }
        if !self.elevation.is_finite() {
            return Err(DomainError::invalid(
                "elevation",
                self.elevation,
                "must be finite",
            ));
        }
        Ok(())
    }
}

/// Length and clock of the estimation periods.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodConfig {
    pub period_minutes: u32,
    /// Signed offset of local clock time from UTC, hours (US Central
    /// daylight time is -5).
    pub utc_offset_hours: f64,
    /// Centre meridian of the local time zone, degrees east positive.
    /// Defaults to 15° per hour of UTC offset.
    #[serde(default)]
    pub zone_meridian: Option<f64>,
}

impl Default for PeriodConfig {
    fn default() -> Self {
        Self {
            period_minutes: 30,
            utc_offset_hours: -5.0,
            zone_meridian: None,
        }
    }
}

impl PeriodConfig {
    pub fn new(period_minutes: u32, utc_offset_hours: f64) -> Self {
        Self {
            period_minutes,
            utc_offset_hours,
            zone_meridian: None,
        }
    }

    pub fn period_hours(&self) -> f64 {
        self.period_minutes as f64 / 60.0
    }

    pub fn period_seconds(&self) -> f64 {
        self.period_minutes as f64 * 60.0
    }

    /// Time-zone centre meridian, degrees west positive.
    pub fn zone_meridian_west(&self) -> f64 {
        -self
            .zone_meridian
            .unwrap_or(self.utc_offset_hours * crate::angles::DEGREES_PER_HOUR)
    }

    pub fn offset(&self) -> Result<FixedOffset, DomainError> {
        let seconds = (self.utc_offset_hours * 3600.0).round();
        if !seconds.is_finite() || seconds.abs() >= 86_400.0 {
            return Err(DomainError::invalid(
                "utc_offset_hours",
                self.utc_offset_hours,
                "must be strictly between -24 and 24 hours",
            ));
        }
        FixedOffset::east_opt(seconds as i32).ok_or_else(|| {
            DomainError::invalid(
                "utc_offset_hours",
                self.utc_offset_hours,
                "must be strictly between -24 and 24 hours",
            )
        })
    }
}

/// One period's weather. SI units: °C, m/s, fraction, kPa.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    pub air_temp: f64,
    pub air_temp_min: f64,
    pub air_temp_max: f64,
    pub wind_speed: f64,
    pub relative_humidity: f64,
    pub pressure: f64,
}

impl WeatherObservation {
    pub fn uniform(
        air_temp: f64,
        wind_speed: f64,
        relative_humidity: f64,
        pressure: f64,
    ) -> Self {
        Self {
            air_temp,
            air_temp_min: air_temp,
            air_temp_max: air_temp,
            wind_speed,
            relative_humidity,
            pressure,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClockPeriod {
    pub begin: f64,
    pub mid: f64,
    pub end: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SunTimes {
    pub sunrise: DateTime<FixedOffset>,
    pub solar_noon: DateTime<FixedOffset>,
    pub sunset: DateTime<FixedOffset>,
}

impl SunTimes {
    /// True only strictly between sunrise and sunset.
    pub fn is_daytime(&self, instant: &DateTime<FixedOffset>) -> bool {
        self.sunrise < *instant && *instant < self.sunset
    }

    pub fn day_length_hours(&self) -> f64 {
        (self.sunset - self.sunrise).num_seconds() as f64 / 3600.0
    }
}

/// Radiation terms in MJ m⁻² per period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadiationBundle {
    pub extraterrestrial: f64,
    pub solar: f64,
    pub clear_sky: f64,
    pub net_shortwave: f64,
    pub net_longwave: f64,
    pub net: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VaporPressureBundle {
    pub saturation: f64,
    pub slope: f64,
    pub actual: f64,
}

impl VaporPressureBundle {
    pub fn deficit(&self) -> f64 {
        self.saturation - self.actual
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EtoResult {
    pub reference_time: DateTime<FixedOffset>,
    pub day_of_year: u32,
    pub period: ClockPeriod,
    pub sun: SunTimes,
    pub is_daytime: bool,
    pub radiation: RadiationBundle,
    pub vapor: VaporPressureBundle,
    pub soil_heat_flux: f64,
    pub psychrometric: f64,
    /// mm per period
    pub eto: f64,
}
