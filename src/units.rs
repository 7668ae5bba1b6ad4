//! Conversions from the units weather feeds report in.

use crate::types::WeatherObservation;

pub const METERS_PER_SECOND_PER_MPH: f64 = 0.44704;
pub const KILOPASCAL_PER_MILLIBAR: f64 = 0.1;

pub fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) * (5.0 / 9.0)
}

pub fn mph_to_meters_per_second(mph: f64) -> f64 {
    mph * METERS_PER_SECOND_PER_MPH
}

pub fn millibar_to_kilopascal(mbar: f64) -> f64 {
    mbar * KILOPASCAL_PER_MILLIBAR
}

pub fn percent_to_fraction(percent: f64) -> f64 {
    percent / 100.0
}

impl WeatherObservation {
    /// Build an observation from an imperial feed: °F, mph, percent
    /// humidity and millibars.
    pub fn from_imperial(
        temp_f: f64,
        temp_min_f: f64,
        temp_max_f: f64,
        wind_mph: f64,
        humidity_percent: f64,
        pressure_mbar: f64,
    ) -> Self {
        Self {
            air_temp: fahrenheit_to_celsius(temp_f),
            air_temp_min: fahrenheit_to_celsius(temp_min_f),
            air_temp_max: fahrenheit_to_celsius(temp_max_f),
            wind_speed: mph_to_meters_per_second(wind_mph),
            relative_humidity: percent_to_fraction(humidity_percent),
            pressure: millibar_to_kilopascal(pressure_mbar),
        }
    }
}
