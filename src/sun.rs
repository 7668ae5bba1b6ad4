//! Sunrise, solar noon and sunset from the sunrise equation.
//!
//! The day count `n` is taken from the local calendar date, so the results
//! always describe that date. Instants are returned in the caller's offset.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Utc};

use crate::angles;
use crate::error::{DomainError, PolarCondition};
use crate::types::{Location, SunTimes};

/// `num_days_from_ce` of 2000-01-01.
const J2000_DAYS_FROM_CE: i64 = 730_120;
/// Julian date of the Unix epoch.
const UNIX_EPOCH_JULIAN: f64 = 2440587.5;
const SECONDS_PER_DAY: f64 = 86_400.0;

pub fn days_since_j2000(date: NaiveDate) -> i64 {
    date.num_days_from_ce() as i64 - J2000_DAYS_FROM_CE
}

pub fn julian_to_datetime(
    julian: f64,
    offset: &FixedOffset,
) -> Result<DateTime<FixedOffset>, DomainError> {
    let millis = ((julian - UNIX_EPOCH_JULIAN) * SECONDS_PER_DAY * 1000.0).round();
    if !millis.is_finite() {
        return Err(DomainError::invalid("julian_date", julian, "must be finite"));
    }
    DateTime::<Utc>::from_timestamp_millis(millis as i64)
        .map(|utc| utc.with_timezone(offset))
        .ok_or_else(|| {
            DomainError::invalid("julian_date", julian, "outside the representable calendar range")
        })
}

pub fn sun_times(
    location: &Location,
    date: NaiveDate,
    offset: &FixedOffset,
) -> Result<SunTimes, DomainError> {
    let j_mean = angles::mean_solar_time(days_since_j2000(date), location.longitude);
    let anomaly = angles::solar_mean_anomaly_deg(j_mean);
    let center = angles::equation_of_center_deg(anomaly);
    let ecliptic = angles::ecliptic_longitude_deg(anomaly, center);
    let transit = angles::solar_transit(j_mean, anomaly, ecliptic);
    let declination = angles::ecliptic_declination(ecliptic);

    let cos_omega = angles::cos_sunrise_hour_angle(location.latitude, declination);
    if !(-1.0..=1.0).contains(&cos_omega) {
        let condition = if cos_omega < -1.0 {
            PolarCondition::PolarDay
        } else {
            PolarCondition::PolarNight
        };
        return Err(DomainError::NoSunriseSunset {
            latitude: location.latitude,
            date,
            condition,
        });
    }
    let half_day = angles::rad_to_deg(cos_omega.acos()) / 360.0;

    Ok(SunTimes {
        sunrise: julian_to_datetime(transit - half_day, offset)?,
        solar_noon: julian_to_datetime(transit, offset)?,
        sunset: julian_to_datetime(transit + half_day, offset)?,
    })
}
