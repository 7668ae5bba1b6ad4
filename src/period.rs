//! Clock/period resolver.
//!
//! Maps an observation instant to the begin, midpoint and end of the
//! estimation period that contains it, as fractional clock hours. With the
//! default 30-minute period an observation at 12:04 belongs to the
//! 12:00-12:30 period (midpoint 12.25) and one at 12:41 to 12:30-13:00
//! (midpoint 12.75).

use chrono::Timelike;

use crate::error::DomainError;
use crate::types::ClockPeriod;

pub fn validate_period_minutes(period_minutes: u32) -> Result<(), DomainError> {
    if period_minutes == 0 || period_minutes > 60 || 60 % period_minutes != 0 {
        return Err(DomainError::invalid(
            "period_minutes",
            period_minutes as f64,
            "must evenly divide an hour",
        ));
    }
    Ok(())
}

/// Resolve the period containing a local clock time.
pub fn resolve_period<T: Timelike>(
    local: &T,
    period_minutes: u32,
) -> Result<ClockPeriod, DomainError> {
    validate_period_minutes(period_minutes)?;
    // Work in whole minutes past the hour so bounds land on exact clock values.
    let start_minute = (local.minute() / period_minutes * period_minutes) as f64;
    let length = period_minutes as f64;
    let hour = local.hour() as f64;
    Ok(ClockPeriod {
        begin: hour + start_minute / 60.0,
        mid: hour + (start_minute + length / 2.0) / 60.0,
        end: hour + (start_minute + length) / 60.0,
    })
}

pub fn clock_to_hm(clock_hours: f64) -> (u32, u32) {
    let total_minutes = (clock_hours * 60.0).round().max(0.0) as u32;
    (total_minutes / 60, total_minutes % 60)
}

pub fn hm_to_clock(time: (u32, u32)) -> f64 {
    time.0 as f64 + time.1 as f64 / 60.0
}
