use std::f64::consts::PI;

pub const EARTH_AXIAL_TILT: f64 = 23.44;
pub const DEGREES_PER_HOUR: f64 = 15.0;
pub const J2000: f64 = 2451545.0;
pub const SUNRISE_ALTITUDE: f64 = -0.83;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / PI)
}

pub fn normalize_angle(angle: f64) -> f64 {
    angle.rem_euclid(360.0)
}

// ── Sunrise equation ──

// `n` counts days since 2000-01-01, longitude is degrees east.
pub fn mean_solar_time(n: i64, longitude: f64) -> f64 {
    n as f64 - longitude / 360.0
}

pub fn solar_mean_anomaly_deg(mean_solar_time: f64) -> f64 {
    normalize_angle(357.5291 + 0.98560028 * mean_solar_time)
}

pub fn equation_of_center_deg(mean_anomaly_deg: f64) -> f64 {
    let m = deg_to_rad(mean_anomaly_deg);
    1.9148 * m.sin() + 0.0200 * (2.0 * m).sin() + 0.0003 * (3.0 * m).sin()
}

pub fn ecliptic_longitude_deg(mean_anomaly_deg: f64, center_deg: f64) -> f64 {
    normalize_angle(mean_anomaly_deg + center_deg + 180.0 + 102.9372)
}

/// Julian date of the solar transit (local true solar noon).
pub fn solar_transit(
    mean_solar_time: f64,
    mean_anomaly_deg: f64,
    ecliptic_longitude_deg: f64,
) -> f64 {
    let m = deg_to_rad(mean_anomaly_deg);
    let lambda = deg_to_rad(ecliptic_longitude_deg);
    J2000 + mean_solar_time + 0.0053 * m.sin() - 0.0069 * (2.0 * lambda).sin()
}

pub fn ecliptic_declination(ecliptic_longitude_deg: f64) -> f64 {
    (deg_to_rad(ecliptic_longitude_deg).sin() * deg_to_rad(EARTH_AXIAL_TILT).sin()).asin()
}

/// Cosine of the sunrise hour angle. Outside [-1, 1] the sun never crosses
/// the horizon that day.
pub fn cos_sunrise_hour_angle(latitude: f64, declination: f64) -> f64 {
    let phi = deg_to_rad(latitude);
    (deg_to_rad(SUNRISE_ALTITUDE).sin() - phi.sin() * declination.sin())
        / (phi.cos() * declination.cos())
}

// ── FAO-56 solar geometry ──

fn year_angle(day_of_year: u32) -> f64 {
    2.0 * PI * day_of_year as f64 / 365.0
}

// FAO-56 eq. 23
pub fn inverse_relative_distance(day_of_year: u32) -> f64 {
    1.0 + 0.033 * year_angle(day_of_year).cos()
}

// FAO-56 eq. 24
pub fn solar_declination(day_of_year: u32) -> f64 {
    0.409 * (year_angle(day_of_year) - 1.39).sin()
}

// FAO-56 eq. 32-33, hours
pub fn seasonal_correction(day_of_year: u32) -> f64 {
    let b = 2.0 * PI * (day_of_year as f64 - 81.0) / 364.0;
    0.1645 * (2.0 * b).sin() - 0.1255 * b.cos() - 0.025 * b.sin()
}

/// Solar time angle ω at a clock time, radians (FAO-56 eq. 31).
///
/// Both meridians are degrees west positive: `zone_meridian` is the centre
/// of the local time zone and `site_longitude` the measurement site.
pub fn solar_time_angle(
    clock_hours: f64,
    zone_meridian: f64,
    site_longitude: f64,
    seasonal_correction: f64,
) -> f64 {
    let solar_hours =
        clock_hours + 0.06667 * (zone_meridian - site_longitude) + seasonal_correction;
    PI / 12.0 * (solar_hours - 12.0)
}

/// Sunset hour angle ω_s, radians (FAO-56 eq. 25). Saturates at 0 and π
/// for polar night and polar day.
pub fn sunset_hour_angle(latitude: f64, declination: f64) -> f64 {
    let phi = deg_to_rad(latitude);
    (-phi.tan() * declination.tan()).clamp(-1.0, 1.0).acos()
}
