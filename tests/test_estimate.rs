use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::America::Chicago;

use subdaily_eto::atmosphere::{psychrometric_constant, vapor_pressures};
use subdaily_eto::config::{AerodynamicTemperature, Coefficients};
use subdaily_eto::error::{DomainError, EstimateError, PolarCondition, Stage};
use subdaily_eto::eto::{combine, estimate, Estimator};
use subdaily_eto::radiation::{
    clear_sky_radiation, net_longwave_radiation, net_radiation, net_shortwave_radiation,
    solar_radiation,
};
use subdaily_eto::series::daily_equivalent;
use subdaily_eto::soil::soil_heat_flux;
use subdaily_eto::types::{EtoResult, Location, PeriodConfig, WeatherObservation};

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

fn lubbock_weather() -> WeatherObservation {
    WeatherObservation::uniform(33.0, 5.5, 0.42, 101.6)
}

/// 13:04 Central daylight time on the 2020 summer solstice.
fn solstice_afternoon() -> DateTime<Utc> {
    Chicago
        .with_ymd_and_hms(2020, 6, 21, 13, 4, 0)
        .unwrap()
        .with_timezone(&Utc)
}

fn solstice_night() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2020, 6, 21, 6, 15, 0).unwrap()
}

fn lubbock(
    weather: &WeatherObservation,
    reference_time: DateTime<Utc>,
) -> Result<EtoResult, EstimateError> {
    estimate(&Location::default(), &PeriodConfig::default(), weather, reference_time)
}

// ── End to end ──

#[test]
fn test_lubbock_reference_scenario() {
    let result = estimate(
        &Location::default(),
        &PeriodConfig::default(),
        &lubbock_weather(),
        solstice_afternoon(),
    )
    .unwrap();

    assert_eq!(result.day_of_year, 173);
    let p = result.period;
    assert_eq!((p.begin, p.mid, p.end), (13.0, 13.25, 13.5));
    assert!(result.is_daytime);

    assert_approx!(result.radiation.extraterrestrial, 2.32126, 1e-4);
    assert_approx!(result.radiation.solar, 1.74094, 1e-4);
    assert_approx!(result.radiation.clear_sky, 1.78625, 1e-4);
    assert_approx!(result.radiation.net_shortwave, 1.34053, 1e-4);
    assert_approx!(result.radiation.net_longwave, 0.118317, 1e-5);
    assert_approx!(result.radiation.net, 1.22221, 1e-4);
    assert_approx!(result.soil_heat_flux, 0.122221, 1e-5);
    assert_approx!(result.vapor.saturation, 5.030148, 1e-6);
    assert_approx!(result.vapor.slope, 0.282137, 1e-6);
    assert_approx!(result.vapor.actual, 2.112662, 1e-6);
    assert_approx!(result.psychrometric, 0.0734248, 1e-7);
    assert_approx!(result.eto, 0.54595, 1e-4);

    assert!(result.eto.is_finite() && result.eto > 0.0);
    let scaled = result.eto * 24.0;
    assert!(scaled > 1.0 && scaled < 20.0, "eto*24={}", scaled);
    assert_approx!(daily_equivalent(result.eto, 30).unwrap(), result.eto * 48.0, 1e-12);
}

#[test]
fn test_reference_time_reported_in_local_offset() {
    let result = estimate(
        &Location::default(),
        &PeriodConfig::default(),
        &lubbock_weather(),
        solstice_afternoon(),
    )
    .unwrap();
    assert_eq!(result.reference_time.offset().local_minus_utc(), -5 * 3600);
    assert_eq!(result.reference_time.to_rfc3339(), "2020-06-21T13:04:00-05:00");
    assert_eq!(result.sun.sunrise.offset().local_minus_utc(), -5 * 3600);
}

#[test]
fn test_components_recombine_to_same_eto() {
    let c = Coefficients::default();
    let loc = Location::default();
    let weather = lubbock_weather();
    let result = Estimator::new(loc, PeriodConfig::default())
        .estimate(&weather, solstice_afternoon())
        .unwrap();

    let r_a = result.radiation.extraterrestrial;
    let r_s = solar_radiation(r_a, &c).unwrap();
    let r_so = clear_sky_radiation(r_a, loc.elevation, &c).unwrap();
    let r_ns = net_shortwave_radiation(r_s, &c);
    let vapor = vapor_pressures(weather.air_temp, weather.relative_humidity, &c).unwrap();
    let r_nl = net_longwave_radiation(
        weather.air_temp_min,
        weather.air_temp_max,
        vapor.actual,
        r_s,
        r_so,
        30,
        &c,
    )
    .unwrap();
    let r_n = net_radiation(r_ns, r_nl);
    let g = soil_heat_flux(r_n, result.is_daytime, &c);
    let gamma = psychrometric_constant(weather.pressure, &c).unwrap();
    let eto = combine(r_n, g, &vapor, gamma, &weather, 30, &c).unwrap();

    assert_eq!(eto, result.eto);
    assert_eq!(vapor, result.vapor);
    assert_eq!(r_nl, result.radiation.net_longwave);
}

#[test]
fn test_repeated_calls_are_identical() {
    let estimator = Estimator::default();
    let first = estimator.estimate(&lubbock_weather(), solstice_afternoon()).unwrap();
    let _other = estimator
        .estimate(&WeatherObservation::uniform(10.0, 1.0, 0.9, 95.0), solstice_afternoon())
        .unwrap();
    let second = estimator.estimate(&lubbock_weather(), solstice_afternoon()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_soil_flux_factor_tracks_daytime() {
    let day = lubbock(&lubbock_weather(), solstice_afternoon()).unwrap();
    assert_approx!(day.soil_heat_flux, 0.1 * day.radiation.net, 1e-12);

    let estimator = Estimator::default().with_coefficients(Coefficients {
        night_radiation_ratio: Some(0.8),
        ..Coefficients::default()
    });
    let night = estimator.estimate(&lubbock_weather(), solstice_night()).unwrap();
    assert!(!night.is_daytime);
    assert_eq!(night.radiation.extraterrestrial, 0.0);
    assert_approx!(night.radiation.net, -0.0894338, 1e-6);
    assert_approx!(night.soil_heat_flux, 0.5 * night.radiation.net, 1e-12);
    assert_approx!(night.eto, 0.278601, 1e-5);
}

#[test]
fn test_hourly_period_spans_whole_hour() {
    let hourly = Estimator::new(Location::default(), PeriodConfig::new(60, -5.0))
        .estimate(&lubbock_weather(), solstice_afternoon())
        .unwrap();
    assert_eq!((hourly.period.begin, hourly.period.end), (13.0, 14.0));
    assert!(hourly.radiation.extraterrestrial > 1.9 * 2.32126 * 0.99);
}

// ── Aerodynamic term ──

#[test]
fn test_aerodynamic_term_uses_mean_air_temperature_by_default() {
    let c = Coefficients::default();
    assert_approx!(c.aerodynamic_factor(33.0, 30), 37.0 / 306.0, 1e-15);
    assert_approx!(c.aerodynamic_factor(33.0, 60), 37.0 / 306.0, 1e-15);
}

#[test]
fn test_aerodynamic_term_by_period_length() {
    let c = Coefficients {
        aerodynamic_temperature: AerodynamicTemperature::PeriodLength,
        ..Coefficients::default()
    };
    assert_approx!(c.aerodynamic_factor(33.0, 30), 37.0 / 303.0, 1e-15);
    assert_approx!(c.aerodynamic_factor(-5.0, 60), 37.0 / 333.0, 1e-15);

    let result = Estimator::default()
        .with_coefficients(c)
        .estimate(&lubbock_weather(), solstice_afternoon())
        .unwrap();
    assert_approx!(result.eto, 0.548816, 1e-4);
    assert_approx!(result.radiation.net, 1.22221, 1e-4);
}

#[test]
fn test_legacy_coefficients_use_period_length() {
    let legacy = Coefficients::legacy();
    assert_eq!(legacy.aerodynamic_temperature, AerodynamicTemperature::PeriodLength);
    let modern = lubbock(&lubbock_weather(), solstice_afternoon()).unwrap();
    let old = Estimator::default()
        .with_coefficients(legacy)
        .estimate(&lubbock_weather(), solstice_afternoon())
        .unwrap();
    assert!(old.vapor.saturation < modern.vapor.saturation);
    assert!(old.eto != modern.eto);
}

// ── Failures ──

#[test]
fn test_night_without_ratio_fails_in_longwave_stage() {
    let err = lubbock(&lubbock_weather(), solstice_night()).unwrap_err();
    assert_eq!(err.stage, Stage::LongwaveRadiation);
    assert!(matches!(err.source, DomainError::UndefinedRatio { .. }));
}

#[test]
fn test_humidity_out_of_range_fails_in_vapor_stage() {
    let weather = WeatherObservation::uniform(33.0, 5.5, 42.0, 101.6);
    let err = lubbock(&weather, solstice_afternoon()).unwrap_err();
    assert_eq!(err.stage, Stage::VaporPressure);
    assert!(matches!(
        err.kind(),
        DomainError::InvalidInput { name: "relative_humidity", .. }
    ));
    assert!(err.to_string().starts_with("vapor pressure stage failed"), "{}", err);
}

#[test]
fn test_non_finite_max_temperature_fails_in_longwave_stage() {
    for bad in [f64::NAN, f64::INFINITY] {
        let mut weather = lubbock_weather();
        weather.air_temp_max = bad;
        let err = lubbock(&weather, solstice_afternoon()).unwrap_err();
        assert_eq!(err.stage, Stage::LongwaveRadiation);
        assert!(matches!(
            err.source,
            DomainError::InvalidInput { name: "air_temp_max", .. }
        ));
    }
}

#[test]
fn test_non_finite_min_temperature_fails_in_longwave_stage() {
    let mut weather = lubbock_weather();
    weather.air_temp_min = f64::NEG_INFINITY;
    let err = lubbock(&weather, solstice_afternoon()).unwrap_err();
    assert_eq!(err.stage, Stage::LongwaveRadiation);
    assert!(matches!(
        err.source,
        DomainError::InvalidInput { name: "air_temp_min", .. }
    ));
}

#[test]
fn test_negative_wind_rejected() {
    let weather = WeatherObservation::uniform(33.0, -1.0, 0.42, 101.6);
    let err = lubbock(&weather, solstice_afternoon()).unwrap_err();
    assert_eq!(err.stage, Stage::Combination);
    assert!(matches!(err.source, DomainError::InvalidInput { name: "wind_speed", .. }));
}

#[test]
fn test_bad_pressure_fails_in_psychrometric_stage() {
    let weather = WeatherObservation::uniform(33.0, 5.5, 0.42, 0.0);
    let err = lubbock(&weather, solstice_afternoon()).unwrap_err();
    assert_eq!(err.stage, Stage::Psychrometric);
}

#[test]
fn test_unsupported_period_fails_in_clock_stage() {
    let err = estimate(
        &Location::default(),
        &PeriodConfig::new(45, -5.0),
        &lubbock_weather(),
        solstice_afternoon(),
    )
    .unwrap_err();
    assert_eq!(err.stage, Stage::ClockPeriod);
}

#[test]
fn test_polar_site_fails_in_sun_stage() {
    let loc = Location::new(80.0, 15.0);
    let period = PeriodConfig::new(30, 2.0);
    let err = estimate(&loc, &period, &lubbock_weather(), solstice_afternoon()).unwrap_err();
    assert_eq!(err.stage, Stage::SunPosition);
    assert!(matches!(
        err.source,
        DomainError::NoSunriseSunset {
            condition: PolarCondition::PolarDay,
            ..
        }
    ));
}

#[test]
fn test_invalid_latitude_rejected() {
    let loc = Location::new(95.0, 0.0);
    let period = PeriodConfig::default();
    let err = estimate(&loc, &period, &lubbock_weather(), solstice_afternoon()).unwrap_err();
    assert_eq!(err.stage, Stage::SunPosition);
    assert!(matches!(err.source, DomainError::InvalidInput { name: "latitude", .. }));
}

// ── Configuration ──

#[test]
fn test_coefficients_partial_override_from_json() {
    let json = r#"{"albedo": 0.2, "night_radiation_ratio": 0.7}"#;
    let c: Coefficients = serde_json::from_str(json).unwrap();
    assert_eq!(c.albedo, 0.2);
    assert_eq!(c.night_radiation_ratio, Some(0.7));
    assert_eq!(c.angstrom_a, 0.25);
    assert_eq!(c.clear_sky_b, 2e-5);
    assert!(c.clamp_clear_sky_ratio);
    assert_eq!(c.aerodynamic_temperature, AerodynamicTemperature::MeanAir);

    let legacy: Coefficients =
        serde_json::from_str(r#"{"aerodynamic_temperature": "period_length"}"#).unwrap();
    assert_eq!(legacy.aerodynamic_temperature, AerodynamicTemperature::PeriodLength);
}

#[test]
fn test_location_and_period_from_json() {
    let loc: Location = serde_json::from_str(r#"{"latitude": 33.5, "longitude": -101.9}"#).unwrap();
    assert_eq!(loc.elevation, 976.0);
    let json = r#"{"period_minutes": 15, "utc_offset_hours": -6.0}"#;
    let period: PeriodConfig = serde_json::from_str(json).unwrap();
    assert_eq!(period.zone_meridian, None);
    assert_eq!(period.zone_meridian_west(), 90.0);
}

#[test]
fn test_result_serializes() {
    let result = lubbock(&lubbock_weather(), solstice_afternoon()).unwrap();
    let json = serde_json::to_value(result).unwrap();
    assert!(json["radiation"]["extraterrestrial"].is_number());
    assert!(json["sun"]["sunrise"].is_string());
    assert_eq!(json["day_of_year"], 173);
}
