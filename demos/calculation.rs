use chrono::{TimeZone, Utc};
use chrono_tz::America::Chicago;
use tracing_subscriber::EnvFilter;

use subdaily_eto::{
    clock_to_hm, daily_equivalent, Estimator, Location, PeriodConfig, WeatherObservation,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let location = Location::default();
    let period = PeriodConfig::default();
    let weather = WeatherObservation::uniform(33.0, 5.5, 0.42, 101.6);
    let observed_at = Chicago
        .with_ymd_and_hms(2020, 6, 21, 13, 4, 0)
        .unwrap()
        .with_timezone(&Utc);

    let result = match Estimator::new(location, period).estimate(&weather, observed_at) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("estimation failed: {}", e);
            std::process::exit(1);
        }
    };

    let (bh, bm) = clock_to_hm(result.period.begin);
    let (eh, em) = clock_to_hm(result.period.end);

    println!("=== Sub-daily ETo Example ===");
    println!(
        "Location: Lubbock, TX ({:.3}°N, {:.3}°W, {:.0} m)",
        location.latitude,
        location.longitude_west(),
        location.elevation
    );
    println!("Observed: {}", result.reference_time);
    println!("Period: {:02}:{:02}-{:02}:{:02}", bh, bm, eh, em);
    println!();
    println!("--- Sun ---");
    println!("Sunrise: {}", result.sun.sunrise.format("%H:%M"));
    println!("Solar noon: {}", result.sun.solar_noon.format("%H:%M"));
    println!("Sunset: {}", result.sun.sunset.format("%H:%M"));
    println!("Daytime: {}", result.is_daytime);
    println!();
    println!("--- Radiation (MJ m^-2 per period) ---");
    println!("R_a: {:.4}", result.radiation.extraterrestrial);
    println!("R_s: {:.4}", result.radiation.solar);
    println!("R_so: {:.4}", result.radiation.clear_sky);
    println!("R_ns: {:.4}", result.radiation.net_shortwave);
    println!("R_nl: {:.4}", result.radiation.net_longwave);
    println!("R_n: {:.4}", result.radiation.net);
    println!("G: {:.4}", result.soil_heat_flux);
    println!();
    println!("--- Atmosphere ---");
    println!("e°(T): {:.4} kPa", result.vapor.saturation);
    println!("Slope: {:.4} kPa/°C", result.vapor.slope);
    println!("e_a: {:.4} kPa", result.vapor.actual);
    println!("Psychrometric constant: {:.4} kPa/°C", result.psychrometric);
    println!();
    println!("ETo: {:.3} mm per {} min", result.eto, period.period_minutes);
    if let Ok(daily) = daily_equivalent(result.eto, period.period_minutes) {
        println!("ETo daily equivalent: {:.2} mm/day", daily);
    }
}
