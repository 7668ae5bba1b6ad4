pub mod angles;
pub mod atmosphere;
pub mod config;
pub mod error;
pub mod eto;
pub mod period;
pub mod radiation;
pub mod series;
pub mod soil;
pub mod sun;
pub mod types;
pub mod units;

pub use atmosphere::{
    actual_vapor_pressure, atmospheric_pressure, psychrometric_constant, saturation_slope,
    saturation_vapor_pressure, vapor_pressures, wind_speed_at_2m,
};

pub use config::{
    AerodynamicTemperature, Coefficients, FAO56_SATURATION_COEFFICIENT,
    LEGACY_SATURATION_COEFFICIENT,
};

pub use error::{DomainError, EstimateError, PolarCondition, Stage};

pub use eto::{combine, estimate, estimate_now, Estimator};

pub use period::{clock_to_hm, hm_to_clock, resolve_period};

pub use radiation::{
    clear_sky_radiation, extraterrestrial_radiation, net_longwave_radiation, net_radiation,
    net_shortwave_radiation, solar_radiation,
};

pub use series::{
    cumulative_eto, cumulative_growing_degree_units, cumulative_sum, daily_equivalent,
    growing_degree_units, periods_per_day, TimedObservation,
};

pub use soil::soil_heat_flux;

pub use sun::sun_times;

pub use types::{
    ClockPeriod, EtoResult, Location, PeriodConfig, RadiationBundle, SunTimes,
    VaporPressureBundle, WeatherObservation,
};
