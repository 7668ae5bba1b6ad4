//! Error types for the estimation pipeline.
//!
//! Stage functions fail with a [`DomainError`]; the combiner tags the failure
//! with the [`Stage`] it came from and returns an [`EstimateError`].

use std::fmt;

use chrono::NaiveDate;
use thiserror::Error;

/// Which way the sunrise equation breaks down near the poles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolarCondition {
    /// The sun stays above the horizon all day.
    PolarDay,
    /// The sun stays below the horizon all day.
    PolarNight,
}

impl fmt::Display for PolarCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolarCondition::PolarDay => f.write_str("polar day"),
            PolarCondition::PolarNight => f.write_str("polar night"),
        }
    }
}

/// An out-of-domain input or an undefined intermediate quantity.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("invalid input: {name} = {value} ({reason})")]
    InvalidInput {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("no sunrise/sunset at latitude {latitude} on {date} ({condition})")]
    NoSunriseSunset {
        latitude: f64,
        date: NaiveDate,
        condition: PolarCondition,
    },

    #[error("undefined ratio: {name} has a zero denominator")]
    UndefinedRatio { name: &'static str },
}

impl DomainError {
    pub fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidInput {
            name,
            value,
            reason,
        }
    }

    /// Attach the pipeline stage that produced this error.
    pub fn at(self, stage: Stage) -> EstimateError {
        EstimateError {
            stage,
            source: self,
        }
    }
}

/// The pipeline stages, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stage {
    ClockPeriod,
    SunPosition,
    ExtraterrestrialRadiation,
    SurfaceRadiation,
    VaporPressure,
    LongwaveRadiation,
    SoilHeatFlux,
    Psychrometric,
    Combination,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::ClockPeriod => "clock/period",
            Stage::SunPosition => "sun position",
            Stage::ExtraterrestrialRadiation => "extraterrestrial radiation",
            Stage::SurfaceRadiation => "surface radiation",
            Stage::VaporPressure => "vapor pressure",
            Stage::LongwaveRadiation => "longwave radiation",
            Stage::SoilHeatFlux => "soil heat flux",
            Stage::Psychrometric => "psychrometric constant",
            Stage::Combination => "ETo combination",
        };
        f.write_str(name)
    }
}

/// A failed estimation, tagged with the first stage that rejected its inputs.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{stage} stage failed: {source}")]
pub struct EstimateError {
    pub stage: Stage,
    #[source]
    pub source: DomainError,
}

impl EstimateError {
    pub fn kind(&self) -> &DomainError {
        &self.source
    }
}

pub(crate) trait AtStage<T> {
    fn at(self, stage: Stage) -> Result<T, EstimateError>;
}

impl<T> AtStage<T> for Result<T, DomainError> {
    fn at(self, stage: Stage) -> Result<T, EstimateError> {
        self.map_err(|e| e.at(stage))
    }
}
