use sonus_common::Real;
use thiserror::Error;

/// The signal never met a picker's detection criterion.
#[derive(Debug, Error, PartialEq)]
pub enum DetectionError {
    #[error("No sample rises above threshold {threshold}")]
    ThresholdNotCrossed { threshold: Real },
}

/// A numeric result could not be derived.
#[derive(Debug, Error, PartialEq)]
pub enum ComputationError {
    #[error("Every candidate split scored NaN")]
    DegenerateScores,
    #[error("Time of arrival is zero, speed is undefined")]
    ZeroTimeOfArrival,
    #[error("Spectrum computation failed: {0}")]
    Fft(String),
}

/// Union of the failures a picker run can surface.
#[derive(Debug, Error, PartialEq)]
pub enum PickError {
    #[error(transparent)]
    Detection(#[from] DetectionError),
    #[error(transparent)]
    Computation(#[from] ComputationError),
}
