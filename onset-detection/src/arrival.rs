use crate::error::ComputationError;
use serde::Serialize;
use sonus_common::{Real, SampleIndex, SampleRate, time_of_index};

/// A picked onset converted to elapsed time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrivalEstimate {
    pub index: SampleIndex,
    pub time_s: Real,
}

impl ArrivalEstimate {
    pub fn new(index: SampleIndex, sample_rate: SampleRate) -> Self {
        Self {
            index,
            time_s: time_of_index(index, sample_rate),
        }
    }
}

/// The externally consumed result of one analysis run.
///
/// `time_us` is rounded to 2 decimals and `speed_m_s` to 3 so repeated
/// runs compare stably; absent optionals are omitted from serialization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub measurements: usize,
    pub index: SampleIndex,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_us: Option<Real>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed_m_s: Option<Real>,
}

/// Assembles the analysis result from a picked onset.
///
/// The propagation speed is derived only when a sensor separation is
/// supplied; an onset at sample zero has no elapsed time to divide by and
/// surfaces as a [`ComputationError`] rather than an infinite speed.
pub fn assemble_report(
    measurements: usize,
    index: SampleIndex,
    sample_rate: SampleRate,
    sensor_distance: Option<Real>,
) -> Result<AnalysisReport, ComputationError> {
    let arrival = ArrivalEstimate::new(index, sample_rate);
    let time_us = arrival.time_s * 1e6;
    let time_us = time_us.is_finite().then(|| round_to(time_us, 2));

    let speed_m_s = sensor_distance
        .map(|distance| {
            if arrival.time_s > 0.0 {
                Ok(round_to(distance / arrival.time_s, 3))
            } else {
                Err(ComputationError::ZeroTimeOfArrival)
            }
        })
        .transpose()?;

    Ok(AnalysisReport {
        measurements,
        index,
        time_us,
        speed_m_s,
    })
}

fn round_to(value: Real, decimals: i32) -> Real {
    let factor = Real::powi(10.0, decimals);
    (value * factor).round() / factor
}
