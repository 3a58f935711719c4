//! The three interchangeable onset pickers.
//!
//! Each picker consumes the averaged waveform and emits a [`Detection`]:
//! the full per-sample score (or indicator) curve together with the index
//! of the picked onset. Pickers are pure functions of their input, so
//! repeated runs over the same waveform produce identical detections.

pub mod aic;
pub mod hinkley;
pub mod threshold;

use crate::error::PickError;
use sonus_common::{Real, SampleIndex};
use tracing::debug;

pub const DEFAULT_HINKLEY_ALPHA: Real = 5.0;
pub const DEFAULT_THRESHOLD: Real = 1e-5;

/// Score curve and chosen onset of one picker run.
///
/// The curve shares the index space of the input waveform; the index is
/// always a valid position into it.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    pub curve: Vec<Real>,
    pub index: SampleIndex,
}

/// Onset picking strategy, selected by configuration.
///
/// Hinkley and aic are changepoint statistics robust to the noise floor;
/// threshold is fast and interpretable but noise-sensitive.
#[derive(Debug, Clone, PartialEq, strum::Display)]
pub enum TimePicker {
    #[strum(to_string = "hinkley")]
    Hinkley { alpha: Real },
    #[strum(to_string = "aic")]
    Aic,
    #[strum(to_string = "threshold")]
    Threshold { threshold: Real },
}

impl Default for TimePicker {
    fn default() -> Self {
        Self::Aic
    }
}

impl TimePicker {
    pub fn pick(&self, waveform: &[Real]) -> Result<Detection, PickError> {
        let detection = match *self {
            Self::Hinkley { alpha } => hinkley::pick(waveform, alpha),
            Self::Aic => aic::pick(waveform)?,
            Self::Threshold { threshold } => threshold::pick(waveform, threshold)?,
        };
        debug!("{self} picker chose sample {}", detection.index);
        Ok(detection)
    }
}

/// First index of the smallest value; NaN entries never win.
pub(crate) fn nan_safe_argmin(curve: &[Real]) -> Option<SampleIndex> {
    let mut best = Option::<(SampleIndex, Real)>::default();
    for (index, &score) in curve.iter().enumerate() {
        if score.is_nan() {
            continue;
        }
        match best {
            Some((_, minimum)) if score >= minimum => {}
            _ => best = Some((index, score)),
        }
    }
    best.map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::averager::mean_waveform;
    use ndarray::Array2;

    /// Three identical waveforms, zero until a unit step at sample 50.
    fn stepped_stack() -> Array2<Real> {
        let mut matrix = Array2::zeros((3, 100));
        for mut row in matrix.rows_mut() {
            for sample in 50..100 {
                row[sample] = 1.0;
            }
        }
        matrix
    }

    #[test]
    fn aic_picks_near_the_step() {
        let mean = mean_waveform(&stepped_stack());
        let detection = TimePicker::Aic.pick(&mean).unwrap();
        assert!(
            (49..=51).contains(&detection.index),
            "aic picked {}",
            detection.index
        );
    }

    #[test]
    fn threshold_picks_the_step_exactly() {
        let mean = mean_waveform(&stepped_stack());
        let detection = TimePicker::Threshold { threshold: 0.5 }.pick(&mean).unwrap();
        assert_eq!(detection.index, 50);
    }

    #[test]
    fn pickers_are_idempotent() {
        let mean = mean_waveform(&stepped_stack());
        for picker in [
            TimePicker::Hinkley {
                alpha: DEFAULT_HINKLEY_ALPHA,
            },
            TimePicker::Aic,
            TimePicker::Threshold { threshold: 0.5 },
        ] {
            let first = picker.pick(&mean).unwrap();
            let second = picker.pick(&mean).unwrap();
            assert_eq!(first.index, second.index, "{picker} is not idempotent");
            let curves_match = first
                .curve
                .iter()
                .zip(&second.curve)
                .all(|(a, b)| a == b || (a.is_nan() && b.is_nan()));
            assert!(curves_match, "{picker} curve is not reproducible");
        }
    }

    #[test]
    fn default_picker_is_aic() {
        assert_eq!(TimePicker::default(), TimePicker::Aic);
    }

    #[test]
    fn picker_names_follow_configuration_spelling() {
        assert_eq!(TimePicker::Aic.to_string(), "aic");
        assert_eq!(TimePicker::Hinkley { alpha: 5.0 }.to_string(), "hinkley");
        assert_eq!(
            TimePicker::Threshold { threshold: 1e-5 }.to_string(),
            "threshold"
        );
    }

    #[test]
    fn argmin_ignores_nan_and_breaks_ties_low() {
        assert_eq!(nan_safe_argmin(&[Real::NAN, 2.0, 1.0, 1.0]), Some(2));
        assert_eq!(nan_safe_argmin(&[Real::NAN, Real::NAN]), None);
        assert_eq!(nan_safe_argmin(&[]), None);
    }
}
