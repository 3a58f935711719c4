use super::Detection;
use crate::error::DetectionError;
use sonus_common::Real;

/// Fixed-threshold picker.
///
/// The onset is the first sample whose magnitude exceeds the threshold.
/// The accompanying curve is a step indicator: zero before the onset, one
/// from it onwards. A waveform that never crosses the threshold is a
/// detection failure, not an index.
pub(crate) fn pick(waveform: &[Real], threshold: Real) -> Result<Detection, DetectionError> {
    let index = waveform
        .iter()
        .position(|amplitude| amplitude.abs() > threshold)
        .ok_or(DetectionError::ThresholdNotCrossed { threshold })?;

    let mut curve = vec![0.0; waveform.len()];
    for indicator in curve.iter_mut().skip(index) {
        *indicator = 1.0;
    }
    Ok(Detection { curve, index })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_the_first_crossing_exactly() {
        let mut waveform = vec![1e-6; 200];
        waveform[120] = 2e-5;
        waveform[150] = 3e-5;
        let detection = pick(&waveform, 1e-5).unwrap();
        assert_eq!(detection.index, 120);
    }

    #[test]
    fn negative_excursions_count() {
        let waveform = [0.0, -2e-5, 0.0];
        let detection = pick(&waveform, 1e-5).unwrap();
        assert_eq!(detection.index, 1);
    }

    #[test]
    fn crossing_must_be_strict() {
        let waveform = [1e-5, 1e-5, 2e-5];
        let detection = pick(&waveform, 1e-5).unwrap();
        assert_eq!(detection.index, 2);
    }

    #[test]
    fn curve_is_a_step_function() {
        let waveform = [0.0, 0.0, 1.0, 0.0];
        let detection = pick(&waveform, 0.5).unwrap();
        assert_eq!(detection.curve, vec![0.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn quiet_waveform_is_a_detection_error() {
        let waveform = [1e-7; 32];
        assert_eq!(
            pick(&waveform, 1e-5).unwrap_err(),
            DetectionError::ThresholdNotCrossed { threshold: 1e-5 }
        );
    }
}
