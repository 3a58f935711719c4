use super::{Detection, nan_safe_argmin};
use crate::error::ComputationError;
use sonus_common::Real;

/// Akaike-style two-segment changepoint picker.
///
/// Every candidate split treats the waveform as a quiet left segment and
/// a signal-bearing right segment; the split whose segments are best
/// explained as two independent constant-variance processes minimises the
/// score `(k+1)·log10(var_left) + (n-k-2)·log10(var_right)`. Prefix sums
/// keep the whole sweep linear in the waveform length.
///
/// The score at the final position has an empty right segment and is NaN;
/// NaN splits are skipped by the argmin, so a waveform needs at least two
/// samples before any split scores at all.
pub(crate) fn pick(waveform: &[Real]) -> Result<Detection, ComputationError> {
    let samples = waveform.len();

    let mut sum = 0.0;
    let mut square_sum = 0.0;
    let prefix = waveform
        .iter()
        .map(|&amplitude| {
            sum += amplitude;
            square_sum += amplitude * amplitude;
            (sum, square_sum)
        })
        .collect::<Vec<(Real, Real)>>();
    let (total_sum, total_square_sum) = prefix.last().copied().unwrap_or_default();

    let curve = prefix
        .iter()
        .enumerate()
        .map(|(index, &(left_sum, left_square_sum))| {
            let left_len = (index + 1) as Real;
            let right_len = (samples - index - 1) as Real;
            let left_variance =
                floor_variance(left_square_sum / left_len - (left_sum / left_len).powi(2));
            let right_variance = floor_variance(
                (total_square_sum - left_square_sum) / right_len
                    - ((total_sum - left_sum) / right_len).powi(2),
            );
            left_len * left_variance.log10()
                + (samples as Real - index as Real - 2.0) * right_variance.log10()
        })
        .collect::<Vec<Real>>();

    let index = nan_safe_argmin(&curve).ok_or(ComputationError::DegenerateScores)?;
    Ok(Detection { curve, index })
}

/// Clamps cancellation artefacts (negative or denormal variance) to the
/// smallest positive normal value so the logarithm stays finite. NaN is
/// passed through untouched; an empty-side split must never win the
/// argmin.
fn floor_variance(variance: Real) -> Real {
    if variance.is_nan() {
        variance
    } else {
        variance.max(Real::MIN_POSITIVE)
    }
}
