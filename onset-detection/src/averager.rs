use ndarray::{Array2, Axis};
use sonus_common::Real;

/// Columnwise arithmetic mean of a waveform stack.
///
/// Accumulates in double precision so long records do not pick up
/// rounding bias. A stack with no rows yields an empty mean.
pub fn mean_waveform(matrix: &Array2<Real>) -> Vec<Real> {
    matrix
        .mean_axis(Axis(0))
        .map(|mean| mean.to_vec())
        .unwrap_or_default()
}
