use super::{Detection, nan_safe_argmin};
use sonus_common::Real;

/// Hinkley-criterion picker.
///
/// Accumulates the squared samples into a cumulative energy curve and
/// subtracts a linear trend of `total_energy / (alpha * samples)` per
/// sample. Energy growth outruns the trend once the wavefront arrives, so
/// the onset sits at the global minimum of the corrected curve. The
/// minimum is well-defined for any non-empty waveform; a flat signal
/// resolves to index 0.
pub(crate) fn pick(waveform: &[Real], alpha: Real) -> Detection {
    let samples = waveform.len();
    let energy_cum = waveform
        .iter()
        .scan(0.0, |energy, &amplitude| {
            *energy += amplitude * amplitude;
            Some(*energy)
        })
        .collect::<Vec<Real>>();
    let total_energy = energy_cum.last().copied().unwrap_or_default();
    let negative_trend = total_energy / (alpha * samples as Real);

    // The index term is formed in single precision while the energy stays
    // in double. At large sample counts this shifts tie-breaks, and
    // recorded picks depend on it, so it stays single precision.
    let curve = energy_cum
        .iter()
        .enumerate()
        .map(|(index, energy)| energy - Real::from(index as f32) * negative_trend)
        .collect::<Vec<Real>>();

    let index = nan_safe_argmin(&curve).unwrap_or_default();
    Detection { curve, index }
}
