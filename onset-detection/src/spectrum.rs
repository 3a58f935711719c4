use crate::error::ComputationError;
use realfft::{RealFftPlanner, RealToComplex};
use sonus_common::{Real, SampleRate};

/// One-sided magnitude spectrum of a waveform.
///
/// Bins run from zero to the Nyquist frequency at a resolution of
/// `sample_rate / samples`. Diagnostic display only.
#[derive(Debug, Clone)]
pub struct Spectrum {
    magnitudes: Vec<Real>,
    resolution_hz: Real,
}

impl Spectrum {
    pub fn magnitudes(&self) -> &[Real] {
        &self.magnitudes
    }

    pub fn resolution_hz(&self) -> Real {
        self.resolution_hz
    }

    /// Centre frequency of each bin, in step with [`Self::magnitudes`].
    pub fn frequencies(&self) -> impl Iterator<Item = Real> + '_ {
        (0..self.magnitudes.len()).map(|bin| bin as Real * self.resolution_hz)
    }
}

/// Computes the one-sided discrete Fourier magnitude spectrum.
///
/// Any waveform length is supported, powers of two or not.
pub fn magnitude_spectrum(
    waveform: &[Real],
    sample_rate: SampleRate,
) -> Result<Spectrum, ComputationError> {
    let samples = waveform.len();
    if samples == 0 {
        return Ok(Spectrum {
            magnitudes: Vec::default(),
            resolution_hz: 0.0,
        });
    }

    let mut planner = RealFftPlanner::<Real>::new();
    let transform = planner.plan_fft_forward(samples);
    let mut input = waveform.to_vec();
    let mut output = transform.make_output_vec();
    transform
        .process(&mut input, &mut output)
        .map_err(|error| ComputationError::Fft(error.to_string()))?;

    Ok(Spectrum {
        magnitudes: output.iter().map(|bin| bin.norm()).collect(),
        resolution_hz: sample_rate / samples as Real,
    })
}
