pub mod tracer;

/// Scalar type of all waveform samples and derived statistics.
pub type Real = f64;
/// Position of a sample within a waveform.
pub type SampleIndex = usize;
/// Sample clock in samples per second.
pub type SampleRate = f64;

/// Sample clock of the reference acquisition hardware.
pub const DEFAULT_SAMPLE_RATE_HZ: SampleRate = 2_000_000.0;

/// Reconstructs the elapsed time of a sample from its index.
pub fn time_of_index(index: SampleIndex, sample_rate: SampleRate) -> Real {
    index as Real / sample_rate
}
