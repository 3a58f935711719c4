//! Reads directories of measurement records into a sample matrix.
//!
//! A record is a two-column csv file with one header row: elapsed time in
//! the first column (ignored, time is reconstructed from the sample clock)
//! and amplitude in the second. All records of a directory belong to the
//! same measurement run and must hold the same number of samples.

mod error;
mod loader;

pub use error::LoadError;
pub use loader::{WaveformSet, load_waveform_directory};
