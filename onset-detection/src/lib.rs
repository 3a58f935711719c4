//! This crate provides the time-picking engine that locates the arrival
//! of a wavefront within an averaged waveform.
//!
//! A waveform takes the form of a Vec (or some other similar container)
//! of scalar amplitudes at a fixed sample clock. Typical usage of this
//! crate may look like:
//! ```rust
//! use onset_detection::{TimePicker, arrival::assemble_report};
//!
//! let waveform = vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0];
//! let detection = TimePicker::default().pick(&waveform)?;   // aic picker
//! let report = assemble_report(1, detection.index, 2_000_000.0, Some(0.1))?;
//! assert_eq!(report.index, 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod arrival;
pub mod averager;
pub mod error;
pub mod pickers;
pub mod spectrum;

pub use arrival::{AnalysisReport, ArrivalEstimate};
pub use error::{ComputationError, DetectionError, PickError};
pub use pickers::{Detection, TimePicker};
pub use spectrum::Spectrum;
