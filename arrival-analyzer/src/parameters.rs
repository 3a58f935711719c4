use clap::{Args, Subcommand};
use onset_detection::{
    TimePicker,
    pickers::{DEFAULT_HINKLEY_ALPHA, DEFAULT_THRESHOLD},
};
use sonus_common::Real;

#[derive(Debug, Clone, Args)]
pub(crate) struct HinkleyParameters {
    /// Trend divisor; larger values flatten the expected energy trend.
    #[clap(default_value_t = DEFAULT_HINKLEY_ALPHA)]
    pub(crate) alpha: Real,
}

#[derive(Debug, Clone, Args)]
pub(crate) struct ThresholdParameters {
    /// Minimum magnitude at which the signal counts as arrived.
    #[clap(default_value_t = DEFAULT_THRESHOLD)]
    pub(crate) threshold: Real,
}

#[derive(Debug, Clone, Subcommand)]
pub(crate) enum PickerMode {
    #[clap(about = "Picks the minimum of the trend-corrected cumulative energy curve.")]
    Hinkley(HinkleyParameters),
    #[clap(about = "Picks the minimum of a two-segment variance score. The default.")]
    Aic,
    #[clap(about = "Picks the first sample whose magnitude exceeds a fixed threshold.")]
    Threshold(ThresholdParameters),
}

impl PickerMode {
    /// Resolves the selected mode, absent meaning the aic default.
    pub(crate) fn resolve(mode: Option<Self>) -> TimePicker {
        match mode {
            Some(Self::Hinkley(parameters)) => TimePicker::Hinkley {
                alpha: parameters.alpha,
            },
            Some(Self::Threshold(parameters)) => TimePicker::Threshold {
                threshold: parameters.threshold,
            },
            Some(Self::Aic) | None => TimePicker::Aic,
        }
    }
}
