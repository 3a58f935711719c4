use anyhow::Result;
use onset_detection::{AnalysisReport, Detection, TimePicker, arrival, averager};
use sonus_common::{Real, SampleRate};
use std::path::Path;
use tracing::info;
use waveform_loader::{WaveformSet, load_waveform_directory};

/// Everything one analysis run produces: the report plus the intermediate
/// data the chart renderer consumes.
#[derive(Debug)]
pub(crate) struct Analysis {
    pub(crate) set: WaveformSet,
    pub(crate) mean: Vec<Real>,
    pub(crate) detection: Detection,
    pub(crate) picker: TimePicker,
    pub(crate) report: AnalysisReport,
}

/// Runs one full analysis: load, average, pick, assemble.
///
/// Failures propagate unchanged to the caller; there is no partial
/// result.
pub(crate) fn analyse(
    data_path: &Path,
    picker: TimePicker,
    sample_rate: SampleRate,
    sensor_distance: Option<Real>,
) -> Result<Analysis> {
    let set = load_waveform_directory(data_path)?;
    info!("Measurements: {}", set.measurement_count());

    let mean = averager::mean_waveform(set.matrix());
    let detection = picker.pick(&mean)?;
    let report = arrival::assemble_report(
        set.measurement_count(),
        detection.index,
        sample_rate,
        sensor_distance,
    )?;

    info!("Index: {}", report.index);
    if let Some(time_us) = report.time_us {
        info!("Time: {time_us} µs");
    }
    if let Some(speed_m_s) = report.speed_m_s {
        info!("Speed: {speed_m_s} m/s");
    }

    Ok(Analysis {
        set,
        mean,
        detection,
        picker,
        report,
    })
}
