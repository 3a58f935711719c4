mod graphics;
mod parameters;
mod processing;

use anyhow::Result;
use clap::Parser;
use onset_detection::spectrum::magnitude_spectrum;
use parameters::PickerMode;
use sonus_common::{DEFAULT_SAMPLE_RATE_HZ, Real, SampleRate, tracer::init_tracer};
use std::{fs, path::PathBuf};
use tracing::{info, level_filters::LevelFilter};

// cargo run --bin arrival-analyzer -- measurements/20250527_plexiglass/csv_data --sensor-distance 0.02 --material plexiglass threshold 2e-5

#[derive(Debug, Parser)]
#[clap(author, version, about)]
struct Cli {
    /// Directory holding the measurement run's csv records.
    data_path: PathBuf,

    /// Distance between the two sensors in metres.
    #[clap(short = 'd', long, value_parser = parse_strictly_positive)]
    sensor_distance: Option<Real>,

    /// Material under test; labels the charts, no computational effect.
    #[clap(short, long)]
    material: Option<String>,

    /// Sample clock of the acquisition hardware in Hz.
    #[clap(long, env = "SAMPLE_RATE_HZ", default_value_t = DEFAULT_SAMPLE_RATE_HZ, value_parser = parse_strictly_positive)]
    sample_rate: SampleRate,

    /// Renders the waveform and spectrum charts to this svg file.
    #[clap(short, long)]
    plot_file: Option<PathBuf>,

    /// Writes the analysis report as json to this file.
    #[clap(short, long)]
    report_file: Option<PathBuf>,

    /// Time picking method, aic when omitted.
    #[command(subcommand)]
    picker: Option<PickerMode>,
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracer(LevelFilter::INFO);

    if let Some(sensor_distance) = args.sensor_distance {
        info!("Sensor Distance: {sensor_distance} m");
    }
    if let Some(material) = &args.material {
        info!("Material: {material}");
    }

    let picker = PickerMode::resolve(args.picker);
    let analysis = processing::analyse(
        &args.data_path,
        picker,
        args.sample_rate,
        args.sensor_distance,
    )?;

    if let Some(plot_file) = &args.plot_file {
        let spectrum = magnitude_spectrum(&analysis.mean, args.sample_rate)?;
        graphics::save_charts(
            plot_file,
            &analysis,
            &spectrum,
            args.sample_rate,
            args.material.as_deref(),
        )?;
        info!("Chart written to {}", plot_file.display());
    }

    let report = serde_json::to_string_pretty(&analysis.report)?;
    if let Some(report_file) = &args.report_file {
        fs::write(report_file, &report)?;
        info!("Report written to {}", report_file.display());
    }
    println!("{report}");
    Ok(())
}

/// Distances and sample clocks must be strictly positive; rejecting them
/// at the argument parser keeps every downstream division well-defined.
fn parse_strictly_positive(field: &str) -> Result<Real, String> {
    let value = field.parse::<Real>().map_err(|error| error.to_string())?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(format!("{value} is not strictly positive"))
    }
}
