use crate::processing::Analysis;
use anyhow::Result;
use onset_detection::{Spectrum, TimePicker};
use plotters::prelude::*;
use sonus_common::{Real, SampleRate};
use std::path::Path;

const CHART_SIZE: (u32, u32) = (1200, 800);
const MAGNITUDE_FLOOR: Real = 1e-12;

/// Renders the diagnostic charts to an svg file: raw and mean waveforms
/// with the picked onset on top, magnitude spectrum below.
pub(crate) fn save_charts(
    path: &Path,
    analysis: &Analysis,
    spectrum: &Spectrum,
    sample_rate: SampleRate,
    material: Option<&str>,
) -> Result<()> {
    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let (upper, lower) = root.split_vertically((CHART_SIZE.1 / 2) as i32);

    draw_waveform_chart(&upper, analysis, sample_rate, material)?;
    draw_spectrum_chart(&lower, spectrum, sample_rate)?;

    root.present()?;
    Ok(())
}

fn draw_waveform_chart(
    area: &DrawingArea<SVGBackend<'_>, plotters::coord::Shift>,
    analysis: &Analysis,
    sample_rate: SampleRate,
    material: Option<&str>,
) -> Result<()> {
    let samples = analysis.mean.len();
    if samples == 0 {
        return Ok(());
    }
    let to_us = |index: usize| index as Real / sample_rate * 1e6;
    let duration_us = to_us(samples);

    let mut builder = ChartBuilder::on(area);
    builder
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60);
    if let Some(material) = material {
        builder.caption(material, ("sans-serif", 24));
    }
    let mut chart = builder
        .build_cartesian_2d(0.0..duration_us, value_range(analysis.set.matrix().iter()))?
        .set_secondary_coord(
            0.0..duration_us,
            value_range(analysis.detection.curve.iter()),
        );

    chart
        .configure_mesh()
        .x_desc("time [µs]")
        .y_desc("volt [V]")
        .draw()?;

    for row in analysis.set.matrix().rows() {
        chart.draw_series(LineSeries::new(
            row.iter().enumerate().map(|(index, &volt)| (to_us(index), volt)),
            BLACK.mix(0.2),
        ))?;
    }
    chart.draw_series(LineSeries::new(
        analysis
            .mean
            .iter()
            .enumerate()
            .map(|(index, &volt)| (to_us(index), volt)),
        RED.stroke_width(2),
    ))?;

    let onset = analysis.detection.index;
    chart.draw_series(std::iter::once(Circle::new(
        (to_us(onset), analysis.mean[onset]),
        4,
        RED.filled(),
    )))?;

    match analysis.picker {
        TimePicker::Threshold { threshold } => {
            for guide in [threshold, -threshold] {
                chart.draw_series(LineSeries::new(
                    [(0.0, guide), (duration_us, guide)],
                    &RED,
                ))?;
            }
        }
        TimePicker::Hinkley { .. } | TimePicker::Aic => {
            chart
                .configure_secondary_axes()
                .y_desc("score")
                .draw()?;
            chart.draw_secondary_series(LineSeries::new(
                analysis
                    .detection
                    .curve
                    .iter()
                    .enumerate()
                    .filter(|(_, score)| !score.is_nan())
                    .map(|(index, &score)| (to_us(index), score)),
                &BLUE,
            ))?;
        }
    }
    Ok(())
}

fn draw_spectrum_chart(
    area: &DrawingArea<SVGBackend<'_>, plotters::coord::Shift>,
    spectrum: &Spectrum,
    sample_rate: SampleRate,
) -> Result<()> {
    if spectrum.magnitudes().is_empty() {
        return Ok(());
    }
    let ceiling = spectrum
        .magnitudes()
        .iter()
        .fold(MAGNITUDE_FLOOR, |top, &magnitude| top.max(magnitude));

    let mut chart = ChartBuilder::on(area)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(
            0.0..sample_rate / 2.0,
            (MAGNITUDE_FLOOR..ceiling * 10.0).log_scale(),
        )?;

    chart
        .configure_mesh()
        .x_desc("Frequency (Hz)")
        .y_desc("Amplitude")
        .draw()?;

    chart.draw_series(LineSeries::new(
        spectrum
            .frequencies()
            .zip(spectrum.magnitudes())
            .map(|(frequency, &magnitude)| (frequency, magnitude.max(MAGNITUDE_FLOOR))),
        &BLUE,
    ))?;
    Ok(())
}

/// Padded extent of a series, widened when the data is flat so the chart
/// still has a drawable span.
fn value_range<'a>(values: impl Iterator<Item = &'a Real>) -> std::ops::Range<Real> {
    let (min, max) = values.filter(|value| value.is_finite()).fold(
        (Real::INFINITY, Real::NEG_INFINITY),
        |(min, max), &value| (min.min(value), max.max(value)),
    );
    if min > max {
        return -1.0..1.0;
    }
    if min == max {
        return (min - 1.0)..(max + 1.0);
    }
    let pad = (max - min) * 0.05;
    (min - pad)..(max + pad)
}
