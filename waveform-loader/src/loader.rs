use crate::error::LoadError;
use glob::glob;
use ndarray::Array2;
use sonus_common::Real;
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};
use tracing::debug;

/// A stack of equal-length waveforms belonging to one measurement run.
///
/// Rows are measurements, columns are sample positions. Instances are only
/// ever built by [`load_waveform_directory`], which guarantees at least one
/// record and a uniform, non-zero record length.
#[derive(Debug)]
pub struct WaveformSet {
    matrix: Array2<Real>,
    sources: Vec<PathBuf>,
}

impl WaveformSet {
    pub fn measurement_count(&self) -> usize {
        self.matrix.nrows()
    }

    pub fn samples(&self) -> usize {
        self.matrix.ncols()
    }

    pub fn matrix(&self) -> &Array2<Real> {
        &self.matrix
    }

    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }
}

/// Reads every `*.csv` record in `path` and stacks the amplitude columns
/// into a sample matrix.
///
/// Records are visited in filename order so repeated runs over the same
/// directory produce identical matrices.
pub fn load_waveform_directory(path: &Path) -> Result<WaveformSet, LoadError> {
    if !path.exists() {
        return Err(LoadError::DirectoryNotFound(path.to_owned()));
    }
    if !path.is_dir() {
        return Err(LoadError::NotADirectory(path.to_owned()));
    }

    let pattern = path.join("*.csv");
    let pattern = pattern
        .to_str()
        .ok_or_else(|| LoadError::CannotConvertPath(path.to_owned()))?;
    let mut sources = glob(pattern)?.collect::<Result<Vec<_>, _>>()?;
    sources.sort();

    if sources.is_empty() {
        return Err(LoadError::NoRecords(path.to_owned()));
    }

    let mut samples = Option::<usize>::default();
    let mut stacked = Vec::<Real>::default();
    for source in &sources {
        let amplitudes = load_record(source)?;
        debug!("Loaded {} samples from {}", amplitudes.len(), source.display());
        match samples {
            None => samples = Some(amplitudes.len()),
            Some(expected) if expected != amplitudes.len() => {
                return Err(LoadError::RecordLengthMismatch {
                    file: source.clone(),
                    expected,
                    actual: amplitudes.len(),
                });
            }
            Some(_) => {}
        }
        stacked.extend_from_slice(&amplitudes);
    }

    let matrix = Array2::from_shape_vec((sources.len(), samples.unwrap_or_default()), stacked)?;
    Ok(WaveformSet { matrix, sources })
}

/// Parses one record, returning the amplitude column.
fn load_record(path: &Path) -> Result<Vec<Real>, LoadError> {
    let reader = BufReader::new(File::open(path)?);
    let mut amplitudes = Vec::default();
    for (index, line) in reader.lines().enumerate().skip(1) {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let field = line
            .split(',')
            .nth(1)
            .ok_or_else(|| LoadError::MissingAmplitudeColumn {
                file: path.to_owned(),
                line: index + 1,
            })?;
        let amplitude = field
            .trim()
            .parse::<Real>()
            .map_err(|_| LoadError::MalformedField {
                file: path.to_owned(),
                line: index + 1,
                field: field.trim().to_owned(),
            })?;
        amplitudes.push(amplitude);
    }
    if amplitudes.is_empty() {
        return Err(LoadError::EmptyRecord(path.to_owned()));
    }
    Ok(amplitudes)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use std::{env, fs, io::Write};

    fn create_test_directory(name: &str) -> PathBuf {
        let mut path = env::temp_dir();
        path.push(format!("waveform-loader-{name}"));
        if path.exists() {
            fs::remove_dir_all(&path).unwrap();
        }
        fs::create_dir_all(&path).unwrap();
        path
    }

    fn write_record(directory: &Path, name: &str, amplitudes: &[Real]) {
        let mut file = File::create(directory.join(name)).unwrap();
        writeln!(file, "Time[s], Amplitude[V]").unwrap();
        for (index, amplitude) in amplitudes.iter().enumerate() {
            writeln!(file, "{}, {amplitude}", index as Real * 5e-7).unwrap();
        }
    }

    #[test]
    fn stacks_records_in_filename_order() {
        let directory = create_test_directory("stacks");
        write_record(&directory, "b.csv", &[3.0, 4.0, 5.0]);
        write_record(&directory, "a.csv", &[0.0, 1.0, 2.0]);
        write_record(&directory, "c.csv", &[6.0, 7.0, 8.0]);

        let set = load_waveform_directory(&directory).unwrap();
        assert_eq!(set.measurement_count(), 3);
        assert_eq!(set.samples(), 3);
        assert_eq!(set.matrix()[[0, 0]], 0.0);
        assert_eq!(set.matrix()[[1, 2]], 5.0);
        assert_eq!(set.matrix()[[2, 1]], 7.0);
        assert!(set.sources()[0].ends_with("a.csv"));
        assert!(set.sources()[2].ends_with("c.csv"));
    }

    #[test]
    fn ignores_files_without_csv_extension() {
        let directory = create_test_directory("extensions");
        write_record(&directory, "only.csv", &[1.0, 2.0]);
        fs::write(directory.join("notes.txt"), "not a record").unwrap();

        let set = load_waveform_directory(&directory).unwrap();
        assert_eq!(set.measurement_count(), 1);
    }

    #[test]
    fn missing_directory_is_an_input_error() {
        let mut path = env::temp_dir();
        path.push("waveform-loader-does-not-exist");
        let result = load_waveform_directory(&path);
        assert!(matches!(result, Err(LoadError::DirectoryNotFound(_))));
    }

    #[test]
    fn empty_directory_is_an_input_error() {
        let directory = create_test_directory("empty");
        let result = load_waveform_directory(&directory);
        assert!(matches!(result, Err(LoadError::NoRecords(_))));
    }

    #[test]
    fn mismatched_record_lengths_fail_before_stacking() {
        let directory = create_test_directory("mismatch");
        write_record(&directory, "a.csv", &[1.0, 2.0, 3.0]);
        write_record(&directory, "b.csv", &[1.0, 2.0]);

        let result = load_waveform_directory(&directory);
        assert!(matches!(
            result,
            Err(LoadError::RecordLengthMismatch {
                expected: 3,
                actual: 2,
                ..
            })
        ));
    }

    #[test]
    fn header_only_record_is_rejected() {
        let directory = create_test_directory("header-only");
        fs::write(directory.join("a.csv"), "Time[s], Amplitude[V]\n").unwrap();

        let result = load_waveform_directory(&directory);
        assert!(matches!(result, Err(LoadError::EmptyRecord(_))));
    }

    #[test]
    fn malformed_amplitude_reports_file_and_line() {
        let directory = create_test_directory("malformed");
        fs::write(
            directory.join("a.csv"),
            "Time[s], Amplitude[V]\n0.0, 1.0\n5e-7, not-a-number\n",
        )
        .unwrap();

        match load_waveform_directory(&directory) {
            Err(LoadError::MalformedField { line, field, .. }) => {
                assert_eq!(line, 3);
                assert_eq!(field, "not-a-number");
            }
            other => panic!("expected MalformedField, got {other:?}"),
        }
    }

    #[test]
    fn missing_amplitude_column_is_rejected() {
        let directory = create_test_directory("one-column");
        fs::write(directory.join("a.csv"), "Time[s]\n0.0\n").unwrap();

        let result = load_waveform_directory(&directory);
        assert!(matches!(
            result,
            Err(LoadError::MissingAmplitudeColumn { line: 2, .. })
        ));
    }
}
