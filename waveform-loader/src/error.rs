use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Measurement directory {0} does not exist")]
    DirectoryNotFound(PathBuf),
    #[error("Measurement path {0} is not a directory")]
    NotADirectory(PathBuf),
    #[error("No csv records found in {0}")]
    NoRecords(PathBuf),
    #[error("Record {0} contains no samples")]
    EmptyRecord(PathBuf),
    #[error("Record {file} holds {actual} samples, expected {expected}")]
    RecordLengthMismatch {
        file: PathBuf,
        expected: usize,
        actual: usize,
    },
    #[error("Record {file} line {line} has no amplitude column")]
    MissingAmplitudeColumn { file: PathBuf, line: usize },
    #[error("Record {file} line {line}: cannot parse amplitude {field:?}")]
    MalformedField {
        file: PathBuf,
        line: usize,
        field: String,
    },
    #[error("Cannot convert path to string: {0}")]
    CannotConvertPath(PathBuf),
    #[error("Glob Pattern Error: {0}")]
    GlobPattern(#[from] glob::PatternError),
    #[error("Glob Error: {0}")]
    Glob(#[from] glob::GlobError),
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Shape Error: {0}")]
    Shape(#[from] ndarray::ShapeError),
}
