use std::path::PathBuf;

use thiserror::Error;

// Failures while reading a tab-separated corpus
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to open corpus {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read corpus header: {0}")]
    Header(#[source] std::io::Error),

    #[error("malformed corpus record: {0}")]
    Csv(#[from] csv::Error),

    #[error("line {line}: expected an integer, found {value:?}")]
    InvalidInteger { line: u64, value: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("reference set is empty, nothing to compare against")]
    EmptyReferenceSet,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccuracyError {
    #[error("cannot compute accuracy over an empty query set")]
    Empty,

    #[error("{instances} instances but {predictions} predictions")]
    LengthMismatch { instances: usize, predictions: usize },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Corpus(#[from] CorpusError),

    #[error(transparent)]
    Classify(#[from] ClassifyError),

    #[error(transparent)]
    Accuracy(#[from] AccuracyError),
}

pub type Result<T> = std::result::Result<T, Error>;
