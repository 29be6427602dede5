use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading a dataset. Matching itself never fails.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("dataset '{}' is empty", path.display())]
    EmptyFile { path: PathBuf },

    #[error("dataset could not be parsed")]
    Parse(#[from] serde_json::Error),

    #[error("record {index} has an empty {field}")]
    EmptyField { index: usize, field: &'static str },
}
