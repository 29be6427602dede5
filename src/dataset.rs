use std::collections::HashSet;
use std::fs::File;
use std::path::Path;

use memmap2::MmapOptions;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::constants::BUILTIN_DATASET;
use crate::error::DatasetError;
use crate::record::Record;
use crate::text::StopWords;

/// Full on-disk document. A bare JSON array of records is also accepted.
#[derive(Deserialize)]
struct DatasetDocument {
    #[serde(default)]
    stop_words: Option<StopWords>,
    records: Vec<Record>,
}

/// Immutable, ordered set of records plus the tokenizer configuration
/// every matcher reads. Record order is the ranking tie-break.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dataset {
    pub records: Vec<Record>,
    pub stop_words: StopWords,
}

impl Dataset {
    pub fn new(records: Vec<Record>, stop_words: StopWords) -> Self {
        Dataset {
            records,
            stop_words,
        }
    }

    /// Synthetic dataset with the default stop words.
    pub fn from_records(records: Vec<Record>) -> Self {
        Dataset::new(records, StopWords::default())
    }

    /// The vim/tmux cheat sheet compiled into the binary.
    pub fn builtin() -> Result<Self, DatasetError> {
        Dataset::from_json(BUILTIN_DATASET.as_bytes())
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self, DatasetError> {
        // Pick the shape up front so serde reports the failing field.
        let is_array = bytes
            .iter()
            .find(|b| !b.is_ascii_whitespace())
            .is_some_and(|&b| b == b'[');
        let dataset = if is_array {
            Dataset::from_records(serde_json::from_slice(bytes)?)
        } else {
            let doc: DatasetDocument = serde_json::from_slice(bytes)?;
            Dataset::new(doc.records, doc.stop_words.unwrap_or_default())
        };
        for (i, record) in dataset.records.iter().enumerate() {
            record.validate(i)?;
        }
        Ok(dataset)
    }

    /// Memory-map the file at `path` and parse it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let io_err = |source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(io_err)?;
        // Zero-length files cannot be mapped on every platform.
        if file.metadata().map_err(io_err)?.len() == 0 {
            return Err(DatasetError::EmptyFile {
                path: path.to_path_buf(),
            });
        }
        let mmap = unsafe { MmapOptions::new().map(&file).map_err(io_err)? };

        let dataset = Dataset::from_json(&mmap)?;
        info!(
            path = %path.display(),
            records = dataset.len(),
            stop_words = dataset.stop_words.len(),
            "loaded dataset"
        );
        Ok(dataset)
    }

    /// Load `path` when given, else fall back to the built-in cheat sheet.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self, DatasetError> {
        match path {
            Some(path) => Dataset::load(path),
            None => Dataset::builtin(),
        }
    }

    /// Lower-cased names of every program in the dataset.
    pub fn program_names(&self) -> HashSet<String> {
        self.records
            .iter()
            .map(|r| r.program.to_ascii_lowercase())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
