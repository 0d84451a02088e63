//! Dataset loading from the JSON input file.

use std::fmt;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::models::record::RawRecord;

/// Failure to load or parse the input file. Fatal at startup: callers must
/// surface it rather than leave the dashboard blank.
#[derive(Debug)]
pub enum DatasetError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::Io(err) => write!(f, "failed to read dataset file: {}", err),
            DatasetError::Parse(err) => write!(f, "failed to parse dataset JSON: {}", err),
        }
    }
}

impl std::error::Error for DatasetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DatasetError::Io(err) => Some(err),
            DatasetError::Parse(err) => Some(err),
        }
    }
}

/// Read the JSON array of raw transaction records from disk.
pub fn load_records(path: &Path) -> Result<Vec<RawRecord>, DatasetError> {
    let contents = fs::read_to_string(path).map_err(DatasetError::Io)?;
    let records: Vec<RawRecord> = serde_json::from_str(&contents).map_err(DatasetError::Parse)?;
    info!(count = records.len(), path = %path.display(), "dataset loaded");
    Ok(records)
}
