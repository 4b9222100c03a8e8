use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::recognition::domain::recognition_result::RecognitionResult;

#[derive(Error, Debug)]
pub enum ResultReadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid recognition result in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Domain interface for loading recognition output produced upstream.
pub trait ResultReader: Send {
    fn read(&self, path: &Path) -> Result<RecognitionResult, ResultReadError>;
}
