use std::fs;
use std::path::Path;

use crate::recognition::domain::recognition_result::RecognitionResult;
use crate::recognition::domain::result_reader::{ResultReadError, ResultReader};

/// Reads a recognition result serialized as JSON.
///
/// Accepts both the canonical field names and the upstream service's
/// (`video`, `detected_faces`, `external_image_id`).
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonResultReader;

impl JsonResultReader {
    pub fn new() -> Self {
        Self
    }

    /// Parse already-loaded JSON text. `origin` is only used in error messages.
    pub fn parse(&self, json: &str, origin: &Path) -> Result<RecognitionResult, ResultReadError> {
        serde_json::from_str(json).map_err(|source| ResultReadError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }
}

impl ResultReader for JsonResultReader {
    fn read(&self, path: &Path) -> Result<RecognitionResult, ResultReadError> {
        let json = fs::read_to_string(path).map_err(|source| ResultReadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let result = self.parse(&json, path)?;
        log::info!(
            "Loaded {} detections for {} from {}",
            result.detection_count(),
            result.source_label,
            path.display()
        );
        Ok(result)
    }
}
