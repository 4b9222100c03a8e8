use serde::{Deserialize, Deserializer, Serialize};

use crate::recognition::domain::detection_record::DetectionRecord;
use crate::recognition::domain::grouped_view::{group_by_identity, GroupedView};

/// Recognition output for one analyzed input (a video or an image).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RecognitionResult {
    #[serde(alias = "video", default)]
    pub source_label: String,
    /// A `null` or missing list is read as "nothing detected".
    #[serde(
        alias = "detected_faces",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub detections: Vec<DetectionRecord>,
}

impl RecognitionResult {
    pub fn new(source_label: impl Into<String>, detections: Vec<DetectionRecord>) -> Self {
        Self {
            source_label: source_label.into(),
            detections,
        }
    }

    pub fn detection_count(&self) -> usize {
        self.detections.len()
    }

    pub fn has_detections(&self) -> bool {
        !self.detections.is_empty()
    }

    pub fn grouped(&self) -> GroupedView {
        group_by_identity(Some(&self.detections))
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<DetectionRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<DetectionRecord>>::deserialize(deserializer)?.unwrap_or_default())
}
