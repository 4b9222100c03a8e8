use serde::{Deserialize, Serialize};

/// A single observation of an identity at a point in time.
///
/// Produced upstream by the recognition service; this crate never mutates it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectionRecord {
    #[serde(alias = "external_image_id")]
    pub identity_label: String,
    /// Seconds from the start of the analyzed media.
    pub timestamp: f64,
}

impl DetectionRecord {
    pub fn new(identity_label: impl Into<String>, timestamp: f64) -> Self {
        Self {
            identity_label: identity_label.into(),
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_sets_fields() {
        let record = DetectionRecord::new("Alice", 1.23);
        assert_eq!(record.identity_label, "Alice");
        assert_relative_eq!(record.timestamp, 1.23);
    }

    #[test]
    fn test_deserializes_canonical_field_names() {
        let record: DetectionRecord =
            serde_json::from_str(r#"{"identity_label": "Bob", "timestamp": 4.56}"#).unwrap();
        assert_eq!(record, DetectionRecord::new("Bob", 4.56));
    }

    #[test]
    fn test_deserializes_rekognition_field_names() {
        let record: DetectionRecord =
            serde_json::from_str(r#"{"external_image_id": "Carol", "timestamp": 12}"#).unwrap();
        assert_eq!(record.identity_label, "Carol");
        assert_relative_eq!(record.timestamp, 12.0);
    }

    #[test]
    fn test_missing_timestamp_is_rejected() {
        let result = serde_json::from_str::<DetectionRecord>(r#"{"identity_label": "Dan"}"#);
        assert!(result.is_err());
    }
}
