use std::collections::HashMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::recognition::domain::detection_record::DetectionRecord;

/// Detection timestamps keyed by identity label.
///
/// Labels iterate in the order they were first encountered, and each
/// label's timestamps keep the order of the records they came from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GroupedView {
    groups: Vec<(String, Vec<f64>)>,
    index: HashMap<String, usize>,
}

impl GroupedView {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, label: &str, timestamp: f64) {
        match self.index.get(label) {
            Some(&slot) => self.groups[slot].1.push(timestamp),
            None => {
                self.index.insert(label.to_string(), self.groups.len());
                self.groups.push((label.to_string(), vec![timestamp]));
            }
        }
    }

    pub fn get(&self, label: &str) -> Option<&[f64]> {
        self.index
            .get(label)
            .map(|&slot| self.groups[slot].1.as_slice())
    }

    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(label, _)| label.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.groups
            .iter()
            .map(|(label, timestamps)| (label.as_str(), timestamps.as_slice()))
    }

    /// Number of distinct identities.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total timestamps across all identities.
    pub fn detection_count(&self) -> usize {
        self.groups.iter().map(|(_, ts)| ts.len()).sum()
    }
}

impl Serialize for GroupedView {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (label, timestamps) in &self.groups {
            map.serialize_entry(label, timestamps)?;
        }
        map.end()
    }
}

/// Group detections by identity label in a single pass.
///
/// An absent sequence groups to an empty view. Duplicate timestamps are
/// kept and nothing is sorted.
pub fn group_by_identity(detections: Option<&[DetectionRecord]>) -> GroupedView {
    let mut view = GroupedView::new();
    for record in detections.unwrap_or_default() {
        view.push(&record.identity_label, record.timestamp);
    }
    log::debug!(
        "Grouped {} detections into {} identities",
        view.detection_count(),
        view.len()
    );
    view
}
