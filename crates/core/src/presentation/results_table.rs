//! Framework-neutral model of the recognition results table.
//!
//! Front-ends (terminal, desktop) render a [`ResultsTable`] instead of
//! reaching into the grouped view and expansion state directly.

use crate::recognition::domain::expansion_state::ExpansionState;
use crate::recognition::domain::recognition_result::RecognitionResult;
use crate::shared::constants::{
    EMPTY_MESSAGE, EMPTY_TITLE, HIDE_TIMESTAMPS, NAME_HEADING, RECOGNIZED_STATUS, SHOW_TIMESTAMPS,
    TABLE_TITLE, TIMESTAMP_HEADING,
};

#[derive(Clone, Debug, PartialEq)]
pub struct TableRow {
    pub label: String,
    pub status: &'static str,
    pub expanded: bool,
    pub toggle_caption: &'static str,
    /// Number of detections for this identity.
    pub occurrences: usize,
    /// Formatted timestamps, only populated while the row is expanded.
    pub timestamps: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmptyState {
    pub title: &'static str,
    pub message: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResultsTable {
    pub title: &'static str,
    pub summary: String,
    pub headings: [&'static str; 2],
    pub rows: Vec<TableRow>,
    pub empty_state: Option<EmptyState>,
}

impl ResultsTable {
    /// Build the table for `result`, or `None` when there is nothing to show
    /// (no result yet, or the table is hidden).
    pub fn build(
        result: Option<&RecognitionResult>,
        visible: bool,
        expansion: &ExpansionState,
    ) -> Option<Self> {
        let result = result.filter(|_| visible)?;
        let grouped = result.grouped();

        let rows = grouped
            .iter()
            .map(|(label, timestamps)| {
                let expanded = expansion.is_expanded(label);
                TableRow {
                    label: label.to_string(),
                    status: RECOGNIZED_STATUS,
                    expanded,
                    toggle_caption: if expanded {
                        HIDE_TIMESTAMPS
                    } else {
                        SHOW_TIMESTAMPS
                    },
                    occurrences: timestamps.len(),
                    timestamps: if expanded {
                        timestamps.iter().copied().map(format_timestamp).collect()
                    } else {
                        Vec::new()
                    },
                }
            })
            .collect();

        let empty_state = (!result.has_detections()).then_some(EmptyState {
            title: EMPTY_TITLE,
            message: EMPTY_MESSAGE,
        });

        Some(Self {
            title: TABLE_TITLE,
            summary: format!(
                "Found {} face(s) in {}",
                result.detection_count(),
                result.source_label
            ),
            headings: [NAME_HEADING, TIMESTAMP_HEADING],
            rows,
            empty_state,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.empty_state.is_some()
    }
}

/// Seconds with two decimals and an `s` suffix, e.g. `1.23s`.
pub fn format_timestamp(seconds: f64) -> String {
    format!("{}s", to_fixed_2(seconds))
}

/// Two-decimal rounding where exact ties round away from zero.
///
/// `{:.2}` rounds exact ties to even. A binary double sits exactly halfway
/// between two hundredths only when eight times its value is an odd
/// integer, so those values are rounded by hand.
fn to_fixed_2(value: f64) -> String {
    let eighths = value.abs() * 8.0;
    let is_tie = eighths < 1e15 && eighths.fract() == 0.0 && eighths % 2.0 == 1.0;
    if !is_tie {
        return format!("{value:.2}");
    }
    let hundredths = (eighths as u64 * 25 + 1) / 2;
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{}.{:02}", hundredths / 100, hundredths % 100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recognition::domain::detection_record::DetectionRecord;
    use rstest::rstest;

    fn sample_result() -> RecognitionResult {
        RecognitionResult::new(
            "clip.mp4",
            vec![
                DetectionRecord::new("Alice", 1.23),
                DetectionRecord::new("Bob", 4.56),
                DetectionRecord::new("Alice", 7.89),
            ],
        )
    }

    #[test]
    fn test_no_result_renders_nothing() {
        assert!(ResultsTable::build(None, true, &ExpansionState::new()).is_none());
    }

    #[test]
    fn test_hidden_renders_nothing() {
        let result = sample_result();
        assert!(ResultsTable::build(Some(&result), false, &ExpansionState::new()).is_none());
    }

    #[test]
    fn test_header_counts_detections_not_groups() {
        let result = sample_result();
        let table = ResultsTable::build(Some(&result), true, &ExpansionState::new()).unwrap();
        assert_eq!(table.title, "Recognition Results");
        assert_eq!(table.summary, "Found 3 face(s) in clip.mp4");
        assert_eq!(table.headings, ["Name", "Timestamp"]);
    }

    #[test]
    fn test_rows_follow_encounter_order_and_start_collapsed() {
        let result = sample_result();
        let table = ResultsTable::build(Some(&result), true, &ExpansionState::new()).unwrap();

        let labels: Vec<&str> = table.rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Alice", "Bob"]);
        for row in &table.rows {
            assert!(!row.expanded);
            assert_eq!(row.toggle_caption, "Show timestamps");
            assert_eq!(row.status, "Recognized");
            assert!(row.timestamps.is_empty());
        }
        assert_eq!(table.rows[0].occurrences, 2);
        assert!(table.empty_state.is_none());
    }

    #[test]
    fn test_expanded_row_lists_timestamps_in_order() {
        let result = sample_result();
        let mut expansion = ExpansionState::new();
        expansion.toggle("Alice");

        let table = ResultsTable::build(Some(&result), true, &expansion).unwrap();
        let alice = &table.rows[0];
        assert!(alice.expanded);
        assert_eq!(alice.toggle_caption, "Hide timestamps");
        assert_eq!(alice.timestamps, vec!["1.23s", "7.89s"]);

        let bob = &table.rows[1];
        assert!(!bob.expanded);
        assert!(bob.timestamps.is_empty());
    }

    #[test]
    fn test_empty_detections_show_empty_state() {
        let result = RecognitionResult::new("still.jpg", Vec::new());
        let table = ResultsTable::build(Some(&result), true, &ExpansionState::new()).unwrap();
        assert!(table.rows.is_empty());
        assert!(table.is_empty());
        assert_eq!(table.summary, "Found 0 face(s) in still.jpg");
        let empty = table.empty_state.unwrap();
        assert_eq!(empty.title, "No faces detected");
        assert_eq!(
            empty.message,
            "No recognizable faces were found at the analyzed timestamp."
        );
    }

    #[test]
    fn test_expanding_unknown_label_changes_nothing_visible() {
        let result = sample_result();
        let mut expansion = ExpansionState::new();
        expansion.toggle("Mallory");
        let table = ResultsTable::build(Some(&result), true, &expansion).unwrap();
        assert!(table.rows.iter().all(|row| !row.expanded));
    }

    #[rstest]
    #[case(1.23, "1.23s")]
    #[case(0.0, "0.00s")]
    #[case(12.5, "12.50s")]
    #[case(3.0, "3.00s")]
    #[case(59.999, "60.00s")]
    #[case(0.5, "0.50s")]
    #[case(0.125, "0.13s")]
    #[case(0.375, "0.38s")]
    #[case(1.125, "1.13s")]
    #[case(12.625, "12.63s")]
    #[case(2.005, "2.00s")]
    fn test_format_timestamp(#[case] seconds: f64, #[case] expected: &str) {
        assert_eq!(format_timestamp(seconds), expected);
    }
}
