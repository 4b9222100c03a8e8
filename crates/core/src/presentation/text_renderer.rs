use crate::presentation::results_table::ResultsTable;

const COLUMN_GAP: usize = 2;
const TIMESTAMP_INDENT: usize = 2;

/// Render the results table as plain text for terminals and logs.
pub fn render_table(table: &ResultsTable) -> String {
    let [name_heading, timestamp_heading] = table.headings;
    let name_width = table
        .rows
        .iter()
        .map(|row| row.label.chars().count())
        .chain(std::iter::once(name_heading.chars().count()))
        .max()
        .unwrap_or(0);
    let gap = " ".repeat(COLUMN_GAP);
    let indent = " ".repeat(name_width + COLUMN_GAP + TIMESTAMP_INDENT);

    let mut lines = vec![table.title.to_string(), table.summary.clone(), String::new()];
    lines.push(format!(
        "{:<name_width$}{gap}{}",
        name_heading.to_uppercase(),
        timestamp_heading.to_uppercase()
    ));

    for row in &table.rows {
        lines.push(format!("{:<name_width$}{gap}{}", row.label, row.toggle_caption));
        lines.extend(row.timestamps.iter().map(|ts| format!("{indent}{ts}")));
    }

    if let Some(empty) = &table.empty_state {
        lines.push(String::new());
        lines.push(empty.title.to_string());
        lines.push(empty.message.to_string());
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recognition::domain::detection_record::DetectionRecord;
    use crate::recognition::domain::expansion_state::ExpansionState;
    use crate::recognition::domain::recognition_result::RecognitionResult;

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
    fn test_collapsed_table() {
        let result = sample_result();
        let table = ResultsTable::build(Some(&result), true, &ExpansionState::new()).unwrap();
        assert_eq!(
            render_table(&table),
            "Recognition Results\n\
             Found 3 face(s) in clip.mp4\n\
             \n\
             NAME   TIMESTAMP\n\
             Alice  Show timestamps\n\
             Bob    Show timestamps\n"
        );
    }

    #[test]
    fn test_expanded_row_lists_timestamps_beneath() {
        let result = sample_result();
        let mut expansion = ExpansionState::new();
        expansion.toggle("Alice");
        let table = ResultsTable::build(Some(&result), true, &expansion).unwrap();

        let rendered = render_table(&table);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[4], "Alice  Hide timestamps");
        assert_eq!(lines[5], "         1.23s");
        assert_eq!(lines[6], "         7.89s");
        assert_eq!(lines[7], "Bob    Show timestamps");
        assert_eq!(lines.len(), 8);
    }

    #[test]
    fn test_empty_result_prints_empty_state() {
        let result = RecognitionResult::new("still.jpg", Vec::new());
        let table = ResultsTable::build(Some(&result), true, &ExpansionState::new()).unwrap();
        let rendered = render_table(&table);
        assert!(rendered.contains("Found 0 face(s) in still.jpg"));
        assert!(rendered.ends_with(
            "\nNo faces detected\nNo recognizable faces were found at the analyzed timestamp.\n"
        ));
    }

    #[test]
    fn test_long_labels_widen_name_column() {
        let result = RecognitionResult::new(
            "clip.mp4",
            vec![
                DetectionRecord::new("Bartholomew", 1.0),
                DetectionRecord::new("Al", 2.0),
            ],
        );
        let table = ResultsTable::build(Some(&result), true, &ExpansionState::new()).unwrap();
        let rendered = render_table(&table);
        assert!(rendered.contains("NAME         TIMESTAMP\n"));
        assert!(rendered.contains("Al           Show timestamps\n"));
    }
}
