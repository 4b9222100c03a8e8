pub const TABLE_TITLE: &str = "Recognition Results";
pub const NAME_HEADING: &str = "Name";
pub const TIMESTAMP_HEADING: &str = "Timestamp";
pub const RECOGNIZED_STATUS: &str = "Recognized";

pub const SHOW_TIMESTAMPS: &str = "Show timestamps";
pub const HIDE_TIMESTAMPS: &str = "Hide timestamps";

pub const EMPTY_TITLE: &str = "No faces detected";
pub const EMPTY_MESSAGE: &str = "No recognizable faces were found at the analyzed timestamp.";

pub const RESULT_EXTENSIONS: &[&str] = &["json"];

/// Pseudo-path meaning "read from standard input".
pub const STDIN_PATH: &str = "-";
