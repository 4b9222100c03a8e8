pub mod detection_record;
pub mod expansion_state;
pub mod grouped_view;
pub mod recognition_result;
pub mod result_reader;
