pub mod json_result_reader;
