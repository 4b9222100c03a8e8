pub mod results_table;
pub mod toggle_button;
