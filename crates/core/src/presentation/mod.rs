pub mod results_table;
pub mod text_renderer;
