pub mod appearance_tab;
pub mod results_tab;
