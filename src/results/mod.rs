pub mod lenient;
pub mod results_model;
