pub mod convert;
pub mod coverage_model;
