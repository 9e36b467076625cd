pub mod aggregate;
pub mod classifier;
pub mod stats_model;
