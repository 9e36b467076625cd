pub mod coverage;
pub mod format;
pub mod markdown;
pub mod report_model;
pub mod strategy;
pub mod suites;
pub mod summary;
