pub mod cases;
pub mod catalog;
pub mod generate;
pub mod metrics;
pub mod report;
