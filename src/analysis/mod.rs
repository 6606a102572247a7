pub mod aggregator;
pub mod errors;
pub mod options;
pub mod report;
pub mod seller_stats;
