//! Library entrypoint for seller-performance.
//!
//! Exposes all modules so integration tests can import them.

pub mod analysis;
pub mod config;
pub mod data;
pub mod strategies;

pub use analysis::aggregator::{analyze, analyze_stats};
pub use analysis::errors::AnalysisError;
pub use analysis::options::AnalysisOptions;
pub use strategies::bonus::calculate_bonus_by_profit;
pub use strategies::revenue::calculate_simple_revenue;
