//! Options passed into a single analysis run.

use std::fmt;

use crate::strategies::bonus::ProfitRankBonus;
use crate::strategies::revenue::SimpleRevenue;
use crate::strategies::{BonusStrategy, RevenueStrategy};

pub const DEFAULT_TOP_PRODUCTS_LIMIT: usize = 10;

/// Strategies and limits for one run. `Default` carries no strategies, so
/// callers must supply both (or use [`AnalysisOptions::with_defaults`]).
pub struct AnalysisOptions {
    pub calculate_revenue: Option<Box<dyn RevenueStrategy>>,
    pub calculate_bonus: Option<Box<dyn BonusStrategy>>,
    pub top_products_limit: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            calculate_revenue: None,
            calculate_bonus: None,
            top_products_limit: DEFAULT_TOP_PRODUCTS_LIMIT,
        }
    }
}

impl AnalysisOptions {
    pub fn new(
        revenue: impl RevenueStrategy + 'static,
        bonus: impl BonusStrategy + 'static,
    ) -> Self {
        Self {
            calculate_revenue: Some(Box::new(revenue)),
            calculate_bonus: Some(Box::new(bonus)),
            top_products_limit: DEFAULT_TOP_PRODUCTS_LIMIT,
        }
    }

    /// Simple discounted revenue and the 15/10/5/0 profit-rank bonus.
    pub fn with_defaults() -> Self {
        Self::new(SimpleRevenue, ProfitRankBonus::default())
    }

    pub fn with_top_products_limit(mut self, limit: usize) -> Self {
        self.top_products_limit = limit;
        self
    }
}

impl fmt::Debug for AnalysisOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalysisOptions")
            .field("calculate_revenue", &self.calculate_revenue.is_some())
            .field("calculate_bonus", &self.calculate_bonus.is_some())
            .field("top_products_limit", &self.top_products_limit)
            .finish()
    }
}
