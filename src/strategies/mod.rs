//! Pluggable calculation policies used by the aggregator.
//!
//! Both traits are implemented for plain functions and closures with the
//! matching signature, so callers can pass either a policy struct or a fn.

pub mod bonus;
pub mod revenue;

use rust_decimal::Decimal;

use crate::analysis::seller_stats::SellerStats;
use crate::data::models::{LineItem, Product};

/// Revenue earned by a single line item, or `None` when the line cannot be
/// priced (the aggregator skips it).
pub trait RevenueStrategy {
    fn revenue(&self, item: &LineItem, product: &Product) -> Option<Decimal>;
}

impl<F> RevenueStrategy for F
where
    F: Fn(&LineItem, &Product) -> Option<Decimal>,
{
    fn revenue(&self, item: &LineItem, product: &Product) -> Option<Decimal> {
        (self)(item, product)
    }
}

/// Bonus amount for the seller at `rank` (0-based, profit descending) out of
/// `total` sellers.
pub trait BonusStrategy {
    fn bonus(&self, rank: usize, total: usize, seller: &SellerStats) -> Decimal;
}

impl<F> BonusStrategy for F
where
    F: Fn(usize, usize, &SellerStats) -> Decimal,
{
    fn bonus(&self, rank: usize, total: usize, seller: &SellerStats) -> Decimal {
        (self)(rank, total, seller)
    }
}
