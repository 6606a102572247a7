//! Discounted line revenue.
//!
//! ```text
//! revenue = sale_price * quantity * (1 - discount / 100)
//! ```

use rust_decimal::Decimal;

use crate::data::models::{LineItem, Product};

use super::RevenueStrategy;

/// Default revenue formula. Uses the price recorded on the line item, not the
/// catalog price. Returns `None` when the amount does not fit in a `Decimal`.
pub fn calculate_simple_revenue(item: &LineItem, _product: &Product) -> Option<Decimal> {
    let quantity = Decimal::from(item.effective_quantity());
    let discount = item.effective_discount().checked_div(Decimal::ONE_HUNDRED)?;
    let remaining = Decimal::ONE.checked_sub(discount)?;
    item.sale_price.checked_mul(quantity)?.checked_mul(remaining)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRevenue;

impl RevenueStrategy for SimpleRevenue {
    fn revenue(&self, item: &LineItem, product: &Product) -> Option<Decimal> {
        calculate_simple_revenue(item, product)
    }
}
