//! Report rounding and roll-up helpers.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::data::models::ReportRow;

/// Round a monetary amount to cents, halves away from zero.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Totals across all rows of a report.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReportTotals {
    pub sellers: usize,
    pub sales_count: u64,
    pub revenue: Decimal,
    pub profit: Decimal,
    pub bonus: Decimal,
}

pub fn summarize(rows: &[ReportRow]) -> ReportTotals {
    rows.iter().fold(
        ReportTotals {
            sellers: rows.len(),
            ..ReportTotals::default()
        },
        |mut totals, row| {
            totals.sales_count = totals.sales_count.saturating_add(row.sales_count);
            totals.revenue = totals.revenue.saturating_add(row.revenue);
            totals.profit = totals.profit.saturating_add(row.profit);
            totals.bonus = totals.bonus.saturating_add(row.bonus);
            totals
        },
    )
}
