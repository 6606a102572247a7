//! Per-seller running totals built during one analysis run.

use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::data::models::{ReportRow, Seller, TopProduct};

use super::report::round_money;

/// Revenue and profit contributed by one resolved line item.
#[derive(Debug, Clone, PartialEq)]
pub struct LineContribution {
    pub sku: String,
    pub revenue: Decimal,
    pub profit: Decimal,
    pub quantity: i64,
}

/// Accumulator for a single seller. Totals are kept unrounded.
#[derive(Debug, Clone)]
pub struct SellerStats {
    pub seller_id: String,
    pub name: String,
    pub revenue: Decimal,
    pub profit: Decimal,
    pub sales_count: u64,
    pub bonus: Decimal,
    pub items: Vec<LineContribution>,
    pub top_products: Vec<TopProduct>,
    /// Quantities per SKU in first-sold order.
    products_sold: Vec<(String, i64)>,
    sku_slots: HashMap<String, usize>,
}

impl SellerStats {
    pub fn new(seller: &Seller) -> Self {
        Self {
            seller_id: seller.id.clone(),
            name: seller.display_name(),
            revenue: Decimal::ZERO,
            profit: Decimal::ZERO,
            sales_count: 0,
            bonus: Decimal::ZERO,
            items: Vec::new(),
            top_products: Vec::new(),
            products_sold: Vec::new(),
            sku_slots: HashMap::new(),
        }
    }

    /// Count one purchase record for this seller.
    pub fn record_sale(&mut self) {
        self.sales_count += 1;
    }

    /// Add one resolved line item to the running totals.
    ///
    /// Returns `None` and leaves the seller untouched if any total would
    /// overflow.
    #[must_use]
    pub fn record_line(
        &mut self,
        sku: &str,
        revenue: Decimal,
        profit: Decimal,
        quantity: i64,
    ) -> Option<()> {
        let slot = self.sku_slots.get(sku).copied();
        let sku_quantity = match slot {
            Some(slot) => self.products_sold[slot].1.checked_add(quantity)?,
            None => quantity,
        };
        let revenue_total = self.revenue.checked_add(revenue)?;
        let profit_total = self.profit.checked_add(profit)?;

        self.revenue = revenue_total;
        self.profit = profit_total;
        match slot {
            Some(slot) => self.products_sold[slot].1 = sku_quantity,
            None => {
                self.sku_slots.insert(sku.to_string(), self.products_sold.len());
                self.products_sold.push((sku.to_string(), sku_quantity));
            }
        }

        self.items.push(LineContribution {
            sku: sku.to_string(),
            revenue,
            profit,
            quantity,
        });
        Some(())
    }

    /// SKU quantities in the order each SKU was first sold.
    pub fn products_sold(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
        self.products_sold
            .iter()
            .map(|(sku, quantity)| (sku.as_str(), *quantity))
    }

    pub fn quantity_sold(&self, sku: &str) -> i64 {
        self.sku_slots
            .get(sku)
            .map(|&slot| self.products_sold[slot].1)
            .unwrap_or(0)
    }

    /// Best sellers by quantity. Equal quantities keep first-sold order.
    pub fn rank_products(&self, limit: usize) -> Vec<TopProduct> {
        let mut ranked: Vec<TopProduct> = self
            .products_sold
            .iter()
            .map(|(sku, quantity)| TopProduct {
                sku: sku.clone(),
                quantity: *quantity,
            })
            .collect();
        ranked.sort_by(|a, b| b.quantity.cmp(&a.quantity));
        ranked.truncate(limit);
        ranked
    }

    pub fn to_report_row(&self) -> ReportRow {
        ReportRow {
            seller_id: self.seller_id.clone(),
            name: self.name.clone(),
            revenue: round_money(self.revenue),
            profit: round_money(self.profit),
            sales_count: self.sales_count,
            top_products: self.top_products.clone(),
            bonus: round_money(self.bonus),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn stats() -> SellerStats {
        SellerStats::new(&Seller {
            id: "seller_7".to_string(),
            first_name: "Olga".to_string(),
            last_name: "Kuznetsova".to_string(),
        })
    }

    #[test]
    fn new_seller_starts_empty() {
        let s = stats();
        assert_eq!(s.name, "Olga Kuznetsova");
        assert_eq!(s.revenue, Decimal::ZERO);
        assert_eq!(s.sales_count, 0);
        assert_eq!(s.products_sold().count(), 0);
        assert!(s.rank_products(10).is_empty());
    }

    #[test]
    fn record_line_accumulates_per_sku() {
        let mut s = stats();
        s.record_line("SKU_A", dec!(10), dec!(4), 2).unwrap();
        s.record_line("SKU_B", dec!(5), dec!(1), 1).unwrap();
        s.record_line("SKU_A", dec!(15), dec!(6), 3).unwrap();

        assert_eq!(s.revenue, dec!(30));
        assert_eq!(s.profit, dec!(11));
        assert_eq!(s.quantity_sold("SKU_A"), 5);
        assert_eq!(s.quantity_sold("SKU_B"), 1);
        assert_eq!(s.quantity_sold("SKU_C"), 0);
        assert_eq!(s.items.len(), 3);

        let order: Vec<&str> = s.products_sold().map(|(sku, _)| sku).collect();
        assert_eq!(order, vec!["SKU_A", "SKU_B"]);
    }

    #[test]
    fn overflowing_line_leaves_totals_untouched() {
        let mut s = stats();
        s.record_line("SKU_A", dec!(10), dec!(4), i64::MAX - 1).unwrap();

        // Per-SKU quantity would pass i64::MAX.
        assert_eq!(s.record_line("SKU_A", dec!(1), dec!(1), 2), None);
        // Revenue would pass Decimal::MAX.
        assert_eq!(s.record_line("SKU_B", Decimal::MAX, dec!(0), 1), None);

        assert_eq!(s.revenue, dec!(10));
        assert_eq!(s.profit, dec!(4));
        assert_eq!(s.quantity_sold("SKU_A"), i64::MAX - 1);
        assert_eq!(s.quantity_sold("SKU_B"), 0);
        assert_eq!(s.items.len(), 1);
    }

    #[test]
    fn rank_products_breaks_ties_by_first_sale() {
        let mut s = stats();
        s.record_line("SKU_C", dec!(1), dec!(1), 2).unwrap();
        s.record_line("SKU_A", dec!(1), dec!(1), 5).unwrap();
        s.record_line("SKU_B", dec!(1), dec!(1), 2).unwrap();

        let ranked = s.rank_products(10);
        let skus: Vec<&str> = ranked.iter().map(|p| p.sku.as_str()).collect();
        assert_eq!(skus, vec!["SKU_A", "SKU_C", "SKU_B"]);
    }

    #[test]
    fn rank_products_truncates() {
        let mut s = stats();
        for i in 0..12 {
            s.record_line(&format!("SKU_{i:02}"), dec!(1), dec!(1), i + 1).unwrap();
        }
        let ranked = s.rank_products(10);
        assert_eq!(ranked.len(), 10);
        assert_eq!(ranked[0].quantity, 12);
        assert_eq!(ranked[9].quantity, 3);
    }

    #[test]
    fn report_row_rounds_money_only() {
        let mut s = stats();
        s.record_sale();
        s.record_line("SKU_A", dec!(10.005), dec!(3.3333), 1).unwrap();
        s.bonus = dec!(0.499999);
        s.top_products = s.rank_products(10);

        let row = s.to_report_row();
        assert_eq!(row.revenue, dec!(10.01));
        assert_eq!(row.profit, dec!(3.33));
        assert_eq!(row.bonus, dec!(0.50));
        assert_eq!(row.sales_count, 1);
        assert_eq!(row.top_products.len(), 1);
        // Accumulator keeps full precision.
        assert_eq!(s.revenue, dec!(10.005));
    }
}
