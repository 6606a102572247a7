//! Sales aggregation: folds purchase records into per-seller statistics,
//! ranks sellers by profit and assigns bonuses.
//!
//! Pipeline:
//! 1. Validate data and options (nothing is built on failure)
//! 2. One `SellerStats` per seller, in input order
//! 3. Index sellers by id and products by SKU
//! 4. Fold purchase records; unknown sellers/SKUs are skipped with a warning
//! 5. Stable sort by profit, highest first
//! 6. Bonus per post-sort rank
//! 7. Top products per seller

use rust_decimal::Decimal;
use std::collections::HashMap;
use tracing::{debug, info, warn};

use crate::data::models::{Product, ReportRow, SalesData};
use crate::strategies::{BonusStrategy, RevenueStrategy};

use super::errors::AnalysisError;
use super::options::AnalysisOptions;
use super::seller_stats::SellerStats;

struct Validated<'a> {
    data: &'a SalesData,
    revenue: &'a dyn RevenueStrategy,
    bonus: &'a dyn BonusStrategy,
    top_products_limit: usize,
}

fn validate<'a>(
    data: Option<&'a SalesData>,
    options: Option<&'a AnalysisOptions>,
) -> Result<Validated<'a>, AnalysisError> {
    let data = data.ok_or_else(|| AnalysisError::InvalidInput("data is missing".to_string()))?;
    if data.sellers.is_empty() {
        return Err(AnalysisError::InvalidInput("sellers is empty".to_string()));
    }
    if data.products.is_empty() {
        return Err(AnalysisError::InvalidInput("products is empty".to_string()));
    }
    if data.purchase_records.is_empty() {
        return Err(AnalysisError::InvalidInput(
            "purchase_records is empty".to_string(),
        ));
    }

    let options = options
        .ok_or_else(|| AnalysisError::InvalidOptions("options are missing".to_string()))?;
    let revenue = options
        .calculate_revenue
        .as_deref()
        .ok_or(AnalysisError::MissingStrategy("calculate_revenue"))?;
    let bonus = options
        .calculate_bonus
        .as_deref()
        .ok_or(AnalysisError::MissingStrategy("calculate_bonus"))?;
    if options.top_products_limit == 0 {
        return Err(AnalysisError::InvalidOptions(
            "top_products_limit must be greater than zero".to_string(),
        ));
    }

    Ok(Validated {
        data,
        revenue,
        bonus,
        top_products_limit: options.top_products_limit,
    })
}

/// Build the seller report: one row per seller, ordered by profit descending.
pub fn analyze(
    data: Option<&SalesData>,
    options: Option<&AnalysisOptions>,
) -> Result<Vec<ReportRow>, AnalysisError> {
    let stats = analyze_stats(data, options)?;
    Ok(stats.iter().map(SellerStats::to_report_row).collect())
}

/// Same as [`analyze`] but returns the unrounded accumulators, including the
/// per-line contributions.
pub fn analyze_stats(
    data: Option<&SalesData>,
    options: Option<&AnalysisOptions>,
) -> Result<Vec<SellerStats>, AnalysisError> {
    let Validated {
        data,
        revenue,
        bonus,
        top_products_limit,
    } = validate(data, options)?;

    let mut stats: Vec<SellerStats> = data.sellers.iter().map(SellerStats::new).collect();

    // Later duplicates win, matching a plain keyed insert.
    let seller_index: HashMap<&str, usize> = data
        .sellers
        .iter()
        .enumerate()
        .map(|(slot, seller)| (seller.id.as_str(), slot))
        .collect();
    let product_index: HashMap<&str, &Product> = data
        .products
        .iter()
        .map(|product| (product.sku.as_str(), product))
        .collect();

    let mut skipped_records = 0usize;
    let mut skipped_items = 0usize;

    for record in &data.purchase_records {
        let Some(&slot) = seller_index.get(record.seller_id.as_str()) else {
            warn!(
                seller_id = %record.seller_id,
                receipt_id = ?record.receipt_id,
                "Seller not found, skipping purchase record"
            );
            skipped_records += 1;
            continue;
        };

        let seller = &mut stats[slot];
        seller.record_sale();

        for item in &record.items {
            let Some(product) = product_index.get(item.sku.as_str()) else {
                warn!(
                    sku = %item.sku,
                    seller_id = %record.seller_id,
                    receipt_id = ?record.receipt_id,
                    "Product not found, skipping line item"
                );
                skipped_items += 1;
                continue;
            };

            let quantity = item.effective_quantity();
            let recorded = revenue.revenue(item, product).and_then(|line_revenue| {
                let cost = product.purchase_price.checked_mul(Decimal::from(quantity))?;
                let profit = line_revenue.checked_sub(cost)?;
                seller.record_line(&item.sku, line_revenue, profit, quantity)
            });
            if recorded.is_none() {
                warn!(
                    sku = %item.sku,
                    seller_id = %record.seller_id,
                    receipt_id = ?record.receipt_id,
                    quantity,
                    sale_price = %item.sale_price,
                    "Line amount overflowed, skipping line item"
                );
                skipped_items += 1;
            }
        }
    }

    // `sort_by` is stable: equal profits keep seller input order.
    stats.sort_by(|a, b| b.profit.cmp(&a.profit));

    let total = stats.len();
    for (rank, seller) in stats.iter_mut().enumerate() {
        let amount = bonus.bonus(rank, total, seller);
        seller.bonus = amount;
        seller.top_products = seller.rank_products(top_products_limit);
        debug!(
            rank,
            seller_id = %seller.seller_id,
            profit = %seller.profit,
            bonus = %seller.bonus,
            "Bonus assigned"
        );
    }

    info!(
        sellers = total,
        products = data.products.len(),
        purchase_records = data.purchase_records.len(),
        skipped_records,
        skipped_items,
        "Sales analysis complete"
    );

    Ok(stats)
}
