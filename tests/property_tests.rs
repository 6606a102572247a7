//! Property-based tests for the seller report.
//!
//! Random sellers, catalogs and receipts, including receipts for unknown
//! sellers and line items for unknown SKUs.

use proptest::prelude::*;
use rust_decimal::Decimal;

use seller_performance::data::models::{LineItem, Product, PurchaseRecord, SalesData, Seller};
use seller_performance::{analyze, analyze_stats, AnalysisOptions};

type RawItem = (usize, i64, u32);
type RawRecord = (usize, Vec<RawItem>);

fn build_data(seller_count: usize, prices: Vec<(u32, u32)>, records: Vec<RawRecord>) -> SalesData {
    let sellers = (0..seller_count)
        .map(|i| Seller {
            id: format!("seller_{i}"),
            first_name: format!("First{i}"),
            last_name: format!("Last{i}"),
        })
        .collect();

    let products = prices
        .iter()
        .enumerate()
        .map(|(i, &(purchase_cents, sale_cents))| Product {
            sku: format!("SKU_{i}"),
            purchase_price: Decimal::new(i64::from(purchase_cents), 2),
            sale_price: Decimal::new(i64::from(sale_cents), 2),
            attributes: Default::default(),
        })
        .collect();

    let purchase_records = records
        .into_iter()
        .map(|(seller_slot, items)| PurchaseRecord {
            receipt_id: None,
            date: None,
            // Slot == seller_count points at a seller that does not exist.
            seller_id: format!("seller_{seller_slot}"),
            customer_id: None,
            items: items
                .into_iter()
                .map(|(sku_slot, quantity, discount)| LineItem {
                    sku: format!("SKU_{sku_slot}"),
                    quantity: Some(quantity),
                    discount: Some(Decimal::from(discount)),
                    sale_price: prices
                        .get(sku_slot)
                        .map(|&(_, sale)| Decimal::new(i64::from(sale), 2))
                        .unwrap_or(Decimal::ONE),
                })
                .collect(),
            total_amount: None,
            total_discount: None,
        })
        .collect();

    SalesData {
        sellers,
        products,
        purchase_records,
    }
}

fn sales_data() -> impl Strategy<Value = SalesData> {
    (1usize..8, 1usize..6)
        .prop_flat_map(|(seller_count, product_count)| {
            let prices = prop::collection::vec((1u32..50_000, 1u32..80_000), product_count);
            let items = prop::collection::vec((0..=product_count, 0i64..6, 0u32..=100), 0..5);
            let records = prop::collection::vec((0..=seller_count, items), 1..25);
            (Just(seller_count), prices, records)
        })
        .prop_map(|(seller_count, prices, records)| build_data(seller_count, prices, records))
}

fn seller_slot(id: &str) -> usize {
    id.trim_start_matches("seller_").parse().unwrap()
}

proptest! {
    #[test]
    fn one_row_per_seller(data in sales_data()) {
        let rows = analyze(Some(&data), Some(&AnalysisOptions::with_defaults())).unwrap();
        prop_assert_eq!(rows.len(), data.sellers.len());

        let mut seen: Vec<usize> = rows.iter().map(|r| seller_slot(&r.seller_id)).collect();
        seen.sort_unstable();
        let expected: Vec<usize> = (0..data.sellers.len()).collect();
        prop_assert_eq!(seen, expected);
    }

    #[test]
    fn sorted_by_profit_with_stable_ties(data in sales_data()) {
        let stats = analyze_stats(Some(&data), Some(&AnalysisOptions::with_defaults())).unwrap();
        for pair in stats.windows(2) {
            prop_assert!(pair[0].profit >= pair[1].profit);
            if pair[0].profit == pair[1].profit {
                prop_assert!(seller_slot(&pair[0].seller_id) < seller_slot(&pair[1].seller_id));
            }
        }
    }

    #[test]
    fn last_rank_earns_nothing_beyond_podium(data in sales_data()) {
        let rows = analyze(Some(&data), Some(&AnalysisOptions::with_defaults())).unwrap();
        if rows.len() > 3 {
            prop_assert_eq!(rows[rows.len() - 1].bonus, Decimal::ZERO);
        }
    }

    #[test]
    fn top_products_are_bounded_and_descending(data in sales_data()) {
        let rows = analyze(Some(&data), Some(&AnalysisOptions::with_defaults())).unwrap();
        for row in &rows {
            prop_assert!(row.top_products.len() <= 10);
            prop_assert!(row.top_products.windows(2).all(|w| w[0].quantity >= w[1].quantity));
        }
    }

    #[test]
    fn analysis_is_deterministic(data in sales_data()) {
        let options = AnalysisOptions::with_defaults();
        let first = serde_json::to_string(&analyze(Some(&data), Some(&options)).unwrap()).unwrap();
        let second = serde_json::to_string(&analyze(Some(&data), Some(&options)).unwrap()).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn sales_count_matches_known_seller_receipts(data in sales_data()) {
        let rows = analyze(Some(&data), Some(&AnalysisOptions::with_defaults())).unwrap();
        let known = data
            .purchase_records
            .iter()
            .filter(|r| seller_slot(&r.seller_id) < data.sellers.len())
            .count() as u64;
        let counted: u64 = rows.iter().map(|r| r.sales_count).sum();
        prop_assert_eq!(counted, known);
    }
}
