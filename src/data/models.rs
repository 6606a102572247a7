//! Core data models for sales analysis.
//!
//! Input records (sellers, products, purchase records) deserialize straight
//! from the JSON wire shape; `ReportRow` is the serialized output row.
//!
//! Seller ids and SKUs are join keys. Exports sometimes write them as JSON
//! numbers, so both forms are accepted and stored as their decimal text.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Accept a key written either as a JSON string or as a JSON number.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawKey {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawKey::deserialize(deserializer)? {
        RawKey::Text(text) => text,
        RawKey::Number(number) => number.to_string(),
    })
}

// =============================================================================
// Input Models
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

impl Seller {
    /// First and last name joined by a single space.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(deserialize_with = "string_or_number")]
    pub sku: String,
    /// Cost basis per unit.
    pub purchase_price: Decimal,
    /// Catalog price per unit.
    pub sale_price: Decimal,
    /// Descriptive fields (name, category, ...) carried through untouched.
    #[serde(flatten)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(deserialize_with = "string_or_number")]
    pub sku: String,
    #[serde(default)]
    pub quantity: Option<i64>,
    /// Discount in percent, 0..=100.
    #[serde(default)]
    pub discount: Option<Decimal>,
    pub sale_price: Decimal,
}

impl LineItem {
    /// Quantity with a missing or zero value counted as a single unit.
    pub fn effective_quantity(&self) -> i64 {
        match self.quantity {
            Some(quantity) if quantity != 0 => quantity,
            _ => 1,
        }
    }

    /// Discount percent, zero when absent.
    pub fn effective_discount(&self) -> Decimal {
        self.discount.unwrap_or(Decimal::ZERO)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    #[serde(default)]
    pub receipt_id: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub seller_id: String,
    #[serde(default)]
    pub customer_id: Option<String>,
    pub items: Vec<LineItem>,
    #[serde(default)]
    pub total_amount: Option<Decimal>,
    #[serde(default)]
    pub total_discount: Option<Decimal>,
}

/// The three collections a report is built from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesData {
    pub sellers: Vec<Seller>,
    pub products: Vec<Product>,
    pub purchase_records: Vec<PurchaseRecord>,
}

// =============================================================================
// Report Models
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopProduct {
    pub sku: String,
    pub quantity: i64,
}

/// One output row per seller, monetary fields rounded to cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub seller_id: String,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub revenue: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub profit: Decimal,
    pub sales_count: u64,
    pub top_products: Vec<TopProduct>,
    #[serde(with = "rust_decimal::serde::float")]
    pub bonus: Decimal,
}
