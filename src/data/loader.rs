//! Loading sales data from JSON.
//!
//! The structural check runs on the raw JSON value first so that a missing,
//! mistyped or empty collection is reported as invalid input rather than as a
//! generic deserialization failure.

use serde_json::Value;
use std::path::Path;
use tracing::debug;

use crate::analysis::errors::AnalysisError;

use super::models::SalesData;

const COLLECTIONS: [&str; 3] = ["sellers", "products", "purchase_records"];

impl SalesData {
    /// Validate the shape of `value` and deserialize it.
    pub fn from_value(value: Value) -> Result<Self, AnalysisError> {
        let object = match &value {
            Value::Null => return Err(AnalysisError::InvalidInput("data is missing".to_string())),
            Value::Object(object) => object,
            _ => {
                return Err(AnalysisError::InvalidInput(
                    "data must be an object".to_string(),
                ))
            }
        };

        for key in COLLECTIONS {
            match object.get(key) {
                None | Some(Value::Null) => {
                    return Err(AnalysisError::InvalidInput(format!("{key} is missing")));
                }
                Some(Value::Array(entries)) if entries.is_empty() => {
                    return Err(AnalysisError::InvalidInput(format!("{key} is empty")));
                }
                Some(Value::Array(_)) => {}
                Some(_) => {
                    return Err(AnalysisError::InvalidInput(format!(
                        "{key} must be an array"
                    )));
                }
            }
        }

        Ok(serde_json::from_value(value)?)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, AnalysisError> {
        let value: Value = serde_json::from_str(raw)?;
        Self::from_value(value)
    }
}

/// Read and parse a sales data file.
pub fn load_sales_data(path: impl AsRef<Path>) -> Result<SalesData, AnalysisError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)?;
    let data = SalesData::from_json_str(&raw)?;
    debug!(
        path = %path.display(),
        sellers = data.sellers.len(),
        products = data.products.len(),
        purchase_records = data.purchase_records.len(),
        "Sales data parsed"
    );
    Ok(data)
}
