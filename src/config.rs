//! Configuration management.
//!
//! Loads settings for the report binary from environment variables and
//! .env file. The library itself reads no environment.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::analysis::options::DEFAULT_TOP_PRODUCTS_LIMIT;
use crate::strategies::bonus::BonusTiers;

/// Report binary configuration loaded from environment.
#[derive(Debug, Clone)]
pub struct Settings {
    // Input / output
    pub sales_data_path: String,
    pub report_output_path: String,
    pub report_pretty: bool,

    // Report shape
    pub top_products_limit: usize,

    // Bonus tiers
    pub bonus_top_rate: Decimal,
    pub bonus_podium_rate: Decimal,
    pub bonus_standard_rate: Decimal,
    pub bonus_last_rate: Decimal,

    // Logging
    pub log_level: String,
    pub log_json: bool,
}

impl Settings {
    /// Load settings from environment variables (and .env file).
    pub fn from_env() -> Self {
        // Try to load .env file (ignore if not found).
        let _ = dotenvy::dotenv();

        let tiers = BonusTiers::default();

        Self {
            sales_data_path: env_str("SALES_DATA_PATH", "data/sales.json"),
            report_output_path: env_str("REPORT_OUTPUT_PATH", ""),
            report_pretty: env_bool("REPORT_PRETTY", true),

            top_products_limit: env_usize("TOP_PRODUCTS_LIMIT", DEFAULT_TOP_PRODUCTS_LIMIT),

            bonus_top_rate: env_decimal("BONUS_TOP_RATE", tiers.top),
            bonus_podium_rate: env_decimal("BONUS_PODIUM_RATE", tiers.podium),
            bonus_standard_rate: env_decimal("BONUS_STANDARD_RATE", tiers.standard),
            bonus_last_rate: env_decimal("BONUS_LAST_RATE", tiers.last),

            log_level: env_str("LOG_LEVEL", "info"),
            log_json: env_bool("LOG_JSON", false),
        }
    }

    pub fn bonus_tiers(&self) -> BonusTiers {
        BonusTiers {
            top: self.bonus_top_rate,
            podium: self.bonus_podium_rate,
            standard: self.bonus_standard_rate,
            last: self.bonus_last_rate,
        }
    }

    /// Validate configuration, collecting every problem.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.sales_data_path.trim().is_empty() {
            errors.push("SALES_DATA_PATH must not be empty".to_string());
        }

        if self.top_products_limit == 0 {
            errors.push("TOP_PRODUCTS_LIMIT must be greater than 0".to_string());
        }

        let rates = [
            ("BONUS_TOP_RATE", self.bonus_top_rate),
            ("BONUS_PODIUM_RATE", self.bonus_podium_rate),
            ("BONUS_STANDARD_RATE", self.bonus_standard_rate),
            ("BONUS_LAST_RATE", self.bonus_last_rate),
        ];
        for (key, rate) in rates {
            if rate < Decimal::ZERO || rate > Decimal::ONE {
                errors.push(format!("{key} must be in [0, 1]"));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

// =============================================================================
// Environment helpers
// =============================================================================

fn env_str(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
        .unwrap_or(default)
}

fn env_decimal(key: &str, default: Decimal) -> Decimal {
    std::env::var(key)
        .ok()
        .and_then(|v| Decimal::from_str(v.trim()).ok())
        .unwrap_or(default)
}

fn env_usize(key: &str, default: usize) -> usize {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
