//! Seller performance report.
//!
//! Reads sales data (sellers, products, purchase records) from a JSON file,
//! ranks sellers by profit and writes the per-seller report as JSON.
//!
//! Configuration comes from the environment (see `config.rs`):
//! - SALES_DATA_PATH / REPORT_OUTPUT_PATH / REPORT_PRETTY
//! - TOP_PRODUCTS_LIMIT
//! - BONUS_TOP_RATE / BONUS_PODIUM_RATE / BONUS_STANDARD_RATE / BONUS_LAST_RATE
//! - LOG_LEVEL / LOG_JSON

use anyhow::Context;
use tracing::{error, info};

use seller_performance::analysis::report::summarize;
use seller_performance::config::Settings;
use seller_performance::data::loader::load_sales_data;
use seller_performance::strategies::bonus::ProfitRankBonus;
use seller_performance::strategies::revenue::SimpleRevenue;
use seller_performance::{analyze, AnalysisOptions};

fn main() -> anyhow::Result<()> {
    // Load configuration.
    let settings = Settings::from_env();

    // Initialize logging.
    init_logging(&settings);

    info!("=== Seller Performance Report ===");
    info!(
        data_path = %settings.sales_data_path,
        top_products_limit = settings.top_products_limit,
        bonus_tiers = ?settings.bonus_tiers(),
        "Configuration loaded"
    );

    // Validate settings.
    if let Err(errors) = settings.validate() {
        for e in &errors {
            error!(error = %e, "Configuration error");
        }
        anyhow::bail!("Configuration validation failed");
    }

    let data = load_sales_data(&settings.sales_data_path)
        .with_context(|| format!("Failed to load sales data from {}", settings.sales_data_path))?;
    info!(
        sellers = data.sellers.len(),
        products = data.products.len(),
        purchase_records = data.purchase_records.len(),
        "Sales data loaded"
    );

    let options = AnalysisOptions::new(SimpleRevenue, ProfitRankBonus::new(settings.bonus_tiers()))
        .with_top_products_limit(settings.top_products_limit);
    let rows = analyze(Some(&data), Some(&options))?;

    let rendered = if settings.report_pretty {
        serde_json::to_string_pretty(&rows)?
    } else {
        serde_json::to_string(&rows)?
    };

    if settings.report_output_path.is_empty() {
        println!("{rendered}");
    } else {
        std::fs::write(&settings.report_output_path, rendered.as_bytes())
            .with_context(|| format!("Failed to write report to {}", settings.report_output_path))?;
        info!(path = %settings.report_output_path, "Report written");
    }

    let totals = summarize(&rows);
    info!(
        sellers = totals.sellers,
        sales_count = totals.sales_count,
        revenue = %totals.revenue,
        profit = %totals.profit,
        bonus = %totals.bonus,
        "Report totals"
    );

    Ok(())
}

fn init_logging(settings: &Settings) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));

    // Logs go to stderr so the report on stdout stays clean JSON.
    if settings.log_json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }
}
