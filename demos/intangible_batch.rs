// demos/intangible_batch.rs

//! Values a portfolio of intangibles read from CSV
//!
//! Usage: `cargo run --example intangible_batch -- [intangibles.csv] [valuation.toml]`

use anyhow::Result;
use htvi_lib::{load_intangibles, price_intangibles, ValuationConfig};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let csv_path = args
        .next()
        .unwrap_or_else(|| "tests/data/intangibles.csv".to_string());
    let config = match args.next() {
        Some(path) => ValuationConfig::from_file(path)?,
        None => ValuationConfig::notebook(),
    };

    let rows = load_intangibles(&csv_path)?;
    tracing::info!(path = %csv_path, rows = rows.len(), "intangibles loaded");

    let results = price_intangibles(rows, &config)?;

    println!(
        "{:<24} {:<5} {:>10} {:>10} {:>6} {:>6} {:>12} {:>12}",
        "Intangible", "Type", "Value (S)", "Cost (X)", "T", "Vol", "Option val", "Time value"
    );
    println!("{}", "-".repeat(94));
    for r in &results {
        println!(
            "{:<24} {:<5} {:>10.2} {:>10.2} {:>6.2} {:>5.1}% {:>12.4} {:>12.4}",
            r.name,
            r.option_type,
            r.underlying_value,
            r.strike_price,
            r.years_to_exp,
            r.volatility * 100.0,
            r.model_price,
            r.time_value
        );
    }

    let total: f64 = results.iter().map(|r| r.model_price).sum();
    println!("{}", "-".repeat(94));
    println!("Total option value: {:.2}", total);

    Ok(())
}
