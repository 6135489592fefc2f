use anyhow::{anyhow, Context, Result};
use std::cmp::Ordering;
use std::path::Path;

use crate::models::utils::intrinsic_value;
use crate::valuation::config::ValuationConfig;
use crate::valuation::types::{IntangibleRow, OptionInputs, OptionType, PricingResult};

/// Price a single intangible at the given rate.
pub fn price_intangible(row: &IntangibleRow, rate: f64) -> Result<PricingResult> {
    let inputs = row
        .inputs(rate)
        .with_context(|| format!("invalid inputs for intangible '{}'", row.name))?;

    let model_price = inputs.price(row.option_type);
    let intrinsic = intrinsic_value(row.option_type, row.underlying_value, row.strike_price);

    Ok(PricingResult {
        name: row.name.clone(),
        option_type: row.option_type,
        underlying_value: row.underlying_value,
        strike_price: row.strike_price,
        years_to_exp: row.years_to_exp,
        volatility: row.volatility,
        model_price,
        intrinsic_value: intrinsic,
        time_value: model_price - intrinsic,
    })
}

/// Price a batch of intangibles.
///
/// Rows failing validation are skipped (and logged) when `config.skip_invalid`
/// is set; otherwise the first failure is returned. Results are sorted by
/// strike price, then by name.
pub fn price_intangibles(
    rows: Vec<IntangibleRow>,
    config: &ValuationConfig,
) -> Result<Vec<PricingResult>> {
    config.validate()?;

    let mut results = Vec::with_capacity(rows.len());
    for row in &rows {
        match price_intangible(row, config.risk_free_rate) {
            Ok(result) => results.push(result),
            Err(e) if config.skip_invalid => {
                let reason = format!("{:#}", e);
                tracing::warn!(name = %row.name, error = %reason, "skipping intangible");
            }
            Err(e) => return Err(e),
        }
    }

    tracing::debug!(
        priced = results.len(),
        skipped = rows.len() - results.len(),
        "batch valuation finished"
    );

    results.sort_by(|a, b| {
        a.strike_price
            .partial_cmp(&b.strike_price)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.name.cmp(&b.name))
    });
    Ok(results)
}

/// Option value across a grid of volatilities, other inputs held fixed.
///
/// Returns `(sigma, price)` pairs in grid order.
pub fn volatility_sweep(
    base: &OptionInputs,
    option_type: OptionType,
    volatilities: &[f64],
) -> Result<Vec<(f64, f64)>> {
    volatilities
        .iter()
        .map(|&sigma| {
            let inputs = base.with_volatility(sigma)?;
            Ok((sigma, inputs.price(option_type)))
        })
        .collect()
}

/// Option value across a grid of maturities, other inputs held fixed.
///
/// Returns `(T, price)` pairs in grid order.
pub fn maturity_sweep(
    base: &OptionInputs,
    option_type: OptionType,
    maturities: &[f64],
) -> Result<Vec<(f64, f64)>> {
    maturities
        .iter()
        .map(|&t| {
            let inputs = base.with_years_to_exp(t)?;
            Ok((t, inputs.price(option_type)))
        })
        .collect()
}

/// Load intangibles from a CSV file with header
/// `name,option_type,underlying_value,strike_price,years_to_exp,volatility`.
pub fn load_intangibles<P: AsRef<Path>>(path: P) -> Result<Vec<IntangibleRow>> {
    let path = path.as_ref();
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    read_intangibles(reader)
}

/// Same as [`load_intangibles`] for CSV text already in memory.
pub fn parse_intangibles(text: &str) -> Result<Vec<IntangibleRow>> {
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());
    read_intangibles(reader)
}

fn read_intangibles<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<Vec<IntangibleRow>> {
    let mut rows = Vec::new();
    for (i, record) in reader.deserialize().enumerate() {
        // +2: header line and 1-based numbering
        let row: IntangibleRow =
            record.map_err(|e| anyhow!("CSV line {}: {}", i + 2, e))?;
        rows.push(row);
    }
    tracing::debug!(rows = rows.len(), "loaded intangibles");
    Ok(rows)
}
