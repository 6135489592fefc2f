// demos/default_scenarios.rs

//! Shows the preset valuation configurations and their TOML form

use anyhow::Result;
use htvi_lib::{default_configs, ValuationConfig};

fn describe(title: &str, config: &ValuationConfig) -> Result<()> {
    println!("{}", title);
    println!("   Risk-free rate: {:.2}%", config.risk_free_rate * 100.0);
    println!("   Skip invalid rows: {}", config.skip_invalid);
    println!(
        "   Sweep grid: {} volatilities x {} maturities",
        config.sweep.volatilities.len(),
        config.sweep.maturities.len()
    );
    println!("   As TOML:");
    for line in config.to_toml_string()?.lines() {
        println!("     {}", line);
    }
    println!();
    Ok(())
}

fn main() -> Result<()> {
    println!("HTVI-lib Default Configuration Examples\n");

    describe("1. Notebook configuration:", &default_configs::notebook())?;
    describe("2. Strict configuration (documentation packages):", &default_configs::strict())?;

    let research = default_configs::research();
    println!("3. Research configuration:");
    println!(
        "   Volatility grid: {:.0}% .. {:.0}%",
        research.sweep.volatilities.first().copied().unwrap_or_default() * 100.0,
        research.sweep.volatilities.last().copied().unwrap_or_default() * 100.0
    );
    println!(
        "   Maturity grid: {:.2}y .. {:.2}y",
        research.sweep.maturities.first().copied().unwrap_or_default(),
        research.sweep.maturities.last().copied().unwrap_or_default()
    );

    // 4. Custom configuration from TOML
    let custom = ValuationConfig::from_toml_str("risk_free_rate = 0.045\nskip_invalid = false\n")?;
    println!();
    describe("4. Custom configuration (parsed from TOML):", &custom)?;

    Ok(())
}
