// demos/notebook_example.rs

//! Worked example: valuing a hard-to-value intangible as a call option
//!
//! An intangible whose projected cash flows are worth 1000 today, and which
//! costs 1000 to bring to market within five years, is valued as a European
//! call with 10% volatility at a 2% risk-free rate.

use anyhow::Result;
use htvi_lib::{d1_d2, parity_gap, price, price_call, price_put, OptionType};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    println!("HTVI Option Valuation - Worked Example");
    println!("======================================");

    let (s, x, t, r, sigma) = (1000.0, 1000.0, 5.0, 0.02, 0.1);
    println!("  Projected value (S):  {:.2}", s);
    println!("  Exploitation cost (X): {:.2}", x);
    println!("  Horizon (T):           {:.1} years", t);
    println!("  Risk-free rate (r):    {:.2}%", r * 100.0);
    println!("  Volatility (sigma):    {:.1}%", sigma * 100.0);

    let (d1, d2) = d1_d2(s, x, t, r, sigma);
    println!("\n  d1 = {:.6}, d2 = {:.6}", d1, d2);

    let call = price_call(s, x, t, r, sigma);
    let put = price_put(s, x, t, r, sigma);
    println!("\n  Call value: {:.4}", call);
    println!("  Put value:  {:.4}", put);
    println!(
        "  Parity gap: {:.3e}",
        parity_gap(call, put, s, x, t, r)
    );

    // A static NPV view would value this intangible at S - X = 0; the option
    // value is what the flexibility to wait is worth.
    println!("\n  Static NPV (S - X):    {:.4}", s - x);
    println!("  Value of flexibility:  {:.4}", call - (s - x).max(0.0));

    // The checked path refuses an expired option.
    if let Err(e) = price(OptionType::Call, s, x, 0.0, r, sigma) {
        tracing::warn!(error = %e, "expired option rejected");
    }

    Ok(())
}
