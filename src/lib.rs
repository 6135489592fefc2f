//! # HTVI-Lib: Option Pricing for Hard-to-Value Intangibles
//!
//! `htvi-lib` prices European call and put options with the closed-form
//! Black-Scholes formula and applies them to the valuation of hard-to-value
//! intangibles (HTVI) in transfer-pricing work. An intangible whose future
//! exploitation is uncertain is treated as a call: the present value of its
//! projected cash flows plays the role of the underlying, the cost of bringing
//! it to market is the strike, and the uncertainty of the projection is the
//! volatility.
//!
//! ## Core Features
//!
//! - **Black-Scholes pricing**: `price_call` / `price_put` on five scalar inputs
//! - **Validated inputs**: [`OptionInputs`] rejects non-positive S, X, T or σ
//! - **Batch valuation**: CSV input, per-row intrinsic and time value
//! - **Sensitivity sweeps**: option value across volatility and maturity grids
//!
//! ## Quick Start
//!
//! ```rust
//! use htvi_lib::{price, price_call, price_put, OptionType};
//!
//! // Projected value 1000, exploitation cost 1000, five years, 2% rate, 10% vol
//! let call = price_call(1000.0, 1000.0, 5.0, 0.02, 0.1);
//! assert!((call - 140.66).abs() < 1e-2);
//!
//! // Put-call parity
//! let put = price_put(1000.0, 1000.0, 5.0, 0.02, 0.1);
//! let parity = 1000.0 - 1000.0 * (-0.1_f64).exp();
//! assert!((call - put - parity).abs() < 1e-9);
//!
//! // Validated path
//! assert!(price(OptionType::Call, 1000.0, 1000.0, 0.0, 0.02, 0.1).is_err());
//! ```
//!
//! ## Degenerate Inputs
//!
//! [`price_call`] and [`price_put`] evaluate the formula as written and do not
//! check their arguments: a zero maturity or volatility produces NaN or an
//! infinite `d1`. Every other entry point validates first and returns an error.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod models;
pub mod valuation;

// ================================================================================================
// IMPORTS
// ================================================================================================

use anyhow::Result;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Closed-form pricer
pub use models::bs::{d1_d2, norm_cdf, price_call, price_put};

// Parity and value decomposition
pub use models::utils::{discounted_strike, intrinsic_value, parity_gap, zero_vol_limit};

// Configuration, data types and batch pipeline
pub use valuation::{
    config::{SweepConfig, ValuationConfig},
    pipeline::{
        load_intangibles, maturity_sweep, parse_intangibles, price_intangible, price_intangibles,
        volatility_sweep,
    },
    types::{IntangibleRow, OptionInputs, OptionType, PricingResult},
};

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-configured valuation settings.
///
/// - [`notebook()`]: 2% risk-free rate, invalid rows skipped
/// - [`strict()`]: same rate, any invalid row fails the batch
/// - [`research()`]: dense sweep grids for sensitivity reports
pub mod default_configs {
    use crate::valuation::config::ValuationConfig;

    /// Settings of the worked example in the crate docs.
    ///
    /// ```rust
    /// use htvi_lib::default_configs;
    ///
    /// let config = default_configs::notebook();
    /// assert_eq!(config.risk_free_rate, 0.02);
    /// ```
    pub fn notebook() -> ValuationConfig {
        ValuationConfig::notebook()
    }

    /// Fail the whole batch on the first invalid row.
    ///
    /// Use this when every intangible in a file must be accounted for, e.g. in
    /// a documentation package where a silently dropped asset is worse than no
    /// result at all.
    pub fn strict() -> ValuationConfig {
        ValuationConfig::strict()
    }

    /// Dense volatility (1%..60%) and maturity (0.25y..10y) grids.
    pub fn research() -> ValuationConfig {
        ValuationConfig::research()
    }
}

/// Price a European option after validating its inputs.
///
/// # Arguments
///
/// * `option_type` - [`OptionType::Call`] or [`OptionType::Put`]
/// * `spot` - current value of the underlying, S > 0
/// * `strike` - strike price, X > 0
/// * `years_to_exp` - time to maturity in years, T > 0
/// * `rate` - continuously-compounded risk-free rate, finite
/// * `volatility` - annualized volatility, σ > 0
///
/// # Errors
///
/// * `anyhow::Error` naming the first violated precondition
///
/// # Example
///
/// ```rust
/// use htvi_lib::{price, OptionType};
///
/// let put = price(OptionType::Put, 1000.0, 1000.0, 5.0, 0.02, 0.1)?;
/// assert!((put - 45.50).abs() < 1e-2);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn price(
    option_type: OptionType,
    spot: f64,
    strike: f64,
    years_to_exp: f64,
    rate: f64,
    volatility: f64,
) -> Result<f64> {
    let inputs = OptionInputs::new(spot, strike, years_to_exp, rate, volatility)?;
    Ok(inputs.price(option_type))
}
