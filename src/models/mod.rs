pub mod bs;

/// Utility functions for parity checks and value decomposition
pub mod utils {
    use crate::valuation::types::OptionType;

    /// Present value of the strike: X·e^(−rT)
    pub fn discounted_strike(strike: f64, t: f64, r: f64) -> f64 {
        strike * (-r * t).exp()
    }

    /// Deviation from put-call parity: (C − P) − (S − X·e^(−rT)).
    ///
    /// Zero (up to rounding) for any pair priced with the same inputs.
    pub fn parity_gap(call: f64, put: f64, spot: f64, strike: f64, t: f64, r: f64) -> f64 {
        (call - put) - (spot - discounted_strike(strike, t, r))
    }

    /// Payoff if exercised today
    pub fn intrinsic_value(option_type: OptionType, spot: f64, strike: f64) -> f64 {
        match option_type {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }

    /// Limit of the option price as volatility goes to zero.
    pub fn zero_vol_limit(option_type: OptionType, spot: f64, strike: f64, t: f64, r: f64) -> f64 {
        let pv_strike = discounted_strike(strike, t, r);
        match option_type {
            OptionType::Call => (spot - pv_strike).max(0.0),
            OptionType::Put => (pv_strike - spot).max(0.0),
        }
    }

}
