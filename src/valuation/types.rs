use anyhow::{anyhow, Result};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use crate::models::bs::{price_call, price_put};

/// Exercise right of a European option
///
/// Deserializes through [`FromStr`], so batch files accept the same spellings
/// as `"...".parse()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum OptionType {
    Call,
    Put,
}

impl FromStr for OptionType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            other => Err(anyhow!("Invalid option type: {}", other)),
        }
    }
}

impl TryFrom<String> for OptionType {
    type Error = anyhow::Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => f.pad("call"),
            OptionType::Put => f.pad("put"),
        }
    }
}

/// The five Black-Scholes inputs, checked against the model's preconditions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionInputs {
    /// Current value of the underlying (S)
    pub spot: f64,
    /// Strike price (X)
    pub strike: f64,
    /// Time to maturity in years (T)
    pub years_to_exp: f64,
    /// Continuously-compounded risk-free rate (r)
    pub rate: f64,
    /// Annualized volatility (sigma)
    pub volatility: f64,
}

/// Helper function to validate the pricing preconditions.
fn validate_inputs(spot: f64, strike: f64, t: f64, rate: f64, sigma: f64) -> Result<()> {
    if spot <= 0.0 || !spot.is_finite() {
        return Err(anyhow!(
            "OptionInputs validation: spot (S={}) must be > 0 and finite",
            spot
        ));
    }
    if strike <= 0.0 || !strike.is_finite() {
        return Err(anyhow!(
            "OptionInputs validation: strike (X={}) must be > 0 and finite",
            strike
        ));
    }
    if t <= 0.0 || !t.is_finite() {
        return Err(anyhow!(
            "OptionInputs validation: time to maturity (T={}) must be > 0 and finite",
            t
        ));
    }
    if !rate.is_finite() {
        return Err(anyhow!(
            "OptionInputs validation: rate (r={}) must be finite",
            rate
        ));
    }
    if sigma <= 0.0 || !sigma.is_finite() {
        return Err(anyhow!(
            "OptionInputs validation: volatility (sigma={}) must be > 0 and finite",
            sigma
        ));
    }
    Ok(())
}

impl OptionInputs {
    /// Creates a validated input set. Fails on the first violated precondition.
    pub fn new(spot: f64, strike: f64, years_to_exp: f64, rate: f64, volatility: f64) -> Result<Self> {
        validate_inputs(spot, strike, years_to_exp, rate, volatility)?;

        Ok(Self {
            spot,
            strike,
            years_to_exp,
            rate,
            volatility,
        })
    }

    /// Validates the current input set (fields are public and may have been edited).
    pub fn validate(&self) -> Result<()> {
        validate_inputs(
            self.spot,
            self.strike,
            self.years_to_exp,
            self.rate,
            self.volatility,
        )
    }

    /// Copy with a different volatility, validated.
    pub fn with_volatility(&self, volatility: f64) -> Result<Self> {
        Self::new(self.spot, self.strike, self.years_to_exp, self.rate, volatility)
    }

    /// Copy with a different time to maturity, validated.
    pub fn with_years_to_exp(&self, years_to_exp: f64) -> Result<Self> {
        Self::new(self.spot, self.strike, years_to_exp, self.rate, self.volatility)
    }

    pub fn call_price(&self) -> f64 {
        price_call(
            self.spot,
            self.strike,
            self.years_to_exp,
            self.rate,
            self.volatility,
        )
    }

    pub fn put_price(&self) -> f64 {
        price_put(
            self.spot,
            self.strike,
            self.years_to_exp,
            self.rate,
            self.volatility,
        )
    }

    pub fn price(&self, option_type: OptionType) -> f64 {
        match option_type {
            OptionType::Call => self.call_price(),
            OptionType::Put => self.put_price(),
        }
    }
}

/// One intangible to value, as read from a batch file.
///
/// The intangible is modelled as an option: `underlying_value` is the present
/// value of its projected cash flows and `strike_price` the cost of exploiting it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IntangibleRow {
    /// Identifier of the intangible (patent family, trademark, ...)
    pub name: String,
    /// Option type: "call" or "put"
    pub option_type: OptionType,
    /// Present value of projected cash flows (S)
    pub underlying_value: f64,
    /// Exploitation cost (X)
    pub strike_price: f64,
    /// Time to expiration in years
    pub years_to_exp: f64,
    /// Annualized volatility of the underlying value (as decimal)
    pub volatility: f64,
}

impl IntangibleRow {
    /// Validated inputs for this row at the given risk-free rate.
    pub fn inputs(&self, rate: f64) -> Result<OptionInputs> {
        OptionInputs::new(
            self.underlying_value,
            self.strike_price,
            self.years_to_exp,
            rate,
            self.volatility,
        )
    }
}

/// Pricing output for one intangible
#[derive(Debug, Clone, PartialEq)]
pub struct PricingResult {
    pub name: String,
    pub option_type: OptionType,
    pub underlying_value: f64,
    pub strike_price: f64,
    pub years_to_exp: f64,
    pub volatility: f64,
    /// Black-Scholes value
    pub model_price: f64,
    /// Payoff if exercised today
    pub intrinsic_value: f64,
    /// model_price - intrinsic_value
    pub time_value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_type_parsing() {
        assert_eq!("call".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!(" PUT ".parse::<OptionType>().unwrap(), OptionType::Put);
        assert_eq!("C".parse::<OptionType>().unwrap(), OptionType::Call);
        assert!("straddle".parse::<OptionType>().is_err());
        assert_eq!(OptionType::Put.to_string(), "put");
    }

    #[test]
    fn test_option_type_deserializes_like_from_str() {
        #[derive(Deserialize)]
        struct Holder {
            kind: OptionType,
        }

        for (text, expected) in [
            ("kind = \"call\"", OptionType::Call),
            ("kind = \"Call\"", OptionType::Call),
            ("kind = \"PUT\"", OptionType::Put),
            ("kind = \"p\"", OptionType::Put),
        ] {
            let holder: Holder = toml::from_str(text).unwrap();
            assert_eq!(holder.kind, expected, "{}", text);
        }

        let err = toml::from_str::<Holder>("kind = \"swap\"").err().unwrap();
        assert!(err.to_string().contains("Invalid option type"), "got: {}", err);
    }

    #[test]
    fn test_inputs_validation() {
        assert!(OptionInputs::new(1000.0, 1000.0, 5.0, 0.02, 0.1).is_ok());
        assert!(OptionInputs::new(1000.0, 1000.0, 5.0, -0.01, 0.1).is_ok()); // negative rate is allowed

        assert!(OptionInputs::new(0.0, 1000.0, 5.0, 0.02, 0.1).is_err()); // zero spot
        assert!(OptionInputs::new(1000.0, -1.0, 5.0, 0.02, 0.1).is_err()); // negative strike
        assert!(OptionInputs::new(1000.0, 1000.0, 0.0, 0.02, 0.1).is_err()); // zero maturity
        assert!(OptionInputs::new(1000.0, 1000.0, 5.0, f64::NAN, 0.1).is_err()); // NaN rate
        assert!(OptionInputs::new(1000.0, 1000.0, 5.0, 0.02, 0.0).is_err()); // zero vol
        assert!(OptionInputs::new(1000.0, 1000.0, f64::INFINITY, 0.02, 0.1).is_err());
    }

    #[test]
    fn test_validation_message_names_parameter() {
        let err = OptionInputs::new(1000.0, 1000.0, 5.0, 0.02, 0.0).unwrap_err();
        assert!(err.to_string().contains("volatility"), "got: {}", err);
    }

    #[test]
    fn test_edited_inputs_revalidate() {
        let mut inputs = OptionInputs::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
        assert!(inputs.validate().is_ok());
        inputs.years_to_exp = -1.0;
        assert!(inputs.validate().is_err());
    }

    #[test]
    fn test_inputs_price_dispatch() {
        let inputs = OptionInputs::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
        assert!((inputs.price(OptionType::Call) - 10.450_583_572_185_565).abs() < 1e-8);
        assert!((inputs.price(OptionType::Put) - 5.573_526_022_256_971).abs() < 1e-8);
    }
}
