use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Grids used by the sensitivity sweeps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Volatility grid (as decimals)
    #[serde(default = "default_volatilities")]
    pub volatilities: Vec<f64>,
    /// Maturity grid (years)
    #[serde(default = "default_maturities")]
    pub maturities: Vec<f64>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            volatilities: default_volatilities(),
            maturities: default_maturities(),
        }
    }
}

/// Main configuration struct for a valuation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationConfig {
    /// Continuously-compounded risk-free rate applied to every row
    #[serde(default = "default_risk_free_rate")]
    pub risk_free_rate: f64,

    /// Skip rows that fail validation instead of failing the whole batch
    #[serde(default = "default_skip_invalid")]
    pub skip_invalid: bool,

    #[serde(default)]
    pub sweep: SweepConfig,
}

impl Default for ValuationConfig {
    fn default() -> Self {
        Self {
            risk_free_rate: default_risk_free_rate(),
            skip_invalid: default_skip_invalid(),
            sweep: SweepConfig::default(),
        }
    }
}

impl ValuationConfig {
    /// Settings of the worked HTVI example: 2% rate, lenient batches.
    pub fn notebook() -> Self {
        Self::default()
    }

    /// Any invalid row aborts the batch.
    pub fn strict() -> Self {
        Self {
            skip_invalid: false,
            ..Self::default()
        }
    }

    /// Dense grids for sensitivity reports.
    pub fn research() -> Self {
        Self {
            sweep: SweepConfig {
                volatilities: (1..=60).map(|i| i as f64 * 0.01).collect(),
                maturities: (1..=40).map(|i| i as f64 * 0.25).collect(),
            },
            ..Self::default()
        }
    }

    /// Parse a configuration from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: ValuationConfig =
            toml::from_str(s).context("failed to parse valuation config")?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading valuation config");
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).context("failed to serialize valuation config")
    }

    pub fn validate(&self) -> Result<()> {
        if !self.risk_free_rate.is_finite() {
            return Err(anyhow!(
                "ValuationConfig validation: risk_free_rate ({}) must be finite",
                self.risk_free_rate
            ));
        }
        if let Some(v) = self
            .sweep
            .volatilities
            .iter()
            .find(|v| **v <= 0.0 || !v.is_finite())
        {
            return Err(anyhow!(
                "ValuationConfig validation: sweep volatility ({}) must be > 0 and finite",
                v
            ));
        }
        if let Some(t) = self
            .sweep
            .maturities
            .iter()
            .find(|t| **t <= 0.0 || !t.is_finite())
        {
            return Err(anyhow!(
                "ValuationConfig validation: sweep maturity ({}) must be > 0 and finite",
                t
            ));
        }
        Ok(())
    }
}

fn default_risk_free_rate() -> f64 {
    0.02
}

fn default_skip_invalid() -> bool {
    true
}

fn default_volatilities() -> Vec<f64> {
    vec![0.05, 0.1, 0.15, 0.2, 0.3, 0.4, 0.5]
}

fn default_maturities() -> Vec<f64> {
    vec![1.0, 2.0, 3.0, 5.0, 7.0, 10.0]
}
