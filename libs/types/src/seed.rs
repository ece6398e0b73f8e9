//! Per-instrument generation parameters
//!
//! A `SeedConfig` drives the random walk for one ticker. Configs are
//! defined once (built-in or loaded from a registry file) and never mutated.

use crate::ids::Ticker;
use serde::{Deserialize, Serialize};

/// Generation parameters for one synthetic instrument
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedConfig {
    pub ticker: Ticker,
    pub name: String,
    /// Price at the start of the session (> 0)
    pub start_price: f64,
    /// Total outstanding shares (> 0)
    pub total_shares: u64,
    /// Symmetric per-tick perturbation as a fraction of price (>= 0)
    #[serde(default)]
    pub volatility: f64,
    /// Per-tick drift fraction, may be zero or negative
    #[serde(default)]
    pub bias: f64,
    /// Probability in [0, 1] of a single-tick 30% shock
    #[serde(default)]
    pub crash_probability: f64,
    /// Baseline traded volume per tick (> 0)
    pub base_volume: u64,
}

impl SeedConfig {
    /// Create a config with no volatility, drift or shocks
    pub fn new(
        ticker: impl Into<Ticker>,
        name: impl Into<String>,
        start_price: f64,
        total_shares: u64,
        base_volume: u64,
    ) -> Self {
        Self {
            ticker: ticker.into(),
            name: name.into(),
            start_price,
            total_shares,
            volatility: 0.0,
            bias: 0.0,
            crash_probability: 0.0,
            base_volume,
        }
    }

    pub fn with_volatility(mut self, volatility: f64) -> Self {
        self.volatility = volatility;
        self
    }

    pub fn with_bias(mut self, bias: f64) -> Self {
        self.bias = bias;
        self
    }

    pub fn with_crash_probability(mut self, probability: f64) -> Self {
        self.crash_probability = probability;
        self
    }
}
