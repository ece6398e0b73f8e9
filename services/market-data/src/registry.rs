//! Instrument registry
//!
//! Ordered catalogue of seed configs, one per ticker. Validated once on
//! construction; a malformed registry is a fatal startup error.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;
use types::errors::RegistryError;
use types::ids::Ticker;
use types::seed::SeedConfig;

use crate::config::ConfigError;

/// Validated, ordered list of seed configs.
#[derive(Debug, Clone, PartialEq)]
pub struct Registry {
    configs: Vec<SeedConfig>,
}

/// On-disk layout: a `[[instrument]]` table array.
#[derive(Debug, Deserialize)]
struct RegistryFile {
    #[serde(rename = "instrument", default)]
    instruments: Vec<SeedConfig>,
}

impl Registry {
    /// Validate and wrap a list of seed configs, preserving order.
    pub fn new(configs: Vec<SeedConfig>) -> Result<Self, RegistryError> {
        if configs.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut seen = HashSet::with_capacity(configs.len());
        for config in &configs {
            validate_config(config)?;
            if !seen.insert(config.ticker.clone()) {
                return Err(RegistryError::DuplicateTicker {
                    ticker: config.ticker.to_string(),
                });
            }
        }

        debug!(instruments = configs.len(), "Registry validated");
        Ok(Self { configs })
    }

    /// The built-in six-instrument catalogue, validated like any other.
    pub fn builtin() -> Result<Self, RegistryError> {
        Self::new(builtin_configs())
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let file: RegistryFile = toml::from_str(raw)?;
        Ok(Self::new(file.instruments)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SeedConfig> {
        self.configs.iter()
    }

    pub fn configs(&self) -> &[SeedConfig] {
        &self.configs
    }

    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }

    pub fn get(&self, ticker: &str) -> Option<&SeedConfig> {
        self.configs.iter().find(|c| c.ticker.as_str() == ticker)
    }

    pub fn tickers(&self) -> Vec<Ticker> {
        self.configs.iter().map(|c| c.ticker.clone()).collect()
    }
}

fn validate_config(config: &SeedConfig) -> Result<(), RegistryError> {
    let ticker = || config.ticker.to_string();

    if !(config.start_price.is_finite() && config.start_price > 0.0) {
        return Err(RegistryError::InvalidStartPrice {
            ticker: ticker(),
            price: config.start_price,
        });
    }
    if config.total_shares == 0 {
        return Err(RegistryError::InvalidShares {
            ticker: ticker(),
            shares: config.total_shares,
        });
    }
    if !(config.volatility.is_finite() && config.volatility >= 0.0) {
        return Err(RegistryError::InvalidVolatility {
            ticker: ticker(),
            volatility: config.volatility,
        });
    }
    if !config.bias.is_finite() {
        return Err(RegistryError::InvalidBias {
            ticker: ticker(),
            bias: config.bias,
        });
    }
    if !(0.0..=1.0).contains(&config.crash_probability) {
        return Err(RegistryError::InvalidCrashProbability {
            ticker: ticker(),
            probability: config.crash_probability,
        });
    }
    if config.base_volume == 0 {
        return Err(RegistryError::InvalidBaseVolume {
            ticker: ticker(),
            volume: config.base_volume,
        });
    }
    Ok(())
}

fn builtin_configs() -> Vec<SeedConfig> {
    vec![
        SeedConfig::new("MOON", "Moonshot Industries", 142.57, 1_000_000, 5_000)
            .with_volatility(0.08),
        SeedConfig::new("ROCK", "Bedrock Holdings", 88.0, 5_000_000, 10_000)
            .with_volatility(0.002),
        SeedConfig::new("HYPE", "Hype Corp", 55.2, 2_000_000, 15_000)
            .with_volatility(0.03)
            .with_bias(0.003)
            .with_crash_probability(0.02),
        SeedConfig::new("DOGE", "Doge Dynamics", 12.44, 10_000_000, 80_000)
            .with_volatility(0.06),
        SeedConfig::new("BOOM", "Boom Technologies", 1_240.0, 500_000, 1_000)
            .with_volatility(0.04),
        SeedConfig::new("FLAT", "Flatline Corp", 25.0, 3_000_000, 500)
            .with_volatility(0.001),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat() -> SeedConfig {
        SeedConfig::new("FLAT", "Flatline Corp", 25.0, 3_000_000, 500).with_volatility(0.001)
    }

    #[test]
    fn test_builtin_is_valid() {
        let builtin = Registry::builtin().unwrap();
        assert_eq!(builtin.configs(), builtin_configs().as_slice());
        assert_eq!(builtin.len(), 6);
    }

    #[test]
    fn test_builtin_goes_through_validation() {
        // Same checks as a file registry: a broken entry is refused
        let mut configs = builtin_configs();
        configs[2].crash_probability = 1.5;
        assert!(matches!(
            Registry::new(configs),
            Err(RegistryError::InvalidCrashProbability { .. })
        ));
        assert_eq!(Registry::builtin(), Registry::new(builtin_configs()));
    }

    #[test]
    fn test_builtin_order() {
        let tickers: Vec<String> = Registry::builtin()
            .unwrap()
            .tickers()
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(tickers, vec!["MOON", "ROCK", "HYPE", "DOGE", "BOOM", "FLAT"]);
    }

    #[test]
    fn test_get() {
        let registry = Registry::builtin().unwrap();
        let hype = registry.get("HYPE").unwrap();
        assert_eq!(hype.name, "Hype Corp");
        assert_eq!(hype.crash_probability, 0.02);
        assert!(registry.get("hype").is_none());
        assert!(registry.get("NOTREAL").is_none());
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(Registry::new(vec![]), Err(RegistryError::Empty));
    }

    #[test]
    fn test_duplicate_ticker_rejected() {
        let err = Registry::new(vec![flat(), flat()]).unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateTicker {
                ticker: "FLAT".to_string()
            }
        );
    }

    #[test]
    fn test_non_positive_start_price_rejected() {
        let mut config = flat();
        config.start_price = 0.0;
        assert!(matches!(
            Registry::new(vec![config]),
            Err(RegistryError::InvalidStartPrice { .. })
        ));

        let mut config = flat();
        config.start_price = f64::NAN;
        assert!(matches!(
            Registry::new(vec![config]),
            Err(RegistryError::InvalidStartPrice { .. })
        ));
    }

    #[test]
    fn test_zero_shares_rejected() {
        let mut config = flat();
        config.total_shares = 0;
        assert!(matches!(
            Registry::new(vec![config]),
            Err(RegistryError::InvalidShares { .. })
        ));
    }

    #[test]
    fn test_out_of_range_parameters_rejected() {
        let config = flat().with_volatility(-0.1);
        assert!(matches!(
            Registry::new(vec![config]),
            Err(RegistryError::InvalidVolatility { .. })
        ));

        let config = flat().with_crash_probability(1.5);
        assert!(matches!(
            Registry::new(vec![config]),
            Err(RegistryError::InvalidCrashProbability { .. })
        ));

        let config = flat().with_bias(f64::INFINITY);
        assert!(matches!(
            Registry::new(vec![config]),
            Err(RegistryError::InvalidBias { .. })
        ));

        let mut config = flat();
        config.base_volume = 0;
        assert!(matches!(
            Registry::new(vec![config]),
            Err(RegistryError::InvalidBaseVolume { .. })
        ));
    }

    #[test]
    fn test_from_toml() {
        let raw = r#"
            [[instrument]]
            ticker = "ZETA"
            name = "Zeta Labs"
            start_price = 10.5
            total_shares = 100000
            volatility = 0.02
            base_volume = 250

            [[instrument]]
            ticker = "OMEGA"
            name = "Omega Partners"
            start_price = 99.0
            total_shares = 40000
            crash_probability = 0.1
            base_volume = 50
        "#;
        let registry = Registry::from_toml_str(raw).unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.configs()[0].ticker.as_str(), "ZETA");
        assert_eq!(registry.configs()[1].bias, 0.0);
        assert_eq!(registry.configs()[1].crash_probability, 0.1);
    }

    #[test]
    fn test_from_toml_invalid_registry() {
        let raw = r#"
            [[instrument]]
            ticker = "ZETA"
            name = "Zeta Labs"
            start_price = -1.0
            total_shares = 100000
            base_volume = 250
        "#;
        let err = Registry::from_toml_str(raw).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Registry(RegistryError::InvalidStartPrice { .. })
        ));
    }

    #[test]
    fn test_from_toml_lowercase_ticker_is_parse_error() {
        let raw = r#"
            [[instrument]]
            ticker = "zeta"
            name = "Zeta Labs"
            start_price = 1.0
            total_shares = 1
            base_volume = 1
        "#;
        assert!(matches!(
            Registry::from_toml_str(raw),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_from_toml_empty_file() {
        assert!(matches!(
            Registry::from_toml_str(""),
            Err(ConfigError::Registry(RegistryError::Empty))
        ));
    }
}
