//! Error types for the market-data engine
//!
//! Comprehensive error taxonomy using thiserror. Unknown tickers are not
//! an error: lookups return `Option` so callers can render an empty state.

use thiserror::Error;

/// Top-level engine error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarketError {
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Series error: {0}")]
    Series(#[from] SeriesError),
}

/// Malformed instrument registry. Fatal at startup.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    #[error("Registry has no instruments")]
    Empty,

    #[error("Duplicate ticker: {ticker}")]
    DuplicateTicker { ticker: String },

    #[error("Invalid start price for {ticker}: {price}")]
    InvalidStartPrice { ticker: String, price: f64 },

    #[error("Invalid total shares for {ticker}: {shares}")]
    InvalidShares { ticker: String, shares: u64 },

    #[error("Invalid volatility for {ticker}: {volatility}")]
    InvalidVolatility { ticker: String, volatility: f64 },

    #[error("Invalid bias for {ticker}: {bias}")]
    InvalidBias { ticker: String, bias: f64 },

    #[error("Crash probability for {ticker} must be in [0, 1]: {probability}")]
    InvalidCrashProbability { ticker: String, probability: f64 },

    #[error("Invalid base volume for {ticker}: {volume}")]
    InvalidBaseVolume { ticker: String, volume: u64 },
}

/// Price series that cannot be aggregated
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeriesError {
    #[error("Series for {ticker} has {len} ticks, at least 2 required")]
    TooShort { ticker: String, len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_error_display() {
        let err = RegistryError::DuplicateTicker {
            ticker: "MOON".to_string(),
        };
        assert_eq!(err.to_string(), "Duplicate ticker: MOON");
    }

    #[test]
    fn test_series_error_display() {
        let err = SeriesError::TooShort {
            ticker: "FLAT".to_string(),
            len: 1,
        };
        assert!(err.to_string().contains("FLAT"));
        assert!(err.to_string().contains("1 ticks"));
    }

    #[test]
    fn test_market_error_from_registry_error() {
        let registry_err = RegistryError::Empty;
        let market_err: MarketError = registry_err.into();
        assert!(matches!(market_err, MarketError::Registry(_)));
    }

    #[test]
    fn test_market_error_from_series_error() {
        let series_err = SeriesError::TooShort {
            ticker: "ROCK".to_string(),
            len: 0,
        };
        let market_err: MarketError = series_err.into();
        assert_eq!(
            market_err.to_string(),
            "Series error: Series for ROCK has 0 ticks, at least 2 required"
        );
    }
}
