//! Instrument aggregator
//!
//! Reduces a completed price series to current-state metrics. Needs at
//! least two ticks: the last is the current price, the one before it is
//! the baseline for change and trend.

use tracing::debug;
use types::errors::SeriesError;
use types::instrument::{Instrument, Trend};
use types::seed::SeedConfig;
use types::tick::PriceTick;

/// Build the aggregated state for one instrument from its series.
pub fn aggregate(config: &SeedConfig, series: Vec<PriceTick>) -> Result<Instrument, SeriesError> {
    let (current_price, previous_price) = match series.as_slice() {
        [.., previous, current] => (current.price, previous.price),
        _ => {
            return Err(SeriesError::TooShort {
                ticker: config.ticker.to_string(),
                len: series.len(),
            })
        }
    };

    let volume: u64 = series.iter().map(|t| t.volume).sum();
    let market_cap = current_price * config.total_shares as f64;

    let fractional_change = (current_price - previous_price) / previous_price;
    let trend = Trend::classify(fractional_change);

    debug!(
        ticker = %config.ticker,
        current_price,
        change_pct = fractional_change * 100.0,
        trend = trend.as_str(),
        "Aggregated instrument"
    );

    Ok(Instrument {
        ticker: config.ticker.clone(),
        name: config.name.clone(),
        current_price,
        previous_price,
        volume,
        market_cap,
        total_shares: config.total_shares,
        trend,
        change_percent: fractional_change * 100.0,
        price_history: series,
    })
}
