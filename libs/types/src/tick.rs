//! Simulated price/volume observations

use crate::ids::Ticker;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lowest price a tick may carry. Prices are clamped here, never below.
pub const PRICE_FLOOR: f64 = 0.01;

/// One simulated observation at a point in synthetic time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTick {
    pub ticker: Ticker,
    pub price: f64,
    pub timestamp: i64, // Unix millis
    pub volume: u64,
}

impl PriceTick {
    /// Wall-clock time of this tick, if the timestamp is representable
    pub fn time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }
}
