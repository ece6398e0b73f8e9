//! Order book synthesizer
//!
//! Fabricates a handful of resting limit orders per instrument, priced
//! around its current price:
//!
//! - 2 bids in `[0.97, 0.995) × price`
//! - 1 or 2 asks in `[1.005, 1.03) × price`
//!
//! The gap between 0.995 and 1.005 keeps every instrument's book uncrossed.
//! Instruments at even positions get 2 asks, odd positions get 1. A counter
//! running across the whole book numbers the entries and picks the user
//! from a fixed pool.

use rand::Rng;
use tracing::debug;
use types::ids::{OrderEntryId, UserId};
use types::instrument::Instrument;
use types::order::{OrderBookEntry, OrderStatus, Side};

use crate::config::EngineConfig;

/// Bids per instrument.
pub const BIDS_PER_INSTRUMENT: usize = 2;

/// Bid limit as a fraction of current price: `[low, high)`.
pub const BID_BAND: (f64, f64) = (0.97, 0.995);

/// Ask limit as a fraction of current price: `[low, high)`.
pub const ASK_BAND: (f64, f64) = (1.005, 1.03);

/// Order quantity range: `[low, high)`.
pub const QUANTITY_RANGE: (u32, u32) = (10, 500);

/// Users the synthesized orders are attributed to.
pub const USER_POOL: [&str; 5] = ["usr-alpha", "usr-beta", "usr-gamma", "usr-delta", "usr-epsilon"];

/// Asks for the instrument at `position`: 2 on even, 1 on odd.
pub fn ask_count(position: usize) -> usize {
    if position % 2 == 0 {
        2
    } else {
        1
    }
}

/// Builds the initial order book for a set of instruments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderBookSynthesizer {
    /// Unix millis; creation times start here
    pub session_start_ms: i64,
    /// Creation times fall in `[start, start + window)`
    pub order_window_ms: i64,
}

impl OrderBookSynthesizer {
    pub fn new(session_start_ms: i64, order_window_ms: i64) -> Self {
        Self {
            session_start_ms,
            order_window_ms,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.session_start_ms(), config.order_window_ms)
    }

    /// Synthesize entries for every instrument, in the given order.
    pub fn synthesize<R: Rng + ?Sized>(
        &self,
        instruments: &[Instrument],
        rng: &mut R,
    ) -> Vec<OrderBookEntry> {
        let mut entries = Vec::with_capacity(instruments.len() * (BIDS_PER_INSTRUMENT + 2));
        let mut counter: u64 = 0;

        for (position, instrument) in instruments.iter().enumerate() {
            let price = instrument.current_price;

            for _ in 0..BIDS_PER_INSTRUMENT {
                let limit = price * rng.gen_range(BID_BAND.0..BID_BAND.1);
                entries.push(self.entry(instrument, Side::BUY, limit, &mut counter, rng));
            }

            let asks = ask_count(position);
            for _ in 0..asks {
                let limit = price * rng.gen_range(ASK_BAND.0..ASK_BAND.1);
                entries.push(self.entry(instrument, Side::SELL, limit, &mut counter, rng));
            }

            debug!(
                ticker = %instrument.ticker,
                bids = BIDS_PER_INSTRUMENT,
                asks,
                "Synthesized order book"
            );
        }

        entries
    }

    fn entry<R: Rng + ?Sized>(
        &self,
        instrument: &Instrument,
        side: Side,
        limit_price: f64,
        counter: &mut u64,
        rng: &mut R,
    ) -> OrderBookEntry {
        let id = OrderEntryId::from_parts(&instrument.ticker, *counter);
        *counter += 1;

        OrderBookEntry {
            id,
            ticker: instrument.ticker.clone(),
            side,
            quantity: rng.gen_range(QUANTITY_RANGE.0..QUANTITY_RANGE.1),
            limit_price,
            status: OrderStatus::Pending,
            user_id: UserId::new(USER_POOL[(*counter % USER_POOL.len() as u64) as usize]),
            created_at: self.session_start_ms + rng.gen_range(0..self.order_window_ms.max(1)),
        }
    }
}
