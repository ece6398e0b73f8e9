//! Per-ticker order book view
//!
//! Splits the synthesized book for one ticker into sides:
//! - bids in descending limit-price order (best bid first)
//! - asks in ascending limit-price order (best ask first)
//!
//! Only `Pending` entries rest on the book. Ties keep synthesis order.

use serde::{Deserialize, Serialize};
use types::order::{OrderBookEntry, OrderStatus, Side};

/// Bid and ask sides of one ticker's book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBookView {
    pub ticker: String,
    /// Bids in descending price order (best first).
    pub bids: Vec<OrderBookEntry>,
    /// Asks in ascending price order (best first).
    pub asks: Vec<OrderBookEntry>,
}

impl OrderBookView {
    /// Build the view for `ticker` from the full book.
    pub fn from_entries<'a>(
        ticker: &str,
        entries: impl IntoIterator<Item = &'a OrderBookEntry>,
    ) -> Self {
        let mut bids = Vec::new();
        let mut asks = Vec::new();

        for entry in entries {
            if entry.ticker.as_str() != ticker || entry.status != OrderStatus::Pending {
                continue;
            }
            match entry.side {
                Side::BUY => bids.push(entry.clone()),
                Side::SELL => asks.push(entry.clone()),
            }
        }

        bids.sort_by(|a, b| b.limit_price.total_cmp(&a.limit_price));
        asks.sort_by(|a, b| a.limit_price.total_cmp(&b.limit_price));

        Self {
            ticker: ticker.to_string(),
            bids,
            asks,
        }
    }

    /// An empty book, e.g. for an unknown ticker.
    pub fn empty(ticker: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            bids: Vec::new(),
            asks: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }

    /// Highest bid limit price.
    pub fn best_bid(&self) -> Option<f64> {
        self.bids.first().map(|e| e.limit_price)
    }

    /// Lowest ask limit price.
    pub fn best_ask(&self) -> Option<f64> {
        self.asks.first().map(|e| e.limit_price)
    }

    /// Get the mid-market price (average of best bid and best ask).
    pub fn mid_price(&self) -> Option<f64> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some((bid + ask) / 2.0),
            _ => None,
        }
    }

    /// Get the spread between best ask and best bid.
    pub fn spread(&self) -> Option<f64> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(ask - bid),
            _ => None,
        }
    }

    /// True when the best bid meets or exceeds the best ask.
    pub fn is_crossed(&self) -> bool {
        matches!((self.best_bid(), self.best_ask()), (Some(bid), Some(ask)) if bid >= ask)
    }

    /// Total resting quantity on the bid side.
    pub fn bid_quantity(&self) -> u64 {
        self.bids.iter().map(|e| e.quantity as u64).sum()
    }

    /// Total resting quantity on the ask side.
    pub fn ask_quantity(&self) -> u64 {
        self.asks.iter().map(|e| e.quantity as u64).sum()
    }

    /// Top `max_levels` entries per side plus how many were cut off.
    pub fn depth(&self, max_levels: usize) -> DepthView {
        DepthView {
            ticker: self.ticker.clone(),
            bids: self.bids.iter().take(max_levels).cloned().collect(),
            asks: self.asks.iter().take(max_levels).cloned().collect(),
            bid_overflow: self.bids.len().saturating_sub(max_levels),
            ask_overflow: self.asks.len().saturating_sub(max_levels),
        }
    }
}

/// A depth-limited slice of a book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepthView {
    pub ticker: String,
    pub bids: Vec<OrderBookEntry>,
    pub asks: Vec<OrderBookEntry>,
    /// Bids beyond the depth limit
    pub bid_overflow: usize,
    /// Asks beyond the depth limit
    pub ask_overflow: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::ids::{OrderEntryId, Ticker, UserId};

    fn entry(ticker: &str, n: u64, side: Side, price: f64) -> OrderBookEntry {
        let ticker = Ticker::new(ticker);
        OrderBookEntry {
            id: OrderEntryId::from_parts(&ticker, n),
            ticker,
            side,
            quantity: 100,
            limit_price: price,
            status: OrderStatus::Pending,
            user_id: UserId::new("usr-alpha"),
            created_at: 0,
        }
    }

    fn book() -> Vec<OrderBookEntry> {
        vec![
            entry("MOON", 0, Side::BUY, 139.0),
            entry("MOON", 1, Side::BUY, 141.0),
            entry("MOON", 2, Side::SELL, 146.0),
            entry("MOON", 3, Side::SELL, 144.0),
            entry("ROCK", 4, Side::BUY, 87.0),
            entry("ROCK", 5, Side::SELL, 89.0),
        ]
    }

    #[test]
    fn test_empty_book() {
        let view = OrderBookView::empty("MOON");
        assert!(view.is_empty());
        assert!(view.best_bid().is_none());
        assert!(view.best_ask().is_none());
        assert!(view.mid_price().is_none());
        assert!(view.spread().is_none());
        assert!(!view.is_crossed());
    }

    #[test]
    fn test_split_and_sort() {
        let entries = book();
        let view = OrderBookView::from_entries("MOON", &entries);

        let bid_prices: Vec<f64> = view.bids.iter().map(|e| e.limit_price).collect();
        let ask_prices: Vec<f64> = view.asks.iter().map(|e| e.limit_price).collect();
        assert_eq!(bid_prices, vec![141.0, 139.0]);
        assert_eq!(ask_prices, vec![144.0, 146.0]);
        assert!(view.bids.iter().chain(&view.asks).all(|e| e.ticker.as_str() == "MOON"));
    }

    #[test]
    fn test_best_prices_spread_mid() {
        let entries = book();
        let view = OrderBookView::from_entries("MOON", &entries);

        assert_eq!(view.best_bid(), Some(141.0));
        assert_eq!(view.best_ask(), Some(144.0));
        assert_eq!(view.spread(), Some(3.0));
        assert_eq!(view.mid_price(), Some(142.5));
        assert!(!view.is_crossed());
        assert_eq!(view.bid_quantity(), 200);
        assert_eq!(view.ask_quantity(), 200);
    }

    #[test]
    fn test_crossed_detection() {
        let entries = vec![
            entry("BOOM", 0, Side::BUY, 101.0),
            entry("BOOM", 1, Side::SELL, 100.0),
        ];
        let view = OrderBookView::from_entries("BOOM", &entries);
        assert!(view.is_crossed());
    }

    #[test]
    fn test_non_pending_excluded() {
        let mut entries = book();
        entries[1].status = OrderStatus::Filled;
        entries[3].status = OrderStatus::Cancelled;

        let view = OrderBookView::from_entries("MOON", &entries);
        assert_eq!(view.best_bid(), Some(139.0));
        assert_eq!(view.best_ask(), Some(146.0));
    }

    #[test]
    fn test_unknown_ticker_is_empty() {
        let entries = book();
        let view = OrderBookView::from_entries("NOTREAL", &entries);
        assert!(view.is_empty());
    }

    #[test]
    fn test_depth_limits() {
        let entries: Vec<OrderBookEntry> = (0..10)
            .map(|i| entry("DOGE", i, Side::BUY, 10.0 + i as f64 * 0.01))
            .chain((10..13).map(|i| entry("DOGE", i, Side::SELL, 12.0 + i as f64 * 0.01)))
            .collect();
        let view = OrderBookView::from_entries("DOGE", &entries);

        let depth = view.depth(8);
        assert_eq!(depth.bids.len(), 8);
        assert_eq!(depth.asks.len(), 3);
        assert_eq!(depth.bid_overflow, 2);
        assert_eq!(depth.ask_overflow, 0);
        assert!(depth.bids[0].limit_price > depth.bids[1].limit_price);
        assert!(depth.asks[0].limit_price < depth.asks[1].limit_price);
    }

    #[test]
    fn test_view_serialization() {
        let entries = book();
        let view = OrderBookView::from_entries("ROCK", &entries);
        let json = serde_json::to_string(&view).unwrap();
        let deserialized: OrderBookView = serde_json::from_str(&json).unwrap();
        assert_eq!(view, deserialized);
    }
}
