//! Order-book entry types
//!
//! Entries are synthesized once around each instrument's current price.
//! Only `Pending` is ever produced; the other states exist for consumers.

use crate::ids::{OrderEntryId, Ticker, UserId};
use serde::{Deserialize, Serialize};

/// Order side (buyer or seller)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Buy order (bid)
    BUY,
    /// Sell order (ask)
    SELL,
}

impl Side {
    /// Get the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Side::BUY => Side::SELL,
            Side::SELL => Side::BUY,
        }
    }
}

/// Order status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Resting on the book
    Pending,
    Filled,
    Cancelled,
}

impl OrderStatus {
    /// Check if status is terminal
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Filled | OrderStatus::Cancelled)
    }
}

/// A resting limit order in the synthetic book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBookEntry {
    pub id: OrderEntryId,
    pub ticker: Ticker,
    pub side: Side,
    pub quantity: u32,
    pub limit_price: f64,
    pub status: OrderStatus,
    pub user_id: UserId,
    pub created_at: i64, // Unix millis
}

impl OrderBookEntry {
    pub fn is_bid(&self) -> bool {
        self.side == Side::BUY
    }

    pub fn is_ask(&self) -> bool {
        self.side == Side::SELL
    }

    /// Quantity × limit price
    pub fn notional(&self) -> f64 {
        self.quantity as f64 * self.limit_price
    }
}
