//! Identifier types for synthetic market entities
//!
//! Tickers are the primary key for everything the engine produces: seed
//! configs, ticks, instruments and order-book entries are all keyed by one.
//! Order entry ids are derived from a ticker and a running counter so that
//! a seeded run always reproduces the same ids.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Instrument ticker symbol (e.g., "HYPE", "DOGE")
///
/// Canonical form is uppercase ASCII alphanumeric. Lookups are
/// case-sensitive on this form; use [`Ticker::normalize`] on user input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ticker(String);

impl Ticker {
    /// Create a new Ticker from a canonical symbol
    ///
    /// # Panics
    /// Panics if the symbol is empty or not uppercase ASCII alphanumeric
    pub fn new(symbol: impl Into<String>) -> Self {
        let s = symbol.into();
        assert!(Self::is_canonical(&s), "Ticker must be uppercase ASCII alphanumeric");
        Self(s)
    }

    /// Try to create a Ticker, returning None if not canonical
    pub fn try_new(symbol: impl Into<String>) -> Option<Self> {
        let s = symbol.into();
        if Self::is_canonical(&s) {
            Some(Self(s))
        } else {
            None
        }
    }

    /// Normalize free-form input (trim + uppercase) into a Ticker
    pub fn normalize(input: &str) -> Option<Self> {
        Self::try_new(input.trim().to_ascii_uppercase())
    }

    /// Get the symbol string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn is_canonical(s: &str) -> bool {
        !s.is_empty()
            && s.chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Ticker {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl TryFrom<String> for Ticker {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_new(s.clone()).ok_or_else(|| format!("invalid ticker: {s:?}"))
    }
}

impl From<Ticker> for String {
    fn from(t: Ticker) -> Self {
        t.0
    }
}

impl std::borrow::Borrow<str> for Ticker {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Unique identifier for a synthesized order-book entry
///
/// Format: "ord-<TICKER>-<counter>", where the counter runs across the
/// whole book, so ids are unique book-wide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderEntryId(String);

impl OrderEntryId {
    /// Build an id from the owning ticker and the book-wide counter
    pub fn from_parts(ticker: &Ticker, counter: u64) -> Self {
        Self(format!("ord-{}-{}", ticker, counter))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderEntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Originating user of a synthesized order
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
