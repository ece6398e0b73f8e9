//! Market Data Service
//!
//! Fabricates a self-consistent market from a fixed instrument registry:
//! - Per-instrument price series (random walk with drift and crash shocks)
//! - Aggregated instrument state (current price, volume, market cap, trend)
//! - A synthesized order book that is never crossed
//! - A frozen, checksummed snapshot with read-only lookups
//! - JSON export of the snapshot
//!
//! Every stage takes its random source as a parameter. A seeded
//! `ChaCha8Rng` reproduces a run exactly.
//!
//! # Architecture
//!
//! ```text
//!    Registry (seed configs)
//!        │
//!    ┌───▼────┐
//!    │ Series │  ← one tick per step, floor at 0.01
//!    └───┬────┘
//!        │
//!   ┌────▼─────┐
//!   │Aggregate │  ← current/previous, volume, cap, trend
//!   └────┬─────┘
//!        │
//!  ┌─────▼──────┐
//!  │Synthesizer │  ← bids below, asks above current price
//!  └─────┬──────┘
//!        │
//! ┌──────▼──────────────────────┐
//! │ MarketSnapshot (read-only)  │──► OrderBookView / Export
//! └─────────────────────────────┘
//! ```

pub mod aggregate;
pub mod config;
pub mod export;
pub mod order_book;
pub mod registry;
pub mod series;
pub mod snapshot;
pub mod synthesizer;

pub use config::{ConfigError, EngineConfig};
pub use registry::Registry;
pub use snapshot::{MarketSnapshot, SnapshotError};

// Library version
pub const SERVICE_VERSION: &str = "0.1.0";
