//! Types library for the synthetic market-data engine
//!
//! This library provides the core type definitions shared by the engine and
//! its read-only consumers. Every type here is produced once at startup and
//! never mutated afterwards.
//!
//! # Modules
//! - `ids`: Identifiers (Ticker, OrderEntryId, UserId)
//! - `seed`: Per-instrument generation parameters
//! - `tick`: Simulated price/volume observations
//! - `instrument`: Aggregated instrument state and trend classification
//! - `order`: Order-book entry types
//! - `errors`: Error taxonomy

// Public modules
pub mod ids;
pub mod seed;
pub mod tick;
pub mod instrument;
pub mod order;
pub mod errors;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::ids::*;
    pub use crate::seed::*;
    pub use crate::tick::*;
    pub use crate::instrument::*;
    pub use crate::order::*;
    pub use crate::errors::*;
}
