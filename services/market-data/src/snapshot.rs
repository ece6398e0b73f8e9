//! Market snapshot
//!
//! Runs the full pipeline once and freezes the result:
//!
//! registry → series → aggregate → synthesize
//!
//! The snapshot owns every instrument and order entry and has no interior
//! mutability, so it can be shared behind an `Arc` by any number of readers.
//! `checksum()` hashes the canonical JSON encoding, letting two runs with
//! the same seed be compared without diffing the full book.

use std::collections::HashMap;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::info;
use types::errors::MarketError;
use types::ids::Ticker;
use types::instrument::Instrument;
use types::order::OrderBookEntry;

use crate::aggregate::aggregate;
use crate::config::{ConfigError, EngineConfig};
use crate::order_book::OrderBookView;
use crate::registry::Registry;
use crate::series::SeriesGenerator;
use crate::synthesizer::OrderBookSynthesizer;

/// Failure while building a snapshot from configuration.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Market(#[from] MarketError),
}

/// Frozen output of one engine run.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketSnapshot {
    instruments: Vec<Instrument>,
    index: HashMap<Ticker, usize>,
    orders: Vec<OrderBookEntry>,
    seed: Option<u64>,
}

#[derive(Serialize)]
struct ChecksumInput<'a> {
    instruments: &'a [Instrument],
    orders: &'a [OrderBookEntry],
}

/// Seeded source when `seed` is set, OS entropy otherwise.
pub fn random_source(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

impl MarketSnapshot {
    /// Generate every instrument in registry order, then the order book.
    pub fn generate<R: Rng + ?Sized>(
        registry: &Registry,
        config: &EngineConfig,
        rng: &mut R,
    ) -> Result<Self, MarketError> {
        let generator = SeriesGenerator::from_config(config);

        let mut instruments = Vec::with_capacity(registry.len());
        for seed_config in registry.iter() {
            let series = generator.generate(seed_config, rng);
            instruments.push(aggregate(seed_config, series)?);
        }

        let orders = OrderBookSynthesizer::from_config(config).synthesize(&instruments, rng);

        let index = instruments
            .iter()
            .enumerate()
            .map(|(i, inst)| (inst.ticker.clone(), i))
            .collect();

        info!(
            instruments = instruments.len(),
            orders = orders.len(),
            ticks_per_instrument = config.tick_count,
            seed = ?config.seed,
            "Market snapshot generated"
        );

        Ok(Self {
            instruments,
            index,
            orders,
            seed: config.seed,
        })
    }

    /// Build the registry and random source named by `config`, then generate.
    pub fn from_config(config: &EngineConfig) -> Result<Self, SnapshotError> {
        config.validate()?;
        let registry = match &config.registry_path {
            Some(path) => Registry::load(path)?,
            None => Registry::builtin().map_err(MarketError::from)?,
        };
        let mut rng = random_source(config.seed);
        Ok(Self::generate(&registry, config, &mut rng)?)
    }

    /// Exact, case-sensitive lookup by canonical ticker.
    pub fn instrument(&self, ticker: &str) -> Option<&Instrument> {
        self.index.get(ticker).map(|&i| &self.instruments[i])
    }

    /// All instruments in registry order.
    pub fn instruments(&self) -> &[Instrument] {
        &self.instruments
    }

    /// The full book in synthesis order.
    pub fn orders(&self) -> &[OrderBookEntry] {
        &self.orders
    }

    /// Pending entries for one ticker, split and sorted by side.
    ///
    /// Unknown tickers give an empty view.
    pub fn orders_for(&self, ticker: &str) -> OrderBookView {
        if self.index.contains_key(ticker) {
            OrderBookView::from_entries(ticker, &self.orders)
        } else {
            OrderBookView::empty(ticker)
        }
    }

    /// Seed the snapshot was generated with, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Hex SHA-256 of the instruments and orders as JSON.
    pub fn checksum(&self) -> serde_json::Result<String> {
        let input = ChecksumInput {
            instruments: &self.instruments,
            orders: &self.orders,
        };
        let bytes = serde_json::to_vec(&input)?;
        Ok(format!("{:x}", Sha256::digest(&bytes)))
    }
}
