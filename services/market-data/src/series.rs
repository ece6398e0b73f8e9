//! Price series generator
//!
//! Random walk with drift and discrete shocks, one tick per fixed step of
//! synthetic time. Each step:
//!
//! 1. symmetric perturbation `price * volatility * u`, `u` in [-1, 1)
//! 2. drift: `price * (1 + bias) + perturbation`
//! 3. with `crash_probability`, a shock `price *= 0.7`
//! 4. clamp to [`PRICE_FLOOR`]
//!
//! Volume per tick is `base_volume * v`, `v` in [0.5, 1.5), floored.
//!
//! The random source is always passed in; seeding it makes a run
//! reproducible.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use types::seed::SeedConfig;
use types::tick::{PriceTick, PRICE_FLOOR};

use crate::config::EngineConfig;

/// Multiplier applied to the price on a crash tick.
pub const CRASH_FACTOR: f64 = 0.7;

/// Maps a tick index to a timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClock {
    /// Unix millis of tick 0
    pub start_ms: i64,
    /// Millis between consecutive ticks (> 0)
    pub step_ms: i64,
}

impl SessionClock {
    pub fn new(start_ms: i64, step_ms: i64) -> Self {
        Self { start_ms, step_ms }
    }

    /// Timestamp of tick `index`.
    pub fn at(&self, index: usize) -> i64 {
        self.start_ms + index as i64 * self.step_ms
    }
}

/// Generate `length` ticks for one instrument.
pub fn generate_series<R: Rng + ?Sized>(
    config: &SeedConfig,
    length: usize,
    clock: SessionClock,
    rng: &mut R,
) -> Vec<PriceTick> {
    let mut ticks = Vec::with_capacity(length);
    let mut price = config.start_price;
    let mut floored = 0usize;

    for i in 0..length {
        let delta = price * config.volatility * rng.gen_range(-1.0_f64..1.0);
        price = price * (1.0 + config.bias) + delta;

        if config.crash_probability > 0.0 && rng.gen::<f64>() < config.crash_probability {
            price *= CRASH_FACTOR;
        }

        if price.is_nan() || price < PRICE_FLOOR {
            floored += 1;
            price = PRICE_FLOOR;
        }

        let volume = (config.base_volume as f64 * rng.gen_range(0.5_f64..1.5)).floor() as u64;

        ticks.push(PriceTick {
            ticker: config.ticker.clone(),
            price,
            timestamp: clock.at(i),
            volume,
        });
    }

    if floored > 0 {
        warn!(
            ticker = %config.ticker,
            floored_ticks = floored,
            floor = PRICE_FLOOR,
            "Price series hit the floor"
        );
    }

    debug!(
        ticker = %config.ticker,
        ticks = ticks.len(),
        last_price = ticks.last().map(|t| t.price),
        "Generated price series"
    );

    ticks
}

/// Count ticks whose price fell to at most `max_ratio` of the one before.
///
/// `start_price` stands in for the tick before the first, so a shock on
/// step 0 is counted too. With `max_ratio` around 0.8 this separates crash
/// ticks from ordinary noise for any volatility below ~10%.
pub fn count_crashes(start_price: f64, series: &[PriceTick], max_ratio: f64) -> usize {
    let mut previous = start_price;
    let mut crashes = 0;
    for tick in series {
        if tick.price <= previous * max_ratio {
            crashes += 1;
        }
        previous = tick.price;
    }
    crashes
}

/// Tick count and clock shared by every instrument in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesGenerator {
    pub tick_count: usize,
    pub clock: SessionClock,
}

impl SeriesGenerator {
    pub fn new(tick_count: usize, clock: SessionClock) -> Self {
        Self { tick_count, clock }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(
            config.tick_count,
            SessionClock::new(config.session_start_ms(), config.tick_interval_ms),
        )
    }

    pub fn generate<R: Rng + ?Sized>(&self, config: &SeedConfig, rng: &mut R) -> Vec<PriceTick> {
        generate_series(config, self.tick_count, self.clock, rng)
    }
}
