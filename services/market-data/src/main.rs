use std::sync::Arc;

use anyhow::Context;
use market_data::export::{build_export, write_to_file};
use market_data::series::count_crashes;
use market_data::{EngineConfig, MarketSnapshot};
use tracing_subscriber::EnvFilter;

/// Env var naming the TOML config file
const CONFIG_ENV: &str = "MARKET_DATA_CONFIG";

/// Fall below this ratio of the previous tick to count as a crash.
const CRASH_RATIO: f64 = 0.8;

fn main() -> Result<(), anyhow::Error> {
    let config = match std::env::var(CONFIG_ENV) {
        Ok(path) => EngineConfig::load(&path).with_context(|| format!("loading config {path}"))?,
        Err(_) => EngineConfig::default(),
    };

    // RUST_LOG wins over the config file
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!(
        version = market_data::SERVICE_VERSION,
        tick_count = config.tick_count,
        registry = ?config.registry_path,
        "Starting Market Data engine"
    );

    let snapshot = match MarketSnapshot::from_config(&config) {
        Ok(snapshot) => Arc::new(snapshot),
        Err(e) => {
            tracing::error!(error = %e, "Failed to build market snapshot");
            return Err(e).context("building market snapshot");
        }
    };

    for inst in snapshot.instruments() {
        let book = snapshot.orders_for(inst.ticker.as_str());
        tracing::info!(
            ticker = %inst.ticker,
            price = inst.current_price,
            change_pct = inst.change_percent,
            trend = inst.trend.as_str(),
            open = inst.open_price(),
            high = inst.session_high(),
            low = inst.session_low(),
            volume = inst.volume,
            market_cap = inst.market_cap,
            best_bid = ?book.best_bid(),
            best_ask = ?book.best_ask(),
            "Instrument summary"
        );
        tracing::trace!(
            ticker = %inst.ticker,
            crashes = count_crashes(
                inst.open_price(),
                inst.price_history.get(1..).unwrap_or_default(),
                CRASH_RATIO,
            ),
            "Crash ticks"
        );
    }

    let checksum = snapshot.checksum().context("hashing market snapshot")?;
    tracing::info!(checksum = %checksum, "Snapshot ready");

    if let Some(path) = &config.export_path {
        let export = build_export(&snapshot).context("building export")?;
        write_to_file(&export, path)
            .with_context(|| format!("writing export to {}", path.display()))?;
        tracing::info!(path = %path.display(), "Export written");
    }

    Ok(())
}
