//! Snapshot export
//!
//! Serializes a snapshot to JSON for external consumption.

use std::path::Path;

use serde::{Deserialize, Serialize};
use types::instrument::Instrument;
use types::order::OrderBookEntry;

use crate::snapshot::MarketSnapshot;

/// Everything a downstream consumer needs to rebuild the views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotExport {
    pub version: String,
    pub generated_with_seed: Option<u64>,
    pub checksum: String,
    pub instruments: Vec<Instrument>,
    pub orders: Vec<OrderBookEntry>,
}

/// Build an export from a snapshot.
pub fn build_export(snapshot: &MarketSnapshot) -> serde_json::Result<SnapshotExport> {
    Ok(SnapshotExport {
        version: crate::SERVICE_VERSION.to_string(),
        generated_with_seed: snapshot.seed(),
        checksum: snapshot.checksum()?,
        instruments: snapshot.instruments().to_vec(),
        orders: snapshot.orders().to_vec(),
    })
}

/// Export as pretty-printed JSON.
pub fn export_json(export: &SnapshotExport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(export)
}

/// Write export to a file path.
pub fn write_to_file(export: &SnapshotExport, path: impl AsRef<Path>) -> std::io::Result<()> {
    let json = export_json(export)?;
    std::fs::write(path, json)
}
