//! `gifs bulk <file.json>` – import every request listed in a JSON file.

use anyhow::{Context, Result};
use gifs_core::{BulkImportRequest, Client, ImportRequest};
use std::fs;
use std::path::Path;

use super::output;

/// Reads a JSON array of import requests.
pub(crate) fn read_requests(path: &Path) -> Result<Vec<ImportRequest>> {
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let requests: Vec<ImportRequest> =
        serde_json::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(requests)
}

pub async fn run_bulk(client: Client, path: &Path, jobs: Option<usize>, json: bool) -> Result<()> {
    let requests = read_requests(path)?;
    if requests.is_empty() {
        println!("No import requests in {}.", path.display());
        return Ok(());
    }
    tracing::info!(count = requests.len(), file = %path.display(), "bulk import from file");
    let bulk = BulkImportRequest {
        concurrent_imports: jobs,
        requests,
    };
    let slots = tokio::task::spawn_blocking(move || client.import_bulk(bulk)).await??;
    output::print_slots(&slots, json)?;
    output::ensure_all_imported(&slots)
}
