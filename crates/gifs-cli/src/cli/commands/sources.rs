//! `gifs sources <url>...` – import several URLs in parallel.

use anyhow::Result;
use gifs_core::{BulkImportRequest, Client, ImportRequest};

use super::output;

pub async fn run_sources(
    client: Client,
    urls: Vec<String>,
    jobs: Option<usize>,
    json: bool,
) -> Result<()> {
    let slots = match jobs {
        // Same request shape as `import_sources`, with an explicit ceiling.
        Some(n) => {
            let requests = urls.iter().map(ImportRequest::from_source).collect();
            let bulk = BulkImportRequest::new(requests).with_concurrency(n);
            tokio::task::spawn_blocking(move || client.import_bulk(bulk)).await??
        }
        None => tokio::task::spawn_blocking(move || client.import_sources(urls.as_slice())).await??,
    };
    output::print_slots(&slots, json)?;
    output::ensure_all_imported(&slots)
}
