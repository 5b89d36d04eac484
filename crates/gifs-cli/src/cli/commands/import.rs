//! `gifs import <url>` – import a single media URL.

use anyhow::Result;
use gifs_core::{Client, ImportRequest, Trim};

use super::output;

/// Arguments of `gifs import`.
#[derive(Debug, Clone, Default)]
pub struct ImportArgs {
    pub url: String,
    pub title: Option<String>,
    pub tags: Vec<String>,
    pub trim_start: Option<f64>,
    pub trim_end: Option<f64>,
    pub nsfw: bool,
}

impl ImportArgs {
    pub fn into_request(self) -> ImportRequest {
        let trim = match (self.trim_start, self.trim_end) {
            (None, None) => None,
            (start, end) => Some(Trim {
                start: start.unwrap_or(0.0),
                end: end.unwrap_or(0.0),
            }),
        };
        ImportRequest {
            title: self.title.unwrap_or_default(),
            tags: self.tags,
            nsfw: self.nsfw,
            trim,
            ..ImportRequest::from_source(self.url)
        }
    }
}

pub async fn run_import(client: Client, args: ImportArgs, json: bool) -> Result<()> {
    let request = args.into_request();
    let slot = tokio::task::spawn_blocking(move || client.import(request)).await??;
    let slots = [slot];
    output::print_slots(&slots, json)?;
    output::ensure_all_imported(&slots)
}
