//! CLI for the gifs.com media importer.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use gifs_core::config;
use gifs_core::dispatch::TracingObserver;
use gifs_core::{Client, ClientBuilder};
use std::path::PathBuf;

use commands::{run_bulk, run_config, run_import, run_sources, ImportArgs};

/// Top-level CLI for the gifs.com media importer.
#[derive(Debug, Parser)]
#[command(name = "gifs")]
#[command(about = "gifs: import media into gifs.com, one URL or many in parallel", long_about = None)]
pub struct Cli {
    /// Print results as JSON instead of a table.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Import a single media URL.
    Import {
        /// HTTP/HTTPS URL of the media to import.
        url: String,

        /// Title for the imported media.
        #[arg(long)]
        title: Option<String>,

        /// Tag to attach (repeatable).
        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        /// Start of the clip, in seconds.
        #[arg(long, value_name = "SECS")]
        trim_start: Option<f64>,

        /// End of the clip, in seconds.
        #[arg(long, value_name = "SECS")]
        trim_end: Option<f64>,

        /// Mark the media as not safe for work.
        #[arg(long)]
        nsfw: bool,
    },

    /// Import several media URLs in parallel; results print in argument order.
    Sources {
        /// HTTP/HTTPS URLs to import.
        #[arg(required = true)]
        urls: Vec<String>,

        /// Run up to N imports concurrently (default from config, 10 if unset).
        #[arg(long, value_name = "N")]
        jobs: Option<usize>,
    },

    /// Import every request from a JSON file (an array of import requests).
    Bulk {
        /// Path to the JSON file.
        path: PathBuf,

        /// Run up to N imports concurrently (default from config, 10 if unset).
        #[arg(long, value_name = "N")]
        jobs: Option<usize>,
    },

    /// Show the config file location and effective settings.
    Config,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!(
            endpoint = %cfg.endpoint,
            concurrent_imports = cfg.concurrent_imports,
            "loaded config"
        );

        let client = || -> Result<Client> {
            let mut builder = ClientBuilder::from_config(&cfg).observer(TracingObserver);
            if let Ok(key) = std::env::var("GIFS_API_KEY") {
                builder = builder.api_key(key);
            }
            builder.build()
        };

        match cli.command {
            CliCommand::Import {
                url,
                title,
                tags,
                trim_start,
                trim_end,
                nsfw,
            } => {
                let args = ImportArgs {
                    url,
                    title,
                    tags,
                    trim_start,
                    trim_end,
                    nsfw,
                };
                run_import(client()?, args, cli.json).await?
            }
            CliCommand::Sources { urls, jobs } => {
                run_sources(client()?, urls, jobs, cli.json).await?
            }
            CliCommand::Bulk { path, jobs } => run_bulk(client()?, &path, jobs, cli.json).await?,
            CliCommand::Config => run_config(&cfg)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
