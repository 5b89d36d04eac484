//! `gifs config` – show config location and effective values.

use anyhow::Result;
use gifs_core::config::{self, GifsConfig};

pub fn run_config(cfg: &GifsConfig) -> Result<()> {
    println!("config file: {}", config::config_path()?.display());
    println!("endpoint:           {}", cfg.endpoint);
    println!(
        "api_key:            {}",
        if cfg.api_key.is_some() { "(set)" } else { "(not set)" }
    );
    println!("caller:             {}", cfg.caller.as_deref().unwrap_or("-"));
    println!("concurrent_imports: {}", cfg.concurrent_imports);
    println!("connect_timeout:    {}s", cfg.connect_timeout_secs);
    println!("timeout:            {}s", cfg.timeout_secs);
    for (name, value) in &cfg.headers {
        println!("header:             {}: {}", name, value);
    }
    Ok(())
}
