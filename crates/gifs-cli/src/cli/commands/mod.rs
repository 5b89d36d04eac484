//! CLI command handlers. Each command is in its own file.

mod bulk;
mod config;
mod import;
mod output;
mod sources;

pub use bulk::run_bulk;
pub use config::run_config;
pub use import::{run_import, ImportArgs};
pub use sources::run_sources;
