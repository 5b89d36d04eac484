pub mod config;
pub mod logging;

pub mod client;
pub mod dispatch;
pub mod error;
pub mod media;
pub mod transport;

pub use client::{BulkImportRequest, Client, ClientBuilder};
pub use error::{BatchError, FailureKind, ItemFailure};
pub use media::{Attribution, Crop, ImportRequest, Media, MediaType, ResultSlot, Trim};
