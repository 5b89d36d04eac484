//! HTTP transport used by import jobs.
//!
//! The dispatcher only depends on the `Transport` trait; `CurlTransport` is
//! the default implementation. Tests inject their own.

mod easy;
mod headers;

pub use easy::CurlTransport;
pub use headers::{merge_headers, Headers, API_KEY_HEADER};

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u32,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Failure to complete the HTTP exchange at all.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("{0}")]
    Curl(#[from] curl::Error),
}

/// Performs one JSON POST. Shared by every worker of a batch, so
/// implementations must be callable from several threads at once.
pub trait Transport: Send + Sync {
    fn post_json(&self, url: &str, headers: &Headers, body: &[u8])
        -> Result<RawResponse, TransportError>;
}
