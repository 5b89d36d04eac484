//! gifs.com import client.
//!
//! `Client` owns the transport, credentials and default concurrency. Every
//! import goes through `import_bulk`: single imports and source lists are
//! wrapped into a batch, so all three share the same ordering and failure
//! isolation guarantees.

mod job;

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fmt;
use std::io::Read;
use std::sync::Arc;
use std::time::Duration;

use crate::config::GifsConfig;
use crate::dispatch::{self, CorrelationId, NoopObserver, Observer};
use crate::error::BatchError;
use crate::media::{ImportRequest, ResultSlot};
use crate::transport::{CurlTransport, Transport};

use job::ImportJob;

pub const IMPORT_ENDPOINT: &str = "https://api.gifs.com/media/import";

/// Ceiling used when a batch does not set one (or sets zero).
pub const DEFAULT_CONCURRENT_IMPORTS: usize = 10;

/// Read-only request settings shared by every job of a batch.
#[derive(Debug, Clone)]
pub(crate) struct ImportSettings {
    pub(crate) endpoint: String,
    pub(crate) api_key: Option<String>,
    pub(crate) caller: Option<String>,
    pub(crate) headers: BTreeMap<String, String>,
}

/// Several imports submitted together. Results come back in the order of
/// `requests`.
#[derive(Debug, Clone, Default)]
pub struct BulkImportRequest {
    /// Maximum imports in flight at once; `None` or `Some(0)` uses the
    /// client default.
    pub concurrent_imports: Option<usize>,
    pub requests: Vec<ImportRequest>,
}

impl BulkImportRequest {
    pub fn new(requests: Vec<ImportRequest>) -> Self {
        Self {
            concurrent_imports: None,
            requests,
        }
    }

    pub fn with_concurrency(mut self, concurrent_imports: usize) -> Self {
        self.concurrent_imports = Some(concurrent_imports);
        self
    }
}

#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn Transport>,
    settings: Arc<ImportSettings>,
    default_concurrency: usize,
    observer: Arc<dyn Observer>,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("endpoint", &self.settings.endpoint)
            .field("api_key", &self.settings.api_key.as_ref().map(|_| "<redacted>"))
            .field("default_concurrency", &self.default_concurrency)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Client with the default endpoint, curl transport and no API key.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Client configured from `config.toml` values.
    pub fn from_config(cfg: &GifsConfig) -> Result<Self> {
        ClientBuilder::from_config(cfg).build()
    }

    pub fn endpoint(&self) -> &str {
        &self.settings.endpoint
    }

    pub fn api_key(&self) -> Option<&str> {
        self.settings.api_key.as_deref()
    }

    pub fn default_concurrency(&self) -> usize {
        self.default_concurrency
    }

    /// Replaces the API key. Takes `&mut self`, so it cannot run while a
    /// batch on this client is in flight; clones made earlier keep the old key.
    pub fn set_api_key(&mut self, key: impl Into<String>) {
        Arc::make_mut(&mut self.settings).api_key = Some(key.into());
    }

    /// Imports one media item. Failures of the import itself are reported in
    /// the returned slot, not as `Err`.
    pub fn import(&self, request: ImportRequest) -> Result<ResultSlot, BatchError> {
        let mut results = self.import_bulk(BulkImportRequest::new(vec![request]))?;
        if results.len() != 1 {
            return Err(BatchError::InternalInconsistency {
                expected: 1,
                actual: results.len(),
            });
        }
        Ok(results.remove(0))
    }

    /// Imports each source URL with an otherwise empty request.
    pub fn import_sources<S: AsRef<str>>(&self, sources: &[S]) -> Result<Vec<ResultSlot>, BatchError> {
        if sources.is_empty() {
            return Err(BatchError::NoSources);
        }
        let requests = sources
            .iter()
            .map(|s| ImportRequest::from_source(s.as_ref()))
            .collect();
        self.import_bulk(BulkImportRequest::new(requests))
    }

    /// Imports every request in parallel, at most `concurrent_imports` at a
    /// time. The result has exactly one slot per request, in request order;
    /// a failed import only affects its own slot.
    pub fn import_bulk(&self, bulk: BulkImportRequest) -> Result<Vec<ResultSlot>, BatchError> {
        if bulk.requests.is_empty() {
            return Ok(Vec::new());
        }
        let ceiling = match bulk.concurrent_imports {
            Some(n) if n > 0 => n,
            _ => self.default_concurrency,
        };
        let jobs: Vec<ImportJob> = bulk
            .requests
            .into_iter()
            .enumerate()
            .map(|(i, request)| ImportJob {
                id: CorrelationId(i as u64),
                request,
                settings: Arc::clone(&self.settings),
                transport: Arc::clone(&self.transport),
            })
            .collect();
        let expected = jobs.len();

        let results = dispatch::run_ordered(
            jobs,
            ceiling,
            Arc::clone(&self.observer),
            job::resolve,
            job::placeholder,
        );
        if results.len() != expected {
            return Err(BatchError::InternalInconsistency {
                expected,
                actual: results.len(),
            });
        }
        Ok(results)
    }

    /// Direct media upload. Not supported by this client yet.
    pub fn upload<R: Read>(&self, _name: &str, _media: R) -> Result<ResultSlot, BatchError> {
        Err(BatchError::Unimplemented("upload"))
    }
}

/// Builder for `Client`. Transport and observer are fixed once built.
pub struct ClientBuilder {
    endpoint: String,
    api_key: Option<String>,
    caller: Option<String>,
    headers: BTreeMap<String, String>,
    default_concurrency: usize,
    transport: Option<Arc<dyn Transport>>,
    observer: Option<Arc<dyn Observer>>,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            endpoint: IMPORT_ENDPOINT.to_string(),
            api_key: None,
            caller: None,
            headers: BTreeMap::new(),
            default_concurrency: DEFAULT_CONCURRENT_IMPORTS,
            transport: None,
            observer: None,
        }
    }
}

impl ClientBuilder {
    /// Builder preloaded with `config.toml` values; transport timeouts
    /// come from the config too.
    pub fn from_config(cfg: &GifsConfig) -> Self {
        let mut builder = Self::default()
            .endpoint(cfg.endpoint.clone())
            .default_concurrency(cfg.concurrent_imports)
            .transport(CurlTransport::new(
                Duration::from_secs(cfg.connect_timeout_secs),
                Duration::from_secs(cfg.timeout_secs),
            ));
        if let Some(key) = &cfg.api_key {
            builder = builder.api_key(key.clone());
        }
        if let Some(caller) = &cfg.caller {
            builder = builder.caller(caller.clone());
        }
        for (name, value) in &cfg.headers {
            builder = builder.header(name.clone(), value.clone());
        }
        builder
    }

    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Default `caller` tag for requests that do not set one.
    pub fn caller(mut self, caller: impl Into<String>) -> Self {
        self.caller = Some(caller.into());
        self
    }

    /// Extra header sent with every import.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Ceiling for batches that do not set their own. Zero keeps the
    /// built-in default of 10.
    pub fn default_concurrency(mut self, n: usize) -> Self {
        self.default_concurrency = if n == 0 { DEFAULT_CONCURRENT_IMPORTS } else { n };
        self
    }

    pub fn transport<T: Transport + 'static>(self, transport: T) -> Self {
        self.shared_transport(Arc::new(transport))
    }

    pub fn shared_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn observer<O: Observer + 'static>(mut self, observer: O) -> Self {
        self.observer = Some(Arc::new(observer));
        self
    }

    pub fn build(self) -> Result<Client> {
        url::Url::parse(&self.endpoint)
            .with_context(|| format!("invalid import endpoint {:?}", self.endpoint))?;
        Ok(Client {
            transport: self
                .transport
                .unwrap_or_else(|| Arc::new(CurlTransport::default())),
            settings: Arc::new(ImportSettings {
                endpoint: self.endpoint,
                api_key: self.api_key,
                caller: self.caller,
                headers: self.headers,
            }),
            default_concurrency: self.default_concurrency,
            observer: self.observer.unwrap_or_else(|| Arc::new(NoopObserver)),
        })
    }
}
