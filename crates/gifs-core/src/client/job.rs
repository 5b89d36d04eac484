//! The import job: one POST to the import endpoint, decoded into an envelope.

use std::sync::Arc;

use crate::dispatch::{CorrelationId, Job};
use crate::error::{FailureKind, ItemFailure};
use crate::media::{Envelope, ImportRequest, ResultSlot};
use crate::transport::{merge_headers, Transport};

use super::ImportSettings;

pub(crate) struct ImportJob {
    pub(crate) id: CorrelationId,
    pub(crate) request: ImportRequest,
    pub(crate) settings: Arc<ImportSettings>,
    pub(crate) transport: Arc<dyn Transport>,
}

impl Job for ImportJob {
    type Output = Envelope;
    type Error = ItemFailure;

    fn id(&self) -> CorrelationId {
        self.id
    }

    fn execute(self) -> Result<Envelope, ItemFailure> {
        let mut request = self.request;
        if request.created_from.is_empty() {
            if let Some(caller) = &self.settings.caller {
                request.created_from = caller.clone();
            }
        }
        let body = request.to_body().map_err(|e| {
            ItemFailure::new(FailureKind::Transport, format!("encode request: {}", e))
        })?;
        let headers = merge_headers(&self.settings.headers, self.settings.api_key.as_deref());

        let response = self
            .transport
            .post_json(&self.settings.endpoint, &headers, &body)
            .map_err(|e| ItemFailure::new(FailureKind::Transport, e.to_string()))?;

        if !response.is_success() {
            let detail = Envelope::from_slice(&response.body)
                .ok()
                .and_then(|env| env.errors);
            let message = match detail {
                Some(m) => format!("HTTP {}: {}", response.status, m),
                None => format!("HTTP {}", response.status),
            };
            return Err(ItemFailure::new(FailureKind::Transport, message));
        }

        Envelope::from_slice(&response.body).map_err(|e| {
            ItemFailure::new(FailureKind::Decode, format!("invalid response body: {}", e))
        })
    }
}

/// Turns one job outcome into its result slot. A success payload wins over
/// an `errors` field sent alongside it.
pub(crate) fn resolve(outcome: Result<Envelope, ItemFailure>) -> ResultSlot {
    match outcome {
        Ok(Envelope {
            success: Some(media),
            ..
        }) => ResultSlot::Imported(media),
        Ok(Envelope {
            errors: Some(message),
            ..
        }) => ResultSlot::failed(FailureKind::Application, message),
        Ok(_) => ResultSlot::failed(
            FailureKind::Application,
            "response carried neither a success payload nor an error",
        ),
        Err(failure) => ResultSlot::Failed(failure),
    }
}

pub(crate) fn placeholder(id: CorrelationId) -> ResultSlot {
    ResultSlot::failed(
        FailureKind::Missing,
        format!("no result received for item {}", id.0),
    )
}
