//! Import payloads and the decoded API response.
//!
//! Request types are plain data; they serialize to the JSON body of one
//! import POST. The response side decodes the `{success, errors}` envelope
//! and defines the per-item `ResultSlot` returned to callers.

mod envelope;
mod request;
mod response;

pub use envelope::Envelope;
pub use request::{Attribution, Crop, ImportRequest, Trim};
pub use response::{Media, MediaType, ResultSlot};
