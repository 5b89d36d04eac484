//! Success payload and the per-item result slot.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::{FailureKind, ItemFailure};

/// Output formats the API can return in `files`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaType {
    Mp4,
    Jpg,
    Gif,
}

impl MediaType {
    /// Key used for this format in the `files` map.
    pub fn extension(self) -> &'static str {
        match self {
            MediaType::Mp4 => "mp4",
            MediaType::Jpg => "jpg",
            MediaType::Gif => "gif",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Successfully imported media.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub page: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub embed: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub oembed: String,
    /// Extension → URL of each rendered file.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub files: BTreeMap<String, String>,
}

impl Media {
    pub fn has_files(&self) -> bool {
        !self.files.is_empty()
    }

    /// URL of the rendered file of the given type, if the API produced one.
    pub fn file(&self, media_type: MediaType) -> Option<&str> {
        self.files.get(media_type.extension()).map(String::as_str)
    }
}

/// One positioned entry of a bulk import result. Always populated: items
/// that failed (or never reported back) carry an `ItemFailure` instead of
/// being left out.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase", tag = "status")]
pub enum ResultSlot {
    Imported(Media),
    Failed(ItemFailure),
}

impl ResultSlot {
    pub(crate) fn failed(kind: FailureKind, message: impl Into<String>) -> Self {
        ResultSlot::Failed(ItemFailure::new(kind, message))
    }

    pub fn is_imported(&self) -> bool {
        matches!(self, ResultSlot::Imported(_))
    }

    pub fn media(&self) -> Option<&Media> {
        match self {
            ResultSlot::Imported(m) => Some(m),
            ResultSlot::Failed(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&ItemFailure> {
        match self {
            ResultSlot::Imported(_) => None,
            ResultSlot::Failed(f) => Some(f),
        }
    }

    /// Error message of a failed slot.
    pub fn error_message(&self) -> Option<&str> {
        self.failure().map(|f| f.message.as_str())
    }

    pub fn into_result(self) -> Result<Media, ItemFailure> {
        match self {
            ResultSlot::Imported(m) => Ok(m),
            ResultSlot::Failed(f) => Err(f),
        }
    }
}
