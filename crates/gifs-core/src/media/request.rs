//! Import request body and its nested parameter types.

use serde::{Deserialize, Serialize};

fn is_false(b: &bool) -> bool {
    !*b
}

fn is_zero<T: Default + PartialEq>(v: &T) -> bool {
    *v == T::default()
}

/// Clip window for the source media, in seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Trim {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub start: f64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub end: f64,
}

/// Area of interest applied before transcoding.
///
/// `(x, y)` is the top-left corner. `x + width` and `y + height` must not
/// exceed the media's dimensions; the API rejects the import otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Crop {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub x: f32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub y: f32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub width: f32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub height: f32,
}

/// Credits the creator of the imported media.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribution {
    /// Title of the site the media is attributed to.
    #[serde(rename = "site", default, skip_serializing_if = "String::is_empty")]
    pub site_name: String,
    /// Origin URL of that site.
    #[serde(rename = "url", default, skip_serializing_if = "String::is_empty")]
    pub site_url: String,
    /// Author's identifier on that site.
    #[serde(rename = "user", default, skip_serializing_if = "String::is_empty")]
    pub site_username: String,
}

/// One media import. Serialized as the JSON body of the import POST;
/// unset fields are left out of the body entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportRequest {
    /// Tag identifying the calling application, for API-side metrics.
    #[serde(rename = "caller", default, skip_serializing_if = "String::is_empty")]
    pub created_from: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,

    /// HTTP(S) URL of the media to import.
    #[serde(rename = "source", default, skip_serializing_if = "String::is_empty")]
    pub url: String,

    /// Per-request key associating the import with a user account.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub api_key: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Not safe for work.
    #[serde(default, skip_serializing_if = "is_false")]
    pub nsfw: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trim: Option<Trim>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribution: Option<Attribution>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crop: Option<Crop>,
}

impl ImportRequest {
    /// Minimal request: only the source URL is set.
    pub fn from_source(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub(crate) fn to_body(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }
}
