//! Decoding of the `{ "success": ..., "errors": ... }` response envelope.
//!
//! The API reports `errors` either as a bare string or as an object with a
//! `message` field; both are normalized to one message string.

use serde::{Deserialize, Deserializer};

use super::response::Media;

/// Decoded import response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub success: Option<Media>,
    #[serde(default, deserialize_with = "error_message")]
    pub errors: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorsField {
    Message(String),
    Structured { message: String },
    Other(serde_json::Value),
}

fn error_message<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let field: Option<ErrorsField> = Option::deserialize(deserializer)?;
    Ok(field.map(|f| match f {
        ErrorsField::Message(m) | ErrorsField::Structured { message: m } => m,
        ErrorsField::Other(v) => v.to_string(),
    }))
}

impl Envelope {
    pub fn from_slice(body: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_string_and_object_errors_normalize_alike() {
        let a = Envelope::from_slice(br#"{ "errors": "boom" }"#).unwrap();
        let b = Envelope::from_slice(br#"{ "errors": { "message": "boom" } }"#).unwrap();
        assert_eq!(a.errors.as_deref(), Some("boom"));
        assert_eq!(a, b);
    }

    #[test]
    fn null_or_missing_errors_is_none() {
        let a = Envelope::from_slice(br#"{ "errors": null }"#).unwrap();
        let b = Envelope::from_slice(br#"{}"#).unwrap();
        assert!(a.errors.is_none());
        assert!(b.errors.is_none());
        assert!(b.success.is_none());
    }

    #[test]
    fn unexpected_errors_shape_keeps_json_text() {
        let e = Envelope::from_slice(br#"{ "errors": ["a", "b"] }"#).unwrap();
        assert_eq!(e.errors.as_deref(), Some(r#"["a","b"]"#));
    }

    #[test]
    fn success_payload_decodes() {
        let body = br#"{
            "success": {
                "page": "https://gifs.com/gif/abc",
                "embed": "https://gifs.com/embed/abc",
                "oembed": "https://gifs.com/oembed/abc",
                "files": { "mp4": "https://j.gifs.com/abc.mp4", "gif": "https://j.gifs.com/abc.gif" }
            }
        }"#;
        let e = Envelope::from_slice(body).unwrap();
        let media = e.success.unwrap();
        assert_eq!(media.page, "https://gifs.com/gif/abc");
        assert_eq!(media.files.len(), 2);
        assert!(e.errors.is_none());
    }

    #[test]
    fn malformed_body_is_an_error() {
        assert!(Envelope::from_slice(b"<html>bad gateway</html>").is_err());
    }
}
