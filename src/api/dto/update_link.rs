//! DTO for the link update endpoint.

use serde::{Deserialize, Deserializer};

use crate::domain::entities::LinkEntry;

/// Request body for `POST /update/{id}`.
///
/// Missing or `null` fields decode as empty strings, so the stored entry is
/// always a whole pair. Non-string values are rejected. Unknown fields are
/// ignored. URLs are stored as given, without validation.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateLinkRequest {
    /// Destination for visitors that pass the JavaScript probe.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub real: String,

    /// Destination for visitors classified as bots.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub bot: String,
}

impl UpdateLinkRequest {
    /// Decodes the first JSON value in `body`; anything after it is ignored.
    ///
    /// A top-level `null` decodes as the empty pair.
    ///
    /// # Errors
    ///
    /// Fails on an empty body, a syntax error, or a value that is not an
    /// object with string (or `null`) `real`/`bot` fields.
    pub fn from_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::Deserializer::from_slice(body)
            .into_iter::<Option<Self>>()
            .next()
            .unwrap_or_else(|| Err(serde::de::Error::custom("empty request body")))
            .map(Option::unwrap_or_default)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<UpdateLinkRequest> for LinkEntry {
    fn from(request: UpdateLinkRequest) -> Self {
        LinkEntry::new(request.real, request.bot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(body: &str) -> Result<LinkEntry, serde_json::Error> {
        UpdateLinkRequest::from_body(body.as_bytes()).map(LinkEntry::from)
    }

    #[test]
    fn test_decodes_full_pair() {
        let entry =
            decode(r#"{"real": "https://a.example", "bot": "https://b.example"}"#).unwrap();

        assert_eq!(entry, LinkEntry::new("https://a.example", "https://b.example"));
    }

    #[test]
    fn test_ignores_unknown_fields() {
        let entry = decode(r#"{"real": "r", "bot": "b", "note": 1}"#).unwrap();

        assert_eq!(entry, LinkEntry::new("r", "b"));
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        assert_eq!(decode(r#"{"real": "r"}"#).unwrap(), LinkEntry::new("r", ""));
        assert_eq!(decode(r#"{"bot": "b"}"#).unwrap(), LinkEntry::new("", "b"));
        assert_eq!(decode("{}").unwrap(), LinkEntry::default());
    }

    #[test]
    fn test_null_decodes_as_empty() {
        assert_eq!(decode("null").unwrap(), LinkEntry::default());
        assert_eq!(
            decode(r#"{"real": "r", "bot": null}"#).unwrap(),
            LinkEntry::new("r", "")
        );
    }

    #[test]
    fn test_trailing_data_is_ignored() {
        assert_eq!(
            decode(r#"{"real": "r", "bot": "b"} trailing"#).unwrap(),
            LinkEntry::new("r", "b")
        );
        assert_eq!(
            decode("{\"real\": \"r\", \"bot\": \"b\"}\n{\"real\": \"x\"}").unwrap(),
            LinkEntry::new("r", "b")
        );
    }

    #[test]
    fn test_rejects_non_string_field() {
        assert!(decode(r#"{"real": 1, "bot": "b"}"#).is_err());
        assert!(decode(r#"{"real": "r", "bot": ["b"]}"#).is_err());
    }

    #[test]
    fn test_rejects_wrong_shape_and_syntax() {
        assert!(decode("").is_err());
        assert!(decode("   ").is_err());
        assert!(decode("{not json").is_err());
        assert!(decode(r#"["r", "b"]"#).is_err());
        assert!(decode(r#""r""#).is_err());
    }
}
