use secrecy::ExposeSecret;
use serde::Serialize;

use crate::config::ConnectionConfig;

/// JSON payload posted to the bridge
///
/// Field names are the bridge's wire contract. `text` and `body` carry the
/// same message; older bridge releases read one, newer ones the other
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessagePayload {
    /// Message text
    pub text: String,
    /// Duplicate of the message text
    pub body: String,
    /// API key authorizing the post
    pub key: String,
    /// Target room identifier
    pub room_id: String,
}

/// One fully-determined outbound send
///
/// Always delivered as a POST with no custom headers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundRequest {
    /// Target URL: `base_url` and `room_id` joined with a single slash
    pub url: String,
    /// JSON body
    pub payload: MessagePayload,
}

impl OutboundRequest {
    /// HTTP method for every send
    pub const METHOD: &'static str = "POST";
}

/// Join `base` and `path` with exactly one `/`
///
/// No normalization and no percent-encoding: the bridge expects the room id
/// verbatim as the final path segment
#[must_use]
pub fn join_url(base: &str, path: &str) -> String {
    if base.ends_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

/// Build the outbound request for one message
///
/// Pure and deterministic: the same config and message always produce an
/// identical request. The message is not validated; an empty string is a
/// legal message
#[must_use]
pub fn build_request(config: &ConnectionConfig, message: &str) -> OutboundRequest {
    OutboundRequest {
        url: join_url(config.base_url(), config.room_id()),
        payload: MessagePayload {
            text: message.to_owned(),
            body: message.to_owned(),
            key: config.api_key().expose_secret().to_owned(),
            room_id: config.room_id().to_owned(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_url_inserts_single_slash() {
        assert_eq!(
            join_url("https://example.com", "!r:x.org"),
            "https://example.com/!r:x.org"
        );
    }

    #[test]
    fn join_url_keeps_existing_slash() {
        assert_eq!(
            join_url("https://example.com/", "!r:x.org"),
            "https://example.com/!r:x.org"
        );
    }

    #[test]
    fn join_url_does_not_normalize() {
        assert_eq!(join_url("https://example.com//", "!r:x.org"), "https://example.com//!r:x.org");
        assert_eq!(join_url("", "!r:x.org"), "/!r:x.org");
    }

    #[test]
    fn payload_carries_all_four_fields() {
        let config = ConnectionConfig::new("https://example.com", "secret", "!r:x.org");
        let request = build_request(&config, "hi");

        assert_eq!(request.url, "https://example.com/!r:x.org");
        let json = serde_json::to_value(&request.payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "text": "hi",
                "body": "hi",
                "key": "secret",
                "room_id": "!r:x.org"
            })
        );
    }

    #[test]
    fn build_request_is_deterministic() {
        let config = ConnectionConfig::new("https://example.com", "k", "!r:x.org");
        assert_eq!(build_request(&config, "hello"), build_request(&config, "hello"));
    }

    #[test]
    fn empty_message_is_legal() {
        let config = ConnectionConfig::new("https://example.com", "k", "!r:x.org");
        let request = build_request(&config, "");

        assert_eq!(request.payload.text, "");
        assert_eq!(request.payload.body, "");
    }
}
