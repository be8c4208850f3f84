use serde::Deserialize;

use crate::error::{Result, WebhookError};

/// What the transport reported for one send attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportOutcome {
    /// No response arrived within the transport's timeout
    Timeout,
    /// Connection-level failure (DNS, refused connection, offline)
    Network,
    /// The URL string was not usable as a request target
    BadUrl(String),
    /// An actual HTTP response was obtained
    Response {
        /// HTTP status code
        status: u16,
        /// Raw response body text
        body: String,
    },
}

/// Error-body shape shared by all bridge releases; other fields are ignored
#[derive(Deserialize)]
struct ErrorBody {
    ret: String,
}

/// Classify one transport outcome into success or a typed error
///
/// Pure and deterministic. A 200 response is a success regardless of body
/// content; any other status is classified by its `ret` string, and a body
/// that cannot be parsed into the expected shape becomes
/// [`WebhookError::InvalidJson`] rather than a parse fault
///
/// # Errors
///
/// Returns one of the nine [`WebhookError`] kinds for every non-200 outcome
pub fn interpret(outcome: TransportOutcome) -> Result<()> {
    match outcome {
        TransportOutcome::Timeout => Err(WebhookError::Timeout),
        TransportOutcome::Network => Err(WebhookError::Network),
        TransportOutcome::BadUrl(url) => Err(WebhookError::BadUrl(url)),
        TransportOutcome::Response { status: 200, .. } => Ok(()),
        TransportOutcome::Response { status, body } => {
            match serde_json::from_str::<ErrorBody>(&body) {
                Ok(ErrorBody { ret }) => Err(classify(status, ret)),
                Err(_) => Err(WebhookError::InvalidJson),
            }
        }
    }
}

/// Map a `(status, ret)` pair onto the error taxonomy
///
/// The listed pairs are the known error strings across bridge releases
/// v1.0.0 through v3.5.0, matched exactly and case-sensitively. Anything
/// unlisted falls through to [`WebhookError::Homeserver`] so future wording
/// changes in the bridge degrade instead of failing
fn classify(status: u16, ret: String) -> WebhookError {
    match (status, ret.as_str()) {
        (400, "I need a json dict with text & key")
        | (400, "Invalid JSON")
        | (400, "Missing text and/or API key property")
        | (400, "Unknown formatter")
        | (400, "Missing body")
        | (400, "Missing key")
        | (400, "Missing room_id")
        | (400, "Missing body, key")
        | (400, "Missing body, room_id")
        | (400, "Missing key, room_id")
        | (400, "Missing body, key, room_id") => WebhookError::MissingInput,
        (401, "I need the good \"key\"")
        | (401, "Invalid API key")
        | (401, "Invalid SHA-256 HMAC digest") => WebhookError::Unauthorized,
        (404, "I need the id of the room as a path, and to be in this room") => {
            WebhookError::NotJoinedToRoom
        }
        (504, "Homeserver not responding") => WebhookError::HomeserverTimeout,
        _ => WebhookError::Homeserver {
            status,
            message: ret,
        },
    }
}
