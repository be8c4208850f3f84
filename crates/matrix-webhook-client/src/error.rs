/// Client-specific result type
pub type Result<T> = std::result::Result<T, WebhookError>;

/// Errors from one webhook send attempt
///
/// Exactly one kind is produced per failed send. The client never retries
/// and never recovers locally; retry and backoff policy belong to the caller
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WebhookError {
    /// The computed target URL was not usable as a request target
    #[error("bad webhook URL: {0}")]
    BadUrl(String),

    /// The bridge relayed an error from the homeserver, or answered with a
    /// status/message pair this client does not recognize
    #[error("homeserver returned an error ({status}): {message}")]
    Homeserver {
        /// HTTP status code of the response
        status: u16,
        /// The `ret` string from the response body
        message: String,
    },

    /// The bridge reported that the homeserver did not respond
    #[error("homeserver not responding")]
    HomeserverTimeout,

    /// Connection-level failure before any response was received
    #[error("network error while contacting the webhook")]
    Network,

    /// The webhook bot is not joined to the target room
    #[error("not joined to the target room")]
    NotJoinedToRoom,

    /// The webhook rejected the API key
    #[error("webhook rejected the API key")]
    Unauthorized,

    /// The webhook rejected the payload as missing or malformed input
    #[error("webhook reported missing input")]
    MissingInput,

    /// Non-200 response whose body was not the expected JSON shape
    #[error("webhook returned a body that was not the expected JSON")]
    InvalidJson,

    /// The webhook itself did not answer within the transport timeout
    #[error("webhook timed out")]
    Timeout,
}
