use std::time::Duration;

use url::Url;

use crate::config::ConnectionConfig;
use crate::error::Result;
use crate::request::{OutboundRequest, build_request};
use crate::response::{TransportOutcome, interpret};

/// Webhook client bound to one bridge endpoint
///
/// Cheap to clone; clones share the underlying connection machinery
#[derive(Debug, Clone)]
pub struct WebhookClient {
    http: reqwest::Client,
    config: ConnectionConfig,
    timeout: Option<Duration>,
}

impl WebhookClient {
    /// Create a client with the transport's default timeout behavior
    #[must_use]
    pub fn new(config: ConnectionConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            timeout: None,
        }
    }

    /// Set a request timeout applied to every send from this client
    ///
    /// Without this the transport default applies (reqwest: no timeout)
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Send one message through the bridge
    ///
    /// Builds the request, performs the POST, and classifies the outcome.
    /// Each send is one independent request with no retries and no session
    /// state
    ///
    /// # Errors
    ///
    /// Returns one of the nine [`WebhookError`](crate::WebhookError) kinds
    pub async fn send(&self, message: &str) -> Result<()> {
        let request = build_request(&self.config, message);
        let outcome = self.perform(&request).await;
        interpret(outcome)
    }

    /// Execute the POST and reduce the transport result to an outcome
    async fn perform(&self, request: &OutboundRequest) -> TransportOutcome {
        let Ok(url) = Url::parse(&request.url) else {
            return TransportOutcome::BadUrl(request.url.clone());
        };

        tracing::debug!(url = %request.url, "posting message to webhook");

        let mut builder = self.http.post(url).json(&request.payload);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        match builder.send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                let body = response.text().await.unwrap_or_default();
                TransportOutcome::Response { status, body }
            }
            Err(e) if e.is_timeout() => TransportOutcome::Timeout,
            Err(_) => TransportOutcome::Network,
        }
    }
}

/// Send one message using a fresh default client
///
/// The primary one-shot entry point: build request, POST, classify
///
/// # Errors
///
/// Returns one of the nine [`WebhookError`](crate::WebhookError) kinds
pub async fn send_message(config: &ConnectionConfig, message: &str) -> Result<()> {
    WebhookClient::new(config.clone()).send(message).await
}

/// Low-ceremony send that collapses every error into `false`
///
/// The discarded error kind is logged at warn level before being dropped
pub async fn send_raw(base_url: &str, api_key: &str, room_id: &str, message: &str) -> bool {
    let config = ConnectionConfig::new(base_url, api_key, room_id);
    match send_message(&config, message).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "webhook send failed");
            false
        }
    }
}
