use secrecy::SecretString;

/// Immutable connection details for one webhook endpoint
///
/// Construction never fails and performs no validation: empty strings are
/// accepted, and a malformed base URL only surfaces as
/// [`WebhookError::BadUrl`](crate::WebhookError::BadUrl) at send time
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    base_url: String,
    api_key: SecretString,
    room_id: String,
}

impl ConnectionConfig {
    /// Create a config from raw connection values
    #[must_use]
    pub fn new(base_url: &str, api_key: &str, room_id: &str) -> Self {
        Self {
            base_url: base_url.to_owned(),
            api_key: SecretString::from(api_key.to_owned()),
            room_id: room_id.to_owned(),
        }
    }

    /// Base URL of the bridge endpoint, with or without a trailing slash
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Target room identifier (`!localpart:server`)
    #[must_use]
    pub fn room_id(&self) -> &str {
        &self.room_id
    }

    pub(crate) fn api_key(&self) -> &SecretString {
        &self.api_key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_any_strings() {
        let config = ConnectionConfig::new("", "", "");
        assert_eq!(config.base_url(), "");
        assert_eq!(config.room_id(), "");
    }

    #[test]
    fn debug_redacts_api_key() {
        let config = ConnectionConfig::new("https://example.com", "super-secret", "!r:x.org");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret"));
    }
}
