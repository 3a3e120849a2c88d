//! Gateway configuration.
//!
//! Everything the gateway needs from the process environment is read once,
//! here, and then injected into [`crate::ChatGatewayBuilder`]. Call logic never
//! touches the environment.
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `CHUTES_API_KEY` | bearer credential | none (degraded mode) |
//! | `NEXT_PUBLIC_CHUTES_API_KEY` | legacy name for the credential | none |
//! | `CHAT_GATEWAY_ENDPOINT` | completion URL | [`DEFAULT_ENDPOINT`] |
//! | `CHAT_GATEWAY_MODEL` | model identifier | [`DEFAULT_MODEL`] |
//! | `CHAT_GATEWAY_TIMEOUT_SECS` | HTTP timeout | 30 |
//! | `CHAT_GATEWAY_PROXY_URL` | optional proxy for all requests | none |

use crate::{Error, ErrorContext, Result};
use std::fmt;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://llm.chutes.ai/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "deepseek-ai/DeepSeek-V3-0324";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const CREDENTIAL_ENV: &str = "CHUTES_API_KEY";
pub const LEGACY_CREDENTIAL_ENV: &str = "NEXT_PUBLIC_CHUTES_API_KEY";

/// Bearer token for the completion endpoint.
///
/// `Debug` and [`Credential::redacted`] only ever show a short prefix.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Returns `None` for blank input; a blank key is the same as no key.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub(crate) fn expose(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Diagnostic form: four leading characters for keys of 16+ characters,
    /// nothing at all for shorter ones.
    pub fn redacted(&self) -> String {
        let shown = if self.len() >= 16 { 4 } else { 0 };
        let prefix: String = self.0.chars().take(shown).collect();
        format!("{}...", prefix)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Credential").field(&self.redacted()).finish()
    }
}

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub credential: Option<Credential>,
    pub endpoint: String,
    pub model: String,
    pub timeout: Duration,
    pub proxy_url: Option<String>,
}

impl GatewayConfig {
    /// Defaults with no credential (permanently degraded mode).
    pub fn new() -> Self {
        Self {
            credential: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            proxy_url: None,
        }
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary lookup function.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let credential = lookup(CREDENTIAL_ENV)
            .and_then(Credential::new)
            .or_else(|| lookup(LEGACY_CREDENTIAL_ENV).and_then(Credential::new));

        let timeout_secs = lookup("CHAT_GATEWAY_TIMEOUT_SECS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            credential,
            endpoint: lookup("CHAT_GATEWAY_ENDPOINT")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            model: lookup("CHAT_GATEWAY_MODEL")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            timeout: Duration::from_secs(timeout_secs),
            proxy_url: lookup("CHAT_GATEWAY_PROXY_URL").filter(|s| !s.trim().is_empty()),
        }
    }

    pub fn with_credential(mut self, key: impl Into<String>) -> Self {
        self.credential = Credential::new(key);
        self
    }

    pub fn without_credential(mut self) -> Self {
        self.credential = None;
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Check that the endpoint is an absolute http(s) URL and the model is set.
    pub fn validate(&self) -> Result<()> {
        let url = url::Url::parse(&self.endpoint).map_err(|e| {
            Error::configuration_with_context(
                "completion endpoint is not a valid URL",
                ErrorContext::new()
                    .with_field_path("config.endpoint")
                    .with_details(e.to_string())
                    .with_source("config"),
            )
        })?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(Error::configuration_with_context(
                "completion endpoint must use http or https",
                ErrorContext::new()
                    .with_field_path("config.endpoint")
                    .with_details(format!("scheme: {}", url.scheme()))
                    .with_source("config"),
            ));
        }
        if self.model.trim().is_empty() {
            return Err(Error::configuration_with_context(
                "model identifier must not be empty",
                ErrorContext::new()
                    .with_field_path("config.model")
                    .with_source("config"),
            ));
        }
        Ok(())
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::new()
    }
}
