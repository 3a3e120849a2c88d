use super::core::ChatGateway;
use crate::config::GatewayConfig;
use crate::profile::Profile;
use crate::transport::{CompletionTransport, HttpTransport};
use crate::Result;
use std::sync::Arc;
use tracing::warn;

/// Builder for [`ChatGateway`].
///
/// Keep this surface small: configuration, profile, and an optional transport
/// override for tests.
pub struct ChatGatewayBuilder {
    config: GatewayConfig,
    profile: Option<Profile>,
    transport: Option<Arc<dyn CompletionTransport>>,
}

impl ChatGatewayBuilder {
    pub fn new() -> Self {
        Self {
            config: GatewayConfig::new(),
            profile: None,
            transport: None,
        }
    }

    /// Replace the whole configuration (typically [`GatewayConfig::from_env`]).
    pub fn config(mut self, config: GatewayConfig) -> Self {
        self.config = config;
        self
    }

    pub fn credential(mut self, key: impl Into<String>) -> Self {
        self.config = self.config.with_credential(key);
        self
    }

    /// Override the completion URL (mock servers in tests, proxies in production).
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config = self.config.with_endpoint(endpoint);
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config = self.config.with_model(model);
        self
    }

    pub fn profile(mut self, profile: Profile) -> Self {
        self.profile = Some(profile);
        self
    }

    /// Inject a transport instead of the default reqwest one.
    pub fn transport(mut self, transport: Arc<dyn CompletionTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<ChatGateway> {
        self.config.validate()?;

        let transport = match self.transport {
            Some(t) => t,
            None => Arc::new(HttpTransport::new(&self.config)?),
        };

        if self.config.credential.is_none() {
            warn!(
                "no completion credential configured ({}); every answer will use fallback text",
                crate::config::CREDENTIAL_ENV
            );
        }

        Ok(ChatGateway {
            transport,
            credential: self.config.credential,
            model: self.config.model,
            profile: Arc::new(self.profile.unwrap_or_default()),
        })
    }
}

impl Default for ChatGatewayBuilder {
    fn default() -> Self {
        Self::new()
    }
}
