use super::core::ChatGateway;
use crate::types::{CompletionRequest, Message};
use serde::Serialize;
use tracing::{info, warn};

/// Outcome of [`ChatGateway::probe_credential`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeReport {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ProbeReport {
    fn failed(message: impl Into<String>, details: Option<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            details,
        }
    }
}

impl ChatGateway {
    /// Send a tiny request to check that the credential and endpoint work.
    pub async fn probe_credential(&self) -> ProbeReport {
        let Some(credential) = self.credential.as_ref() else {
            return ProbeReport::failed(
                format!(
                    "No API key found. Set {} in your environment or .env.local file.",
                    crate::config::CREDENTIAL_ENV
                ),
                None,
            );
        };

        let request = CompletionRequest::new(
            self.model.clone(),
            vec![Message::user("Hello, this is a test message.")],
        )
        .max_tokens(50)
        .temperature(0.7);

        info!(credential = %credential.redacted(), model = %self.model, "probing credential");

        match self.transport.send(&request, credential).await {
            Ok(raw) if raw.is_success() => ProbeReport {
                success: true,
                message: "API key is working correctly!".to_string(),
                details: Some(raw.body),
            },
            Ok(raw) => {
                warn!(status = raw.status, "credential probe rejected");
                ProbeReport::failed(format!("API test failed: {}", raw.status), Some(raw.body))
            }
            Err(err) => {
                warn!(error = %err, "credential probe could not reach the endpoint");
                ProbeReport::failed("API test failed with error", Some(err.to_string()))
            }
        }
    }
}
