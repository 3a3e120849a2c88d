//! Transport seam between the gateway and the completion endpoint.
//!
//! [`HttpTransport`] is the production implementation. Tests plug in their own
//! [`CompletionTransport`] to count calls or simulate failures without a
//! network.

mod http;

pub use http::{HttpTransport, TransportError};

use crate::config::Credential;
use crate::types::{CompletionRequest, CompletionResponse};
use crate::{Error, Result};
use async_trait::async_trait;

/// Status and body of one HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait CompletionTransport: Send + Sync {
    /// Send one request. `Err` means no HTTP response was obtained at all.
    async fn send(&self, request: &CompletionRequest, credential: &Credential)
        -> Result<RawResponse>;

    /// Send one request and extract `choices[0].message.content`.
    ///
    /// Non-2xx statuses become [`Error::Remote`]; unusable bodies become
    /// [`Error::MalformedResponse`] or [`Error::Serialization`].
    async fn complete(&self, request: &CompletionRequest, credential: &Credential) -> Result<String> {
        let raw = self.send(request, credential).await?;
        if !raw.is_success() {
            return Err(Error::remote(raw.status, raw.body));
        }
        CompletionResponse::first_content_from_body(&raw.body)
    }
}
