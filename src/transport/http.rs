use super::{CompletionTransport, RawResponse};
use crate::config::{Credential, GatewayConfig};
use crate::types::CompletionRequest;
use crate::Result;
use async_trait::async_trait;
use reqwest::Proxy;
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

/// reqwest-backed transport posting to a single completion URL.
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(config: &GatewayConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .timeout(config.timeout)
            .pool_max_idle_per_host(8)
            .pool_idle_timeout(Some(Duration::from_secs(90)));

        if let Some(proxy_url) = &config.proxy_url {
            let proxy = Proxy::all(proxy_url).map_err(|e| {
                crate::Error::configuration(format!("Invalid proxy URL {}: {}", proxy_url, e))
            })?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| crate::Error::Transport(TransportError::Other(e.to_string())))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CompletionTransport for HttpTransport {
    async fn send(
        &self,
        request: &CompletionRequest,
        credential: &Credential,
    ) -> Result<RawResponse> {
        let request_id = Uuid::new_v4().to_string();

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(credential.expose())
            .header("content-type", "application/json")
            // Our own correlation id; the endpoint may ignore it.
            .header("x-request-id", &request_id)
            .json(request)
            .send()
            .await
            .map_err(|e| crate::Error::Transport(TransportError::Http(e)))?;

        let status = response.status().as_u16();
        debug!(request_id = %request_id, status, "completion response received");

        let body = response
            .text()
            .await
            .map_err(|e| crate::Error::Transport(TransportError::Http(e)))?;

        Ok(RawResponse { status, body })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Other(String),
}
