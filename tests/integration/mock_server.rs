//! Mock HTTP server setup for integration tests

use chat_gateway::ChatGateway;
use mockito::{Matcher, Mock, Server, ServerGuard};

pub const COMPLETIONS_PATH: &str = "/v1/chat/completions";
pub const TEST_KEY: &str = "cpk_test_0123456789abcdef";

/// Test fixture that owns a mock completion endpoint.
pub struct MockServerFixture {
    pub server: ServerGuard,
    pub endpoint: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let endpoint = format!("{}{}", server.url(), COMPLETIONS_PATH);
        Self { server, endpoint }
    }

    /// Gateway pointed at the mock server with a test credential.
    pub fn gateway(&self) -> ChatGateway {
        ChatGateway::builder()
            .endpoint(&self.endpoint)
            .credential(TEST_KEY)
            .build()
            .expect("gateway should build")
    }

    /// OpenAI-style success body carrying `content`.
    pub fn completion_body(content: &str) -> String {
        serde_json::json!({
            "id": "chatcmpl-test",
            "object": "chat.completion",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": content},
                "finish_reason": "stop"
            }]
        })
        .to_string()
    }

    /// Successful completion, expected exactly `hits` times.
    pub async fn mock_completion(&mut self, content: &str, hits: usize) -> Mock {
        self.server
            .mock("POST", COMPLETIONS_PATH)
            .match_header("authorization", format!("Bearer {}", TEST_KEY).as_str())
            .match_header("content-type", "application/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(Self::completion_body(content))
            .expect(hits)
            .create_async()
            .await
    }

    /// Successful completion for requests whose body contains `partial` JSON.
    pub async fn mock_completion_matching(
        &mut self,
        partial: serde_json::Value,
        content: &str,
    ) -> Mock {
        self.server
            .mock("POST", COMPLETIONS_PATH)
            .match_body(Matcher::PartialJson(partial))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(Self::completion_body(content))
            .expect(1)
            .create_async()
            .await
    }

    /// Arbitrary status and body.
    pub async fn mock_response(&mut self, status: usize, body: &str) -> Mock {
        self.server
            .mock("POST", COMPLETIONS_PATH)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(1)
            .create_async()
            .await
    }
}

/// Gateway whose endpoint refuses connections.
pub fn unreachable_gateway() -> ChatGateway {
    ChatGateway::builder()
        .endpoint("http://127.0.0.1:9/v1/chat/completions")
        .credential(TEST_KEY)
        .build()
        .expect("gateway should build")
}
