//! Document Q&A over HTTP: status-specific failures and truncation.

use crate::mock_server::{unreachable_gateway, MockServerFixture};
use chat_gateway::gateway::DOCUMENT_ANALYSIS_LIMIT_CHARS;
use serde_json::json;

#[tokio::test]
async fn test_document_answer_uses_low_temperature_budget() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_completion_matching(
            json!({"max_tokens": 1500, "temperature": 0.3, "stream": false}),
            "The report covers **Q3** revenue.",
        )
        .await;

    let text = fixture
        .gateway()
        .rag_query("Q3 revenue grew 12%.", "report.txt", "What does it cover?")
        .await;

    mock.assert_async().await;
    assert_eq!(text, "The report covers Q3 revenue.");
}

#[tokio::test]
async fn test_status_specific_messages() {
    let cases = [
        (401usize, "invalid or expired"),
        (403, "invalid or expired"),
        (429, "rate limit"),
        (500, "temporary issue"),
        (502, "temporary issue"),
        (418, "encountered an error"),
    ];

    for (status, phrase) in cases {
        let mut fixture = MockServerFixture::new().await;
        let mock = fixture.mock_response(status, r#"{"error":"nope"}"#).await;

        let text = fixture
            .gateway()
            .rag_query("some content", "notes.md", "summary?")
            .await;

        mock.assert_async().await;
        assert!(text.contains(phrase), "status {status}: {text}");
        assert!(text.contains("\"notes.md\""), "status {status}: {text}");
        assert!(!text.contains(crate::mock_server::TEST_KEY));
    }
}

#[tokio::test]
async fn test_connectivity_failure_message() {
    let text = unreachable_gateway()
        .rag_query("content", "offline.txt", "anything?")
        .await;
    assert!(text.contains("couldn't connect"), "{text}");
    assert!(text.contains("\"offline.txt\""));
}

#[tokio::test]
async fn test_large_document_makes_one_call_and_discloses_truncation() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture.mock_completion("It is mostly padding.", 1).await;

    let content = "word ".repeat(DOCUMENT_ANALYSIS_LIMIT_CHARS);
    let text = fixture
        .gateway()
        .rag_query(&content, "padding.txt", "What is this?")
        .await;

    mock.assert_async().await;
    assert!(text.starts_with("It is mostly padding."));
    assert!(text.ends_with(
        "For a complete analysis of very large documents, consider splitting them into smaller sections."
    ));
    assert!(text.contains("first 32KB"));
}
