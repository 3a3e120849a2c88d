//! Failure paths: every failure degrades to fallback text, never an error.

use crate::mock_server::{unreachable_gateway, MockServerFixture};
use chat_gateway::fallback::{chat_fallback, inquiry_fallback, Topic};
use chat_gateway::{Audience, Profile};

#[tokio::test]
async fn test_server_error_uses_keyword_fallback() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_response(500, r#"{"error":{"message":"Internal server error"}}"#)
        .await;

    let text = fixture.gateway().discuss_tech("Which technology do you like?").await;

    mock.assert_async().await;
    assert_eq!(text, chat_fallback(Topic::Skills, &Profile::default()));
}

#[tokio::test]
async fn test_status_codes_never_leak_into_chat_text() {
    for status in [400usize, 401, 403, 404, 429, 500, 503] {
        let mut fixture = MockServerFixture::new().await;
        let _mock = fixture
            .mock_response(status, r#"{"error":{"message":"secret upstream detail"}}"#)
            .await;

        let text = fixture.gateway().chat("hello there", None).await;

        assert_eq!(text, chat_fallback(Topic::General, &Profile::default()));
        assert!(!text.contains("secret upstream detail"));
    }
}

#[tokio::test]
async fn test_malformed_success_is_treated_as_failure() {
    for body in [
        r#"{"choices":[]}"#,
        r#"{"choices":[{"finish_reason":"stop"}]}"#,
        r#"not json at all"#,
    ] {
        let mut fixture = MockServerFixture::new().await;
        let _mock = fixture.mock_response(200, body).await;

        let text = fixture.gateway().tell_career_story("Tell me about your career").await;

        assert_eq!(
            text,
            chat_fallback(Topic::Experience, &Profile::default()),
            "body: {body}"
        );
    }
}

#[tokio::test]
async fn test_rate_limited_inquiry_keeps_audience_fallback() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_response(429, r#"{"error":{"message":"Rate limit exceeded"}}"#)
        .await;

    let text = fixture
        .gateway()
        .handle_inquiry("Can I email you?", Audience::Recruiter)
        .await;

    assert_eq!(
        text,
        inquiry_fallback("Can I email you?", Audience::Recruiter, &Profile::default())
    );
}

#[tokio::test]
async fn test_connection_refused_uses_fallback() {
    let text = unreachable_gateway().chat("what projects did you build?", None).await;
    assert_eq!(text, chat_fallback(Topic::Projects, &Profile::default()));
}
