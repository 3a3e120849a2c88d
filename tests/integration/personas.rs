//! Persona requests and sanitized success responses

use crate::mock_server::MockServerFixture;
use chat_gateway::Audience;
use serde_json::json;

#[tokio::test]
async fn test_career_story_is_sanitized() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_completion(
            "## Summary\n**Danial** interned at *three* companies:\n- KLYR Media\n- [StudyFetch](https://studyfetch.com)",
            1,
        )
        .await;

    let text = fixture.gateway().tell_career_story("Where did he intern?").await;

    mock.assert_async().await;
    assert_eq!(
        text,
        "Summary\nDanial interned at three companies:\nKLYR Media\nStudyFetch"
    );
}

#[tokio::test]
async fn test_request_body_shape_per_persona() {
    let cases: Vec<(serde_json::Value, &str)> = vec![
        (json!({"max_tokens": 1200, "stream": false}), "career"),
        (json!({"max_tokens": 800, "stream": false}), "code"),
        (json!({"max_tokens": 1000, "stream": false}), "tech"),
    ];

    for (partial, which) in cases {
        let mut fixture = MockServerFixture::new().await;
        let mut expected = partial;
        expected["model"] = json!(chat_gateway::config::DEFAULT_MODEL);
        let mock = fixture.mock_completion_matching(expected, "ok").await;
        let gateway = fixture.gateway();

        let text = match which {
            "career" => gateway.tell_career_story("background?").await,
            "code" => gateway.explain_code("fn main() {}", "rust", None).await,
            _ => gateway.discuss_tech("Is Rust good for web?").await,
        };

        mock.assert_async().await;
        assert_eq!(text, "ok", "persona {which}");
    }
}

#[tokio::test]
async fn test_explain_code_embeds_language_and_question() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", crate::mock_server::COMPLETIONS_PATH)
        .match_body(mockito::Matcher::AllOf(vec![
            mockito::Matcher::Regex("Explain this python code and answer".to_string()),
            mockito::Matcher::Regex("why a generator".to_string()),
            mockito::Matcher::Regex("yield x".to_string()),
        ]))
        .with_status(200)
        .with_body(MockServerFixture::completion_body("It streams values lazily."))
        .expect(1)
        .create_async()
        .await;

    let text = fixture
        .gateway()
        .explain_code("def f(xs):\n    for x in xs:\n        yield x", "python", Some("why a generator?"))
        .await;

    mock.assert_async().await;
    assert_eq!(text, "It streams values lazily.");
}

#[tokio::test]
async fn test_inquiry_uses_audience_prompt() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", crate::mock_server::COMPLETIONS_PATH)
        .match_body(mockito::Matcher::Regex("helping fellow students".to_string()))
        .with_status(200)
        .with_body(MockServerFixture::completion_body("Start with the Rust book."))
        .expect(1)
        .create_async()
        .await;

    let text = fixture
        .gateway()
        .handle_inquiry("How should I learn systems programming?", Audience::Student)
        .await;

    mock.assert_async().await;
    assert_eq!(text, "Start with the Rust book.");
}

#[tokio::test]
async fn test_chat_context_overrides_system_prompt() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", crate::mock_server::COMPLETIONS_PATH)
        .match_body(mockito::Matcher::Regex("You are a pirate".to_string()))
        .with_status(200)
        .with_body(MockServerFixture::completion_body("Arr."))
        .expect(1)
        .create_async()
        .await;

    let text = fixture
        .gateway()
        .chat("hello", Some("You are a pirate."))
        .await;

    mock.assert_async().await;
    assert_eq!(text, "Arr.");
}

#[tokio::test]
async fn test_empty_content_becomes_apology() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_completion("", 1).await;

    let text = fixture.gateway().discuss_tech("anything").await;

    assert_eq!(text, chat_gateway::fallback::EMPTY_ANSWER);
}
