//! Credential probe

use crate::mock_server::{unreachable_gateway, MockServerFixture};
use serde_json::json;

#[tokio::test]
async fn test_probe_success_reports_body() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_completion_matching(json!({"max_tokens": 50}), "Hi!")
        .await;

    let report = fixture.gateway().probe_credential().await;

    mock.assert_async().await;
    assert!(report.success);
    assert_eq!(report.message, "API key is working correctly!");
    assert!(report.details.unwrap().contains("Hi!"));
}

#[tokio::test]
async fn test_probe_rejected_key() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_response(401, r#"{"detail":"Invalid token"}"#)
        .await;

    let report = fixture.gateway().probe_credential().await;

    assert!(!report.success);
    assert_eq!(report.message, "API test failed: 401");
    assert_eq!(report.details.as_deref(), Some(r#"{"detail":"Invalid token"}"#));
}

#[tokio::test]
async fn test_probe_unreachable() {
    let report = unreachable_gateway().probe_credential().await;
    assert!(!report.success);
    assert_eq!(report.message, "API test failed with error");
    assert!(report.details.is_some());
}
