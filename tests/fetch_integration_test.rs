use calc_demo::core::PayloadSource;
use calc_demo::{fetch_data, DemoError, HttpPayloadSource};
use httpmock::prelude::*;

#[tokio::test]
async fn test_fetch_decodes_json_payload() {
    let server = MockServer::start();
    let payload = serde_json::json!({"id": 1, "items": [1, 2, 3]});

    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/data");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(payload.clone());
    });

    let source = HttpPayloadSource::new(server.url("/data"));
    let result = fetch_data(&source).await;

    api_mock.assert();
    assert_eq!(result, Some(payload));
}

#[tokio::test]
async fn test_non_success_status_is_swallowed() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/data");
        then.status(500).body("internal error");
    });

    let source = HttpPayloadSource::new(server.url("/data"));

    assert!(fetch_data(&source).await.is_none());
    api_mock.assert();

    let err = source.fetch().await.unwrap_err();
    assert!(matches!(err, DemoError::HttpStatusError { status: 500 }));
    assert!(err.is_remote_fetch_failure());
}

#[tokio::test]
async fn test_malformed_payload_is_swallowed() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/data");
        then.status(200)
            .header("Content-Type", "application/json")
            .body("{not json");
    });

    let source = HttpPayloadSource::new(server.url("/data"));

    assert!(fetch_data(&source).await.is_none());
    let err = source.fetch().await.unwrap_err();
    assert!(matches!(err, DemoError::SerializationError(_)));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_swallowed() {
    // 埠號 1 通常沒有服務在監聽
    let source = HttpPayloadSource::new("http://127.0.0.1:1/data");

    assert!(fetch_data(&source).await.is_none());
    let err = source.fetch().await.unwrap_err();
    assert!(matches!(err, DemoError::HttpError(_)));
}
