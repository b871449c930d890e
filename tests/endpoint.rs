
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use mock_assistant::MockAssistant;
use patrika::api;
use patrika::config::{Config, PollConfig};
use patrika::AppState;

const ACCESS_KEY: &str = "sesame";
const METADATA_ASSISTANT: &str = "asst_metadata";
const TRANSFORM_ASSISTANT: &str = "asst_transform";

fn test_state(mock: &MockAssistant) -> AppState {
    let config = Config {
        openai_api_key: "sk-test".to_string(),
        access_key: ACCESS_KEY.to_string(),
        api_base: Some(mock.base_url().to_string()),
        metadata_assistant_id: METADATA_ASSISTANT.to_string(),
        transform_assistant_id: TRANSFORM_ASSISTANT.to_string(),
        poll: PollConfig {
            initial_interval: Duration::from_millis(5),
            max_interval: Duration::from_millis(20),
            deadline: Duration::from_secs(5),
        },
    };
    let client = config.client();
    AppState {
        config: Arc::new(config),
        client,
    }
}

fn request(method: Method, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid request")
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("JSON body")
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    String::from_utf8(bytes.to_vec()).expect("UTF-8 body")
}

fn metadata_reply() -> String {
    json!({
        "semantic_meta_keywords": ["ବନ୍ୟା", "ଓଡ଼ିଶା"],
        "article_summary": "ସାରାଂଶ",
        "headline": "ଶିରୋନାମା",
        "five_key_points": ["ପ୍ରଥମ", "ଦ୍ୱିତୀୟ", "ତୃତୀୟ", "ଚତୁର୍ଥ", "ପଞ୍ଚମ"],
        "meta_description": "ବିବରଣୀ",
        "meta_title": "ଶୀର୍ଷକ"
    })
    .to_string()
}

fn transform_reply() -> String {
    let reshaped = json!({
        "focus_keyword_odia": "ବନ୍ୟା",
        "focus_keyword_english": "Flood",
        "meta_title": "Flood: ଶୀର୍ଷକ | Flood in Odisha",
        "meta_description": "Flood: ବିବରଣୀ",
        "headline": "Flood: ଶିରୋନାମା",
        "semantic_meta_keywords": ["ବନ୍ୟା", "ଓଡ଼ିଶା", "Flood"],
        "article_summary": "ସାରାଂଶ",
        "five_key_points": ["ପ୍ରଥମ", "ଦ୍ୱିତୀୟ", "ତୃତୀୟ", "ଚତୁର୍ଥ", "ପଞ୍ଚମ"]
    });
    format!("```json\n{}\n```", reshaped)
}

#[tokio::test]
async fn rejects_missing_access_key_without_remote_calls() {
    let mock = MockAssistant::start().await;
    let app = api::router(test_state(&mock));

    let response = app
        .oneshot(request(Method::POST, "/", r#"{"articleText": "ଲେଖା"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(mock.request_count(), 0);
}

#[tokio::test]
async fn rejects_mismatched_access_key_without_remote_calls() {
    let mock = MockAssistant::start().await;
    let app = api::router(test_state(&mock));

    let response = app
        .oneshot(request(
            Method::POST,
            "/?key=wrong",
            r#"{"articleText": "ଲେଖା"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(mock.request_count(), 0);
}

#[tokio::test]
async fn returns_six_field_metadata_with_scratch_keys_removed() {
    let mock = MockAssistant::start().await;
    mock.set_reply(METADATA_ASSISTANT, &metadata_reply());
    mock.set_reply(TRANSFORM_ASSISTANT, &transform_reply());
    let app = api::router(test_state(&mock));

    let body = json!({
        "articleText": "ଲେଖା",
        "specialInstructions": {"focus_keyword": "ବନ୍ୟା"}
    })
    .to_string();

    let response = app
        .oneshot(request(
            Method::POST,
            &format!("/?key={}", ACCESS_KEY),
            &body,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let value = body_json(response).await;
    let task_response = value
        .get("task_response")
        .and_then(Value::as_object)
        .expect("task_response object");

    let mut keys: Vec<&str> = task_response.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec![
            "article_summary",
            "five_key_points",
            "headline",
            "meta_description",
            "meta_title",
            "semantic_meta_keywords",
        ]
    );

    // The transform stage consumed the metadata stage's reply.
    let prompts = mock.prompts();
    assert_eq!(prompts.len(), 2);
    assert!(prompts[0].contains("ଲେଖା"));
    assert!(prompts[0].contains("ବନ୍ୟା"));
    assert!(prompts[1].contains("ଶିରୋନାମା"));
    assert!(prompts[1].contains("Focus Keyword: ବନ୍ୟା"));
}

#[tokio::test]
async fn passes_raw_text_through_when_transform_reply_is_not_json() {
    let mock = MockAssistant::start().await;
    mock.set_reply(METADATA_ASSISTANT, &metadata_reply());
    mock.set_reply(TRANSFORM_ASSISTANT, "not json at all");
    let app = api::router(test_state(&mock));

    let response = app
        .oneshot(request(
            Method::POST,
            &format!("/?key={}", ACCESS_KEY),
            r#"{"articleText": "ଲେଖା"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let value = body_json(response).await;
    assert_eq!(value["task_response"], json!("not json at all"));
}

#[tokio::test]
async fn rejects_structurally_invalid_body() {
    let mock = MockAssistant::start().await;
    let app = api::router(test_state(&mock));

    let response = app
        .oneshot(request(
            Method::POST,
            &format!("/?key={}", ACCESS_KEY),
            "{not json",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(mock.request_count(), 0);
}

#[tokio::test]
async fn surfaces_failed_run_as_internal_error() {
    let mock = MockAssistant::start().await;
    mock.set_run_status("failed");
    let app = api::router(test_state(&mock));

    let response = app
        .oneshot(request(
            Method::POST,
            &format!("/?key={}", ACCESS_KEY),
            r#"{"articleText": "ଲେଖା"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let text = body_text(response).await;
    assert!(text.contains("terminal status"));
}

#[tokio::test]
async fn status_endpoint_replies_ok() {
    let mock = MockAssistant::start().await;
    let app = api::router(test_state(&mock));

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/status")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "OK");
}
