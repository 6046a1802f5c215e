use axum::body::Body;
use axum::http::{Request, StatusCode};
use rusty_reading_log::api::handlers::AppState;
use rusty_reading_log::api::router::create_router;
use rusty_reading_log::api::types::*;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

mod common;

use common::MockAdapters;

// ============================================================================
// E2Eテスト用のヘルパー関数
// ============================================================================

const ISBN: &str = "9788936434267";

/// モックアダプターで組み立てた実際のAPIルーター
fn setup_e2e_app(mocks: &MockAdapters) -> axum::Router {
    let app_state = Arc::new(AppState {
        service_deps: mocks.deps(),
    });

    create_router(app_state)
}

async fn send(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");

    let body = match body {
        Some(value) => Body::from(serde_json::to_string(&value).unwrap()),
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, bytes.to_vec())
}

async fn register_catalog(app: &axum::Router, pages_count: u32) {
    let (status, _) = send(
        app,
        "PUT",
        &format!("/catalog/{}", ISBN),
        Some(json!({
            "title": "소년이 온다",
            "author": "한강",
            "pages_count": pages_count,
        })),
    )
    .await;

    assert_eq!(status, StatusCode::NO_CONTENT);
}

// ============================================================================
// E2Eテスト: 正常系フロー
// ============================================================================

#[tokio::test]
async fn test_e2e_health_check() {
    let mocks = MockAdapters::new();
    let app = setup_e2e_app(&mocks);

    let (status, body) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"OK");
}

#[tokio::test]
async fn test_e2e_full_reading_flow() {
    let mocks = MockAdapters::new();
    let member_id = mocks.add_member();
    let app = setup_e2e_app(&mocks);

    register_catalog(&app, 216).await;

    // Step 1: まだ記録はない
    let (status, body) = send(
        &app,
        "GET",
        &format!("/members/{}/records/{}/exists", member_id.value(), ISBN),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let exists: ExistsResponse = serde_json::from_slice(&body).unwrap();
    assert!(!exists.exists);

    // Step 2: 読み始める
    let (status, body) = send(
        &app,
        "POST",
        &format!("/members/{}/records", member_id.value()),
        Some(json!({
            "tab": "reading",
            "isbn13": ISBN,
            "my_rating": 4.0,
            "current_page": 120,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let reading: ReadingRecordResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(reading.status, "READING");
    assert_eq!(reading.current_page, Some(120));
    assert_eq!(reading.my_rating, Some(4.0));
    assert!(reading.start_date.is_some());
    assert_eq!(reading.finish_date, None);

    // Step 3: 読み終える（現在ページは総ページ数になる）
    let (status, body) = send(
        &app,
        "POST",
        &format!("/members/{}/records", member_id.value()),
        Some(json!({
            "tab": "COMPLETED",
            "isbn13": ISBN,
            "my_rating": 5.0,
            "one_line_review": "오래 남을 책",
            "current_page": 3,
            "start_date": "2024-10-01",
            "finish_date": "2024-10-18",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let completed: ReadingRecordResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(completed.record_id, reading.record_id);
    assert_eq!(completed.current_page, Some(216));
    assert_eq!(completed.one_line_review.as_deref(), Some("오래 남을 책"));

    // Step 4: 記録を取得
    let (status, body) = send(
        &app,
        "GET",
        &format!("/members/{}/records/{}", member_id.value(), ISBN),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let fetched: ReadingRecordResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(fetched.status, "COMPLETED");

    // Step 5: スタンプは2件
    let (status, body) = send(
        &app,
        "GET",
        &format!("/members/{}/stamps", member_id.value()),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let stamps: Vec<CalendarStampResponse> = serde_json::from_slice(&body).unwrap();
    let statuses: Vec<&str> = stamps.iter().map(|s| s.status.as_str()).collect();
    assert_eq!(statuses, vec!["READING", "COMPLETED"]);

    // Step 6: 一覧
    let (status, body) = send(
        &app,
        "GET",
        &format!("/members/{}/records", member_id.value()),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let records: Vec<ReadingRecordResponse> = serde_json::from_slice(&body).unwrap();
    assert_eq!(records.len(), 1);
}

// ============================================================================
// E2Eテスト: 異常系
// ============================================================================

#[tokio::test]
async fn test_e2e_unknown_member_returns_404() {
    let mocks = MockAdapters::new();
    let app = setup_e2e_app(&mocks);
    register_catalog(&app, 216).await;

    let (status, body) = send(
        &app,
        "POST",
        &format!("/members/{}/records", uuid::Uuid::new_v4()),
        Some(json!({ "tab": "WISH", "isbn13": ISBN })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.error, "MEMBER_NOT_FOUND");
    assert!(mocks.stamps.all().is_empty());
}

#[tokio::test]
async fn test_e2e_invalid_tab_returns_400() {
    let mocks = MockAdapters::new();
    let member_id = mocks.add_member();
    let app = setup_e2e_app(&mocks);
    register_catalog(&app, 216).await;

    let (status, body) = send(
        &app,
        "POST",
        &format!("/members/{}/records", member_id.value()),
        Some(json!({ "tab": "FOO", "isbn13": ISBN })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.error, "INVALID_STATUS_TAB");
    assert_eq!(mocks.records.save_count(), 0);
    assert!(mocks.stamps.all().is_empty());
}

#[tokio::test]
async fn test_e2e_unknown_catalog_entry_returns_404() {
    let mocks = MockAdapters::new();
    let member_id = mocks.add_member();
    let app = setup_e2e_app(&mocks);

    let (status, body) = send(
        &app,
        "POST",
        &format!("/members/{}/records", member_id.value()),
        Some(json!({ "tab": "WISH", "isbn13": ISBN })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.error, "CATALOG_ENTRY_NOT_FOUND");
}

#[tokio::test]
async fn test_e2e_invalid_isbn_and_rating_return_400() {
    let mocks = MockAdapters::new();
    let member_id = mocks.add_member();
    let app = setup_e2e_app(&mocks);

    let (status, body) = send(
        &app,
        "GET",
        &format!("/members/{}/records/12345/exists", member_id.value()),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.error, "INVALID_ISBN13");

    let (status, body) = send(
        &app,
        "POST",
        &format!("/members/{}/records", member_id.value()),
        Some(json!({ "tab": "READING", "isbn13": ISBN, "my_rating": 7.5 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.error, "INVALID_RATING");
}

#[tokio::test]
async fn test_e2e_missing_record_returns_404() {
    let mocks = MockAdapters::new();
    let member_id = mocks.add_member();
    let app = setup_e2e_app(&mocks);

    let (status, body) = send(
        &app,
        "GET",
        &format!("/members/{}/records/{}", member_id.value(), ISBN),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.error, "RECORD_NOT_FOUND");
}
