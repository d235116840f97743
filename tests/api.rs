use std::{sync::Arc, time::Duration};

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use pomodoro_timer::{create_router, tasks::TICK_PERIOD, AppState};

fn app() -> Router {
    let state = AppState::new(20525, "127.0.0.1".to_string(), TICK_PERIOD);
    create_router(Arc::new(state))
}

async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

/// Send a raw body with an optional content type and return only the status
async fn call_raw(app: &Router, uri: &str, content_type: Option<&str>, body: &str) -> StatusCode {
    let mut request = Request::builder().method(Method::POST).uri(uri);
    if let Some(content_type) = content_type {
        request = request.header(header::CONTENT_TYPE, content_type);
    }

    let response = app
        .clone()
        .oneshot(request.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap();
    response.status()
}

/// Start the timer and let the first work session run out
async fn app_on_short_break() -> Router {
    let app = app();
    call(&app, Method::POST, "/start", None).await;
    tokio::time::sleep(Duration::from_millis(1_500_500)).await;
    app
}

#[tokio::test]
async fn health_reports_ok() {
    let app = app();
    let (status, body) = call(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn status_shows_initial_work_session() {
    let app = app();
    let (status, body) = call(&app, Method::GET, "/status", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["timer"]["session_kind"], "work");
    assert_eq!(body["timer"]["remaining_seconds"], 1500);
    assert_eq!(body["view"]["time"], "25:00");
    assert_eq!(body["view"]["mode_label"], "Work Time");
    assert_eq!(body["view"]["completed_text"], "Pomodoros Completed: 0");
    assert_eq!(body["last_notification"], Value::Null);
    assert_eq!(body["last_action"], Value::Null);
}

#[tokio::test]
async fn start_is_idempotent() {
    let app = app();
    let (_, first) = call(&app, Method::POST, "/start", None).await;
    assert_eq!(first["status"], "applied");
    assert_eq!(first["timer"]["running"], true);
    assert_eq!(first["view"]["pause_enabled"], true);

    let (_, second) = call(&app, Method::POST, "/start", None).await;
    assert_eq!(second["status"], "ignored");

    let (_, status) = call(&app, Method::GET, "/status", None).await;
    assert_eq!(status["last_action"], "start");
}

#[tokio::test]
async fn pause_and_reset() {
    let app = app();
    call(&app, Method::POST, "/start", None).await;

    let (_, paused) = call(&app, Method::POST, "/pause", None).await;
    assert_eq!(paused["status"], "applied");
    assert_eq!(paused["timer"]["running"], false);

    let (_, again) = call(&app, Method::POST, "/pause", None).await;
    assert_eq!(again["status"], "ignored");

    let (_, reset) = call(&app, Method::POST, "/reset", None).await;
    assert_eq!(reset["status"], "applied");
    assert_eq!(reset["timer"]["remaining_seconds"], 1500);
    assert_eq!(reset["timer"]["completed_work_sessions"], 0);
}

#[tokio::test]
async fn skip_during_work_is_ignored() {
    let app = app();
    let (status, body) = call(&app, Method::POST, "/skip", Some(serde_json::json!({"confirm": true}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ignored");
    assert_eq!(body["timer"]["session_kind"], "work");
}

#[tokio::test(start_paused = true)]
async fn finished_work_session_can_be_skipped() {
    let app = app();
    call(&app, Method::POST, "/start", None).await;
    tokio::time::sleep(Duration::from_millis(1_500_500)).await;

    let (_, status) = call(&app, Method::GET, "/status", None).await;
    assert_eq!(status["timer"]["session_kind"], "short_break");
    assert_eq!(status["timer"]["remaining_seconds"], 300);
    assert_eq!(status["timer"]["running"], false);
    assert_eq!(status["view"]["skip_enabled"], true);
    assert_eq!(
        status["last_notification"]["message"],
        "Time's up! Take a short break (5 min)."
    );

    // Without a body the prompt counts as declined
    let (_, declined) = call(&app, Method::POST, "/skip", None).await;
    assert_eq!(declined["status"], "ignored");
    assert_eq!(declined["timer"]["session_kind"], "short_break");

    let (_, skipped) = call(&app, Method::POST, "/skip", Some(serde_json::json!({"confirm": true}))).await;
    assert_eq!(skipped["status"], "applied");
    assert_eq!(skipped["timer"]["session_kind"], "work");
    assert_eq!(skipped["timer"]["remaining_seconds"], 1500);
    assert_eq!(skipped["timer"]["completed_work_sessions"], 1);
}

#[tokio::test(start_paused = true)]
async fn skip_without_json_content_type_is_rejected() {
    let app = app_on_short_break().await;

    let status = call_raw(&app, "/skip", None, r#"{"confirm":true}"#).await;
    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);

    let status = call_raw(&app, "/skip", Some("text/plain"), r#"{"confirm":true}"#).await;
    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);

    let (_, body) = call(&app, Method::GET, "/status", None).await;
    assert_eq!(body["timer"]["session_kind"], "short_break");
}

#[tokio::test(start_paused = true)]
async fn skip_with_wrong_field_type_is_rejected() {
    let app = app_on_short_break().await;

    let status = call_raw(&app, "/skip", Some("application/json"), r#"{"confirm":"yes"}"#).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, body) = call(&app, Method::GET, "/status", None).await;
    assert_eq!(body["timer"]["session_kind"], "short_break");
}

#[tokio::test(start_paused = true)]
async fn skip_with_broken_json_is_rejected() {
    let app = app_on_short_break().await;

    let status = call_raw(&app, "/skip", Some("application/json"), r#"{"confirm":tru"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = call(&app, Method::GET, "/status", None).await;
    assert_eq!(body["timer"]["session_kind"], "short_break");
}

#[tokio::test(start_paused = true)]
async fn skip_accepts_json_with_charset() {
    let app = app_on_short_break().await;

    let status = call_raw(
        &app,
        "/skip",
        Some("application/json; charset=utf-8"),
        r#"{"confirm":true}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = call(&app, Method::GET, "/status", None).await;
    assert_eq!(body["timer"]["session_kind"], "work");
}

#[tokio::test(start_paused = true)]
async fn skip_with_empty_body_is_declined() {
    let app = app_on_short_break().await;

    let status = call_raw(&app, "/skip", None, "").await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = call(&app, Method::GET, "/status", None).await;
    assert_eq!(body["timer"]["session_kind"], "short_break");
}
