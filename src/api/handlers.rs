//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::Json,
};
use tracing::{error, info, warn};

use crate::{
    state::AppState,
    tasks::{Operation, OperationOutcome, TimerError},
};
use super::responses::{ApiResponse, HealthResponse, SkipRequest, StatusResponse};

/// Shape an operation outcome into an API response
fn respond(
    op: Operation,
    result: Result<OperationOutcome, TimerError>,
    applied: &str,
    ignored: &str,
) -> Result<Json<ApiResponse>, StatusCode> {
    match result {
        Ok(outcome) if outcome.applied => {
            info!("{} endpoint called - {}", op.name(), applied);
            Ok(Json(ApiResponse::applied(applied.to_string(), outcome.state)))
        }
        Ok(outcome) => {
            info!("{} endpoint called - {}", op.name(), ignored);
            Ok(Json(ApiResponse::ignored(ignored.to_string(), outcome.state)))
        }
        Err(e) => {
            error!("Failed to {} timer: {}", op.name(), e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /start - Start the countdown
pub async fn start_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    let op = Operation::Start;
    respond(op, state.perform(op).await, "Timer started", "Timer already running")
}

/// Handle POST /pause - Pause the countdown
pub async fn pause_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    let op = Operation::Pause;
    respond(op, state.perform(op).await, "Timer paused", "Timer already paused")
}

/// Handle POST /reset - Back to an idle work session with no completed sessions
pub async fn reset_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    let op = Operation::Reset;
    respond(op, state.perform(op).await, "Timer reset", "Timer reset")
}

/// Read the answer to the skip prompt from the request body.
///
/// An empty body means not confirmed. A non-empty body must be a JSON
/// `SkipRequest`; anything else is rejected with the matching 4xx status.
fn parse_skip_confirmation(headers: &HeaderMap, body: &Bytes) -> Result<bool, StatusCode> {
    if body.is_empty() {
        return Ok(false);
    }

    let is_json = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|mime| {
            let mime = mime.trim().to_ascii_lowercase();
            mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
        })
        .unwrap_or(false);
    if !is_json {
        warn!("Rejecting skip body without a JSON content type");
        return Err(StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    match Json::<SkipRequest>::from_bytes(body) {
        Ok(Json(request)) => Ok(request.confirm),
        Err(rejection) => {
            warn!("Rejecting skip body: {}", rejection.body_text());
            Err(rejection.status())
        }
    }
}

/// Handle POST /skip - Skip the current break if confirmed
pub async fn skip_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ApiResponse>, StatusCode> {
    let confirmed = parse_skip_confirmation(&headers, &body)?;
    let op = Operation::Skip { confirmed };
    respond(
        op,
        state.perform(op).await,
        "Break skipped, back to work",
        "Nothing skipped: not on a break or not confirmed",
    )
}

/// Handle GET /status - Return the timer state and rendered view
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, StatusCode> {
    let timer = match state.perform(Operation::Status).await {
        Ok(outcome) => outcome.state,
        Err(e) => {
            error!("Failed to get timer state: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        timer,
        view: state.current_view(),
        last_notification: state.last_notification(),
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
