//! API request and response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    state::{DisplayView, TimerState},
    surface::Notification,
};

/// API response structure for the timer operation endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    /// "applied" or "ignored"
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub timer: TimerState,
    pub view: DisplayView,
}

impl ApiResponse {
    /// Create a new API response
    pub fn new(status: String, message: String, timer: TimerState) -> Self {
        let view = DisplayView::from(&timer);
        Self {
            status,
            message,
            timestamp: Utc::now(),
            timer,
            view,
        }
    }

    /// Create a response for an operation that changed the timer
    pub fn applied(message: String, timer: TimerState) -> Self {
        Self::new("applied".to_string(), message, timer)
    }

    /// Create a response for an operation that was a no-op
    pub fn ignored(message: String, timer: TimerState) -> Self {
        Self::new("ignored".to_string(), message, timer)
    }
}

/// Body of POST /skip
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkipRequest {
    /// Answer to "Skip the break and start working?"
    #[serde(default)]
    pub confirm: bool,
}

/// Status response with the rendered view and timer details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub timer: TimerState,
    pub view: DisplayView,
    pub last_notification: Option<Notification>,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
