//! Main application state management

use std::{
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};
use chrono::{DateTime, Utc};
use tokio::sync::watch;

use super::DisplayView;
use crate::{
    surface::{LatestNotification, Notification, WatchDisplay},
    tasks::{spawn_session_timer, Operation, OperationOutcome, TimerError, TimerHandle},
};

/// Shared state behind the HTTP handlers
#[derive(Debug)]
pub struct AppState {
    /// Client side of the session timer loop
    pub timer: TimerHandle,
    /// Latest view rendered by the timer
    pub view_rx: watch::Receiver<DisplayView>,
    /// Latest session-end notification
    pub notifications: LatestNotification,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Arc<Mutex<Option<String>>>,
    pub last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
}

impl AppState {
    /// Create the state and spawn the session timer ticking every `tick_period`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(port: u16, host: String, tick_period: Duration) -> Self {
        let (display, view_rx) = WatchDisplay::channel();
        let notifications = LatestNotification::new();
        let timer = spawn_session_timer(
            Box::new(display),
            Box::new(notifications.clone()),
            tick_period,
        );

        Self {
            timer,
            view_rx,
            notifications,
            start_time: Instant::now(),
            port,
            host,
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
        }
    }

    /// Run an operation on the timer and record it as the last action
    pub async fn perform(&self, op: Operation) -> Result<OperationOutcome, TimerError> {
        let outcome = self.timer.send(op).await?;

        if op != Operation::Status {
            if let Ok(mut last_action) = self.last_action.lock() {
                *last_action = Some(op.name().to_string());
            }
            if let Ok(mut last_time) = self.last_action_time.lock() {
                *last_time = Some(Utc::now());
            }
        }

        Ok(outcome)
    }

    /// Latest rendered view
    pub fn current_view(&self) -> DisplayView {
        self.view_rx.borrow().clone()
    }

    /// Latest session-end notification
    pub fn last_notification(&self) -> Option<Notification> {
        self.notifications.latest()
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}
