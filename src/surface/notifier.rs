//! Notification surface that remembers the latest message

use std::sync::{Arc, Mutex};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::timer::Notifier;

/// A message announced at a session-end transition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub at: DateTime<Utc>,
    /// How many notifications have been sent, this one included
    pub sequence: u64,
}

/// Logs each notification and keeps the most recent one for status readers
#[derive(Debug, Clone, Default)]
pub struct LatestNotification {
    latest: Arc<Mutex<Option<Notification>>>,
}

impl LatestNotification {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent notification, if any was sent
    pub fn latest(&self) -> Option<Notification> {
        self.latest.lock().ok().and_then(|n| n.clone())
    }
}

impl Notifier for LatestNotification {
    fn notify(&mut self, message: &str) {
        info!("Notification: {}", message);

        match self.latest.lock() {
            Ok(mut latest) => {
                let sequence = latest.as_ref().map_or(1, |n| n.sequence + 1);
                *latest = Some(Notification {
                    message: message.to_string(),
                    at: Utc::now(),
                    sequence,
                });
            }
            Err(e) => warn!("Failed to lock notification slot: {}", e),
        }
    }
}
