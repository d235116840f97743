//! Timer state structure

use serde::{Deserialize, Serialize};

use crate::timer::SessionKind;

/// Countdown and session-type state of the Pomodoro timer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    /// Seconds left in the current session
    pub remaining_seconds: u32,
    pub session_kind: SessionKind,
    /// Work sessions finished since the last reset
    pub completed_work_sessions: u32,
    /// Whether the countdown is actively ticking
    pub running: bool,
}

impl TimerState {
    /// Create the initial state: an idle work session with its full duration
    pub fn new() -> Self {
        Self {
            remaining_seconds: SessionKind::Work.duration(),
            session_kind: SessionKind::Work,
            completed_work_sessions: 0,
            running: false,
        }
    }

    /// Check if the current session is a break
    pub fn is_break(&self) -> bool {
        self.session_kind.is_break()
    }

    /// Enter `kind` with its full duration
    pub fn enter(&mut self, kind: SessionKind) {
        self.session_kind = kind;
        self.remaining_seconds = kind.duration();
    }

    /// Remaining time formatted as `MM:SS`
    pub fn clock(&self) -> String {
        format!("{:02}:{:02}", self.remaining_seconds / 60, self.remaining_seconds % 60)
    }

    /// Whether the remaining time fits within the current session's duration
    pub fn is_consistent(&self) -> bool {
        self.remaining_seconds <= self.session_kind.duration()
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}
