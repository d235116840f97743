//! Session kinds and their fixed durations

use serde::{Deserialize, Serialize};

/// Length of a work session in seconds (25 min)
pub const WORK_DURATION: u32 = 25 * 60;
/// Length of a short break in seconds (5 min)
pub const SHORT_BREAK_DURATION: u32 = 5 * 60;
/// Length of a long break in seconds (15 min)
pub const LONG_BREAK_DURATION: u32 = 15 * 60;
/// Every Nth completed work session earns a long break
pub const LONG_BREAK_INTERVAL: u32 = 4;

/// The kind of session currently counting down
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionKind {
    #[default]
    Work,
    ShortBreak,
    LongBreak,
}

impl SessionKind {
    /// Full duration of this session kind in seconds
    pub fn duration(&self) -> u32 {
        match self {
            SessionKind::Work => WORK_DURATION,
            SessionKind::ShortBreak => SHORT_BREAK_DURATION,
            SessionKind::LongBreak => LONG_BREAK_DURATION,
        }
    }

    /// Label shown on the display
    pub fn label(&self) -> &'static str {
        match self {
            SessionKind::Work => "Work Time",
            SessionKind::ShortBreak => "Short Break",
            SessionKind::LongBreak => "Long Break",
        }
    }

    pub fn is_break(&self) -> bool {
        !matches!(self, SessionKind::Work)
    }

    /// Break earned after `completed` work sessions have finished.
    ///
    /// Zero completed sessions never earns a long break.
    pub fn break_after(completed: u32) -> Self {
        if completed != 0 && completed % LONG_BREAK_INTERVAL == 0 {
            SessionKind::LongBreak
        } else {
            SessionKind::ShortBreak
        }
    }

    /// Message announced when this session is entered at the end of another
    pub fn entry_message(&self) -> &'static str {
        match self {
            SessionKind::Work => "Break's over! Back to work.",
            SessionKind::ShortBreak => "Time's up! Take a short break (5 min).",
            SessionKind::LongBreak => "Great job! Time for a long break (15 min).",
        }
    }
}
