//! Rendered view of the timer for a display surface

use serde::{Deserialize, Serialize};

use super::TimerState;

/// Everything a display surface needs to draw the timer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayView {
    /// Remaining time as `MM:SS`
    pub time: String,
    /// "Work Time", "Short Break" or "Long Break"
    pub mode_label: String,
    /// Visual break indicator
    pub on_break: bool,
    pub skip_enabled: bool,
    pub start_enabled: bool,
    pub pause_enabled: bool,
    /// Completed session count as text
    pub completed_text: String,
}

impl From<&TimerState> for DisplayView {
    fn from(state: &TimerState) -> Self {
        Self {
            time: state.clock(),
            mode_label: state.session_kind.label().to_string(),
            on_break: state.is_break(),
            skip_enabled: state.is_break(),
            start_enabled: !state.running,
            pause_enabled: state.running,
            completed_text: format!("Pomodoros Completed: {}", state.completed_work_sessions),
        }
    }
}

impl Default for DisplayView {
    fn default() -> Self {
        Self::from(&TimerState::new())
    }
}
