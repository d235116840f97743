//! Pomodoro session timer
//!
//! The state machine and the collaborator traits it is driven through.

pub mod collaborators;
pub mod session_kind;
pub mod session_timer;

// Re-export main types
pub use collaborators::{Confirm, Display, Notifier, TickId, TickScheduler};
pub use session_kind::{
    SessionKind, LONG_BREAK_DURATION, LONG_BREAK_INTERVAL, SHORT_BREAK_DURATION, WORK_DURATION,
};
pub use session_timer::{SessionTimer, SKIP_PROMPT};
