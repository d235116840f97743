//! Pomodoro Timer - A Pomodoro session timer controlled over HTTP
//!
//! The core is `SessionTimer`, a state machine that counts down work and
//! break sessions. A single event-loop task owns it and feeds it ticks and
//! user operations. An axum server exposes the operations and the rendered view.

pub mod config;
pub mod state;
pub mod timer;
pub mod surface;
pub mod tasks;
pub mod api;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use state::{AppState, DisplayView, TimerState};
pub use timer::{SessionKind, SessionTimer};
pub use api::create_router;
pub use utils::signals::shutdown_signal;
