//! State management module
//!
//! This module contains the timer state, its rendered view and the shared
//! application state used by the HTTP handlers.

pub mod app_state;
pub mod display_view;
pub mod timer_state;

// Re-export main types
pub use app_state::AppState;
pub use display_view::DisplayView;
pub use timer_state::TimerState;
