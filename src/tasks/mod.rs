//! Background tasks module
//!
//! The session timer event loop and the tick source feeding it.

pub mod ticker;
pub mod timer_loop;

// Re-export main types
pub use ticker::{TokioTicker, TICK_PERIOD};
pub use timer_loop::{
    session_timer_task, spawn_session_timer, Operation, OperationOutcome, TimerCommand,
    TimerError, TimerHandle,
};
