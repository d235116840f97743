//! Collaborators injected into the session timer
//!
//! The timer never talks to a UI, a clock or a dialog directly. Whatever drives
//! it supplies these traits instead.

use crate::state::DisplayView;

/// Surface that draws the timer after every state change
pub trait Display: Send {
    fn render(&mut self, view: &DisplayView);
}

/// Informational prompt shown at session-end transitions
pub trait Notifier: Send {
    fn notify(&mut self, message: &str);
}

/// Yes/no prompt consulted before a break is skipped
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Identifies one scheduled tick source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickId(pub u64);

/// Source of recurring one-second ticks.
///
/// At most one source is active: scheduling a new one cancels the previous.
pub trait TickScheduler: Send {
    /// Begin a new recurring tick source, cancelling any active one
    fn schedule(&mut self) -> TickId;

    /// Stop the active tick source, if any
    fn cancel(&mut self);

    /// Id of the active tick source
    fn current(&self) -> Option<TickId>;
}
