//! Session timer state machine

use tracing::{debug, info, trace};

use super::{Confirm, Display, Notifier, SessionKind, TickId, TickScheduler};
use crate::state::{DisplayView, TimerState};

/// Prompt shown before a break is skipped
pub const SKIP_PROMPT: &str = "Skip the break and start working?";

/// Pomodoro state machine driven by a one-second tick.
///
/// When a session ends the timer halts: the next session is loaded with its
/// full duration but only counts down after a fresh `start()`.
pub struct SessionTimer {
    state: TimerState,
    scheduler: Box<dyn TickScheduler>,
    display: Box<dyn Display>,
    notifier: Box<dyn Notifier>,
}

impl SessionTimer {
    /// Create an idle timer at the start of a work session and render it
    pub fn new(
        scheduler: Box<dyn TickScheduler>,
        display: Box<dyn Display>,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        let mut timer = Self {
            state: TimerState::new(),
            scheduler,
            display,
            notifier,
        };
        timer.render();
        timer
    }

    /// Current timer state
    pub fn state(&self) -> &TimerState {
        &self.state
    }

    /// Start ticking. Returns false if the timer was already running.
    pub fn start(&mut self) -> bool {
        if self.state.running {
            debug!("Start ignored, timer already running");
            return false;
        }

        // Never leave two tick sources alive
        self.scheduler.cancel();
        let id = self.scheduler.schedule();
        self.state.running = true;

        info!(
            "Timer started: {:?} with {}s remaining (tick source {})",
            self.state.session_kind, self.state.remaining_seconds, id.0
        );
        self.render();
        true
    }

    /// Stop ticking. Safe to call when already paused.
    pub fn pause(&mut self) {
        self.scheduler.cancel();
        if self.state.running {
            info!("Timer paused with {}s remaining", self.state.remaining_seconds);
        } else {
            debug!("Pause requested while already paused");
        }
        self.state.running = false;
        self.render();
    }

    /// Return to an idle work session and clear the completed count
    pub fn reset(&mut self) {
        self.scheduler.cancel();
        self.state = TimerState::new();
        info!("Timer reset");
        self.render();
    }

    /// Skip the current break after asking `confirm`.
    ///
    /// Returns true if the break was skipped. During a work session the
    /// confirmation is never requested.
    pub fn skip(&mut self, confirm: &mut dyn Confirm) -> bool {
        if !self.state.is_break() {
            debug!("Skip ignored during work session");
            return false;
        }
        if !confirm.confirm(SKIP_PROMPT) {
            debug!("Skip declined");
            return false;
        }

        self.scheduler.cancel();
        self.state.running = false;
        self.state.enter(SessionKind::Work);
        info!("Break skipped, back to work");
        self.render();
        true
    }

    /// Handle a tick from the scheduler, dropping ticks from stale sources
    pub fn on_tick(&mut self, id: TickId) {
        if self.scheduler.current() != Some(id) {
            debug!("Dropping tick from stale source {}", id.0);
            return;
        }
        self.tick();
    }

    /// Count down one second, ending the session when it reaches zero.
    ///
    /// Only reachable through `on_tick`, which checks the tick source first.
    fn tick(&mut self) {
        if !self.state.running {
            debug!("Tick ignored, timer not running");
            return;
        }

        self.state.remaining_seconds = self.state.remaining_seconds.saturating_sub(1);
        trace!("Tick: {}s remaining", self.state.remaining_seconds);

        if self.state.remaining_seconds == 0 {
            self.end_session();
        } else {
            self.render();
        }
    }

    fn end_session(&mut self) {
        let next = match self.state.session_kind {
            SessionKind::Work => {
                self.state.completed_work_sessions += 1;
                SessionKind::break_after(self.state.completed_work_sessions)
            }
            SessionKind::ShortBreak | SessionKind::LongBreak => SessionKind::Work,
        };

        info!(
            "{:?} session finished, entering {:?} (completed: {})",
            self.state.session_kind, next, self.state.completed_work_sessions
        );

        self.scheduler.cancel();
        self.state.enter(next);
        self.state.running = false;
        self.render();
        self.notifier.notify(next.entry_message());
    }

    fn render(&mut self) {
        let view = DisplayView::from(&self.state);
        debug!("Rendering {} {}", view.mode_label, view.time);
        self.display.render(&view);
    }
}
