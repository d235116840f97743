//! Tokio-backed tick source

use std::time::Duration;
use tokio::{
    sync::mpsc,
    task::JoinHandle,
    time::{interval_at, Instant, MissedTickBehavior},
};
use tracing::{debug, warn};

use super::timer_loop::TimerCommand;
use crate::timer::{TickId, TickScheduler};

/// Period between ticks in production
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Spawns one interval task per scheduled source and feeds its ticks into the
/// timer's command channel
pub struct TokioTicker {
    commands: mpsc::WeakSender<TimerCommand>,
    period: Duration,
    next_id: u64,
    active: Option<(TickId, JoinHandle<()>)>,
}

impl TokioTicker {
    /// Create a ticker that sends ticks to `commands`.
    ///
    /// Holds only a weak sender so the timer loop can still shut down once
    /// every handle is gone.
    pub fn new(commands: mpsc::WeakSender<TimerCommand>, period: Duration) -> Self {
        Self {
            commands,
            period,
            next_id: 0,
            active: None,
        }
    }
}

impl TickScheduler for TokioTicker {
    fn schedule(&mut self) -> TickId {
        self.cancel();

        self.next_id += 1;
        let id = TickId(self.next_id);
        let commands = self.commands.clone();
        let period = self.period;

        let handle = tokio::spawn(async move {
            // First tick fires one full period after scheduling
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                interval.tick().await;

                let Some(commands) = commands.upgrade() else {
                    debug!("Timer loop gone, stopping tick source {}", id.0);
                    break;
                };
                if let Err(e) = commands.send(TimerCommand::Tick(id)).await {
                    warn!("Failed to deliver tick from source {}: {}", id.0, e);
                    break;
                }
            }
        });

        debug!("Scheduled tick source {}", id.0);
        self.active = Some((id, handle));
        id
    }

    fn cancel(&mut self) {
        if let Some((id, handle)) = self.active.take() {
            handle.abort();
            debug!("Cancelled tick source {}", id.0);
        }
    }

    fn current(&self) -> Option<TickId> {
        self.active.as_ref().map(|(id, _)| *id)
    }
}

impl Drop for TokioTicker {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    fn drain(rx: &mut mpsc::Receiver<TimerCommand>) -> Vec<TickId> {
        let mut ticks = Vec::new();
        while let Ok(command) = rx.try_recv() {
            if let TimerCommand::Tick(id) = command {
                ticks.push(id);
            }
        }
        ticks
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_once_per_period() {
        let (tx, mut rx) = mpsc::channel(16);
        let mut ticker = TokioTicker::new(tx.downgrade(), TICK_PERIOD);
        let id = ticker.schedule();

        sleep(Duration::from_millis(500)).await;
        assert!(drain(&mut rx).is_empty());

        sleep(Duration::from_millis(2_800)).await;
        assert_eq!(drain(&mut rx), vec![id, id, id]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rescheduling_keeps_single_source() {
        let (tx, mut rx) = mpsc::channel(16);
        let mut ticker = TokioTicker::new(tx.downgrade(), TICK_PERIOD);
        let first = ticker.schedule();
        let second = ticker.schedule();
        assert_ne!(first, second);
        assert_eq!(ticker.current(), Some(second));

        sleep(Duration::from_millis(2_500)).await;
        assert_eq!(drain(&mut rx), vec![second, second]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_ticks() {
        let (tx, mut rx) = mpsc::channel(16);
        let mut ticker = TokioTicker::new(tx.downgrade(), TICK_PERIOD);
        ticker.schedule();

        sleep(Duration::from_millis(1_500)).await;
        ticker.cancel();
        assert_eq!(ticker.current(), None);
        assert_eq!(drain(&mut rx).len(), 1);

        sleep(Duration::from_secs(5)).await;
        assert!(drain(&mut rx).is_empty());
    }
}
