//! Session timer event loop
//!
//! A single task owns the `SessionTimer`. User operations and ticks both
//! arrive as commands on one channel, so every state change happens in order
//! on that task.

use std::time::Duration;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use super::ticker::TokioTicker;
use crate::{
    state::TimerState,
    timer::{Display, Notifier, SessionTimer, TickId},
};

/// Capacity of the command channel
const COMMAND_BUFFER: usize = 64;

/// Operation requested through the input surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Start,
    Pause,
    Reset,
    /// Skip the current break, `confirmed` answering the confirmation prompt
    Skip { confirmed: bool },
    Status,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Start => "start",
            Operation::Pause => "pause",
            Operation::Reset => "reset",
            Operation::Skip { .. } => "skip",
            Operation::Status => "status",
        }
    }
}

/// Result of an operation as seen by the caller
#[derive(Debug, Clone)]
pub struct OperationOutcome {
    /// False when the operation was a no-op in the current state
    pub applied: bool,
    pub state: TimerState,
}

/// Messages processed by the timer loop
#[derive(Debug)]
pub enum TimerCommand {
    Operation {
        op: Operation,
        reply: oneshot::Sender<OperationOutcome>,
    },
    Tick(TickId),
}

/// Errors talking to the timer loop
#[derive(Debug, Error)]
pub enum TimerError {
    #[error("session timer loop is not running")]
    LoopClosed,
    #[error("session timer loop dropped the reply")]
    NoReply,
}

/// Cloneable client side of the timer loop
#[derive(Debug, Clone)]
pub struct TimerHandle {
    commands: mpsc::Sender<TimerCommand>,
}

impl TimerHandle {
    /// Send an operation and wait for its outcome
    pub async fn send(&self, op: Operation) -> Result<OperationOutcome, TimerError> {
        let (reply, outcome) = oneshot::channel();
        self.commands
            .send(TimerCommand::Operation { op, reply })
            .await
            .map_err(|_| TimerError::LoopClosed)?;
        outcome.await.map_err(|_| TimerError::NoReply)
    }

    pub async fn start(&self) -> Result<OperationOutcome, TimerError> {
        self.send(Operation::Start).await
    }

    pub async fn pause(&self) -> Result<OperationOutcome, TimerError> {
        self.send(Operation::Pause).await
    }

    pub async fn reset(&self) -> Result<OperationOutcome, TimerError> {
        self.send(Operation::Reset).await
    }

    pub async fn skip(&self, confirmed: bool) -> Result<OperationOutcome, TimerError> {
        self.send(Operation::Skip { confirmed }).await
    }

    pub async fn status(&self) -> Result<TimerState, TimerError> {
        self.send(Operation::Status).await.map(|outcome| outcome.state)
    }
}

/// Spawn the timer loop with a tokio ticker firing every `period`
pub fn spawn_session_timer(
    display: Box<dyn Display>,
    notifier: Box<dyn Notifier>,
    period: Duration,
) -> TimerHandle {
    let (commands, rx) = mpsc::channel(COMMAND_BUFFER);
    let ticker = TokioTicker::new(commands.downgrade(), period);
    let timer = SessionTimer::new(Box::new(ticker), display, notifier);

    tokio::spawn(session_timer_task(timer, rx));
    TimerHandle { commands }
}

/// Background task that applies commands to the timer until every handle is dropped
pub async fn session_timer_task(mut timer: SessionTimer, mut commands: mpsc::Receiver<TimerCommand>) {
    info!("Starting session timer task");

    while let Some(command) = commands.recv().await {
        match command {
            TimerCommand::Tick(id) => timer.on_tick(id),
            TimerCommand::Operation { op, reply } => {
                debug!("Timer task received operation: {:?}", op);
                let applied = apply(&mut timer, op);
                let outcome = OperationOutcome {
                    applied,
                    state: timer.state().clone(),
                };
                if reply.send(outcome).is_err() {
                    warn!("Caller went away before {} completed", op.name());
                }
            }
        }
    }

    info!("Session timer task stopped");
}

fn apply(timer: &mut SessionTimer, op: Operation) -> bool {
    match op {
        Operation::Start => timer.start(),
        Operation::Pause => {
            let was_running = timer.state().running;
            timer.pause();
            was_running
        }
        Operation::Reset => {
            timer.reset();
            true
        }
        Operation::Skip { confirmed } => timer.skip(&mut |prompt: &str| {
            debug!("Answering \"{}\" with {}", prompt, confirmed);
            confirmed
        }),
        Operation::Status => true,
    }
}
