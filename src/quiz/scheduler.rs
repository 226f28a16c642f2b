use std::time::Duration;

use tokio::sync::mpsc;

use crate::quiz::{ChoiceSlot, Outcome};

/// Work the controller postpones until the feedback delay has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredAction {
    /// Clear the feedback marker, then move on to the next question.
    ClearFeedback {
        /// Session that scheduled it; stale actions are dropped.
        session: u64,
        /// `None` when the selection had no matching slot.
        slot: Option<ChoiceSlot>,
        outcome: Outcome,
    },
}

/// "Run this after a delay". The action comes back to the controller via
/// `SessionController::on_deferred`.
pub trait Scheduler {
    fn schedule(&mut self, delay: Duration, action: DeferredAction);
}

/// Fires actions on a tokio timer and delivers them over a channel, so that
/// the event loop stays the only writer of session state.
pub struct TokioScheduler {
    tx: mpsc::UnboundedSender<DeferredAction>,
}

impl TokioScheduler {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<DeferredAction>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&mut self, delay: Duration, action: DeferredAction) {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // receiver is gone once the loop has exited; nothing left to do
            let _ = tx.send(action);
        });
    }
}
