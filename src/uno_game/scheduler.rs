use log::debug;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Fired when a scheduled computer move is due. `generation` identifies the
/// game snapshot the move was scheduled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledMove {
    pub generation: u64,
}

/// Delays computer moves so they are readable. At most one move is pending;
/// scheduling again, cancelling or dropping the scheduler aborts it.
pub struct TurnScheduler {
    delay: Duration,
    tx: mpsc::UnboundedSender<ScheduledMove>,
    pending: Option<JoinHandle<()>>,
}

impl TurnScheduler {
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<ScheduledMove>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let scheduler = Self {
            delay,
            tx,
            pending: None,
        };
        (scheduler, rx)
    }

    pub fn schedule(&mut self, generation: u64) {
        self.cancel();

        let tx = self.tx.clone();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // The receiver is gone once the controller has shut down.
            let _ = tx.send(ScheduledMove { generation });
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            if !handle.is_finished() {
                debug!("cancelling pending computer move");
            }
            handle.abort();
        }
    }
}

impl Drop for TurnScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
