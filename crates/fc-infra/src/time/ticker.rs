use std::future::Future;

use tokio::sync::{mpsc, Mutex};
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::{debug, warn};

use fc_core::clipboard::ClipboardStatus;

/// Periodic clipboard status refresh for an open popup.
///
/// Polls once per period and publishes every status; stops on its own once
/// the countdown reaches zero or the receiver goes away. Starting again
/// replaces the running ticker.
pub struct StatusTicker {
    period: Duration,
    running: Mutex<Option<tokio::task::AbortHandle>>,
}

impl Default for StatusTicker {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

impl StatusTicker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            running: Mutex::new(None),
        }
    }

    pub async fn start<F, Fut>(&self, mut poll: F) -> mpsc::Receiver<ClipboardStatus>
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = anyhow::Result<ClipboardStatus>> + Send,
    {
        let (tx, rx) = mpsc::channel(8);
        let period = self.period;

        let mut running = self.running.lock().await;
        if let Some(existing) = running.take() {
            existing.abort();
        }

        let handle = tokio::spawn(async move {
            let mut ticks = interval(period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticks.tick().await;
                let status = match poll().await {
                    Ok(status) => status,
                    Err(err) => {
                        warn!(error = %err, "clipboard status poll failed");
                        break;
                    }
                };
                let done = status.remaining_secs == 0;
                if tx.send(status).await.is_err() || done {
                    break;
                }
            }
            debug!("status ticker finished");
        });

        *running = Some(handle.abort_handle());
        debug!(period_ms = period.as_millis() as u64, "status ticker started");
        rx
    }

    pub async fn stop(&self) {
        if let Some(handle) = self.running.lock().await.take() {
            handle.abort();
            debug!("status ticker stopped");
        }
    }
}
