//! Cooperative shutdown for the probe loop.
//!
//! Ctrl+C only flips a flag and wakes any waiter; the loop decides where to
//! stop, so the in-flight sample is still recorded and the summary still runs.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;
use tokio::task::JoinHandle;

/// Exit status used when a second Ctrl+C forces the process down
pub const FORCED_EXIT_CODE: i32 = 130;

#[derive(Debug, Default)]
struct Inner {
    triggered: AtomicBool,
    notify: Notify,
}

/// Shared stop request; clones observe the same state
#[derive(Debug, Clone, Default)]
pub struct ShutdownSignal {
    inner: Arc<Inner>,
}

impl ShutdownSignal {
    /// Create a signal with no handler attached
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a stop and wake anything waiting in [`wait`](Self::wait)
    pub fn trigger(&self) {
        self.inner.triggered.store(true, Ordering::SeqCst);
        self.inner.notify.notify_waiters();
    }

    pub fn is_triggered(&self) -> bool {
        self.inner.triggered.load(Ordering::SeqCst)
    }

    /// Resolve once a stop has been requested
    pub async fn wait(&self) {
        loop {
            // Register before checking the flag so a trigger in between is not lost
            let notified = self.inner.notify.notified();
            if self.is_triggered() {
                return;
            }
            notified.await;
        }
    }

    /// Trigger on the first Ctrl+C. A second Ctrl+C exits immediately, for
    /// when a probe refuses to finish.
    pub fn listen_for_ctrl_c(&self) -> JoinHandle<()> {
        let signal = self.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_err() {
                return;
            }
            signal.trigger();

            if tokio::signal::ctrl_c().await.is_ok() {
                std::process::exit(FORCED_EXIT_CODE);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_initially_not_triggered() {
        assert!(!ShutdownSignal::new().is_triggered());
    }

    #[test]
    fn test_clone_shares_state() {
        let signal = ShutdownSignal::new();
        let other = signal.clone();
        signal.trigger();
        assert!(other.is_triggered());
    }

    #[tokio::test]
    async fn test_wait_returns_immediately_when_already_triggered() {
        let signal = ShutdownSignal::new();
        signal.trigger();
        tokio::time::timeout(Duration::from_secs(1), signal.wait())
            .await
            .expect("wait should complete");
    }

    #[tokio::test]
    async fn test_wait_wakes_on_trigger() {
        let signal = ShutdownSignal::new();
        let trigger = signal.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            trigger.trigger();
        });

        tokio::time::timeout(Duration::from_secs(5), signal.wait())
            .await
            .expect("wait should complete after trigger");
        assert!(signal.is_triggered());
    }
}
