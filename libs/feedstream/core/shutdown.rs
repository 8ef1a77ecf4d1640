//! Graceful shutdown signal

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::signal;
use tokio::sync::Notify;
use tracing::info;

/// Cloneable cancellation signal shared by the stream and its owner.
///
/// The flag starts `true` (running). `trigger` flips it once and wakes
/// every task waiting in [`Shutdown::wait`]; later calls are no-ops.
#[derive(Debug, Clone)]
pub struct Shutdown {
    flag: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl Shutdown {
    /// Create a new signal in running state
    pub fn new() -> Self {
        Self {
            flag: Arc::new(AtomicBool::new(true)),
            notify: Arc::new(Notify::new()),
        }
    }

    /// Spawn a Ctrl+C signal handler that triggers shutdown
    pub fn spawn_signal_handler(&self) {
        let shutdown = self.clone();
        tokio::spawn(async move {
            if signal::ctrl_c().await.is_ok() {
                info!("Received shutdown signal (Ctrl+C)");
                shutdown.trigger();
            }
        });
    }

    /// Request shutdown. Idempotent.
    pub fn trigger(&self) {
        if self.flag.swap(false, Ordering::AcqRel) {
            info!("Shutting down gracefully...");
        }
        self.notify.notify_waiters();
    }

    /// Check if the process should continue running
    #[inline]
    pub fn is_running(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }

    /// Resolve once shutdown has been triggered
    pub async fn wait(&self) {
        loop {
            let notified = self.notify.notified();
            if !self.is_running() {
                return;
            }
            notified.await;
        }
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
