// src/engine/cancel.rs

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::info;

/// Cooperative cancellation context shared between the Ctrl-C listener and
/// the watch loop.
///
/// The loop never blocks on the token; it polls [`CancelToken::is_cancelled`]
/// at iteration boundaries. A command already running when the signal
/// arrives is allowed to finish, so shutdown latency is bounded by the
/// remaining command time plus one poll interval.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Spawn the background task that flips the token on Ctrl-C.
pub fn spawn_ctrl_c_listener(token: CancelToken) {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("received Ctrl+C, finishing current cycle before shutdown");
                token.cancel();
            }
            Err(err) => {
                eprintln!("pollrun: failed to listen for Ctrl+C: {err}");
            }
        }
    });
}
