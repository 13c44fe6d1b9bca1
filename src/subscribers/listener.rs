//! Channel-backed subscriber for consuming updates off the dispatching thread.

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use rust_decimal::Decimal;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::debug;

use super::types::PriceSubscriber;
use crate::types::PriceUpdate;

/// Configuration for a [`FeedListener`].
#[derive(Clone, Debug)]
pub struct ListenerConfig {
    /// Max buffered updates before new ones are dropped.
    /// Default: 1000
    pub buffer_size: usize,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self { buffer_size: 1000 }
    }
}

/// A subscriber that forwards updates into a bounded queue.
///
/// Dispatch never blocks on a slow consumer: when the buffer is full (or the
/// handle was dropped) the update is discarded and counted instead.
pub struct FeedListener {
    sender: Sender<PriceUpdate>,
    dropped: AtomicU64,
}

impl FeedListener {
    /// Create a listener and the handle that drains it.
    pub fn new(config: ListenerConfig) -> (Arc<Self>, ListenerHandle) {
        let (sender, receiver) = bounded(config.buffer_size);

        let listener = Arc::new(Self {
            sender,
            dropped: AtomicU64::new(0),
        });

        (listener, ListenerHandle { receiver })
    }

    /// Updates discarded because the buffer was full or the handle was gone.
    pub fn dropped_updates(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }
}

impl PriceSubscriber for FeedListener {
    fn on_price(&self, feed: &str, price: Decimal) {
        let update = PriceUpdate::new(feed, price);
        match self.sender.try_send(update) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) | Err(TrySendError::Disconnected(_)) => {
                self.dropped.fetch_add(1, Ordering::Relaxed);
                debug!(feed, %price, "listener buffer unavailable, update dropped");
            }
        }
    }
}

/// Handle to consume updates from a [`FeedListener`].
pub struct ListenerHandle {
    receiver: Receiver<PriceUpdate>,
}

impl ListenerHandle {
    /// Receive the next update (blocking).
    pub fn recv(&self) -> Result<PriceUpdate, crossbeam_channel::RecvError> {
        self.receiver.recv()
    }

    /// Try to receive an update (non-blocking).
    pub fn try_recv(&self) -> Result<PriceUpdate, crossbeam_channel::TryRecvError> {
        self.receiver.try_recv()
    }

    /// Receive with timeout.
    pub fn recv_timeout(
        &self,
        timeout: std::time::Duration,
    ) -> Result<PriceUpdate, crossbeam_channel::RecvTimeoutError> {
        self.receiver.recv_timeout(timeout)
    }
}
