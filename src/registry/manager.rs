//! Feed registry: price table, subscription table, and dispatch.

use parking_lot::RwLock;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, trace};

use crate::error::{FeedError, Result};
use crate::subscribers::PriceSubscriber;
use crate::types::RegistryStats;

/// Tracks named price feeds and broadcasts updates to their subscribers.
///
/// Both tables live behind their own lock so price overwrites and
/// subscription churn proceed independently. Dispatch clones the feed's
/// subscriber list under the lock and releases it before invoking any
/// callback, so subscribers may re-enter the registry freely.
pub struct FeedRegistry {
    /// Last known price per feed.
    prices: RwLock<HashMap<String, Decimal>>,

    /// Subscribers per feed, in subscription order. Duplicates allowed.
    subscribers: RwLock<HashMap<String, Vec<Arc<dyn PriceSubscriber>>>>,
}

impl FeedRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            prices: RwLock::new(HashMap::new()),
            subscribers: RwLock::new(HashMap::new()),
        }
    }

    /// Append a subscriber to a feed's list, creating the feed list if absent.
    ///
    /// Subscribing the same handle twice yields two entries, each notified
    /// independently.
    pub fn subscribe(&self, subscriber: Arc<dyn PriceSubscriber>, feed: &str) {
        let mut subs = self.subscribers.write();
        subs.entry(feed.to_string()).or_default().push(subscriber);
        debug!(feed, "subscriber added");
    }

    /// Remove the first occurrence of a subscriber from a feed's list.
    ///
    /// Matches by handle identity (`Arc::ptr_eq`), not by value. Unknown
    /// feeds and absent subscribers are a no-op.
    pub fn unsubscribe(&self, subscriber: &Arc<dyn PriceSubscriber>, feed: &str) {
        let mut subs = self.subscribers.write();
        if let Some(list) = subs.get_mut(feed) {
            if let Some(pos) = list.iter().position(|s| Arc::ptr_eq(s, subscriber)) {
                list.remove(pos);
                debug!(feed, "subscriber removed");
            }
        }
    }

    /// Overwrite the stored price for a feed, then notify its subscribers.
    ///
    /// The value handed to subscribers is the one written here, so two
    /// racing updates each deliver their own price.
    pub fn update_price(&self, feed: &str, price: Decimal) {
        self.prices.write().insert(feed.to_string(), price);
        debug!(feed, %price, "price updated");
        self.dispatch(feed, price);
    }

    /// Notify a feed's subscribers with its stored price.
    ///
    /// Fails with [`FeedError::UnknownFeed`] if no price was ever recorded
    /// for the feed. Unreachable through [`update_price`], which stores the
    /// price first.
    pub fn notify(&self, feed: &str) -> Result<()> {
        let price = self
            .prices
            .read()
            .get(feed)
            .copied()
            .ok_or_else(|| FeedError::UnknownFeed(feed.to_string()))?;

        self.dispatch(feed, price);
        Ok(())
    }

    /// The last recorded price for a feed, if any.
    pub fn price(&self, feed: &str) -> Option<Decimal> {
        self.prices.read().get(feed).copied()
    }

    /// Number of subscription entries for a feed (duplicates counted).
    pub fn subscriber_count(&self, feed: &str) -> usize {
        self.subscribers.read().get(feed).map_or(0, Vec::len)
    }

    /// Feeds with a recorded price.
    pub fn feeds(&self) -> Vec<String> {
        self.prices.read().keys().cloned().collect()
    }

    /// Registry statistics.
    pub fn stats(&self) -> RegistryStats {
        let subs = self.subscribers.read();
        RegistryStats {
            priced_feeds: self.prices.read().len(),
            subscribed_feeds: subs.values().filter(|list| !list.is_empty()).count(),
            subscriptions: subs.values().map(Vec::len).sum(),
        }
    }

    /// Deliver a price to a snapshot of the feed's subscribers, in order.
    ///
    /// The snapshot is taken under the read lock and the lock is released
    /// before any callback runs; reentrant mutation affects later dispatches
    /// only.
    fn dispatch(&self, feed: &str, price: Decimal) {
        let snapshot: Vec<Arc<dyn PriceSubscriber>> = {
            let subs = self.subscribers.read();
            match subs.get(feed) {
                Some(list) => list.clone(),
                None => return,
            }
        };

        trace!(feed, %price, count = snapshot.len(), "dispatching");
        for subscriber in &snapshot {
            subscriber.on_price(feed, price);
        }
    }
}

impl Default for FeedRegistry {
    fn default() -> Self {
        Self::new()
    }
}
