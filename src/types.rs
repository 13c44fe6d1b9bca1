//! Core types for the feed registry.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single price notification as delivered to subscribers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceUpdate {
    /// Feed the update belongs to (e.g. a ticker symbol).
    pub feed: String,

    /// The new price.
    pub price: Decimal,
}

impl PriceUpdate {
    pub fn new(feed: impl Into<String>, price: Decimal) -> Self {
        Self {
            feed: feed.into(),
            price,
        }
    }
}

/// Registry statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RegistryStats {
    /// Feeds with a recorded price.
    pub priced_feeds: usize,

    /// Feeds with at least one subscriber.
    pub subscribed_feeds: usize,

    /// Total subscription entries across all feeds (duplicates counted).
    pub subscriptions: usize,
}
