//! Subscriber capability and decision types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Anything that can receive a price notification.
///
/// Callbacks are invoked synchronously on the updating thread, with no
/// registry lock held, so an implementation may call back into the registry
/// (subscribe, unsubscribe, update) without deadlocking.
pub trait PriceSubscriber: Send + Sync {
    /// Called with the feed name and its new price.
    fn on_price(&self, feed: &str, price: Decimal);
}

/// Trading decision produced by threshold-driven subscribers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeAction {
    Buy,
    Sell,
}

impl fmt::Display for TradeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeAction::Buy => write!(f, "buy"),
            TradeAction::Sell => write!(f, "sell"),
        }
    }
}
