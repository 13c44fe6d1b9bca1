//! Reference subscriber implementations.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::info;

use super::types::{PriceSubscriber, TradeAction};

/// Threshold above which the robot buys instead of selling.
const DEFAULT_BUY_THRESHOLD: Decimal = dec!(100);

/// A named trader that logs every notification it receives.
pub struct Trader {
    name: String,
}

impl Trader {
    /// Create a trader with a display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The trader's display name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PriceSubscriber for Trader {
    fn on_price(&self, feed: &str, price: Decimal) {
        info!(trader = %self.name, feed, %price, "received price update");
    }
}

/// An automated trader that decides buy/sell against a fixed threshold.
///
/// Strictly above the threshold it buys; at or below it sells. Carries no
/// state between notifications.
pub struct RobotTrader {
    threshold: Decimal,
}

impl RobotTrader {
    /// Create a robot with the default threshold of 100.
    pub fn new() -> Self {
        Self {
            threshold: DEFAULT_BUY_THRESHOLD,
        }
    }

    /// Create a robot with a custom threshold.
    pub fn with_threshold(threshold: Decimal) -> Self {
        Self { threshold }
    }

    /// The configured threshold.
    pub fn threshold(&self) -> Decimal {
        self.threshold
    }

    /// Decide an action for a price. Pure; depends only on the argument.
    pub fn decide(&self, price: Decimal) -> TradeAction {
        if price > self.threshold {
            TradeAction::Buy
        } else {
            TradeAction::Sell
        }
    }
}

impl Default for RobotTrader {
    fn default() -> Self {
        Self::new()
    }
}

impl PriceSubscriber for RobotTrader {
    fn on_price(&self, feed: &str, price: Decimal) {
        let action = self.decide(price);
        info!(feed, %price, threshold = %self.threshold, %action, "robot decision");
    }
}
