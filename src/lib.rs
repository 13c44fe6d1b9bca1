//! # Quotefeed
//!
//! An in-process price feed registry with synchronous subscriber fan-out.
//!
//! ## Core Concepts
//!
//! - **Feeds**: Named price streams keyed by an opaque string (e.g. a ticker)
//! - **Registry**: Owns the last known price and subscriber list per feed
//! - **Subscribers**: Anything implementing [`PriceSubscriber`], notified
//!   synchronously in subscription order
//!
//! ## Example
//!
//! ```
//! use quotefeed::{FeedRegistry, PriceSubscriber, RobotTrader, Trader};
//! use rust_decimal_macros::dec;
//! use std::sync::Arc;
//!
//! let registry = FeedRegistry::new();
//!
//! let lidiya: Arc<dyn PriceSubscriber> = Arc::new(Trader::new("Lidiya"));
//! let stylez: Arc<dyn PriceSubscriber> = Arc::new(Trader::new("Stylez"));
//! let robot: Arc<dyn PriceSubscriber> = Arc::new(RobotTrader::new());
//!
//! registry.subscribe(lidiya, "AAPL");
//! registry.subscribe(stylez.clone(), "AAPL");
//! registry.subscribe(robot, "AAPL");
//!
//! registry.update_price("AAPL", dec!(150));
//! registry.update_price("AAPL", dec!(90));
//!
//! registry.unsubscribe(&stylez, "AAPL");
//!
//! registry.update_price("AAPL", dec!(120));
//! assert_eq!(registry.price("AAPL"), Some(dec!(120)));
//! ```

pub mod error;
pub mod registry;
pub mod subscribers;
pub mod types;

// Re-exports
pub use error::{FeedError, Result};
pub use registry::FeedRegistry;
pub use subscribers::{
    FeedListener, ListenerConfig, ListenerHandle, PriceSubscriber, RobotTrader, TradeAction,
    Trader,
};
pub use types::{PriceUpdate, RegistryStats};
