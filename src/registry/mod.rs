//! Price feed registry with synchronous fan-out.
//!
//! The registry owns two independent tables:
//! - feed name → last known price
//! - feed name → ordered subscriber list
//!
//! Updating a price stores it and synchronously notifies every current
//! subscriber of that feed, in subscription order. Dispatch iterates a
//! snapshot taken under the lock, so callbacks may subscribe, unsubscribe,
//! or update prices without corrupting the in-flight pass.
//!
//! # Example
//!
//! ```
//! use quotefeed::{FeedRegistry, PriceSubscriber, Trader};
//! use rust_decimal_macros::dec;
//! use std::sync::Arc;
//!
//! let registry = FeedRegistry::new();
//!
//! let trader: Arc<dyn PriceSubscriber> = Arc::new(Trader::new("Lidiya"));
//! registry.subscribe(trader.clone(), "AAPL");
//!
//! registry.update_price("AAPL", dec!(150));
//! assert_eq!(registry.price("AAPL"), Some(dec!(150)));
//!
//! registry.unsubscribe(&trader, "AAPL");
//! assert_eq!(registry.subscriber_count("AAPL"), 0);
//! ```

mod manager;

pub use manager::FeedRegistry;
