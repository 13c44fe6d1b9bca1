//! Subscriber implementations shipped with the registry.
//!
//! Everything here implements [`PriceSubscriber`]:
//! - [`Trader`]: a named, passive reactor that logs each notification
//! - [`RobotTrader`]: decides buy/sell against a configurable threshold
//! - [`FeedListener`]: forwards updates into a bounded channel, consumed
//!   through a [`ListenerHandle`]
//!
//! # Example
//!
//! ```
//! use quotefeed::{FeedListener, FeedRegistry, ListenerConfig};
//! use rust_decimal_macros::dec;
//!
//! let registry = FeedRegistry::new();
//! let (listener, handle) = FeedListener::new(ListenerConfig::default());
//!
//! registry.subscribe(listener, "AAPL");
//! registry.update_price("AAPL", dec!(150));
//!
//! let update = handle.try_recv().unwrap();
//! assert_eq!(update.price, dec!(150));
//! ```

mod listener;
mod traders;
mod types;

pub use listener::{FeedListener, ListenerConfig, ListenerHandle};
pub use traders::{RobotTrader, Trader};
pub use types::{PriceSubscriber, TradeAction};
