//! Error types for the feed registry.

use thiserror::Error;

/// Main error type for registry operations.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("No price recorded for feed: {0}")]
    UnknownFeed(String),
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, FeedError>;
