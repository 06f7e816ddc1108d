//! Shared Module
//!
//! This module contains the value types used by both the handler chain and
//! the notifier: requests, events, errors and configuration.
//!
//! # Overview
//!
//! Everything here is plain data. Requests and events derive serde so host
//! applications can log or forward them.

/// Request data structure
pub mod request;

/// News events broadcast through the notifier
pub mod event;

/// Shared error types
pub mod error;

/// Chain configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use request::{Request, RequestBuilder, RequestKind};
pub use event::{LikeEvent, NewsItem};
pub use error::{ConfigError, SubscriberError, ValidationError};
pub use config::{ChainConfig, ChainConfigBuilder};
