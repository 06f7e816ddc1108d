//! Notifier Module
//!
//! This module decouples event producers from event consumers. A producer
//! publishes to a `Notifier`; the notifier delivers the event to every
//! registered `Subscriber` in registration order.
//!
//! # Module Structure
//!
//! ```text
//! notifier/
//! ├── mod.rs         - Module exports and documentation
//! ├── registry.rs    - Notifier, SubscriptionId, PublishReport
//! ├── subscriber.rs  - Subscriber trait and FnSubscriber
//! └── screens.rs     - News feed, detail and profile screens
//! ```
//!
//! # Ownership
//!
//! The notifier holds subscribers weakly. Subscribers that need to publish
//! hold the notifier weakly too, so neither side keeps the other alive.
//!
//! # Failures
//!
//! A failing or panicking subscriber never stops the broadcast; failures are
//! collected in the `PublishReport` returned by `publish`.

/// Subscriber registry and broadcast loop
pub mod registry;

/// Subscriber trait
pub mod subscriber;

/// News screens kept in sync through a notifier
pub mod screens;

// Re-export commonly used types
pub use registry::{DeliveryFailure, Notifier, PublishReport, SubscriptionId};
pub use subscriber::{FnSubscriber, Subscriber};
pub use screens::{NewsDetailScreen, NewsFeedScreen, ProfileScreen, ScreenMediator};
