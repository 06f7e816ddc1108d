//! authflow - Main Library
//!
//! authflow provides two small building blocks for application front ends:
//! a short-circuiting request-validation chain and a synchronous event
//! notifier.
//!
//! # Overview
//!
//! - Validate login and signup requests through a chain of handlers that
//!   stops at the first failure
//! - Start validation from any node of a chain (sub-chains)
//! - Broadcast events to subscribers in registration order, with per
//!   subscriber failure isolation and queued re-entrant publishes
//!
//! # Module Structure
//!
//! - **`shared`** - Value types used everywhere
//!   - Requests, news events, error types
//!   - Chain configuration (builder, TOML, environment)
//!
//! - **`chain`** - Chain of responsibility
//!   - `Handler` trait, `HandlerChain`, `HandlerRef`, `ChainBuilder`
//!   - Login, signup, profile, location and notification rules
//!   - Canned login and signup chains
//!
//! - **`notifier`** - Observer / mediator
//!   - `Notifier`, `Subscriber`, `PublishReport`
//!   - News feed screens kept in sync through a notifier
//!
//! # Usage
//!
//! ```rust
//! use authflow::chain::{login_chain, Capabilities};
//! use authflow::shared::{ChainConfig, Request, ValidationError};
//!
//! let config = ChainConfig::default();
//! let chain = login_chain(&Capabilities::from_config(&config));
//!
//! assert_eq!(chain.handle(&Request::login("a@b.com", "x")), None);
//! assert_eq!(
//!     chain.handle(&Request::login("a@b.com", "")),
//!     Some(ValidationError::EmptyPassword)
//! );
//! ```
//!
//! # Thread Safety
//!
//! - Chains are immutable once linked and are `Send + Sync`
//! - `Notifier` guards its registry with a mutex and never holds it while
//!   calling a subscriber
//!
//! # Error Handling
//!
//! - Validation failures are values: `Option<ValidationError>`
//! - Subscriber failures are collected in `PublishReport::failures`
//! - Configuration errors are `Result<_, ConfigError>`

/// Shared types and data structures
pub mod shared;

/// Validation chain
pub mod chain;

/// Event notifier
pub mod notifier;
