//! Validation Chain Module
//!
//! This module implements request validation as a chain of responsibility.
//!
//! # Module Structure
//!
//! ```text
//! chain/
//! ├── mod.rs         - Module exports and documentation
//! ├── handler.rs     - Handler trait, HandlerChain, HandlerRef, ChainBuilder
//! ├── rules.rs       - Login, signup, profile and capability handlers
//! ├── capability.rs  - Capability providers consumed by handlers
//! └── flows.rs       - Canned login and signup chains
//! ```
//!
//! # Flow
//!
//! 1. Build handlers and link them (`HandlerChain::link` or `ChainBuilder`)
//! 2. Submit a `Request` to the head, or to any node as a sub-chain
//! 3. Receive `None` (all rules passed) or the first `ValidationError`
//!
//! # Example
//!
//! ```rust
//! use authflow::chain::{ChainBuilder, LocationHandler, LoginHandler, StaticCapability};
//! use authflow::shared::{Request, ValidationError};
//!
//! let chain = ChainBuilder::new()
//!     .then(LoginHandler::new())
//!     .then(LocationHandler::from_check(StaticCapability::enabled()))
//!     .build();
//!
//! assert_eq!(chain.handle(&Request::login("a@b.com", "x")), None);
//! assert_eq!(
//!     chain.handle(&Request::login("", "x")),
//!     Some(ValidationError::EmptyEmail)
//! );
//! ```

/// Handler trait and chain types
pub mod handler;

/// Concrete validation rules
pub mod rules;

/// Capability providers
pub mod capability;

/// Canned chains
pub mod flows;

// Re-export commonly used types
pub use handler::{ChainBuilder, FnHandler, Handler, HandlerChain, HandlerRef};
pub use rules::{LocationHandler, LoginHandler, NotificationHandler, ProfileHandler, SignUpHandler};
pub use capability::{CapabilityCheck, StaticCapability};
pub use flows::{login_chain, signup_chain, Capabilities};
