//! Shared Error Types
//!
//! This module defines the error types shared by the handler chain, the
//! notifier and the configuration layer.
//!
//! # Error Categories
//!
//! - `ValidationError` - Closed set of reasons a request is rejected by a chain
//! - `SubscriberError` - A subscriber failed while receiving an event
//! - `ConfigError` - Configuration could not be loaded or is invalid
//!
//! # Usage
//!
//! ```rust
//! use authflow::shared::error::{SubscriberError, ValidationError};
//!
//! let error = ValidationError::EmptyEmail;
//! assert_eq!(error.to_string(), "Email is empty");
//! assert_eq!(error.kind(), "empty_email");
//!
//! let failure = SubscriberError::rejected("feed is read-only");
//! ```
//!
//! # Thread Safety
//!
//! All error types are `Send + Sync` and can be safely shared across thread boundaries.
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a request can be rejected by a validation handler.
///
/// Validation errors are ordinary values, never panics. A chain returns at
/// most one of them per `handle` call.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationError {
    #[error("First name is empty")]
    EmptyFirstName,

    #[error("Last name is empty")]
    EmptyLastName,

    #[error("Email is empty")]
    EmptyEmail,

    #[error("Password is empty")]
    EmptyPassword,

    #[error("Email is invalid")]
    InvalidEmail,

    #[error("Password is invalid")]
    InvalidPassword,

    #[error("Password and repeated password should be equal")]
    PasswordMismatch,

    #[error("Please turn location services on")]
    LocationDisabled,

    #[error("Please turn notifications on")]
    NotificationsDisabled,
}

impl ValidationError {
    /// Every variant, in declaration order
    pub const ALL: [ValidationError; 9] = [
        Self::EmptyFirstName,
        Self::EmptyLastName,
        Self::EmptyEmail,
        Self::EmptyPassword,
        Self::InvalidEmail,
        Self::InvalidPassword,
        Self::PasswordMismatch,
        Self::LocationDisabled,
        Self::NotificationsDisabled,
    ];

    /// Stable machine-readable code for this error kind
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyFirstName => "empty_first_name",
            Self::EmptyLastName => "empty_last_name",
            Self::EmptyEmail => "empty_email",
            Self::EmptyPassword => "empty_password",
            Self::InvalidEmail => "invalid_email",
            Self::InvalidPassword => "invalid_password",
            Self::PasswordMismatch => "password_mismatch",
            Self::LocationDisabled => "location_disabled",
            Self::NotificationsDisabled => "notifications_disabled",
        }
    }
}

/// Failure raised by a subscriber while it receives an event
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubscriberError {
    /// The subscriber returned an error
    #[error("Subscriber rejected event: {message}")]
    Rejected {
        /// Human-readable error message
        message: String,
    },

    /// The subscriber panicked; the panic was contained by the notifier
    #[error("Subscriber panicked: {message}")]
    Panicked {
        /// Panic payload, when it was a string
        message: String,
    },
}

impl SubscriberError {
    /// Create a new rejection error
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }

    /// Create a new panic error
    pub fn panicked(message: impl Into<String>) -> Self {
        Self::Panicked {
            message: message.into(),
        }
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for '{field}': {message}")]
    InvalidValue {
        /// The offending field
        field: &'static str,
        /// Human-readable error message
        message: String,
    },
}

impl ConfigError {
    /// Create a new invalid value error
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            message: message.into(),
        }
    }
}
