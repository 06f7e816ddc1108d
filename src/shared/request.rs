/**
 * Request Data Structure
 *
 * This module defines the Request value submitted to a handler chain.
 *
 * Login and signup requests share one shape so a single chain can process
 * either. Fields a request kind does not carry are `None`, never an empty
 * string, which lets rules tell "not provided" apart from "provided blank".
 */
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which constructor produced a request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RequestKind {
    Login,
    SignUp,
    #[default]
    Custom,
}

/// An immutable authentication request
///
/// # Fields
/// * `first_name` / `last_name` - Profile names (signup only)
/// * `email` - Account email
/// * `password` - Account password, never serialized
/// * `repeated_password` - Confirmation password (signup only), never serialized
///
/// # Example
/// ```rust
/// use authflow::shared::Request;
///
/// let request = Request::login("smth@gmail.com", "123HardPass");
/// assert_eq!(request.email(), Some("smth@gmail.com"));
/// assert!(request.repeated_password().is_none());
/// ```
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Request {
    #[serde(default)]
    kind: RequestKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(default, skip_serializing)]
    password: Option<String>,
    #[serde(default, skip_serializing)]
    repeated_password: Option<String>,
}

impl Request {
    /// Create a login request carrying only email and password
    pub fn login(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            kind: RequestKind::Login,
            email: Some(email.into()),
            password: Some(password.into()),
            ..Self::default()
        }
    }

    /// Create a signup request carrying every field
    pub fn sign_up(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        repeated_password: impl Into<String>,
    ) -> Self {
        Self {
            kind: RequestKind::SignUp,
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            email: Some(email.into()),
            password: Some(password.into()),
            repeated_password: Some(repeated_password.into()),
        }
    }

    /// Start a request with no fields set
    pub fn builder() -> RequestBuilder {
        RequestBuilder::default()
    }

    pub fn kind(&self) -> RequestKind {
        self.kind
    }

    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub fn repeated_password(&self) -> Option<&str> {
        self.repeated_password.as_deref()
    }
}

impl fmt::Debug for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |value: &Option<String>| value.as_ref().map(|_| "<redacted>");
        f.debug_struct("Request")
            .field("kind", &self.kind)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &redact(&self.password))
            .field("repeated_password", &redact(&self.repeated_password))
            .finish()
    }
}

/// Builder for requests that set an arbitrary subset of fields
#[derive(Debug, Default)]
pub struct RequestBuilder {
    request: Request,
}

impl RequestBuilder {
    pub fn kind(mut self, kind: RequestKind) -> Self {
        self.request.kind = kind;
        self
    }

    pub fn first_name(mut self, value: impl Into<String>) -> Self {
        self.request.first_name = Some(value.into());
        self
    }

    pub fn last_name(mut self, value: impl Into<String>) -> Self {
        self.request.last_name = Some(value.into());
        self
    }

    pub fn email(mut self, value: impl Into<String>) -> Self {
        self.request.email = Some(value.into());
        self
    }

    pub fn password(mut self, value: impl Into<String>) -> Self {
        self.request.password = Some(value.into());
        self
    }

    pub fn repeated_password(mut self, value: impl Into<String>) -> Self {
        self.request.repeated_password = Some(value.into());
        self
    }

    /// Finish the request
    pub fn build(self) -> Request {
        self.request
    }
}
