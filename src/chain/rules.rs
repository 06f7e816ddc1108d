/**
 * Validation Rules
 *
 * Concrete handlers for the authentication flows.
 *
 * # Rules
 *
 * - `LoginHandler` - email and password must be present and non-empty
 * - `SignUpHandler` - email must contain '@', password must reach the minimum
 *   length, repeated password must match
 * - `ProfileHandler` - first and last name must be present and non-blank
 * - `LocationHandler` / `NotificationHandler` - the device capability must be on
 *
 * Within one handler the checks run in the order listed and the first failing
 * check decides the error.
 */
use crate::chain::capability::CapabilityCheck;
use crate::chain::handler::Handler;
use crate::shared::config::DEFAULT_MIN_PASSWORD_LENGTH;
use crate::shared::{Request, ValidationError};
use std::sync::Arc;

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, str::is_empty)
}

/// Login preconditions: email then password must be non-empty
#[derive(Debug, Default, Clone, Copy)]
pub struct LoginHandler;

impl LoginHandler {
    pub fn new() -> Self {
        Self
    }
}

impl Handler for LoginHandler {
    fn name(&self) -> &str {
        "login"
    }

    fn check(&self, request: &Request) -> Option<ValidationError> {
        if is_blank(request.email()) {
            return Some(ValidationError::EmptyEmail);
        }
        if is_blank(request.password()) {
            return Some(ValidationError::EmptyPassword);
        }
        None
    }
}

/// Signup preconditions
///
/// Password length is counted in characters, not bytes.
#[derive(Debug, Clone, Copy)]
pub struct SignUpHandler {
    min_password_length: usize,
}

impl SignUpHandler {
    pub fn new() -> Self {
        Self::with_min_password_length(DEFAULT_MIN_PASSWORD_LENGTH)
    }

    pub fn with_min_password_length(min_password_length: usize) -> Self {
        Self {
            min_password_length,
        }
    }

    pub fn min_password_length(&self) -> usize {
        self.min_password_length
    }
}

impl Default for SignUpHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Handler for SignUpHandler {
    fn name(&self) -> &str {
        "sign_up"
    }

    fn check(&self, request: &Request) -> Option<ValidationError> {
        if !request.email().is_some_and(|email| email.contains('@')) {
            return Some(ValidationError::InvalidEmail);
        }
        let length = request.password().map_or(0, |password| password.chars().count());
        if length < self.min_password_length {
            return Some(ValidationError::InvalidPassword);
        }
        if request.password() != request.repeated_password() {
            return Some(ValidationError::PasswordMismatch);
        }
        None
    }
}

/// Profile preconditions: first then last name must be non-blank
#[derive(Debug, Default, Clone, Copy)]
pub struct ProfileHandler;

impl ProfileHandler {
    pub fn new() -> Self {
        Self
    }
}

impl Handler for ProfileHandler {
    fn name(&self) -> &str {
        "profile"
    }

    fn check(&self, request: &Request) -> Option<ValidationError> {
        let blank = |value: Option<&str>| value.map_or(true, |v| v.trim().is_empty());
        if blank(request.first_name()) {
            return Some(ValidationError::EmptyFirstName);
        }
        if blank(request.last_name()) {
            return Some(ValidationError::EmptyLastName);
        }
        None
    }
}

/// Rejects with `LocationDisabled` when location services are off
pub struct LocationHandler {
    capability: Arc<dyn CapabilityCheck>,
}

impl LocationHandler {
    pub fn new(capability: Arc<dyn CapabilityCheck>) -> Self {
        Self { capability }
    }

    pub fn from_check<C>(check: C) -> Self
    where
        C: CapabilityCheck + 'static,
    {
        Self::new(Arc::new(check))
    }
}

impl Handler for LocationHandler {
    fn name(&self) -> &str {
        "location"
    }

    fn check(&self, _request: &Request) -> Option<ValidationError> {
        (!self.capability.is_enabled()).then_some(ValidationError::LocationDisabled)
    }
}

/// Rejects with `NotificationsDisabled` when notifications are off
pub struct NotificationHandler {
    capability: Arc<dyn CapabilityCheck>,
}

impl NotificationHandler {
    pub fn new(capability: Arc<dyn CapabilityCheck>) -> Self {
        Self { capability }
    }

    pub fn from_check<C>(check: C) -> Self
    where
        C: CapabilityCheck + 'static,
    {
        Self::new(Arc::new(check))
    }
}

impl Handler for NotificationHandler {
    fn name(&self) -> &str {
        "notification"
    }

    fn check(&self, _request: &Request) -> Option<ValidationError> {
        (!self.capability.is_enabled()).then_some(ValidationError::NotificationsDisabled)
    }
}
