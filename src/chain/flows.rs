//! Canned chains for the login and signup screens.
//!
//! - Login: `login > location`
//! - Signup: `[profile >] sign_up > location > notification`

use crate::chain::capability::{CapabilityCheck, StaticCapability};
use crate::chain::handler::{ChainBuilder, HandlerChain};
use crate::chain::rules::{
    LocationHandler, LoginHandler, NotificationHandler, ProfileHandler, SignUpHandler,
};
use crate::shared::ChainConfig;
use std::sync::Arc;

/// Capability providers shared by the canned chains
#[derive(Clone)]
pub struct Capabilities {
    pub location: Arc<dyn CapabilityCheck>,
    pub notifications: Arc<dyn CapabilityCheck>,
}

impl Capabilities {
    pub fn new(location: Arc<dyn CapabilityCheck>, notifications: Arc<dyn CapabilityCheck>) -> Self {
        Self {
            location,
            notifications,
        }
    }

    /// Fixed answers taken from `config`
    pub fn from_config(config: &ChainConfig) -> Self {
        Self::new(
            Arc::new(StaticCapability(config.location_enabled)),
            Arc::new(StaticCapability(config.notifications_enabled)),
        )
    }
}

/// Build the login chain: login > location
pub fn login_chain(capabilities: &Capabilities) -> HandlerChain {
    ChainBuilder::new()
        .then(LoginHandler::new())
        .then(LocationHandler::new(Arc::clone(&capabilities.location)))
        .build()
}

/// Build the signup chain: [profile >] sign_up > location > notification
pub fn signup_chain(config: &ChainConfig, capabilities: &Capabilities) -> HandlerChain {
    let mut builder = ChainBuilder::new();
    if config.require_profile {
        builder = builder.then(ProfileHandler::new());
    }
    builder
        .then(SignUpHandler::with_min_password_length(config.min_password_length))
        .then(LocationHandler::new(Arc::clone(&capabilities.location)))
        .then(NotificationHandler::new(Arc::clone(&capabilities.notifications)))
        .build()
}
