//! Capability checks consumed by the location and notification handlers.
//!
//! The chain never decides whether a device capability is on; it asks a
//! provider. Providers are zero-argument boolean queries.

use std::fmt;

/// A zero-argument query answering whether a capability is enabled
pub trait CapabilityCheck: Send + Sync {
    fn is_enabled(&self) -> bool;
}

impl<F> CapabilityCheck for F
where
    F: Fn() -> bool + Send + Sync,
{
    fn is_enabled(&self) -> bool {
        self()
    }
}

/// A capability with a fixed answer, typically taken from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticCapability(pub bool);

impl StaticCapability {
    pub fn enabled() -> Self {
        Self(true)
    }

    pub fn disabled() -> Self {
        Self(false)
    }
}

impl CapabilityCheck for StaticCapability {
    fn is_enabled(&self) -> bool {
        self.0
    }
}

impl fmt::Display for StaticCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 {
            write!(f, "enabled")
        } else {
            write!(f, "disabled")
        }
    }
}
