//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - Counting handlers and recording subscribers
//! - Custom assertion macros

pub mod fixtures;

// Re-export commonly used utilities
pub use fixtures::*;
