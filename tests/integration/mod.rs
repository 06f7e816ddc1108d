//! Integration tests exercising the public API

pub mod chain_test;
pub mod scenario_test;
