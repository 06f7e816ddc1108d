//! Property-based tests

pub mod chain_proptest;
