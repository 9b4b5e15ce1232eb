//! Shared fixtures for the keyforge integration tests
pub mod vectors;
