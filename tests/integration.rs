//! Integration test suite (requires a real Daktela instance).
//!
//! Run all integration tests with:
//!   DAKTELA_INSTANCE=... DAKTELA_ACCESS_TOKEN=... cargo test --test integration -- --ignored --nocapture

#[path = "integration/common.rs"]
mod common;
#[path = "integration/connector.rs"]
mod connector;
#[path = "integration/crud.rs"]
mod crud;
