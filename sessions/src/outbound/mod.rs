//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! Adapters are thin translators between domain types and
//! infrastructure-specific representations; they contain no classification
//! logic:
//!
//! - **auth_http**: reqwest-backed implementation of the remote auth API port.
//! - **cache**: in-memory and JSON-file implementations of the session cache
//!   port.

pub mod auth_http;
pub mod cache;
