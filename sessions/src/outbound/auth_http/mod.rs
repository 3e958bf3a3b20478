//! Remote auth service outbound adapter.
//!
//! This module provides a thin HTTP implementation of the
//! [`crate::domain::ports::AuthApi`] port.

mod client;
mod dto;

pub use client::{AuthHttpBuildError, AuthHttpIdentity, HttpAuthApi};
