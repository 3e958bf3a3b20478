//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports describe how the domain expects to reach infrastructure (the
//! remote auth service, the local session store). The driving port is what
//! callers program against. Each trait exposes strongly typed errors so
//! adapters map their failures into predictable variants.

mod auth_api;
mod session_cache;
mod session_gateway;

pub use self::auth_api::{AuthApi, AuthApiError, AuthPayload};
pub use self::session_cache::{SessionCache, SessionCacheError};
pub use self::session_gateway::SessionGateway;

#[cfg(test)]
pub use self::auth_api::MockAuthApi;
