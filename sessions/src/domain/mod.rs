//! Domain primitives and the session service.
//!
//! Purpose: define strongly typed models shared by the gateway and the cache
//! adapters. Keep types immutable and document invariants and serialisation
//! contracts (serde) in each type's Rustdoc.
//!
//! Public surface:
//! - `User` — the cached identity record.
//! - `LoginCredentials`, `RegistrationForm`, `PasswordRestore` — ephemeral
//!   credential bundles, never persisted.
//! - `Action` / `ActionStream` — the tri-state-plus-loading result channel.
//! - Per-operation remote status enumerations (`status` module).
//! - `SessionService` — the gateway implementation over an [`ports::AuthApi`].

pub mod action;
pub mod auth;
pub mod ports;
pub mod session_service;
pub mod status;
pub mod user;

pub use self::action::{Action, ActionStream, SessionAction};
pub use self::auth::{
    AuthValidationError, LoginCredentials, PasswordRestore, RegistrationForm,
};
pub use self::session_service::SessionService;
pub use self::status::StatusCode;
pub use self::user::{User, UserValidationError};
