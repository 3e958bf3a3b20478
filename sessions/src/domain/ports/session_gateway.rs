//! Driving port for session/authentication use-cases.
//!
//! In hexagonal terms this is a *driving* port: callers (view-models, CLI
//! harnesses, tests) invoke it to authenticate without knowing the backing
//! transport. Streaming operations hand back an [`ActionStream`]; the two
//! single-shot classifications return one [`SessionAction`]; the code request
//! returns a plain `Result` the caller inspects.

use async_trait::async_trait;

use crate::domain::action::{ActionStream, SessionAction};
use crate::domain::auth::{LoginCredentials, PasswordRestore, RegistrationForm};
use crate::domain::user::User;

use super::auth_api::AuthApiError;

/// Domain use-case port for session management.
#[async_trait]
pub trait SessionGateway: Send + Sync {
    /// Authenticate a login/password pair.
    ///
    /// Emits `Loading`, then one of: `Success(user)` when the credentials
    /// were accepted, `Empty(status)` while email verification is pending,
    /// or `Error(message)`.
    fn login_with(&self, credentials: LoginCredentials) -> ActionStream;

    /// Create an account.
    ///
    /// Emits `Loading`, then `Success(user)` or `Error(message)`.
    fn register_with(&self, form: RegistrationForm) -> ActionStream;

    /// Ask the service to (re)send a verification code for `token`.
    ///
    /// Returns the user carried in the response body regardless of the
    /// reported status; faults propagate as a recoverable `Err`.
    async fn request_code(&self, token: &str) -> Result<Option<User>, AuthApiError>;

    /// Submit a verification code for `token`.
    ///
    /// Emits `Loading`, then `Success(user)`, `Empty(None)` on a code
    /// mismatch, or `Error(message)`.
    fn check_code(&self, code: &str, token: &str) -> ActionStream;

    /// Check whether a login or email is free to register.
    ///
    /// `Success(None)` means available with no user payload; `Success(user)`
    /// reports the record occupying the name.
    async fn check_availability(&self, query: &str) -> SessionAction;

    /// Ask the service to mail a password-restore code to `login`.
    async fn request_password_restore_code(&self, login: &str) -> SessionAction;

    /// Submit a restore code together with the replacement password.
    ///
    /// Emits `Loading`, then `Success(user)`, `Empty(None)` on a code
    /// mismatch, or `Error(message)`.
    fn restore_password_by(&self, restore: PasswordRestore) -> ActionStream;
}
