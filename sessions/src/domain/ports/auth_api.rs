//! Driven port for the remote authentication service.
//!
//! The domain owns the response contract: every call resolves to the triple
//! `(status, message, user)` or to a typed fault. Classification of status
//! codes into [`crate::domain::Action`] variants happens in the session
//! service, not here; adapters stay thin transport translators.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::auth::{LoginCredentials, PasswordRestore, RegistrationForm};
use crate::domain::status::StatusCode;
use crate::domain::user::User;

/// Decoded remote response body common to every auth endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthPayload {
    /// Remote status code; per-operation meaning, see [`crate::domain::status`].
    pub status: StatusCode,
    /// Optional human-readable message, usually present on rejections.
    pub message: Option<String>,
    /// Optional user record carried on successful outcomes.
    pub user: Option<User>,
}

impl AuthPayload {
    /// Message to surface for a rejected status, falling back to the raw
    /// code when the body carried none.
    pub fn rejection_message(&self) -> String {
        self.message
            .clone()
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| format!("unexpected status {}", self.status))
    }
}

/// Faults raised while calling the remote authentication service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthApiError {
    /// Network transport failed before a response arrived.
    #[error("auth service unreachable: {message}")]
    Transport { message: String },
    /// The call exceeded its deadline.
    #[error("auth service timed out: {message}")]
    Timeout { message: String },
    /// A body arrived but could not be decoded into [`AuthPayload`].
    #[error("auth response could not be decoded: {message}")]
    Decode { message: String },
    /// The response carried no usable body; `Display` is the HTTP status
    /// line (`"404 Not Found"`) so callers see the status and reason phrase.
    #[error("{code} {reason}")]
    Status { code: u16, reason: String },
}

impl AuthApiError {
    /// Transport fault with the given description.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Timeout fault with the given description.
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Decode fault with the given description.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Missing-body fault labeled with the HTTP status line.
    pub fn status(code: u16, reason: impl Into<String>) -> Self {
        Self::Status {
            code,
            reason: reason.into(),
        }
    }
}

/// Port for the remote authentication endpoints.
///
/// Implementations perform one HTTP call per method and decode the response
/// into [`AuthPayload`] without interpreting the status code.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Authenticate a login/password pair.
    async fn login(&self, credentials: &LoginCredentials) -> Result<AuthPayload, AuthApiError>;

    /// Create an account from a registration form.
    async fn register(&self, form: &RegistrationForm) -> Result<AuthPayload, AuthApiError>;

    /// Ask the service to (re)send a verification code for the session token.
    async fn request_verification_code(&self, token: &str)
        -> Result<AuthPayload, AuthApiError>;

    /// Submit a verification code for the session token.
    async fn verify_email(&self, code: &str, token: &str) -> Result<AuthPayload, AuthApiError>;

    /// Check whether a login or email is free to register.
    async fn check_availability(&self, query: &str) -> Result<AuthPayload, AuthApiError>;

    /// Ask the service to mail a password-restore code to the account.
    async fn request_password_restore_code(
        &self,
        login: &str,
    ) -> Result<AuthPayload, AuthApiError>;

    /// Submit a restore code together with the replacement password.
    async fn restore_password(
        &self,
        restore: &PasswordRestore,
    ) -> Result<AuthPayload, AuthApiError>;
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;

    #[test]
    fn status_fault_displays_the_http_status_line() {
        let fault = AuthApiError::status(404, "Not Found");
        assert_eq!(fault.to_string(), "404 Not Found");
    }

    #[test]
    fn rejection_message_prefers_the_body_message() {
        let payload = AuthPayload {
            status: StatusCode::new(200),
            message: Some("duplicate email".to_owned()),
            user: None,
        };
        assert_eq!(payload.rejection_message(), "duplicate email");
    }

    #[test]
    fn rejection_message_falls_back_to_the_raw_code() {
        let payload = AuthPayload {
            status: StatusCode::new(999),
            message: Some("   ".to_owned()),
            user: None,
        };
        assert_eq!(payload.rejection_message(), "unexpected status 999");
    }
}
