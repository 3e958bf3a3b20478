//! User identity record.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Validation errors returned by [`User::try_new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    /// Remote identifiers are positive; anything else is a decoding bug.
    InvalidId,
    EmptyNickname,
    EmptyEmail,
    InvalidEmail,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId => write!(f, "user id must be a positive integer"),
            Self::EmptyNickname => write!(f, "nickname must not be empty"),
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::InvalidEmail => write!(f, "email must contain an '@'"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Identity record for the authenticated user.
///
/// Created from successful login/registration responses, refreshed on
/// verification and password restore, and owned by the session cache once
/// stored. Transient copies flow through [`crate::domain::Action`] values.
///
/// ## Invariants
/// - `id` is positive (assigned by the remote service).
/// - `nickname` and `email` are trimmed and non-empty; `email` contains `@`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: i64,
    name: String,
    surname: String,
    nickname: String,
    email: String,
    verified: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    token: Option<String>,
}

impl User {
    /// Construct a user after validating identifier, nickname, and email.
    ///
    /// # Examples
    /// ```
    /// use sessions::domain::User;
    ///
    /// let user = User::try_new(7, "Ada", "Lovelace", "ada", "ada@example.com", true, None)
    ///     .expect("valid user");
    /// assert_eq!(user.nickname(), "ada");
    /// ```
    #[allow(clippy::too_many_arguments, reason = "mirrors the remote record shape")]
    pub fn try_new(
        id: i64,
        name: impl Into<String>,
        surname: impl Into<String>,
        nickname: impl Into<String>,
        email: impl Into<String>,
        verified: bool,
        token: Option<String>,
    ) -> Result<Self, UserValidationError> {
        if id <= 0 {
            return Err(UserValidationError::InvalidId);
        }
        let nickname = nickname.into().trim().to_owned();
        if nickname.is_empty() {
            return Err(UserValidationError::EmptyNickname);
        }
        let email = email.into().trim().to_owned();
        if email.is_empty() {
            return Err(UserValidationError::EmptyEmail);
        }
        if !email.contains('@') {
            return Err(UserValidationError::InvalidEmail);
        }
        Ok(Self {
            id,
            name: name.into(),
            surname: surname.into(),
            nickname,
            email,
            verified,
            token,
        })
    }

    /// Remote-assigned identifier.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Given name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Family name.
    pub fn surname(&self) -> &str {
        self.surname.as_str()
    }

    /// Login nickname, unique on the remote service.
    pub fn nickname(&self) -> &str {
        self.nickname.as_str()
    }

    /// Contact email address.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Whether the email address has been verified.
    pub fn is_verified(&self) -> bool {
        self.verified
    }

    /// Session token issued by the remote service, if any.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Name shown to other users.
    pub fn display_name(&self) -> String {
        let mut parts = vec![self.name.trim(), self.surname.trim()];
        parts.retain(|part| !part.is_empty());
        if parts.is_empty() {
            self.nickname.clone()
        } else {
            parts.join(" ")
        }
    }

    /// Copy of this record with the verification flag raised.
    pub fn verified(mut self) -> Self {
        self.verified = true;
        self
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (#{})", self.nickname, self.id)
    }
}
