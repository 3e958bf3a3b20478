//! Authentication primitives: credential bundles passed into the gateway.
//!
//! Keep raw input parsing outside the domain by exposing constructors that
//! validate string inputs before a caller talks to a port or service.
//! Passwords live in [`Zeroizing`] buffers and are never persisted.

use std::fmt;

use zeroize::Zeroizing;

/// Domain error returned when credential payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthValidationError {
    /// Login or nickname was missing or blank once trimmed.
    EmptyLogin,
    /// Password was blank.
    EmptyPassword,
    /// A registration name field was blank once trimmed.
    EmptyName,
    /// Email was blank or structurally invalid.
    InvalidEmail,
    /// Verification or restore code was blank.
    EmptyCode,
}

impl fmt::Display for AuthValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLogin => write!(f, "login must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
            Self::EmptyName => write!(f, "name and surname must not be empty"),
            Self::InvalidEmail => write!(f, "email must be a plausible address"),
            Self::EmptyCode => write!(f, "code must not be empty"),
        }
    }
}

impl std::error::Error for AuthValidationError {}

fn validated_password(password: &str) -> Result<Zeroizing<String>, AuthValidationError> {
    if password.is_empty() {
        return Err(AuthValidationError::EmptyPassword);
    }
    Ok(Zeroizing::new(password.to_owned()))
}

fn validated_email(email: &str) -> Result<String, AuthValidationError> {
    let normalized = email.trim();
    if normalized.is_empty() || !normalized.contains('@') {
        return Err(AuthValidationError::InvalidEmail);
    }
    Ok(normalized.to_owned())
}

/// Validated login credentials used by the session gateway.
///
/// ## Invariants
/// - `login` is trimmed and must not be empty after trimming.
/// - `password` is required to be non-empty but retains caller-provided
///   whitespace to avoid surprising credential comparisons.
///
/// # Examples
/// ```
/// use sessions::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts("ada", "hunter2").unwrap();
/// assert_eq!(creds.login(), "ada");
/// assert_eq!(creds.password(), "hunter2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    login: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw login/password inputs.
    pub fn try_from_parts(login: &str, password: &str) -> Result<Self, AuthValidationError> {
        let normalized = login.trim();
        if normalized.is_empty() {
            return Err(AuthValidationError::EmptyLogin);
        }
        Ok(Self {
            login: normalized.to_owned(),
            password: validated_password(password)?,
        })
    }

    /// Login (nickname or email) suitable for user lookups.
    pub fn login(&self) -> &str {
        self.login.as_str()
    }

    /// Password string provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Validated registration form.
///
/// ## Invariants
/// - `name`, `surname`, and `nickname` are trimmed and non-empty.
/// - `email` is trimmed and contains an `@`.
/// - `password` is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationForm {
    name: String,
    surname: String,
    nickname: String,
    email: String,
    password: Zeroizing<String>,
}

impl RegistrationForm {
    /// Construct a registration form from raw field inputs.
    pub fn try_from_parts(
        name: &str,
        surname: &str,
        nickname: &str,
        email: &str,
        password: &str,
    ) -> Result<Self, AuthValidationError> {
        let name = name.trim();
        let surname = surname.trim();
        if name.is_empty() || surname.is_empty() {
            return Err(AuthValidationError::EmptyName);
        }
        let nickname = nickname.trim();
        if nickname.is_empty() {
            return Err(AuthValidationError::EmptyLogin);
        }
        Ok(Self {
            name: name.to_owned(),
            surname: surname.to_owned(),
            nickname: nickname.to_owned(),
            email: validated_email(email)?,
            password: validated_password(password)?,
        })
    }

    /// Given name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Family name.
    pub fn surname(&self) -> &str {
        self.surname.as_str()
    }

    /// Requested nickname.
    pub fn nickname(&self) -> &str {
        self.nickname.as_str()
    }

    /// Contact email address.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password string provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Validated password-restore submission: the login being restored, the code
/// mailed to the account, and the replacement password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordRestore {
    login: String,
    code: String,
    new_password: Zeroizing<String>,
}

impl PasswordRestore {
    /// Construct a restore submission from raw field inputs.
    pub fn try_from_parts(
        login: &str,
        code: &str,
        new_password: &str,
    ) -> Result<Self, AuthValidationError> {
        let login = login.trim();
        if login.is_empty() {
            return Err(AuthValidationError::EmptyLogin);
        }
        let code = code.trim();
        if code.is_empty() {
            return Err(AuthValidationError::EmptyCode);
        }
        Ok(Self {
            login: login.to_owned(),
            code: code.to_owned(),
            new_password: validated_password(new_password)?,
        })
    }

    /// Login whose password is being restored.
    pub fn login(&self) -> &str {
        self.login.as_str()
    }

    /// Restore code received out of band.
    pub fn code(&self) -> &str {
        self.code.as_str()
    }

    /// Replacement password.
    pub fn new_password(&self) -> &str {
        self.new_password.as_str()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "pw", AuthValidationError::EmptyLogin)]
    #[case("   ", "pw", AuthValidationError::EmptyLogin)]
    #[case("ada", "", AuthValidationError::EmptyPassword)]
    fn invalid_credentials(
        #[case] login: &str,
        #[case] password: &str,
        #[case] expected: AuthValidationError,
    ) {
        let err = LoginCredentials::try_from_parts(login, password)
            .expect_err("invalid inputs must fail");
        assert_eq!(err, expected);
    }

    #[rstest]
    #[case("  ada  ", "secret")]
    #[case("ada@example.com", "correct horse battery staple")]
    fn valid_credentials_trim_login(#[case] login: &str, #[case] password: &str) {
        let creds =
            LoginCredentials::try_from_parts(login, password).expect("valid inputs should succeed");
        assert_eq!(creds.login(), login.trim());
        assert_eq!(creds.password(), password);
    }

    #[rstest]
    #[case("", "Lovelace", "ada", "ada@example.com", "pw", AuthValidationError::EmptyName)]
    #[case("Ada", " ", "ada", "ada@example.com", "pw", AuthValidationError::EmptyName)]
    #[case("Ada", "Lovelace", "", "ada@example.com", "pw", AuthValidationError::EmptyLogin)]
    #[case("Ada", "Lovelace", "ada", "nowhere", "pw", AuthValidationError::InvalidEmail)]
    #[case("Ada", "Lovelace", "ada", "ada@example.com", "", AuthValidationError::EmptyPassword)]
    fn invalid_registration_forms(
        #[case] name: &str,
        #[case] surname: &str,
        #[case] nickname: &str,
        #[case] email: &str,
        #[case] password: &str,
        #[case] expected: AuthValidationError,
    ) {
        let err = RegistrationForm::try_from_parts(name, surname, nickname, email, password)
            .expect_err("invalid inputs must fail");
        assert_eq!(err, expected);
    }

    #[test]
    fn restore_submission_trims_login_and_code() {
        let restore = PasswordRestore::try_from_parts(" ada ", " 4242 ", "next-password")
            .expect("valid inputs should succeed");
        assert_eq!(restore.login(), "ada");
        assert_eq!(restore.code(), "4242");
        assert_eq!(restore.new_password(), "next-password");
    }

    #[rstest]
    #[case("ada", "", "pw", AuthValidationError::EmptyCode)]
    #[case("", "4242", "pw", AuthValidationError::EmptyLogin)]
    #[case("ada", "4242", "", AuthValidationError::EmptyPassword)]
    fn invalid_restore_submissions(
        #[case] login: &str,
        #[case] code: &str,
        #[case] password: &str,
        #[case] expected: AuthValidationError,
    ) {
        let err = PasswordRestore::try_from_parts(login, code, password)
            .expect_err("invalid inputs must fail");
        assert_eq!(err, expected);
    }
}
