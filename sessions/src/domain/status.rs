//! Remote status codes and their per-operation interpretations.
//!
//! The remote service reports a small-integer `status` in every response
//! body, and each operation recognises its own subset of codes. Call sites
//! never branch on raw integers; they go through the enumerations below so a
//! login code cannot be confused with a verification code.

use std::fmt;

/// Raw status code reported in a remote response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusCode(i32);

impl StatusCode {
    /// Wrap a raw remote code.
    pub const fn new(code: i32) -> Self {
        Self(code)
    }

    /// The raw integer value.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for StatusCode {
    fn from(code: i32) -> Self {
        Self(code)
    }
}

/// Login outcomes recognised by the remote service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginStatus {
    /// Credentials accepted, session established.
    Accepted,
    /// Credentials accepted right after a password restore.
    AcceptedAfterRestore,
    /// Account exists but email verification is still outstanding.
    VerificationPending,
    /// A fresh verification code was issued during this attempt.
    VerificationCodeResent,
}

impl LoginStatus {
    /// Interpret a raw code for the login operation.
    pub const fn from_code(code: StatusCode) -> Option<Self> {
        match code.get() {
            100 => Some(Self::Accepted),
            101 => Some(Self::VerificationPending),
            102 => Some(Self::VerificationCodeResent),
            103 => Some(Self::AcceptedAfterRestore),
            _ => None,
        }
    }

    /// Whether this outcome carries an authenticated session.
    pub const fn grants_session(self) -> bool {
        matches!(self, Self::Accepted | Self::AcceptedAfterRestore)
    }
}

/// Registration outcomes recognised by the remote service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterStatus {
    /// Account created and a session issued.
    Registered,
}

impl RegisterStatus {
    /// Interpret a raw code for the registration operation.
    pub const fn from_code(code: StatusCode) -> Option<Self> {
        match code.get() {
            100 => Some(Self::Registered),
            _ => None,
        }
    }
}

/// Email-verification outcomes recognised by the remote service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationStatus {
    /// Submitted code matched; the account is now verified.
    Verified,
    /// Submitted code did not match the one on record.
    CodeMismatch,
}

impl VerificationStatus {
    /// Interpret a raw code for the verification-check operation.
    pub const fn from_code(code: StatusCode) -> Option<Self> {
        match code.get() {
            100 => Some(Self::Verified),
            102 => Some(Self::CodeMismatch),
            _ => None,
        }
    }
}

/// Password-restore outcomes recognised by the remote service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreStatus {
    /// Restore code matched and the password was replaced.
    Restored,
    /// Restore code did not match the one on record.
    CodeMismatch,
}

impl RestoreStatus {
    /// Interpret a raw code for the restore-password operation.
    pub const fn from_code(code: StatusCode) -> Option<Self> {
        match code.get() {
            100 => Some(Self::Restored),
            102 => Some(Self::CodeMismatch),
            _ => None,
        }
    }
}

/// Availability-check outcomes recognised by the remote service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailabilityStatus {
    /// The queried login or email is free to register.
    Available,
}

impl AvailabilityStatus {
    /// Interpret a raw code for the availability-check operation.
    pub const fn from_code(code: StatusCode) -> Option<Self> {
        match code.get() {
            100 => Some(Self::Available),
            _ => None,
        }
    }
}

/// Restore-code-request outcomes recognised by the remote service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreRequestStatus {
    /// A restore code was mailed to the account.
    CodeSent,
}

impl RestoreRequestStatus {
    /// Interpret a raw code for the restore-code-request operation.
    pub const fn from_code(code: StatusCode) -> Option<Self> {
        match code.get() {
            100 => Some(Self::CodeSent),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(100, Some(LoginStatus::Accepted), true)]
    #[case(103, Some(LoginStatus::AcceptedAfterRestore), true)]
    #[case(101, Some(LoginStatus::VerificationPending), false)]
    #[case(102, Some(LoginStatus::VerificationCodeResent), false)]
    #[case(999, None, false)]
    fn login_codes(
        #[case] code: i32,
        #[case] expected: Option<LoginStatus>,
        #[case] grants_session: bool,
    ) {
        let status = LoginStatus::from_code(StatusCode::new(code));
        assert_eq!(status, expected);
        assert_eq!(status.is_some_and(LoginStatus::grants_session), grants_session);
    }

    #[rstest]
    #[case(100, Some(VerificationStatus::Verified))]
    #[case(102, Some(VerificationStatus::CodeMismatch))]
    #[case(101, None)]
    fn verification_codes(#[case] code: i32, #[case] expected: Option<VerificationStatus>) {
        assert_eq!(VerificationStatus::from_code(StatusCode::new(code)), expected);
    }

    #[rstest]
    #[case(100, Some(RestoreStatus::Restored))]
    #[case(102, Some(RestoreStatus::CodeMismatch))]
    #[case(200, None)]
    fn restore_codes(#[case] code: i32, #[case] expected: Option<RestoreStatus>) {
        assert_eq!(RestoreStatus::from_code(StatusCode::new(code)), expected);
    }

    #[test]
    fn single_code_operations_reject_everything_else() {
        assert_eq!(
            RegisterStatus::from_code(StatusCode::new(100)),
            Some(RegisterStatus::Registered)
        );
        assert_eq!(RegisterStatus::from_code(StatusCode::new(103)), None);
        assert_eq!(
            AvailabilityStatus::from_code(StatusCode::new(100)),
            Some(AvailabilityStatus::Available)
        );
        assert_eq!(AvailabilityStatus::from_code(StatusCode::new(102)), None);
        assert_eq!(
            RestoreRequestStatus::from_code(StatusCode::new(100)),
            Some(RestoreRequestStatus::CodeSent)
        );
        assert_eq!(RestoreRequestStatus::from_code(StatusCode::new(101)), None);
    }

    #[test]
    fn status_code_displays_raw_value() {
        assert_eq!(StatusCode::new(101).to_string(), "101");
        assert_eq!(StatusCode::from(102).get(), 102);
    }
}
