//! DTOs for decoding remote auth responses.
//!
//! The adapter decodes into these transport DTOs first, then maps into the
//! domain payload in one pass. A user record that fails domain validation is
//! reported as a decode problem, not silently dropped.

use serde::Deserialize;

use crate::domain::StatusCode;
use crate::domain::ports::AuthPayload;
use crate::domain::user::User;

#[derive(Debug, Deserialize)]
pub(super) struct AuthResponseDto {
    pub(super) status: i32,
    #[serde(default)]
    pub(super) message: Option<String>,
    #[serde(default)]
    pub(super) user: Option<RemoteUserDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RemoteUserDto {
    pub(super) id: i64,
    #[serde(default)]
    pub(super) name: String,
    #[serde(default)]
    pub(super) surname: String,
    pub(super) nickname: String,
    pub(super) email: String,
    #[serde(default)]
    pub(super) verified: bool,
    #[serde(default)]
    pub(super) token: Option<String>,
}

impl AuthResponseDto {
    pub(super) fn into_payload(self) -> Result<AuthPayload, String> {
        let user = self.user.map(RemoteUserDto::into_user).transpose()?;
        Ok(AuthPayload {
            status: StatusCode::new(self.status),
            message: self.message,
            user,
        })
    }
}

impl RemoteUserDto {
    fn into_user(self) -> Result<User, String> {
        User::try_new(
            self.id,
            self.name,
            self.surname,
            self.nickname,
            self.email,
            self.verified,
            self.token,
        )
        .map_err(|error| format!("user record in response invalid: {error}"))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;

    #[test]
    fn decodes_a_full_response_into_the_domain_payload() {
        let body = r#"{
            "status": 100,
            "message": null,
            "user": {
                "id": 7,
                "name": "Ada",
                "surname": "Lovelace",
                "nickname": "ada",
                "email": "ada@example.com",
                "verified": true,
                "token": "tok-1"
            }
        }"#;

        let dto: AuthResponseDto = serde_json::from_str(body).expect("JSON should decode");
        let payload = dto.into_payload().expect("payload should map");
        assert_eq!(payload.status, StatusCode::new(100));
        assert_eq!(payload.message, None);
        let user = payload.user.expect("user should be present");
        assert_eq!(user.nickname(), "ada");
        assert_eq!(user.token(), Some("tok-1"));
        assert!(user.is_verified());
    }

    #[test]
    fn missing_optional_fields_default_cleanly() {
        let body = r#"{ "status": 102 }"#;
        let dto: AuthResponseDto = serde_json::from_str(body).expect("JSON should decode");
        let payload = dto.into_payload().expect("payload should map");
        assert_eq!(payload.status, StatusCode::new(102));
        assert_eq!(payload.message, None);
        assert_eq!(payload.user, None);
    }

    #[test]
    fn invalid_user_records_surface_as_mapping_errors() {
        let body = r#"{
            "status": 100,
            "user": { "id": 0, "nickname": "ada", "email": "ada@example.com" }
        }"#;
        let dto: AuthResponseDto = serde_json::from_str(body).expect("JSON should decode");
        let error = dto.into_payload().expect_err("mapping should fail");
        assert!(
            error.contains("positive integer"),
            "error should name the offending invariant, got: {error}"
        );
    }
}
