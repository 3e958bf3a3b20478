//! Reqwest-backed auth API adapter.
//!
//! This adapter owns transport details only: request serialisation, timeout
//! and HTTP error mapping, and JSON decoding into the domain payload. Status
//! code interpretation stays in the session service.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use thiserror::Error;
use tracing::debug;

use super::dto::AuthResponseDto;
use crate::domain::auth::{LoginCredentials, PasswordRestore, RegistrationForm};
use crate::domain::ports::{AuthApi, AuthApiError, AuthPayload};

const DEFAULT_USER_AGENT: &str = "sessions-auth-client/0.1";

const LOGIN_PATH: &str = "api/auth/login";
const REGISTER_PATH: &str = "api/auth/register";
const VERIFICATION_CODE_PATH: &str = "api/auth/verification/code";
const VERIFICATION_CHECK_PATH: &str = "api/auth/verification/check";
const AVAILABILITY_PATH: &str = "api/auth/availability";
const RESTORE_CODE_PATH: &str = "api/auth/restore/code";
const RESTORE_PATH: &str = "api/auth/restore";

/// Errors raised while constructing the adapter.
#[derive(Debug, Error)]
pub enum AuthHttpBuildError {
    /// The underlying HTTP client could not be constructed.
    #[error("failed to construct http client: {0}")]
    Client(#[from] reqwest::Error),
    /// An endpoint path did not join onto the base URL.
    #[error("invalid auth endpoint url: {0}")]
    Endpoint(#[from] url::ParseError),
}

/// Outbound identity settings for auth requests.
pub struct AuthHttpIdentity {
    /// HTTP user-agent sent to the auth service.
    pub user_agent: String,
}

impl Default for AuthHttpIdentity {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

/// Pre-joined endpoint URLs; joining can only fail at construction time.
#[derive(Debug, Clone)]
struct Endpoints {
    login: Url,
    register: Url,
    verification_code: Url,
    verification_check: Url,
    availability: Url,
    restore_code: Url,
    restore: Url,
}

impl Endpoints {
    fn resolve(base_url: &Url) -> Result<Self, url::ParseError> {
        Ok(Self {
            login: base_url.join(LOGIN_PATH)?,
            register: base_url.join(REGISTER_PATH)?,
            verification_code: base_url.join(VERIFICATION_CODE_PATH)?,
            verification_check: base_url.join(VERIFICATION_CHECK_PATH)?,
            availability: base_url.join(AVAILABILITY_PATH)?,
            restore_code: base_url.join(RESTORE_CODE_PATH)?,
            restore: base_url.join(RESTORE_PATH)?,
        })
    }
}

/// Auth API adapter performing HTTP requests against one deployment.
///
/// `base_url` should end with a trailing slash when it carries a path prefix,
/// otherwise [`Url::join`] replaces the final segment.
#[derive(Debug, Clone)]
pub struct HttpAuthApi {
    client: Client,
    endpoints: Endpoints,
    user_agent: String,
}

impl HttpAuthApi {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed or an
    /// endpoint path does not join onto `base_url`.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, AuthHttpBuildError> {
        Self::with_identity(base_url, timeout, AuthHttpIdentity::default())
    }

    /// Build an adapter with an explicit outbound identity.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed or an
    /// endpoint path does not join onto `base_url`.
    pub fn with_identity(
        base_url: Url,
        timeout: Duration,
        identity: AuthHttpIdentity,
    ) -> Result<Self, AuthHttpBuildError> {
        let client = Client::builder().timeout(timeout).build()?;
        let endpoints = Endpoints::resolve(&base_url)?;
        Ok(Self {
            client,
            endpoints,
            user_agent: identity.user_agent,
        })
    }

    async fn execute(
        &self,
        operation: &'static str,
        request: reqwest::RequestBuilder,
    ) -> Result<AuthPayload, AuthApiError> {
        debug!(operation, "issuing auth request");
        let response = request
            .header(reqwest::header::USER_AGENT, self.user_agent.as_str())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() || body.is_empty() {
            // Matches the remote contract: without a parseable body the only
            // information available is the HTTP status line.
            return Err(AuthApiError::status(
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown Status"),
            ));
        }
        decode_payload(body.as_ref())
    }
}

#[async_trait]
impl AuthApi for HttpAuthApi {
    async fn login(&self, credentials: &LoginCredentials) -> Result<AuthPayload, AuthApiError> {
        let request = self.client.post(self.endpoints.login.clone()).form(&[
            ("login", credentials.login()),
            ("password", credentials.password()),
        ]);
        self.execute("login", request).await
    }

    async fn register(&self, form: &RegistrationForm) -> Result<AuthPayload, AuthApiError> {
        let request = self.client.post(self.endpoints.register.clone()).form(&[
            ("name", form.name()),
            ("surname", form.surname()),
            ("nickname", form.nickname()),
            ("email", form.email()),
            ("password", form.password()),
        ]);
        self.execute("register", request).await
    }

    async fn request_verification_code(
        &self,
        token: &str,
    ) -> Result<AuthPayload, AuthApiError> {
        let request = self
            .client
            .get(self.endpoints.verification_code.clone())
            .query(&[("token", token)]);
        self.execute("request_verification_code", request).await
    }

    async fn verify_email(&self, code: &str, token: &str) -> Result<AuthPayload, AuthApiError> {
        let request = self
            .client
            .post(self.endpoints.verification_check.clone())
            .form(&[("code", code), ("token", token)]);
        self.execute("verify_email", request).await
    }

    async fn check_availability(&self, query: &str) -> Result<AuthPayload, AuthApiError> {
        let request = self
            .client
            .get(self.endpoints.availability.clone())
            .query(&[("query", query)]);
        self.execute("check_availability", request).await
    }

    async fn request_password_restore_code(
        &self,
        login: &str,
    ) -> Result<AuthPayload, AuthApiError> {
        let request = self
            .client
            .get(self.endpoints.restore_code.clone())
            .query(&[("login", login)]);
        self.execute("request_password_restore_code", request).await
    }

    async fn restore_password(
        &self,
        restore: &PasswordRestore,
    ) -> Result<AuthPayload, AuthApiError> {
        let request = self.client.post(self.endpoints.restore.clone()).form(&[
            ("login", restore.login()),
            ("code", restore.code()),
            ("password", restore.new_password()),
        ]);
        self.execute("restore_password", request).await
    }
}

fn decode_payload(body: &[u8]) -> Result<AuthPayload, AuthApiError> {
    let decoded: AuthResponseDto = serde_json::from_slice(body)
        .map_err(|error| AuthApiError::decode(format!("invalid auth JSON payload: {error}")))?;
    decoded.into_payload().map_err(AuthApiError::decode)
}

fn map_transport_error(error: reqwest::Error) -> AuthApiError {
    if error.is_timeout() {
        AuthApiError::timeout(error.to_string())
    } else {
        AuthApiError::transport(error.to_string())
    }
}
