//! Session gateway implementation over an [`AuthApi`] port.
//!
//! The service owns the classification rules: it emits `Loading`, hands the
//! remote call to a spawned task, maps the reported status code through the
//! per-operation enumerations in [`crate::domain::status`], and converts
//! every fault into an `Error` action carrying the fault's description. It
//! performs no side effects beyond the remote call; in particular it never
//! writes to the session cache.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::action::{Action, ActionStream, SessionAction};
use crate::domain::auth::{LoginCredentials, PasswordRestore, RegistrationForm};
use crate::domain::ports::{AuthApi, AuthApiError, AuthPayload, SessionGateway};
use crate::domain::status::{
    AvailabilityStatus, LoginStatus, RegisterStatus, RestoreRequestStatus, RestoreStatus,
    VerificationStatus,
};
use crate::domain::user::User;

/// Gateway translating authentication intents into remote calls.
///
/// # Examples
/// ```rust,ignore
/// use sessions::domain::SessionService;
/// use sessions::outbound::auth_http::HttpAuthApi;
///
/// let service = SessionService::new(api);
/// let mut stream = service.login_with(credentials);
/// ```
#[derive(Debug)]
pub struct SessionService<A> {
    api: Arc<A>,
}

impl<A> Clone for SessionService<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
        }
    }
}

impl<A: AuthApi + 'static> SessionService<A> {
    /// Wrap an auth API adapter.
    pub fn new(api: A) -> Self {
        Self { api: Arc::new(api) }
    }

    /// Wrap an already shared auth API adapter.
    pub fn from_arc(api: Arc<A>) -> Self {
        Self { api }
    }
}

/// Fault surfaced from the port, converted for callers.
fn fault_action(operation: &'static str, fault: &AuthApiError) -> SessionAction {
    warn!(operation, error = %fault, "auth call failed");
    Action::Error(fault.to_string())
}

/// Status the operation does not recognise, surfaced as an error.
fn rejected_action(operation: &'static str, payload: &AuthPayload) -> SessionAction {
    debug!(operation, status = payload.status.get(), "auth call rejected");
    Action::Error(payload.rejection_message())
}

#[async_trait]
impl<A: AuthApi + 'static> SessionGateway for SessionService<A> {
    fn login_with(&self, credentials: LoginCredentials) -> ActionStream {
        let api = Arc::clone(&self.api);
        ActionStream::spawn(async move {
            let payload = match api.login(&credentials).await {
                Ok(payload) => payload,
                Err(fault) => return fault_action("login", &fault),
            };
            match LoginStatus::from_code(payload.status) {
                Some(status) if status.grants_session() => Action::Success(payload.user),
                Some(_) => Action::Empty(Some(payload.status)),
                None => rejected_action("login", &payload),
            }
        })
    }

    fn register_with(&self, form: RegistrationForm) -> ActionStream {
        let api = Arc::clone(&self.api);
        ActionStream::spawn(async move {
            let payload = match api.register(&form).await {
                Ok(payload) => payload,
                Err(fault) => return fault_action("register", &fault),
            };
            match RegisterStatus::from_code(payload.status) {
                Some(RegisterStatus::Registered) => Action::Success(payload.user),
                None => rejected_action("register", &payload),
            }
        })
    }

    async fn request_code(&self, token: &str) -> Result<Option<User>, AuthApiError> {
        // Status is deliberately not inspected here: the caller only needs
        // the refreshed user record, and faults stay recoverable.
        self.api
            .request_verification_code(token)
            .await
            .map(|payload| payload.user)
    }

    fn check_code(&self, code: &str, token: &str) -> ActionStream {
        let api = Arc::clone(&self.api);
        let code = code.to_owned();
        let token = token.to_owned();
        ActionStream::spawn(async move {
            let payload = match api.verify_email(&code, &token).await {
                Ok(payload) => payload,
                Err(fault) => return fault_action("check_code", &fault),
            };
            match VerificationStatus::from_code(payload.status) {
                Some(VerificationStatus::Verified) => Action::Success(payload.user),
                Some(VerificationStatus::CodeMismatch) => Action::Empty(None),
                None => rejected_action("check_code", &payload),
            }
        })
    }

    async fn check_availability(&self, query: &str) -> SessionAction {
        let payload = match self.api.check_availability(query).await {
            Ok(payload) => payload,
            Err(fault) => return fault_action("check_availability", &fault),
        };
        match AvailabilityStatus::from_code(payload.status) {
            Some(AvailabilityStatus::Available) => Action::Success(payload.user),
            None => rejected_action("check_availability", &payload),
        }
    }

    async fn request_password_restore_code(&self, login: &str) -> SessionAction {
        let payload = match self.api.request_password_restore_code(login).await {
            Ok(payload) => payload,
            Err(fault) => return fault_action("request_password_restore_code", &fault),
        };
        match RestoreRequestStatus::from_code(payload.status) {
            Some(RestoreRequestStatus::CodeSent) => Action::Success(payload.user),
            // Unrecognised statuses report Empty(status) rather than an
            // error; callers treat "no code mailed" as a retryable state.
            None => {
                debug!(
                    operation = "request_password_restore_code",
                    status = payload.status.get(),
                    "restore code not issued"
                );
                Action::Empty(Some(payload.status))
            }
        }
    }

    fn restore_password_by(&self, restore: PasswordRestore) -> ActionStream {
        let api = Arc::clone(&self.api);
        ActionStream::spawn(async move {
            let payload = match api.restore_password(&restore).await {
                Ok(payload) => payload,
                Err(fault) => return fault_action("restore_password", &fault),
            };
            match RestoreStatus::from_code(payload.status) {
                Some(RestoreStatus::Restored) => Action::Success(payload.user),
                Some(RestoreStatus::CodeMismatch) => Action::Empty(None),
                None => rejected_action("restore_password", &payload),
            }
        })
    }
}
