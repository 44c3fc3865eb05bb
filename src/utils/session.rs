//! Session helpers so handlers only deal with a plain user id.
//!
//! The identity cookie is a signed actix-session cookie rather than a raw
//! user id; tampered cookies are rejected by the middleware and surface
//! here as an empty session.

use actix_session::Session;
use actix_web::{dev::Payload, FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;

use crate::types::error::AppError;

/// Name of the identity cookie, shared with the relay.
pub const SESSION_COOKIE: &str = "registry_session";

const USER_ID_KEY: &str = "user_id";

/// Newtype wrapper exposing higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Persist the authenticated user's id in the session cookie.
    pub fn persist_user(&self, user_id: i32) -> Result<(), AppError> {
        self.0
            .insert(USER_ID_KEY, user_id)
            .map_err(|e| AppError::Internal(format!("failed to persist session: {e}")))
    }

    /// Fetch the current user id from the session, if present.
    pub fn user_id(&self) -> Result<Option<i32>, AppError> {
        self.0
            .get::<i32>(USER_ID_KEY)
            .map_err(|e| AppError::Internal(format!("failed to read session: {e}")))
    }

    /// Require an authenticated user id or fail with 401.
    pub fn require_user(&self) -> Result<i32, AppError> {
        self.user_id()?.ok_or(AppError::Unauthenticated)
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
