//! Request extractors whose rejections surface as [`AdminError`], so every
//! malformed request gets the same JSON error body.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        FromRequest, FromRequestParts,
    },
    http::request::Parts,
};

use crate::{error::AdminError, state::AppState};

/// Header carrying the administrator password on gated read endpoints.
pub const ADMIN_PASSWORD_HEADER: &str = "x-admin-password";

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AdminError))]
pub struct ValidJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AdminError))]
pub struct ValidPath<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AdminError))]
pub struct ValidQuery<T>(pub T);

impl From<JsonRejection> for AdminError {
    fn from(rejection: JsonRejection) -> Self {
        AdminError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for AdminError {
    fn from(rejection: PathRejection) -> Self {
        AdminError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for AdminError {
    fn from(rejection: QueryRejection) -> Self {
        AdminError::Validation(rejection.body_text())
    }
}

/// Proof that the request carried a valid admin password in
/// [`ADMIN_PASSWORD_HEADER`].
pub struct AdminCredential;

impl FromRequestParts<AppState> for AdminCredential {
    type Rejection = AdminError;

    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let candidate = parts
            .headers
            .get(ADMIN_PASSWORD_HEADER)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let guard = state.guard.clone();
        async move {
            if guard.verify(&candidate) {
                Ok(Self)
            } else {
                tracing::warn!("admin read rejected: invalid admin password");
                Err(AdminError::Unauthorized)
            }
        }
    }
}
