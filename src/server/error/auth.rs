use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No access cookie accompanied a request that needs an identity.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Request is not authenticated")]
    NotAuthenticated,

    /// The access cookie is present but malformed, expired, or of the wrong type.
    ///
    /// Results in a 401 Unauthorized response. The reason is only logged.
    #[error("Access token rejected: {0}")]
    InvalidAccessToken(String),

    /// Username and password do not match a registered account.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Refresh was requested without a refresh cookie.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("No refresh token")]
    MissingRefreshToken,

    /// The refresh cookie failed validation or has been blacklisted.
    ///
    /// Results in a 401 Unauthorized response. The reason is only logged.
    #[error("Refresh token rejected: {0}")]
    InvalidRefreshToken(String),

    /// The token subject no longer exists.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("User {0} referenced by token not found in database")]
    UserNotInDatabase(i32),

    /// Authenticated user lacks the permission the endpoint requires.
    ///
    /// Results in a 403 Forbidden response.
    ///
    /// # Fields
    /// - ID of the user that was denied
    /// - Description of the denied action, logged server-side
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Every variant except `AccessDenied` maps to 401 Unauthorized; `AccessDenied` maps to
/// 403 Forbidden. Details are logged at debug level while client-facing messages stay
/// generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::NotAuthenticated => (
                StatusCode::UNAUTHORIZED,
                "Authentication credentials were not provided.",
            ),
            Self::InvalidAccessToken(_) | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Given token not valid")
            }
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid credentials"),
            Self::MissingRefreshToken => (StatusCode::UNAUTHORIZED, "No refresh token"),
            Self::InvalidRefreshToken(_) => {
                (StatusCode::UNAUTHORIZED, "Invalid or expired refresh token")
            }
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "You do not have permission to perform this action.",
            ),
        };

        (status, Json(ErrorDto::new(message))).into_response()
    }
}
