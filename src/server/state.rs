//! Application state shared across all request handlers.
//!
//! `AppState` is built once during startup and cloned into every handler through
//! Axum's state extraction. Every field is cheap to clone.

use sea_orm::DatabaseConnection;

use crate::server::{config::CookiePolicy, service::token::JwtKeys};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool shared by all requests.
    pub db: DatabaseConnection,

    /// Keys used to sign and verify access and refresh tokens.
    pub jwt: JwtKeys,

    /// `Secure` and `SameSite` attributes for authentication cookies.
    pub cookie_policy: CookiePolicy,
}

impl AppState {
    pub fn new(db: DatabaseConnection, jwt: JwtKeys, cookie_policy: CookiePolicy) -> Self {
        Self {
            db,
            jwt,
            cookie_policy,
        }
    }
}
