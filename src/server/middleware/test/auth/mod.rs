use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission},
    service::token::{JwtKeys, TokenService, TokenType},
};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};


fn keys() -> JwtKeys {
    JwtKeys::from_secret("guard-test-secret")
}

/// Issues a valid access token for `user_id`.
fn access_token(keys: &JwtKeys, user_id: i32) -> Option<String> {
    Some(
        TokenService::new(keys)
            .issue(user_id, TokenType::Access)
            .unwrap()
            .token,
    )
}
