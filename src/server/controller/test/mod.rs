//! Tests driving the full router, cookies included.

use std::collections::BTreeMap;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory::user::UserFactory};
use tower::ServiceExt;

use crate::server::{
    config::CookiePolicy, router::router, service::token::JwtKeys, state::AppState,
    util::password,
};


const PASSWORD: &str = "tatakae-tatakae";

/// A router over a fresh database plus a cookie jar that follows `Set-Cookie`.
struct TestApp {
    router: Router,
    cookies: BTreeMap<String, String>,
    context: TestContext,
}

impl TestApp {
    async fn new() -> Self {
        let context = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = context.db.clone().unwrap();

        let state = AppState::new(
            db,
            JwtKeys::from_secret("router-test-secret"),
            CookiePolicy::default(),
        );

        Self {
            router: router(state).unwrap(),
            cookies: BTreeMap::new(),
            context,
        }
    }

    fn db(&self) -> &DatabaseConnection {
        self.context.db.as_ref().unwrap()
    }

    /// Creates an account that can log in with [`PASSWORD`].
    async fn create_account(&self, username: &str, is_staff: bool) -> entity::user::Model {
        UserFactory::new(self.db())
            .username(username)
            .password_hash(password::hash_password(PASSWORD).unwrap())
            .staff(is_staff)
            .build()
            .await
            .unwrap()
    }

    /// Creates an account and logs in as it, replacing any current cookies.
    async fn login_as(&mut self, username: &str, is_staff: bool) -> entity::user::Model {
        let user = self.create_account(username, is_staff).await;

        let (status, _) = self
            .send(
                Method::POST,
                "/api/v1/auth/login",
                Some(json!({ "username": username, "password": PASSWORD })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);

        user
    }

    fn logout_locally(&mut self) {
        self.cookies.clear();
    }

    async fn send(&mut self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut request = Request::builder()
            .method(method)
            .uri(uri)
            .header("x-forwarded-for", "203.0.113.7");

        if !self.cookies.is_empty() {
            let cookie = self
                .cookies
                .iter()
                .map(|(name, value)| format!("{}={}", name, value))
                .collect::<Vec<_>>()
                .join("; ");
            request = request.header(header::COOKIE, cookie);
        }

        let request = match body {
            Some(body) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();

        for set_cookie in response.headers().get_all(header::SET_COOKIE) {
            let set_cookie = set_cookie.to_str().unwrap();
            let pair = set_cookie.split(';').next().unwrap_or_default();
            if let Some((name, value)) = pair.split_once('=') {
                if value.is_empty() {
                    self.cookies.remove(name);
                } else {
                    self.cookies.insert(name.to_string(), value.to_string());
                }
            }
        }

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, body)
    }

    async fn get(&mut self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    async fn post(&mut self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body)).await
    }
}
