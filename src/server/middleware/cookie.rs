//! Authentication cookie handling.
//!
//! Access and refresh tokens travel in two `HttpOnly` cookies. `AuthCookies` is the
//! only place that knows their names and attributes, so handlers never touch raw
//! cookie values beyond reading a token.

use tower_cookies::{Cookie, Cookies};

use crate::server::{
    config::CookiePolicy,
    service::token::{TokenPair, ACCESS_TOKEN_TTL_SECONDS, REFRESH_TOKEN_TTL_SECONDS},
};

pub const ACCESS_TOKEN_COOKIE: &str = "access_token";
pub const REFRESH_TOKEN_COOKIE: &str = "refresh_token";

/// Reads and writes the authentication cookies of one request.
pub struct AuthCookies<'a> {
    cookies: &'a Cookies,
    policy: CookiePolicy,
}

impl<'a> AuthCookies<'a> {
    pub fn new(cookies: &'a Cookies, policy: CookiePolicy) -> Self {
        Self { cookies, policy }
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.cookies
            .get(REFRESH_TOKEN_COOKIE)
            .map(|c| c.value().to_string())
    }

    /// Sets both cookies with a `Max-Age` equal to each token's lifetime.
    pub fn set_tokens(&self, pair: &TokenPair) {
        self.cookies.add(self.build(
            ACCESS_TOKEN_COOKIE,
            pair.access.token.clone(),
            ACCESS_TOKEN_TTL_SECONDS,
        ));
        self.cookies.add(self.build(
            REFRESH_TOKEN_COOKIE,
            pair.refresh.token.clone(),
            REFRESH_TOKEN_TTL_SECONDS,
        ));
    }

    /// Expires both cookies, whether or not the client sent them.
    pub fn clear(&self) {
        self.cookies
            .add(self.build(ACCESS_TOKEN_COOKIE, String::new(), 0));
        self.cookies
            .add(self.build(REFRESH_TOKEN_COOKIE, String::new(), 0));
    }

    fn build(&self, name: &'static str, value: String, max_age_seconds: i64) -> Cookie<'static> {
        Cookie::build((name, value))
            .http_only(true)
            .secure(self.policy.secure)
            .same_site(self.policy.same_site)
            .path("/")
            .max_age(time::Duration::seconds(max_age_seconds))
            .build()
    }
}
