//! JWT issuing and verification for access and refresh tokens.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::server::error::AppError;

/// Access tokens live for 30 minutes.
pub const ACCESS_TOKEN_TTL_SECONDS: i64 = 30 * 60;
/// Refresh tokens live for 7 days.
pub const REFRESH_TOKEN_TTL_SECONDS: i64 = 7 * 24 * 60 * 60;

const JTI_LENGTH: usize = 32;
const JTI_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

impl TokenType {
    pub fn lifetime(self) -> Duration {
        match self {
            TokenType::Access => Duration::seconds(ACCESS_TOKEN_TTL_SECONDS),
            TokenType::Refresh => Duration::seconds(REFRESH_TOKEN_TTL_SECONDS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// User id as a decimal string.
    pub sub: String,
    pub token_type: TokenType,
    pub jti: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    /// User id carried in `sub`, if it parses.
    pub fn user_id(&self) -> Option<i32> {
        self.sub.parse().ok()
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }
}

/// A signed token together with the claims it carries.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub claims: Claims,
}

#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access: IssuedToken,
    pub refresh: IssuedToken,
}

/// HMAC keys derived from the configured secret.
#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl JwtKeys {
    pub fn from_secret(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }
}

pub struct TokenService<'a> {
    keys: &'a JwtKeys,
}

impl<'a> TokenService<'a> {
    pub fn new(keys: &'a JwtKeys) -> Self {
        Self { keys }
    }

    /// Issues a fresh access and refresh token for `user_id`.
    pub fn issue_pair(&self, user_id: i32) -> Result<TokenPair, AppError> {
        Ok(TokenPair {
            access: self.issue(user_id, TokenType::Access)?,
            refresh: self.issue(user_id, TokenType::Refresh)?,
        })
    }

    pub fn issue(&self, user_id: i32, token_type: TokenType) -> Result<IssuedToken, AppError> {
        self.issue_at(user_id, token_type, Utc::now())
    }

    /// Issues a token as if the current time were `issued_at`.
    pub fn issue_at(
        &self,
        user_id: i32,
        token_type: TokenType,
        issued_at: DateTime<Utc>,
    ) -> Result<IssuedToken, AppError> {
        let claims = Claims {
            sub: user_id.to_string(),
            token_type,
            jti: generate_jti(),
            iat: issued_at.timestamp(),
            exp: (issued_at + token_type.lifetime()).timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.keys.encoding)?;

        Ok(IssuedToken { token, claims })
    }

    /// Verifies the signature, expiry and type of `token`.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is valid and of the expected type
    /// - `Err(String)` - Reason the token was rejected, for logging
    pub fn verify(&self, token: &str, expected: TokenType) -> Result<Claims, String> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let data = decode::<Claims>(token, &self.keys.decoding, &validation)
            .map_err(|e| e.to_string())?;

        if data.claims.token_type != expected {
            return Err(format!(
                "expected {:?} token, got {:?}",
                expected, data.claims.token_type
            ));
        }
        if data.claims.user_id().is_none() {
            return Err(format!("malformed subject '{}'", data.claims.sub));
        }

        Ok(data.claims)
    }
}

fn generate_jti() -> String {
    let mut rng = rand::rng();
    (0..JTI_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..JTI_CHARSET.len());
            JTI_CHARSET[idx] as char
        })
        .collect()
}
