//! Account registration and the cookie JWT session lifecycle.
//!
//! Login issues an access/refresh pair, refresh rotates the pair and blacklists the
//! presented refresh token, and logout blacklists the refresh token if it is still
//! valid. Only refresh tokens are revocable; access tokens simply expire.

use sea_orm::{DatabaseConnection, SqlErr, TransactionTrait};

use crate::{
    model::auth::LoginDto,
    server::{
        data::{
            blacklisted_token::BlacklistedTokenRepository,
            user::{CreateUserRecord, UserRepository},
        },
        error::{auth::AuthError, validation::ValidationErrors, AppError},
        model::user::{RegisterParam, User},
        service::token::{JwtKeys, TokenPair, TokenService, TokenType},
        util::{password, validate},
    },
};

pub const USERNAME_TAKEN: &str = "A user with that username already exists.";

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    keys: &'a JwtKeys,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, keys: &'a JwtKeys) -> Self {
        Self { db, keys }
    }

    /// Creates an account with an Argon2-hashed password.
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(AppError::Validation(_))` - Username already taken
    /// - `Err(AppError::PasswordHashErr(_))` - Hashing failed
    pub async fn register(&self, param: RegisterParam) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.username_exists(&param.username).await? {
            return Err(ValidationErrors::single("username", USERNAME_TAKEN).into());
        }

        let password_hash = password::hash_password(&param.password)?;
        let user = user_repo
            .create(CreateUserRecord {
                username: param.username,
                email: param.email,
                password_hash,
                is_staff: param.is_staff,
            })
            .await
            .map_err(|err| match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    AppError::from(ValidationErrors::single("username", USERNAME_TAKEN))
                }
                _ => AppError::from(err),
            })?;

        tracing::info!("Registered user {} ({})", user.username, user.id);

        Ok(user)
    }

    /// Checks credentials and issues a new token pair.
    ///
    /// # Returns
    /// - `Ok((User, TokenPair))` - Authenticated user and the tokens to set as cookies
    /// - `Err(AppError::Validation(_))` - Username or password blank
    /// - `Err(AppError::AuthErr(AuthError::InvalidCredentials))` - Unknown user or wrong password
    pub async fn login(&self, dto: LoginDto) -> Result<(User, TokenPair), AppError> {
        let mut errors = ValidationErrors::new();
        validate::text(&mut errors, "username", &dto.username, None);
        if dto.password.is_empty() {
            errors.add("password", validate::BLANK);
        }
        errors.into_result()?;

        let Some(credentials) = UserRepository::new(self.db)
            .find_credentials(&dto.username)
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !password::verify_password(&dto.password, &credentials.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        let pair = TokenService::new(self.keys).issue_pair(credentials.user.id)?;

        tracing::info!("User {} logged in", credentials.user.id);

        Ok((credentials.user, pair))
    }

    /// Exchanges a refresh token for a new pair and blacklists the old one.
    ///
    /// The blacklist check, the user check and the blacklist insert run in one
    /// transaction, so two concurrent refreshes with the same token cannot both win.
    ///
    /// # Returns
    /// - `Ok(TokenPair)` - New access and refresh tokens
    /// - `Err(AppError::AuthErr(AuthError::MissingRefreshToken))` - No cookie sent
    /// - `Err(AppError::AuthErr(AuthError::InvalidRefreshToken(_)))` - Bad signature, wrong
    ///   type, expired, blacklisted, or the user no longer exists
    pub async fn refresh(&self, refresh_token: Option<&str>) -> Result<TokenPair, AppError> {
        let token = refresh_token.ok_or(AuthError::MissingRefreshToken)?;

        let tokens = TokenService::new(self.keys);
        let claims = tokens
            .verify(token, TokenType::Refresh)
            .map_err(AuthError::InvalidRefreshToken)?;
        let user_id = claims
            .user_id()
            .ok_or_else(|| AuthError::InvalidRefreshToken(claims.sub.clone()))?;

        let txn = self.db.begin().await?;
        let blacklist = BlacklistedTokenRepository::new(&txn);

        if blacklist.is_blacklisted(&claims.jti).await? {
            return Err(AuthError::InvalidRefreshToken(format!(
                "token {} is blacklisted",
                claims.jti
            ))
            .into());
        }

        if UserRepository::new(&txn).find_by_id(user_id).await?.is_none() {
            return Err(AuthError::InvalidRefreshToken(format!(
                "user {} no longer exists",
                user_id
            ))
            .into());
        }

        if let Err(err) = blacklist
            .insert(&claims.jti, user_id, claims.expires_at())
            .await
        {
            return Err(match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => AuthError::InvalidRefreshToken(
                    format!("token {} was already rotated", claims.jti),
                )
                .into(),
                _ => err.into(),
            });
        }

        let pair = tokens.issue_pair(user_id)?;
        txn.commit().await?;

        tracing::info!("Rotated refresh token for user {}", user_id);

        Ok(pair)
    }

    /// Blacklists the refresh token if it is still valid.
    ///
    /// Never fails: an invalid token or a storage error is logged and ignored so
    /// the caller can always clear the cookies.
    pub async fn logout(&self, refresh_token: Option<&str>) {
        let Some(token) = refresh_token else {
            return;
        };

        let claims = match TokenService::new(self.keys).verify(token, TokenType::Refresh) {
            Ok(claims) => claims,
            Err(reason) => {
                tracing::warn!("Ignoring invalid refresh token on logout: {}", reason);
                return;
            }
        };
        let Some(user_id) = claims.user_id() else {
            return;
        };

        let blacklist = BlacklistedTokenRepository::new(self.db);
        match blacklist.insert(&claims.jti, user_id, claims.expires_at()).await {
            Ok(()) => tracing::info!("User {} logged out", user_id),
            Err(err) => tracing::warn!("Failed to blacklist refresh token on logout: {}", err),
        }
    }
}
