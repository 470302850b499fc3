use sea_orm::DatabaseConnection;
use tower_cookies::Cookies;

use crate::server::{
    data::{
        blog_post::BlogPostRepository, chapter::ChapterRepository, comment::CommentRepository,
        fan_fiction::FanFictionRepository, user::UserRepository,
    },
    error::{auth::AuthError, AppError},
    middleware::cookie::ACCESS_TOKEN_COOKIE,
    model::user::User,
    service::token::{JwtKeys, TokenService, TokenType},
};

/// Access rule checked against the authenticated user.
///
/// Ownership variants carry the id of the object whose author must match the
/// caller. The object is loaded first, so a missing object yields 404 before any
/// 403 is considered.
pub enum Permission {
    /// Caller must be a staff user.
    Admin,
    BlogPostAuthor(i32),
    FanFictionAuthor(i32),
    /// Caller must be the author of the fan-fiction owning the chapter.
    ChapterAuthor(i32),
    CommentAuthor(i32),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtKeys,
    access_token: Option<String>,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtKeys, cookies: &Cookies) -> Self {
        let access_token = cookies
            .get(ACCESS_TOKEN_COOKIE)
            .map(|c| c.value().to_string());

        Self::from_token(db, jwt, access_token)
    }

    /// Builds a guard from an already extracted access token.
    pub fn from_token(
        db: &'a DatabaseConnection,
        jwt: &'a JwtKeys,
        access_token: Option<String>,
    ) -> Self {
        Self {
            db,
            jwt,
            access_token,
        }
    }

    /// Resolves the caller without requiring authentication.
    ///
    /// # Returns
    /// - `Ok(None)` - No access cookie was sent
    /// - `Ok(Some(User))` - Valid access token for an existing user
    /// - `Err(AppError::AuthErr(_))` - A cookie was sent but is invalid, expired, of the
    ///   wrong type, or names a deleted user
    pub async fn current(&self) -> Result<Option<User>, AppError> {
        let Some(token) = self.access_token.as_deref() else {
            return Ok(None);
        };

        let claims = TokenService::new(self.jwt)
            .verify(token, TokenType::Access)
            .map_err(AuthError::InvalidAccessToken)?;
        let user_id = claims
            .user_id()
            .ok_or_else(|| AuthError::InvalidAccessToken(claims.sub.clone()))?;

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        Ok(Some(user))
    }

    /// Requires an authenticated caller satisfying every permission in `permissions`.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user
    /// - `Err(AppError::AuthErr(AuthError::NotAuthenticated))` - No access cookie
    /// - `Err(AppError::NotFound(_))` - An ownership permission names a missing object
    /// - `Err(AppError::AuthErr(AuthError::AccessDenied(..)))` - A permission is not met
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(user) = self.current().await? else {
            return Err(AuthError::NotAuthenticated.into());
        };

        for permission in permissions {
            match *permission {
                Permission::Admin => {
                    if !user.is_staff {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "User attempted a staff-only action without staff status".to_string(),
                        )
                        .into());
                    }
                }
                Permission::BlogPostAuthor(id) => {
                    let post = BlogPostRepository::new(self.db)
                        .find_by_id(id)
                        .await?
                        .ok_or_else(|| AppError::NotFound("Blog post not found".to_string()))?;
                    Self::require_author(&user, post.author_id, "blog post", id)?;
                }
                Permission::FanFictionAuthor(id) => {
                    let author_id = self.fan_fiction_author(id).await?;
                    Self::require_author(&user, author_id, "fan-fiction", id)?;
                }
                Permission::ChapterAuthor(id) => {
                    let chapter = ChapterRepository::new(self.db)
                        .find_by_id(id)
                        .await?
                        .ok_or_else(|| AppError::NotFound("Chapter not found".to_string()))?;
                    let author_id = self.fan_fiction_author(chapter.fan_fiction_id).await?;
                    Self::require_author(&user, author_id, "chapter", id)?;
                }
                Permission::CommentAuthor(id) => {
                    let comment = CommentRepository::new(self.db)
                        .find_by_id(id)
                        .await?
                        .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))?;
                    Self::require_author(&user, comment.author_id, "comment", id)?;
                }
            }
        }

        Ok(user)
    }

    async fn fan_fiction_author(&self, id: i32) -> Result<i32, AppError> {
        FanFictionRepository::new(self.db)
            .find_author_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Fan-fiction not found".to_string()))
    }

    fn require_author(user: &User, author_id: i32, kind: &str, id: i32) -> Result<(), AuthError> {
        if user.id == author_id {
            return Ok(());
        }

        Err(AuthError::AccessDenied(
            user.id,
            format!("User attempted to modify {} {} owned by user {}", kind, id, author_id),
        ))
    }
}
