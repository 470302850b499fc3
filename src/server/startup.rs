use sea_orm::DatabaseConnection;

use crate::server::{
    config::{AdminBootstrap, Config},
    data::user::{CreateUserRecord, UserRepository},
    error::AppError,
    util::password,
};

/// Connects to the SQLite database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration,
/// then runs all pending SeaORM migrations so the schema is up to date before any
/// request is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the configured staff account when no staff user exists yet.
///
/// Does nothing when no bootstrap credentials are configured, when a staff user
/// already exists, or when the username is taken by a regular account.
///
/// # Returns
/// - `Ok(true)` - The staff account was created
/// - `Ok(false)` - Nothing to do
/// - `Err(AppError)` - Database or hashing failure
pub async fn bootstrap_admin(
    db: &DatabaseConnection,
    admin: Option<&AdminBootstrap>,
) -> Result<bool, AppError> {
    let Some(admin) = admin else {
        return Ok(false);
    };

    let user_repo = UserRepository::new(db);

    if user_repo.staff_exists().await? {
        return Ok(false);
    }

    if user_repo.username_exists(&admin.username).await? {
        tracing::warn!(
            "No staff user exists but username {} is already taken; skipping admin bootstrap",
            admin.username
        );
        return Ok(false);
    }

    let user = user_repo
        .create(CreateUserRecord {
            username: admin.username.clone(),
            email: admin.email.clone(),
            password_hash: password::hash_password(&admin.password)?,
            is_staff: true,
        })
        .await?;

    tracing::info!("Created staff account {} ({})", user.username, user.id);

    Ok(true)
}
