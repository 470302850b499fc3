mod model;
mod server;

use std::net::SocketAddr;

use axum::http::{header, HeaderValue, Method};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    router, scheduler::token_cleanup, service::token::JwtKeys, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    startup::bootstrap_admin(&db, config.admin.as_ref()).await?;

    // Held for the lifetime of the server so the cleanup job keeps firing
    let _scheduler = token_cleanup::start_scheduler(db.clone()).await?;

    let state = AppState::new(
        db,
        JwtKeys::from_secret(&config.secret_key),
        config.cookie,
    );

    let app = router::router(state)?
        .layer(cors_layer(&config)?)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Allows the configured frontend origin to call the API with cookies.
fn cors_layer(config: &Config) -> Result<CorsLayer, ConfigError> {
    let origin = config.frontend_url.origin().ascii_serialization();
    let origin = HeaderValue::from_str(&origin).map_err(|e| ConfigError::InvalidEnvVar {
        name: "FRONTEND_URL".to_string(),
        value: origin.clone(),
        reason: e.to_string(),
    })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE]))
}
