use tower_cookies::cookie::SameSite;
use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";

/// Attributes applied to every authentication cookie.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CookiePolicy {
    pub secure: bool,
    pub same_site: SameSite,
}

impl Default for CookiePolicy {
    fn default() -> Self {
        Self {
            secure: false,
            same_site: SameSite::Lax,
        }
    }
}

/// Credentials for the staff account created on first start.
#[derive(Debug, Clone)]
pub struct AdminBootstrap {
    pub username: String,
    pub email: String,
    pub password: String,
}

pub struct Config {
    pub database_url: String,
    pub secret_key: String,
    /// Origin allowed by CORS, credentials included.
    pub frontend_url: Url,
    pub bind_address: String,
    pub cookie: CookiePolicy,
    pub admin: Option<AdminBootstrap>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok().filter(|value| !value.is_empty()))
    }

    /// Builds the configuration from any variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let frontend_url = required("FRONTEND_URL")?;
        let frontend_url = Url::parse(&frontend_url).map_err(|e| ConfigError::InvalidEnvVar {
            name: "FRONTEND_URL".to_string(),
            value: frontend_url.clone(),
            reason: e.to_string(),
        })?;

        let secure = match lookup("SECURE") {
            Some(value) => parse_bool("SECURE", &value)?,
            None => false,
        };
        let same_site = match lookup("SAMESITE") {
            Some(value) => parse_same_site(&value)?,
            None => SameSite::Lax,
        };

        let admin = match (
            lookup("ADMIN_USERNAME"),
            lookup("ADMIN_EMAIL"),
            lookup("ADMIN_PASSWORD"),
        ) {
            (Some(username), Some(email), Some(password)) => Some(AdminBootstrap {
                username,
                email,
                password,
            }),
            _ => None,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            secret_key: required("SECRET_KEY")?,
            frontend_url,
            bind_address: lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            cookie: CookiePolicy { secure, same_site },
            admin,
        })
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
            reason: "expected true or false".to_string(),
        }),
    }
}

fn parse_same_site(value: &str) -> Result<SameSite, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "lax" => Ok(SameSite::Lax),
        "strict" => Ok(SameSite::Strict),
        "none" => Ok(SameSite::None),
        _ => Err(ConfigError::InvalidEnvVar {
            name: "SAMESITE".to_string(),
            value: value.to_string(),
            reason: "expected Lax, Strict or None".to_string(),
        }),
    }
}
