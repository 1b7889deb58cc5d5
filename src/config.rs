use std::{env, fmt::Display, str::FromStr};

use tracing::info;

use crate::errors::AppError;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub jwt_secret: String,
    pub cookie_secure: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            port: try_load("PORT", "3001")?,
            supabase_url: require("SUPABASE_URL")?
                .trim_end_matches('/')
                .to_string(),
            supabase_anon_key: require("SUPABASE_ANON_KEY")?,
            jwt_secret: require("SUPABASE_JWT_SECRET")?,
            cookie_secure: try_load("COOKIE_SECURE", "false")?,
        })
    }
}

fn require(key: &str) -> Result<String, AppError> {
    env::var(key).map_err(|_| AppError::EnvError(format!("{key} must be set")))
}

fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T, AppError>
where
    T::Err: Display,
{
    let raw = env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.parse()
        .map_err(|e| AppError::EnvError(format!("Invalid {key} value: {e}")))
}
