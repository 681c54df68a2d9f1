use std::{env, sync::Arc};

use crate::{error::Error, service::ContentService};

/// Environment-provided settings, read once at startup.
///
/// The secrets stay optional here; handlers that need one resolve it through
/// the accessors below so a missing value becomes a configuration error at
/// the call boundary instead of a weak default.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub admin_password: Option<String>,
    pub token_secret: Option<String>,
    pub database_dsn: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            admin_password: env::var("ADMIN_PASSWORD").ok().filter(|v| !v.is_empty()),
            token_secret: env::var("TOKEN_SECRET").ok().filter(|v| !v.is_empty()),
            database_dsn: env::var("DATABASE_URL").ok().filter(|v| !v.is_empty()),
        }
    }

    pub fn admin_password(&self) -> Result<&str, Error> {
        self.admin_password
            .as_deref()
            .ok_or(Error::Configuration("ADMIN_PASSWORD is not set"))
    }

    pub fn token_secret(&self) -> Result<&str, Error> {
        self.token_secret
            .as_deref()
            .ok_or(Error::Configuration("TOKEN_SECRET is not set"))
    }
}

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ContentService>,
    pub config: Arc<Config>,
}
