//! Global application configuration.
//!
//! `AppConfig` is a lazily initialized singleton loaded from `.env` and
//! environment variables. The free functions at the bottom are the accessors
//! used throughout the workspace; the `set_*` functions exist so tests can
//! override individual values without touching the process environment.

use std::env;
use std::sync::{OnceLock, RwLock};

/// Runtime configuration for the attendance API.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    pub database_path: String,
    pub host: String,
    pub port: u16,
    pub checkin_mode: String,
}

static CONFIG_INSTANCE: OnceLock<RwLock<AppConfig>> = OnceLock::new();

impl AppConfig {
    /// Loads the configuration from `.env` and environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            env: env::var("APP_ENV").unwrap_or_else(|_| "development".into()),
            project_name: env::var("PROJECT_NAME").unwrap_or_else(|_| "checkname-api".into()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "api=info".into()),
            log_file: env::var("LOG_FILE").unwrap_or_else(|_| "api.log".into()),
            log_to_stdout: env::var("LOG_TO_STDOUT").unwrap_or_else(|_| "false".into()) == "true",
            database_path: env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "data/checkname.db".into()),
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".into())
                .parse()
                .expect("PORT must be a valid u16"),
            checkin_mode: env::var("CHECKIN_MODE").unwrap_or_else(|_| "legacy".into()),
        }
    }

    /// Returns a read guard on the global configuration, initializing it on
    /// first use.
    pub fn global() -> std::sync::RwLockReadGuard<'static, AppConfig> {
        CONFIG_INSTANCE
            .get_or_init(|| RwLock::new(AppConfig::from_env()))
            .read()
            .expect("AppConfig lock poisoned")
    }

    fn set_field(mutator: impl FnOnce(&mut AppConfig)) {
        let lock = CONFIG_INSTANCE.get_or_init(|| RwLock::new(AppConfig::from_env()));
        let mut cfg = lock.write().expect("AppConfig lock poisoned");
        mutator(&mut cfg);
    }
}

pub fn env() -> String {
    AppConfig::global().env.clone()
}

pub fn project_name() -> String {
    AppConfig::global().project_name.clone()
}

pub fn log_level() -> String {
    AppConfig::global().log_level.clone()
}

pub fn log_file() -> String {
    AppConfig::global().log_file.clone()
}

pub fn log_to_stdout() -> bool {
    AppConfig::global().log_to_stdout
}

pub fn database_path() -> String {
    AppConfig::global().database_path.clone()
}

pub fn host() -> String {
    AppConfig::global().host.clone()
}

pub fn port() -> u16 {
    AppConfig::global().port
}

pub fn checkin_mode() -> String {
    AppConfig::global().checkin_mode.clone()
}

pub fn set_database_path(value: impl Into<String>) {
    AppConfig::set_field(|cfg| cfg.database_path = value.into());
}

pub fn set_host(value: impl Into<String>) {
    AppConfig::set_field(|cfg| cfg.host = value.into());
}

pub fn set_port(value: u16) {
    AppConfig::set_field(|cfg| cfg.port = value);
}

pub fn set_checkin_mode(value: impl Into<String>) {
    AppConfig::set_field(|cfg| cfg.checkin_mode = value.into());
}
