//! Application configuration loading from environment variables.
//!
//! All configuration is loaded from the environment at startup via standard `std::env::var`,
//! after `dotenvy` has merged any local `.env` file.
//!
//! # Environment Variables
//!
//! ## Required Variables
//! - `JWT_SECRET`: Secret key for signing session tokens
//!
//! ## Optional Variables
//! - `RUST_LOG`: Logging level (default: "info,love_route=debug,tower_http=debug")
//! - `HOST`: Server bind address (default: "0.0.0.0")
//! - `PORT`: Server port (default: 5000)
//! - `STORAGE_BACKEND`: `sqlite` or `memory` (default: `sqlite`)
//! - `DATABASE_URL`: SQLite connection string (default: "sqlite://love_route.db")
//! - `DATABASE_MAX_CONNECTIONS`: DB pool size (default: 5)
//! - `TOKEN_TTL_HOURS`: Lifetime of issued tokens, 1 to 87600 (default: 168)
//! - `CATALOGUE_DIR`: Directory holding `cities.json` and `places.json`; the built-in
//!   catalogue is used when unset
//! - `ARGON2_MEMORY_KIB`: Argon2id memory cost (default: 19456)
//! - `ARGON2_ITERATIONS`: Argon2id time cost (default: 2)
//! - `ARGON2_PARALLELISM`: Argon2id lanes (default: 1)
//! - `ALLOWED_ORIGINS`: Comma-separated CORS origins; any origin when unset
//! - `IGNORE_MISSING_MIGRATIONS`: Skip missing migrations (default: true)

use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Where accounts and decisions are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Durable storage in a SQLite database.
    Sqlite,
    /// Process-local maps; everything is lost on restart.
    Memory,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(Self::Sqlite),
            "memory" => Ok(Self::Memory),
            other => Err(format!("unknown storage backend '{}'", other)),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sqlite => f.write_str("sqlite"),
            Self::Memory => f.write_str("memory"),
        }
    }
}

/// Complete server configuration loaded from environment.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Server bind address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Storage used for accounts and decisions
    pub storage_backend: StorageBackend,

    /// SQLite connection string (e.g., `sqlite://love_route.db` or `sqlite::memory:`)
    pub database_url: String,

    /// Maximum number of pooled database connections
    pub database_max_connections: u32,

    /// Secret key for token signing and verification
    pub jwt_secret: String,

    /// Hours an issued token stays valid
    pub token_ttl_hours: i64,

    /// Directory with catalogue JSON files, if the built-in catalogue is not wanted
    pub catalogue_dir: Option<PathBuf>,

    /// Argon2id memory cost in KiB
    pub argon2_memory_kib: u32,

    /// Argon2id number of passes
    pub argon2_iterations: u32,

    /// Argon2id degree of parallelism
    pub argon2_parallelism: u32,

    /// Origins allowed by CORS; empty allows any origin
    pub allowed_origins: Vec<String>,

    /// Skip missing migrations during startup
    pub ignore_missing_migrations: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or a present variable
    /// cannot be parsed to the expected type.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: env_or("HOST", "0.0.0.0".to_string())?,
            port: env_or("PORT", 5000)?,
            storage_backend: env_or("STORAGE_BACKEND", StorageBackend::Sqlite)?,
            database_url: env_or("DATABASE_URL", "sqlite://love_route.db".to_string())?,
            database_max_connections: env_or("DATABASE_MAX_CONNECTIONS", 5)?,
            jwt_secret: env_required("JWT_SECRET")?,
            token_ttl_hours: token_ttl_hours(env_or("TOKEN_TTL_HOURS", 168)?)?,
            catalogue_dir: std::env::var("CATALOGUE_DIR")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            argon2_memory_kib: env_or("ARGON2_MEMORY_KIB", 19_456)?,
            argon2_iterations: env_or("ARGON2_ITERATIONS", 2)?,
            argon2_parallelism: env_or("ARGON2_PARALLELISM", 1)?,
            allowed_origins: std::env::var("ALLOWED_ORIGINS")
                .map(|v| parse_list(&v))
                .unwrap_or_default(),
            ignore_missing_migrations: env_or("IGNORE_MISSING_MIGRATIONS", true)?,
        })
    }
}

/// Load a required environment variable.
///
/// # Errors
///
/// Returns an error if the variable is not set.
fn env_required(key: &str) -> anyhow::Result<String> {
    std::env::var(key).map_err(|_| anyhow::anyhow!("Missing required environment variable: {}", key))
}

/// Load an environment variable with a default value.
///
/// # Errors
///
/// Returns an error if the variable is set but cannot be parsed.
fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", key, e)),
        Err(_) => Ok(default),
    }
}

/// Upper bound for `TOKEN_TTL_HOURS`: ten years.
pub const MAX_TOKEN_TTL_HOURS: i64 = 24 * 365 * 10;

fn token_ttl_hours(hours: i64) -> anyhow::Result<i64> {
    if !(1..=MAX_TOKEN_TTL_HOURS).contains(&hours) {
        anyhow::bail!(
            "TOKEN_TTL_HOURS must be between 1 and {}, got {}",
            MAX_TOKEN_TTL_HOURS,
            hours
        );
    }
    Ok(hours)
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
