use anyhow::{Context, Result};
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Base URL of the public site, used to build tool links for QR codes.
    pub public_base_url: String,
    /// Prebuilt frontend asset directory. When set, unmatched routes serve
    /// this directory with an index.html fallback for client-side routing.
    pub static_dir: Option<PathBuf>,
    pub port: u16,
    pub rust_log: String,
    pub statutory: StatutoryRules,
}

/// Jurisdiction-specific statutory constants used by the redundancy tool.
/// Externalized so stale figures can be corrected without a rebuild;
/// defaults are the April 2024 UK values.
#[derive(Debug, Clone)]
pub struct StatutoryRules {
    pub redundancy_weekly_pay_cap: f64,
    pub redundancy_max_service_years: u32,
    pub redundancy_min_service_years: u32,
}

impl Default for StatutoryRules {
    fn default() -> Self {
        Self {
            redundancy_weekly_pay_cap: 700.0,
            redundancy_max_service_years: 20,
            redundancy_min_service_years: 2,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            public_base_url: std::env::var("PUBLIC_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            static_dir: std::env::var("STATIC_DIR").ok().map(PathBuf::from),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            statutory: StatutoryRules::from_env()?,
        })
    }
}

impl StatutoryRules {
    pub fn from_env() -> Result<Self> {
        let defaults = StatutoryRules::default();
        Ok(StatutoryRules {
            redundancy_weekly_pay_cap: env_or(
                "REDUNDANCY_WEEKLY_PAY_CAP",
                defaults.redundancy_weekly_pay_cap,
            )?,
            redundancy_max_service_years: env_or(
                "REDUNDANCY_MAX_SERVICE_YEARS",
                defaults.redundancy_max_service_years,
            )?,
            redundancy_min_service_years: env_or(
                "REDUNDANCY_MIN_SERVICE_YEARS",
                defaults.redundancy_min_service_years,
            )?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' is not a valid value")),
        Err(_) => Ok(default),
    }
}
