use crate::assessment::TierPolicy;
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub catalog: CatalogConfig,
    pub tiers: TierPolicy,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let profiles_path = env::var("APP_PROFILES_CSV")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(CatalogConfig::DEFAULT_PROFILES));
        let universities_path = env::var("APP_UNIVERSITIES_CSV")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(CatalogConfig::DEFAULT_UNIVERSITIES));

        let standard = TierPolicy::standard();
        let tiers = TierPolicy::new(
            span_from_env("APP_TIER_AMBITIOUS", standard.ambitious_span())?,
            span_from_env("APP_TIER_TARGET", standard.target_span())?,
            span_from_env("APP_TIER_SAFE", standard.safe_span())?,
        )
        .ok_or(ConfigError::InvalidTierSpan {
            variable: "APP_TIER_TARGET",
        })?;

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig {
                log_level,
                ansi: environment == AppEnvironment::Development,
            },
            catalog: CatalogConfig {
                profiles_path,
                universities_path,
            },
            tiers,
        })
    }
}

fn span_from_env(variable: &'static str, default: usize) -> Result<usize, ConfigError> {
    match env::var(variable) {
        Ok(raw) => raw
            .trim()
            .parse::<usize>()
            .map_err(|_| ConfigError::InvalidTierSpan { variable }),
        Err(_) => Ok(default),
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    /// Colored output with targets; only enabled for local development.
    pub ansi: bool,
}

/// Locations of the two catalog exports.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub profiles_path: PathBuf,
    pub universities_path: PathBuf,
}

impl CatalogConfig {
    pub const DEFAULT_PROFILES: &'static str = "data/country_profiles.csv";
    pub const DEFAULT_UNIVERSITIES: &'static str = "data/universities.csv";
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidTierSpan { variable: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidTierSpan { variable } => {
                write!(
                    f,
                    "{variable} must be a non-negative integer (APP_TIER_TARGET at least 1)"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidTierSpan { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}
