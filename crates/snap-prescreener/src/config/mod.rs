use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use url::Url;

const DEFAULT_JURISDICTION: &str = "NC";
const DEFAULT_ENGINE_URL: &str = "http://127.0.0.1:8080/api/v1/calculate";
const DEFAULT_ENGINE_TIMEOUT_SECS: u64 = 30;

/// Where the prescreener is running, from `APP_ENV`. Unrecognised names fall
/// back to development.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deployment {
    Development,
    Test,
    Production,
}

impl Deployment {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" | "live" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }

    /// Colored logs only at a developer's terminal.
    pub fn ansi_logs(self) -> bool {
        self == Self::Development
    }
}

/// Top-level configuration for a prescreener deployment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub deployment: Deployment,
    pub prescreener: PrescreenerConfig,
    pub engine: EngineConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let deployment = env::var("APP_ENV")
            .map(|raw| Deployment::parse(&raw))
            .unwrap_or(Deployment::Development);

        let jurisdiction = normalize_jurisdiction(
            &env::var("APP_JURISDICTION").unwrap_or_else(|_| DEFAULT_JURISDICTION.to_string()),
        )?;
        let options_path = env::var("APP_JURISDICTION_OPTIONS")
            .ok()
            .filter(|raw| !raw.trim().is_empty())
            .map(PathBuf::from);

        let endpoint = parse_engine_url(
            &env::var("APP_ENGINE_URL").unwrap_or_else(|_| DEFAULT_ENGINE_URL.to_string()),
        )?;
        let timeout_secs = env::var("APP_ENGINE_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_ENGINE_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidEngineTimeout)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            deployment,
            prescreener: PrescreenerConfig {
                jurisdiction,
                options_path,
            },
            engine: EngineConfig {
                endpoint,
                timeout: Duration::from_secs(timeout_secs),
            },
            telemetry: TelemetryConfig {
                log_level,
                ansi: deployment.ansi_logs(),
            },
        })
    }
}

/// Deployment-specific form settings.
#[derive(Debug, Clone)]
pub struct PrescreenerConfig {
    /// Two-letter state or territory code, upper-cased.
    pub jurisdiction: String,
    /// CSV file replacing the built-in jurisdiction link table.
    pub options_path: Option<PathBuf>,
}

/// Where and how to reach the calculation engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub endpoint: Url,
    pub timeout: Duration,
}

impl EngineConfig {
    pub fn with_endpoint(&self, raw: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            endpoint: parse_engine_url(raw)?,
            timeout: self.timeout,
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub ansi: bool,
}

pub fn normalize_jurisdiction(raw: &str) -> Result<String, ConfigError> {
    let code = raw.trim();
    if code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(code.to_ascii_uppercase())
    } else {
        Err(ConfigError::InvalidJurisdiction {
            value: raw.to_string(),
        })
    }
}

fn parse_engine_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|source| ConfigError::InvalidEngineUrl {
        value: raw.to_string(),
        source,
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::UnsupportedEngineScheme {
            scheme: other.to_string(),
        }),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidJurisdiction {
        value: String,
    },
    InvalidEngineUrl {
        value: String,
        source: url::ParseError,
    },
    UnsupportedEngineScheme {
        scheme: String,
    },
    InvalidEngineTimeout,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidJurisdiction { value } => write!(
                f,
                "APP_JURISDICTION must be a two-letter state or territory code, got '{}'",
                value
            ),
            ConfigError::InvalidEngineUrl { value, .. } => {
                write!(f, "APP_ENGINE_URL must be an absolute URL, got '{}'", value)
            }
            ConfigError::UnsupportedEngineScheme { scheme } => {
                write!(f, "APP_ENGINE_URL must use http or https, got '{}'", scheme)
            }
            ConfigError::InvalidEngineTimeout => {
                write!(f, "APP_ENGINE_TIMEOUT_SECS must be a whole number of seconds")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidEngineUrl { source, .. } => Some(source),
            ConfigError::InvalidJurisdiction { .. }
            | ConfigError::UnsupportedEngineScheme { .. }
            | ConfigError::InvalidEngineTimeout => None,
        }
    }
}
