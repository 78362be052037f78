//! Configuration loading and constants.
//!
//! Configuration comes from environment variables (12-factor style) and is read
//! once at startup. `AppConfig` is the root configuration struct; the lookup
//! function is injectable so tests never have to mutate the process environment.

use std::time::Duration;

// =============================================================================
// HTTP Server Constants
// =============================================================================

/// Port used when `PORT` is unset or empty
pub const DEFAULT_PORT: &str = "8080";

/// Bind host used when `HOST` is unset or empty (all interfaces, IPv4 and IPv6)
pub const DEFAULT_HOST: &str = "::";

/// IPv4-only wildcard, used when the dual-stack bind is not possible
pub const FALLBACK_HOST: &str = "0.0.0.0";

/// Maximum time a connection may spend sending request headers
pub const READ_HEADER_TIMEOUT: Duration = Duration::from_secs(5);

/// Pause after a failed `accept` before trying again
pub const ACCEPT_ERROR_BACKOFF: Duration = Duration::from_millis(100);

// =============================================================================
// Response Constants
// =============================================================================

/// Greeting returned by the root endpoint
pub const GREETING_MESSAGE: &str = "Hello from GitOps!";

pub const CONTENT_TYPE_TEXT: &str = "text/plain; charset=utf-8";
pub const CONTENT_TYPE_JSON: &str = "application/json; charset=utf-8";

// =============================================================================
// Environment Variables and Logging Defaults
// =============================================================================

pub const ENV_PORT: &str = "PORT";
pub const ENV_HOST: &str = "HOST";
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "hello_web=info";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: LogFormat = LogFormat::Text;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// HTTP server configuration
    pub http: HttpServerConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpServerConfig {
    pub host: String,
    /// Kept verbatim as given; an unusable value surfaces as a bind error.
    pub port: String,
}

impl HttpServerConfig {
    /// Address string handed to the listener, e.g. `[::]:8080` or `127.0.0.1:8080`.
    pub fn bind_addr(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }

    /// Whether the host is the dual-stack wildcard.
    pub fn is_dual_stack(&self) -> bool {
        matches!(self.host.as_str(), "::" | "[::]")
    }
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT.to_string(),
        }
    }
}

/// Output format of the log subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines
    Text,
    /// One JSON object per line
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(ConfigError::InvalidLogFormat(other.to_string())),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub format: LogFormat,
    /// Set when `LOG_FORMAT` held an unknown value and the default was used instead
    pub rejected_format: Option<ConfigError>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT,
            rejected_format: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Unset and empty variables are treated the same: both fall back to the default.
    /// Never fails; an unknown `LOG_FORMAT` is recorded and replaced by the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let http = HttpServerConfig {
            host: var(ENV_HOST).unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: var(ENV_PORT).unwrap_or_else(|| DEFAULT_PORT.to_string()),
        };

        let logging = match var(ENV_LOG_FORMAT).map(|value| value.parse::<LogFormat>()) {
            Some(Ok(format)) => LoggingConfig {
                format,
                rejected_format: None,
            },
            Some(Err(e)) => LoggingConfig {
                format: DEFAULT_LOG_FORMAT,
                rejected_format: Some(e),
            },
            None => LoggingConfig::default(),
        };

        Self { http, logging }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid LOG_FORMAT {0:?}, expected \"text\" or \"json\"")]
    InvalidLogFormat(String),
}
