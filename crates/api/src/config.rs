use axum::http::HeaderValue;

/// Default bind port.
pub const DEFAULT_PORT: u16 = 7860;

/// Startup configuration errors. Any of these aborts the process before the
/// listener is bound.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Environment variable {0} is missing")]
    Missing(&'static str),

    #[error("Environment variable {name} has invalid value '{value}'")]
    Invalid { name: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
///
/// Everything except `SECRET` has a default suitable for local development.
#[derive(Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `7860`).
    pub port: u16,
    /// Allowed CORS origins from comma-separated `CORS_ORIGINS`. `None` means
    /// any origin is accepted.
    pub cors_origins: Option<Vec<HeaderValue>>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// How long shutdown waits for in-flight background tasks (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// Per-fetch timeout for the HTTP agent (default: `60`).
    pub agent_timeout_secs: u64,
    /// Shared secret every submission must present.
    pub secret: String,
    /// Operator contact address. Not used by request handling.
    pub email: Option<String>,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                 | Default     |
    /// |-------------------------|-------------|
    /// | `SECRET`                | (required)  |
    /// | `EMAIL`                 | unset       |
    /// | `HOST`                  | `0.0.0.0`   |
    /// | `PORT`                  | `7860`      |
    /// | `CORS_ORIGINS`          | any origin  |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`        |
    /// | `SHUTDOWN_TIMEOUT_SECS` | `30`        |
    /// | `AGENT_TIMEOUT_SECS`    | `60`        |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty values count as unset.
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let secret = get("SECRET").ok_or(ConfigError::Missing("SECRET"))?;
        let email = get("EMAIL");

        let host = get("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_or(get("PORT"), "PORT", DEFAULT_PORT)?;

        let cors_origins = get("CORS_ORIGINS")
            .map(|raw| parse_origins(&raw))
            .transpose()?;

        let request_timeout_secs =
            parse_or(get("REQUEST_TIMEOUT_SECS"), "REQUEST_TIMEOUT_SECS", 30)?;
        let shutdown_timeout_secs =
            parse_or(get("SHUTDOWN_TIMEOUT_SECS"), "SHUTDOWN_TIMEOUT_SECS", 30)?;
        let agent_timeout_secs = parse_or(
            get("AGENT_TIMEOUT_SECS"),
            "AGENT_TIMEOUT_SECS",
            solver_agent::http::DEFAULT_TIMEOUT_SECS,
        )?;

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            agent_timeout_secs,
            secret,
            email,
        })
    }
}

// Hand-written so the secret never ends up in logs.
impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("cors_origins", &self.cors_origins)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("shutdown_timeout_secs", &self.shutdown_timeout_secs)
            .field("agent_timeout_secs", &self.agent_timeout_secs)
            .field("secret", &"[REDACTED]")
            .field("email", &self.email)
            .finish()
    }
}

fn parse_origins(raw: &str) -> Result<Vec<HeaderValue>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| ConfigError::Invalid {
                name: "CORS_ORIGINS",
                value: origin.to_string(),
            })
        })
        .collect()
}

fn parse_or<T: std::str::FromStr>(
    raw: Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}
