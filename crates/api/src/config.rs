use std::str::FromStr;

use axum::http::HeaderValue;

/// Credentials accepted by the mock login endpoint.
///
/// This is a fixture, not an account store: exactly one email/password pair
/// logs in, and registering with the same email is reported as a conflict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoAccount {
    pub email: String,
    pub password: String,
}

impl DemoAccount {
    pub fn matches(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }
}

impl Default for DemoAccount {
    fn default() -> Self {
        Self {
            email: "user@example.com".to_string(),
            password: "password".to_string(),
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// The single credential pair the mock login accepts.
    pub demo: DemoAccount,
}

/// A configuration variable held a value that could not be used.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a valid {expected}, got '{value}'")]
    Invalid {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `DEMO_EMAIL`           | `user@example.com`         |
    /// | `DEMO_PASSWORD`        | `password`                 |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reading from an arbitrary
    /// key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port: u16 = parse_var(&lookup, "PORT", 3000, "u16")?;
        let request_timeout_secs: u64 = parse_var(&lookup, "REQUEST_TIMEOUT_SECS", 30, "u64")?;

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        if let Some(bad) = cors_origins
            .iter()
            .find(|o| o.parse::<HeaderValue>().is_err())
        {
            return Err(ConfigError::Invalid {
                var: "CORS_ORIGINS",
                value: bad.clone(),
                expected: "origin header value",
            });
        }

        let defaults = DemoAccount::default();
        let demo = DemoAccount {
            email: lookup("DEMO_EMAIL").unwrap_or(defaults.email),
            password: lookup("DEMO_PASSWORD").unwrap_or(defaults.password),
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            demo,
        })
    }
}

fn parse_var<F, T>(
    lookup: &F,
    var: &'static str,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
            var,
            value,
            expected,
        }),
    }
}
