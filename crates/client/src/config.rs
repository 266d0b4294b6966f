use std::path::PathBuf;

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the mock API, including the `/api` prefix.
    pub api_url: String,
    /// File backing the durable session pair.
    pub session_file: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:3000/api".to_string(),
            session_file: PathBuf::from(".stayhub/session.json"),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                      |
    /// |------------------------|------------------------------|
    /// | `STAYHUB_API_URL`      | `http://localhost:3000/api`  |
    /// | `STAYHUB_SESSION_FILE` | `.stayhub/session.json`      |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            api_url: lookup("STAYHUB_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_url),
            session_file: lookup("STAYHUB_SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.session_file),
        }
    }
}
