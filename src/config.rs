use std::{env, path::PathBuf, time::Duration};

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

#[derive(Clone, Debug)]
pub struct Config {
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    /// Durable session file. `None` keeps the session in memory only.
    pub session_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            api_base_url: env::var("QUIZ_API_URL")
                .ok()
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            request_timeout_secs: env::var("QUIZ_API_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
            session_file: Self::session_file_from(env::var("QUIZ_SESSION_FILE").ok()),
        }
    }

    /// A blank value means no session file.
    fn session_file_from(value: Option<String>) -> Option<PathBuf> {
        value
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:5000".to_string(),
            request_timeout_secs: 2,
            session_file: None,
        }
    }
}
