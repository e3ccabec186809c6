// settings
use std::env;
use std::time::Duration;
use tracing::{info, warn};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://www.ultimate-guitar.com/api/v1/tab";
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

/// Process configuration, read once at startup and handed to the server.
#[derive(Clone, Debug)]
pub struct Settings {
    pub port: u16,
    pub upstream_base_url: String,
    /// `None` leaves outbound calls unbounded.
    pub upstream_timeout: Option<Duration>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            port: DEFAULT_PORT,
            upstream_base_url: DEFAULT_UPSTREAM_BASE_URL.to_string(),
            upstream_timeout: Some(Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS)),
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(port) = get("PORT") {
            match port.trim().parse::<u16>() {
                Ok(p) => settings.port = p,
                Err(e) => warn!("Ignoring invalid PORT {:?}: {}", port, e),
            }
        }

        if let Some(base_url) = get("UPSTREAM_BASE_URL") {
            settings.upstream_base_url = base_url.trim().trim_end_matches('/').to_string();
        }

        if let Some(timeout) = get("UPSTREAM_TIMEOUT_SECS") {
            match timeout.trim().parse::<u64>() {
                Ok(0) => settings.upstream_timeout = None,
                Ok(secs) => settings.upstream_timeout = Some(Duration::from_secs(secs)),
                Err(e) => warn!("Ignoring invalid UPSTREAM_TIMEOUT_SECS {:?}: {}", timeout, e),
            }
        }

        info!(
            port = settings.port,
            upstream = %settings.upstream_base_url,
            timeout = ?settings.upstream_timeout,
            "Settings loaded"
        );
        settings
    }

    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
