// src/config.rs
use std::{env, path::PathBuf};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    site_base_url: String,
    article_max_age: Option<u64>,
    content_seed: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_site_base_url() -> String {
    "http://127.0.0.1:8080".into()
}

impl AppConfig {
    /// Build configuration from environment variables. Uses sensible defaults
    /// for optional values and validates the site base URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| default_listen_addr());
        let site_base_url = env::var("SITE_BASE_URL").unwrap_or_else(|_| default_site_base_url());

        if !site_base_url.starts_with("http://") && !site_base_url.starts_with("https://") {
            return Err(ConfigError::Invalid(
                "SITE_BASE_URL must be an absolute http(s) URL".into(),
            ));
        }

        let article_max_age = env::var("ARTICLE_MAX_AGE_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok());

        let content_seed = env::var("CONTENT_SEED").ok().map(PathBuf::from);

        Ok(Self {
            listen_addr,
            site_base_url,
            article_max_age,
            content_seed,
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn site_base_url(&self) -> &str {
        &self.site_base_url
    }

    /// Base max-age for the article collection; `None` leaves the response
    /// unbounded unless a touched entity restricts it.
    pub const fn article_max_age(&self) -> Option<u64> {
        self.article_max_age
    }

    /// Optional JSON fixture loaded into the in-memory store at boot.
    pub fn content_seed(&self) -> Option<&PathBuf> {
        self.content_seed.as_ref()
    }
}
