use anyhow::{Context, Result};
use std::path::PathBuf;

/// Origins allowed when `ALLOWED_ORIGINS` is not set (local frontend dev servers).
const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

#[derive(Debug, Clone)]
pub struct Config {
    // Content
    pub content_dir: PathBuf,
    pub assets_dir: PathBuf,

    // Server
    pub host: String,
    pub port: u16,

    // CORS
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Config with defaults for everything except the content root.
    pub fn new(content_dir: impl Into<PathBuf>) -> Self {
        let content_dir = content_dir.into();
        Self {
            assets_dir: content_dir.clone(),
            content_dir,
            host: "0.0.0.0".to_string(),
            port: 8000,
            allowed_origins: parse_origins(DEFAULT_ALLOWED_ORIGINS),
        }
    }

    pub fn from_env() -> Result<Self> {
        let content_dir =
            PathBuf::from(std::env::var("CONTENT_DIR").unwrap_or_else(|_| "content".to_string()));

        Ok(Self {
            // Static assets default to the content root itself
            assets_dir: std::env::var("ASSETS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| content_dir.clone()),
            content_dir,

            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: match std::env::var("PORT") {
                Ok(port) => port
                    .parse()
                    .with_context(|| format!("PORT is not a valid port: {}", port))?,
                Err(_) => 8000,
            },

            allowed_origins: parse_origins(
                &std::env::var("ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGINS.to_string()),
            ),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().trim_end_matches('/').to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
