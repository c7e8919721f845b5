use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every value has a local-development default; all of them flow into
/// constructors rather than living in globals.
#[derive(Debug, Clone)]
pub struct Config {
    pub ollama_url: String,
    pub ollama_model: String,
    pub storage_dir: String,
    pub allowed_origins: Vec<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            ollama_url: env_or("OLLAMA_URL", "http://localhost:11434"),
            ollama_model: env_or("OLLAMA_MODEL", "gemma3:1b"),
            storage_dir: env_or("STORAGE_DIR", "analyses_storage"),
            allowed_origins: env_or(
                "ALLOWED_ORIGINS",
                "http://localhost:5173,http://127.0.0.1:5173",
            )
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect(),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
