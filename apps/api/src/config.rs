use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_ANALYSIS_DELAY_MS: u64 = 2500;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Pacing delay before an analysis is computed (drives the "analyzing" state).
    pub analysis_delay: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            analysis_delay: Duration::from_millis(parse_delay_ms(
                std::env::var("ANALYSIS_DELAY_MS").ok().as_deref(),
            )?),
        })
    }
}

fn parse_delay_ms(raw: Option<&str>) -> Result<u64> {
    match raw {
        None => Ok(DEFAULT_ANALYSIS_DELAY_MS),
        Some(value) => value
            .trim()
            .parse::<u64>()
            .with_context(|| format!("ANALYSIS_DELAY_MS must be milliseconds, got '{value}'")),
    }
}
