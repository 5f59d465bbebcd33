use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::matching::weights::HybridWeights;

/// Application configuration loaded from environment variables.
/// Startup fails if any present variable is malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON catalog of raw career records. `None` selects the built-in catalog.
    pub careers_path: Option<PathBuf>,
    pub default_top_n: usize,
    pub hybrid: HybridWeights,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let hybrid = HybridWeights {
            content: optional_env("CONTENT_WEIGHT", 0.7)?,
            collaborative: optional_env("COLLABORATIVE_WEIGHT", 0.3)?,
        };
        validate_hybrid(&hybrid)?;

        Ok(Config {
            port: optional_env("PORT", 8000)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            careers_path: std::env::var("CAREERS_PATH")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            default_top_n: optional_env("RECOMMENDATION_TOP_N", 5)?,
            hybrid,
        })
    }
}

fn optional_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}

fn validate_hybrid(weights: &HybridWeights) -> Result<()> {
    for (name, w) in [
        ("CONTENT_WEIGHT", weights.content),
        ("COLLABORATIVE_WEIGHT", weights.collaborative),
    ] {
        if !(0.0..=1.0).contains(&w) {
            bail!("{name} must be within [0, 1], got {w}");
        }
    }
    let sum = weights.content + weights.collaborative;
    if (sum - 1.0).abs() > 1e-6 {
        bail!("CONTENT_WEIGHT + COLLABORATIVE_WEIGHT must equal 1.0, got {sum}");
    }
    Ok(())
}
