// src/config.rs
use std::str::FromStr;

use crate::utils::AppError;

/// Characters kept from an unterminated section before it is cut.
pub const DEFAULT_PREVIEW_LIMIT: usize = 200;

/// Score reported when the text carries no numeric evidence at all.
pub const DEFAULT_SCORE: f64 = 75.0;

/// Tunables for the extraction engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtractorConfig {
    pub preview_limit: usize,
    pub default_score: f64,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            preview_limit: DEFAULT_PREVIEW_LIMIT,
            default_score: DEFAULT_SCORE,
        }
    }
}

impl ExtractorConfig {
    /// Defaults overlaid with `PREVIEW_LIMIT` and `DEFAULT_SCORE` from the environment.
    pub fn from_env() -> Result<Self, AppError> {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var("PREVIEW_LIMIT") {
            config.preview_limit = parse_setting("PREVIEW_LIMIT", &raw)?;
            tracing::debug!("Using PREVIEW_LIMIT={} from environment", config.preview_limit);
        }
        if let Ok(raw) = std::env::var("DEFAULT_SCORE") {
            config.default_score = parse_setting("DEFAULT_SCORE", &raw)?;
            tracing::debug!("Using DEFAULT_SCORE={} from environment", config.default_score);
        }

        Ok(config)
    }

    pub fn with_preview_limit(mut self, preview_limit: usize) -> Self {
        self.preview_limit = preview_limit;
        self
    }
}

fn parse_setting<T>(key: &str, raw: &str) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| AppError::Config(format!("{} must be a number, got '{}': {}", key, raw, e)))
}
