//! Formatter configuration from the environment (and `.env`, loaded by the binary).

use std::env;

use crate::text::DEFAULT_WRAP_WIDTH;

/// Environment variable holding the plain-text wrap width.
pub const WRAP_WIDTH_VAR: &str = "CHAT_MARKUP_WRAP_WIDTH";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub wrap_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wrap_width: DEFAULT_WRAP_WIDTH,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got '{value}'")]
    InvalidWrapWidth { var: &'static str, value: String },
}

/// Load configuration from the process environment.
pub fn load() -> Result<Config, ConfigError> {
    load_with(|key| env::var(key).ok())
}

/// Load configuration using `lookup` to read variables. Unset or blank
/// variables fall back to defaults.
pub fn load_with<F>(lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = Config::default();
    if let Some(raw) = lookup(WRAP_WIDTH_VAR).filter(|s| !s.trim().is_empty()) {
        config.wrap_width = raw
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|w| *w > 0)
            .ok_or(ConfigError::InvalidWrapWidth {
                var: WRAP_WIDTH_VAR,
                value: raw.clone(),
            })?;
    }
    log::debug!("wrap width: {}", config.wrap_width);
    Ok(config)
}
