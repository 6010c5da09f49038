// src/config.rs
use std::{env, time::Duration};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetConfig {
    debounce: Duration,
    title_field: String,
    title_locale: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_debounce_ms() -> u64 {
    500
}

fn default_title_field() -> String {
    "title".into()
}

fn default_title_locale() -> String {
    "en-US".into()
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(default_debounce_ms()),
            title_field: default_title_field(),
            title_locale: default_title_locale(),
        }
    }
}

impl WidgetConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        let debounce_ms = match env::var("SLUG_SYNC_DEBOUNCE_MS") {
            Ok(raw) => parse_debounce_ms(&raw)?,
            Err(_) => default_debounce_ms(),
        };

        let title_field = env::var("SLUG_SYNC_TITLE_FIELD")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(default_title_field);

        let title_locale = env::var("SLUG_SYNC_TITLE_LOCALE")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(default_title_locale);

        Ok(Self {
            debounce: Duration::from_millis(debounce_ms),
            title_field,
            title_locale,
        })
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn with_title_field(mut self, field: impl Into<String>, locale: impl Into<String>) -> Self {
        self.title_field = field.into();
        self.title_locale = locale.into();
        self
    }

    /// Quiet period after the last title change before the slug is recomputed.
    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    pub fn title_field(&self) -> &str {
        &self.title_field
    }

    pub fn title_locale(&self) -> &str {
        &self.title_locale
    }
}

fn parse_debounce_ms(raw: &str) -> Result<u64, ConfigError> {
    let ms = raw.trim().parse::<u64>().map_err(|_| {
        ConfigError::Invalid(format!("SLUG_SYNC_DEBOUNCE_MS must be an integer, got {raw:?}"))
    })?;
    if ms == 0 {
        return Err(ConfigError::Invalid(
            "SLUG_SYNC_DEBOUNCE_MS must be greater than zero".into(),
        ));
    }
    Ok(ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_title_field_contract() {
        let config = WidgetConfig::default();
        assert_eq!(config.debounce(), Duration::from_millis(500));
        assert_eq!(config.title_field(), "title");
        assert_eq!(config.title_locale(), "en-US");
    }

    #[test]
    fn debounce_must_be_positive_integer() {
        assert_eq!(parse_debounce_ms(" 250 ").unwrap(), 250);
        assert!(matches!(parse_debounce_ms("0"), Err(ConfigError::Invalid(_))));
        assert!(matches!(parse_debounce_ms("soon"), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn builders_override_defaults() {
        let config = WidgetConfig::default()
            .with_debounce(Duration::from_millis(50))
            .with_title_field("name", "de-DE");
        assert_eq!(config.debounce(), Duration::from_millis(50));
        assert_eq!(config.title_field(), "name");
        assert_eq!(config.title_locale(), "de-DE");
    }
}
