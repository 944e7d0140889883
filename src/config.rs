// Site Configuration
// Embedded defaults -> ./portfolio.toml -> PORTFOLIO_* environment variables

use crate::error::Result;
use crate::navigation::Variant;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Embedded default configuration (compiled into binary)
pub const DEFAULT_CONFIG: &str = include_str!("../config/default.toml");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Address the HTTP server listens on.
    pub bind: String,
    /// Profile JSON; the built-in profile is used when unset.
    #[serde(default)]
    pub profile: Option<PathBuf>,
    #[serde(default)]
    pub variant: Variant,
    /// Used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl SiteConfig {
    /// Load configuration from all sources.
    pub fn load() -> Result<SiteConfig> {
        let config = Config::builder()
            // 1. Embedded defaults (always available)
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            // 2. Local overrides (optional)
            .add_source(File::with_name("portfolio").required(false))
            // 3. Environment variables (highest priority)
            .add_source(Environment::with_prefix("PORTFOLIO"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Embedded defaults overlaid with a TOML snippet.
    pub fn from_toml(overrides: &str) -> Result<SiteConfig> {
        let config = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from_str(overrides, FileFormat::Toml))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_defaults() {
        let config = SiteConfig::from_toml("").unwrap();

        assert_eq!(config.bind, "0.0.0.0:3000");
        assert_eq!(config.variant, Variant::Researcher);
        assert_eq!(config.profile, None);
        assert!(config.log_filter.contains("portfolio_site=info"));
    }

    #[test]
    fn test_overrides_take_precedence() {
        let config = SiteConfig::from_toml(
            r#"
            bind = "127.0.0.1:8080"
            variant = "engineer"
            profile = "profiles/engineer.json"
            "#,
        )
        .unwrap();

        assert_eq!(config.bind, "127.0.0.1:8080");
        assert_eq!(config.variant, Variant::Engineer);
        assert_eq!(config.profile, Some(PathBuf::from("profiles/engineer.json")));
    }

    #[test]
    fn test_environment_overrides_embedded_defaults() {
        std::env::set_var("PORTFOLIO_BIND", "127.0.0.1:4000");
        let config = SiteConfig::load();
        std::env::remove_var("PORTFOLIO_BIND");

        let config = config.unwrap();
        assert_eq!(config.bind, "127.0.0.1:4000");
        assert_eq!(config.variant, Variant::Researcher);
    }

    #[test]
    fn test_unknown_variant_is_a_config_error() {
        let err = SiteConfig::from_toml(r#"variant = "designer""#).unwrap_err();
        assert!(matches!(err, crate::error::SiteError::Config(_)));
    }
}
