//! Site configuration file handling.
//!
//! Settings are stored as JSON. Every field has a default, so a partial file
//! (or no file at all) is valid.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::routes::DEFAULT_WHATSAPP_NUMBER;

/// Shortest accepted carousel interval
pub const MIN_INTERVAL_MS: u64 = 500;

/// Storefront settings that can be saved/loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// International number used for wa.me links, digits only
    pub whatsapp_number: String,
    /// Home hero carousel interval
    pub hero_interval_ms: u64,
    /// Infrastructure components carousel interval
    pub components_interval_ms: u64,
    /// Lines scrolled before the header switches to its compact style
    pub scroll_threshold: u16,
    /// JSON catalog to use instead of the built-in demo stock
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            whatsapp_number: DEFAULT_WHATSAPP_NUMBER.to_string(),
            hero_interval_ms: 4500,
            components_interval_ms: 5000,
            scroll_threshold: 2,
            catalog_path: None,
        }
    }
}

impl SiteConfig {
    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize configuration to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write configuration to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read configuration from {:?}", path.as_ref()))?;

        let config: Self =
            serde_json::from_str(&content).context("Failed to parse configuration JSON")?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let number = self.whatsapp_number.trim();
        if number.is_empty() {
            anyhow::bail!("WhatsApp number must be specified");
        }
        if !number.chars().all(|c| c.is_ascii_digit()) {
            anyhow::bail!("WhatsApp number must contain digits only (international format, no +)");
        }

        if self.hero_interval_ms < MIN_INTERVAL_MS {
            anyhow::bail!("Hero interval must be at least {} ms", MIN_INTERVAL_MS);
        }
        if self.components_interval_ms < MIN_INTERVAL_MS {
            anyhow::bail!("Components interval must be at least {} ms", MIN_INTERVAL_MS);
        }

        if let Some(path) = &self.catalog_path {
            if path.as_os_str().is_empty() {
                anyhow::bail!("Catalog path cannot be empty");
            }
        }

        Ok(())
    }

    pub fn hero_interval(&self) -> Duration {
        Duration::from_millis(self.hero_interval_ms)
    }

    pub fn components_interval(&self) -> Duration {
        Duration::from_millis(self.components_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_is_valid() {
        let config = SiteConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.hero_interval(), Duration::from_millis(4500));
        assert_eq!(config.components_interval(), Duration::from_secs(5));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "whatsapp_number": "221770000000" }}"#).unwrap();

        let config = SiteConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.whatsapp_number, "221770000000");
        assert_eq!(config.hero_interval_ms, 4500);
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_rejects_formatted_number() {
        let config = SiteConfig {
            whatsapp_number: "+352 000 000".to_string(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("digits only"));
    }

    #[test]
    fn test_rejects_short_interval() {
        let config = SiteConfig {
            hero_interval_ms: 100,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_reload() {
        let file = NamedTempFile::new().unwrap();
        let config = SiteConfig {
            scroll_threshold: 5,
            catalog_path: Some(PathBuf::from("/srv/stock.json")),
            ..Default::default()
        };
        config.save_to_file(file.path()).unwrap();
        assert_eq!(SiteConfig::load_from_file(file.path()).unwrap(), config);
    }

    #[test]
    fn test_invalid_json_fails() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(SiteConfig::load_from_file(file.path()).is_err());
    }
}
