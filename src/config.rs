//! Client configuration.
//!
//! Everything has a default, so an empty TOML file (or no file at all) yields
//! a client for the default 320x180 canvas at the default address.

use std::{fs, path::Path, time::Duration};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::bounds::Bounds;
use crate::defend::DefendOptions;
use crate::error::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "http://10.60.2.11:3000";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasConfig {
    #[serde(default = "default_base_url")]
    pub base_url: Url,

    #[serde(default)]
    pub bounds: Bounds,

    #[serde(default)]
    pub defend: DefendConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefendConfig {
    pub delay_ms: u64,
    pub retries: u32,
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("default base url is valid")
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            bounds: Bounds::default(),
            defend: DefendConfig::default(),
        }
    }
}

impl Default for DefendConfig {
    fn default() -> Self {
        let options = DefendOptions::default();
        Self {
            delay_ms: options.delay.as_millis() as u64,
            retries: options.retries,
        }
    }
}

impl From<DefendConfig> for DefendOptions {
    fn from(config: DefendConfig) -> Self {
        Self {
            delay: Duration::from_millis(config.delay_ms),
            retries: config.retries,
        }
    }
}

impl CanvasConfig {
    pub fn with_base_url(base_url: Url) -> Self {
        Self {
            base_url,
            ..Self::default()
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_config_is_all_defaults() {
        let config = CanvasConfig::from_toml_str("").unwrap();
        assert_eq!(config, CanvasConfig::default());
        assert_eq!(config.base_url.as_str(), "http://10.60.2.11:3000/");
        assert_eq!(config.bounds, Bounds::default());
        assert_eq!(config.defend.delay_ms, 1000);
        assert_eq!(config.defend.retries, u32::MAX);
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config = CanvasConfig::from_toml_str(
            r#"
            base_url = "http://localhost:3000/api/"

            [bounds]
            max_x = 64
            max_y = 32

            [defend]
            delay_ms = 250
            "#,
        )
        .unwrap();
        assert_eq!(config.base_url.as_str(), "http://localhost:3000/api/");
        assert_eq!(config.bounds.min_x, 0);
        assert_eq!(config.bounds.max_x, 64);
        assert_eq!(config.bounds.max_y, 32);

        let options = DefendOptions::from(config.defend);
        assert_eq!(options.delay, Duration::from_millis(250));
        assert_eq!(options.retries, u32::MAX);
    }

    #[test]
    fn malformed_config_is_reported() {
        let err = CanvasConfig::from_toml_str("base_url = 12").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[bounds]\nmax_y = 90").unwrap();
        let config = CanvasConfig::load(file.path()).unwrap();
        assert_eq!(config.bounds.max_y, 90);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CanvasConfig::load(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
