//! Configuration loading and validation for vaktijar.
//!
//! Settings live in a small TOML file, `vaktijar.toml`, under the user's
//! config directory (`$XDG_CONFIG_HOME/vaktijar/vaktijar.toml` on Linux).
//! Every field is optional and falls back to a default, so a missing
//! config file is perfectly fine; a malformed one is a hard error.
//!
//! ```toml
//! location = "77"            # location id (77 = Sarajevo)
//! cache_dir = "/tmp/vaktija" # overrides the default cache directory
//! always_update = false      # refetch on every run, still writing cache
//! no_cache = false           # refetch on every run, never touch the cache
//! ```
//!
//! CLI flags override everything here.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::constants::{
    DEFAULT_ALWAYS_UPDATE, DEFAULT_LOCATION, DEFAULT_NO_CACHE, MAX_LOCATION_ID,
};

/// User configuration, deserialized from `vaktijar.toml`.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    /// Location id for the API, as a decimal string.
    pub location: Option<String>,
    /// Directory holding the single cache file.
    pub cache_dir: Option<PathBuf>,
    /// Refetch on every run (the cache file is still refreshed).
    pub always_update: Option<bool>,
    /// Refetch on every run and never read or write the cache file.
    pub no_cache: Option<bool>,
}

impl Config {
    /// Path of the config file under the user config directory.
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join("vaktijar").join("vaktijar.toml"))
    }

    /// Load the configuration, falling back to defaults when no config
    /// file exists.
    pub fn load() -> Result<Config> {
        let path = Self::get_config_path()?;
        if path.exists() {
            Self::load_from_path(&path)
        } else {
            Ok(Config::default())
        }
    }

    /// Load and validate a config file from an explicit path.
    pub fn load_from_path(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file at {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if let Some(location) = &self.location {
            validate_location(location)?;
        }
        Ok(())
    }

    /// Effective location id.
    pub fn location(&self) -> &str {
        self.location.as_deref().unwrap_or(DEFAULT_LOCATION)
    }

    /// Effective cache directory: the configured one, or
    /// `<user cache dir>/vaktijar`.
    pub fn cache_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.cache_dir {
            return Ok(dir.clone());
        }
        let cache_dir = dirs::cache_dir().context("Could not determine cache directory")?;
        Ok(cache_dir.join("vaktijar"))
    }

    pub fn always_update(&self) -> bool {
        self.always_update.unwrap_or(DEFAULT_ALWAYS_UPDATE)
    }

    pub fn no_cache(&self) -> bool {
        self.no_cache.unwrap_or(DEFAULT_NO_CACHE)
    }
}

/// Check that a location id is a decimal number the API actually serves.
pub fn validate_location(location: &str) -> Result<()> {
    let id: usize = location.parse().with_context(|| {
        format!("Invalid location id {location:?}: expected a decimal number")
    })?;

    if id > MAX_LOCATION_ID {
        anyhow::bail!(
            "Invalid location id {location:?}: the API serves ids 0 through {MAX_LOCATION_ID}"
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("vaktijar.toml");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_load_full_config() {
        let (_dir, path) = write_config(
            r#"
location = "82"
cache_dir = "/tmp/vaktija-test"
always_update = true
no_cache = false
"#,
        );

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.location(), "82");
        assert_eq!(config.cache_dir().unwrap(), PathBuf::from("/tmp/vaktija-test"));
        assert!(config.always_update());
        assert!(!config.no_cache());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let (_dir, path) = write_config("");
        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.location(), DEFAULT_LOCATION);
        assert!(!config.always_update());
        assert!(!config.no_cache());
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let (_dir, path) = write_config("location = [not toml");
        assert!(Config::load_from_path(&path).is_err());
    }

    #[test]
    fn test_non_numeric_location_rejected() {
        let (_dir, path) = write_config(r#"location = "sarajevo""#);
        assert!(Config::load_from_path(&path).is_err());
    }

    #[test]
    fn test_out_of_range_location_rejected() {
        let (_dir, path) = write_config(r#"location = "200""#);
        assert!(Config::load_from_path(&path).is_err());
    }

    #[test]
    fn test_validate_location_bounds() {
        assert!(validate_location("0").is_ok());
        assert!(validate_location("77").is_ok());
        assert!(validate_location("117").is_ok());
        assert!(validate_location("118").is_err());
        assert!(validate_location("-1").is_err());
    }
}
