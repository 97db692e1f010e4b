//! Glide configuration system.
//!
//! TOML-based configuration for the widget engine. All sections use
//! `serde(default)` so partial configs work out of the box; a missing
//! file is replaced by a commented default on first run.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! let config = glide_config::load_config().expect("failed to load config");
//! println!("profile: {}", config.chat.profile);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod toml_writer;
pub mod validation;

pub use schema::{
    ChatConfig, GlideConfig, LoggingConfig, PanelConfig, StorageConfig, CONFIG_SCHEMA_VERSION,
};
pub use toml_writer::{save_config, save_config_to_path};

use std::path::Path;

use glide_common::ConfigError;

/// Load config from the platform default path and validate it.
///
/// Loads `config.toml` from the OS config directory, creates a commented
/// default if none exists, and validates the result.
pub fn load_config() -> Result<GlideConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path and validate it.
///
/// Unlike [`load_config`], a missing file is an error here: the caller
/// asked for this file specifically.
pub fn load_config_from(path: &Path) -> Result<GlideConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_config_from_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[chat]\nprofile = \"storefront\"\n").unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.chat.profile, "storefront");
        // Defaults preserved
        assert_eq!(config.chat.locale, "en");
    }

    #[test]
    fn load_config_from_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such.toml");
        assert!(load_config_from(&path).is_err());
    }

    #[test]
    fn load_config_from_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[chat]\nhistory_limit = 0\n").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }
}
