//! TOML config file loading and creation.

use std::path::{Path, PathBuf};

use glide_common::ConfigError;
use tracing::{info, warn};

use crate::schema::GlideConfig;
use crate::validation;

/// Get the platform-specific default config file path.
///
/// On macOS: `~/Library/Application Support/glide/config.toml`
/// On Linux: `~/.config/glide/config.toml`
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join("glide").join("config.toml"))
}

/// Load config from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields.
/// After loading, the config is validated; if validation fails, a
/// warning is logged and the parsed config is returned as-is.
pub fn load_from_path(path: &Path) -> Result<GlideConfig, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: GlideConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// If the file does not exist, creates a default config file and
/// returns defaults.
pub fn load_default() -> Result<GlideConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::ParseError(msg)) if msg.contains("failed to read") => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(GlideConfig::default())
        }
        Err(e) => Err(e),
    }
}

/// Create a default TOML config file with documentation comments.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    std::fs::write(path, default_config_toml()).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    })?;

    info!("created default config at {}", path.display());
    Ok(())
}

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r#"# Glide Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[panel]
# default_width = 350.0      # 150-1600, panel size on first open
# default_height = 500.0     # 150-1600
# min_width = 300.0
# min_height = 400.0
# max_width = 800.0
# max_height = 900.0
# margin = 24.0              # 0-200, gap to the viewport edge
# header_height = 60.0       # 24-200, also the minimized height
# launcher_diameter = 56.0   # 24-200, round launcher button
# handle_size = 16.0         # 4-64, resize-handle hit square
# persist_geometry = true

[chat]
# reply_delay_min_ms = 1000  # simulated typing delay lower bound
# reply_delay_max_ms = 3000  # upper bound, max 60000
# history_limit = 10         # 1-100, recent inputs remembered
# profile = "assistant"      # assistant, storefront
# locale = "en"              # en, de, zh, fr

[storage]
# enabled = true
# path = "/custom/state.json"

[logging]
# filter = "glide=info"      # tracing filter directive
"#
    .to_string()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_from_nonexistent_returns_parse_error() {
        let result = load_from_path(Path::new("/tmp/nonexistent_glide_config.toml"));
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ConfigError::ParseError(_)));
    }

    #[test]
    fn load_valid_partial_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[panel]
default_width = 400.0

[chat]
locale = "de"
"#,
        )
        .unwrap();

        let config = load_from_path(&path).unwrap();
        assert!((config.panel.default_width - 400.0).abs() < f64::EPSILON);
        assert_eq!(config.chat.locale, "de");
        // Defaults preserved
        assert_eq!(config.chat.profile, "assistant");
        assert!(config.storage.enabled);
    }

    #[test]
    fn load_invalid_toml_returns_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "this is not valid toml {{{").unwrap();

        let result = load_from_path(&path);
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ConfigError::ParseError(_)));
    }

    #[test]
    fn load_with_invalid_values_returns_parsed_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[chat]\nhistory_limit = 500\n").unwrap();

        // Invalid values are only a warning at this layer
        let config = load_from_path(&path).unwrap();
        assert_eq!(config.chat.history_limit, 500);
    }

    #[test]
    fn create_and_load_default_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("glide").join("config.toml");

        create_default_config(&path).unwrap();
        assert!(path.exists());

        let config = load_from_path(&path).unwrap();
        assert_eq!(config.chat.profile, "assistant");
    }

    #[test]
    fn default_config_toml_is_valid() {
        let content = default_config_toml();
        let config: GlideConfig = toml::from_str(&content).unwrap();
        assert_eq!(config.chat.locale, "en");
        assert!((config.panel.default_width - 350.0).abs() < f64::EPSILON);
    }

    #[test]
    fn default_config_path_is_reasonable() {
        // May not resolve in every CI environment
        if let Ok(path) = default_config_path() {
            let path_str = path.to_string_lossy();
            assert!(path_str.contains("glide"));
            assert!(path_str.ends_with("config.toml"));
        }
    }
}
