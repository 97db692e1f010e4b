//! TOML config file saving.

use std::path::Path;

use glide_common::ConfigError;
use tracing::{info, warn};

use crate::schema::GlideConfig;
use crate::toml_loader::default_config_path;

/// Save config to the platform-specific default path.
pub fn save_config(config: &GlideConfig) -> Result<(), ConfigError> {
    let path = default_config_path()?;
    save_config_to_path(config, &path)
}

/// Save config to a specific TOML file path.
///
/// Writes to a temporary file first and renames it into place so a
/// crash mid-write cannot leave a truncated config behind. Falls back
/// to a direct write when the rename fails (e.g. across filesystems).
pub fn save_config_to_path(config: &GlideConfig, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(config)
        .map_err(|e| ConfigError::ParseError(format!("failed to serialize config: {e}")))?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    let tmp_path = path.with_extension("toml.tmp");
    match std::fs::write(&tmp_path, &content) {
        Ok(()) => {
            if let Err(e) = std::fs::rename(&tmp_path, path) {
                warn!("atomic rename failed ({e}), falling back to direct write");
                let _ = std::fs::remove_file(&tmp_path);
                std::fs::write(path, &content).map_err(|e| {
                    ConfigError::ParseError(format!(
                        "failed to write config to {}: {e}",
                        path.display()
                    ))
                })?;
            }
        }
        Err(e) => {
            warn!("temp file write failed ({e}), falling back to direct write");
            std::fs::write(path, &content).map_err(|e| {
                ConfigError::ParseError(format!(
                    "failed to write config to {}: {e}",
                    path.display()
                ))
            })?;
        }
    }

    info!("saved config to {}", path.display());
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
