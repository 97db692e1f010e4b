//! Platform-specific filesystem paths.

use std::fs;
use std::path::PathBuf;

use glide_common::StoreError;

const APP_NAME: &str = "glide";

/// Returns the platform-specific configuration directory for Glide.
///
/// - macOS: `~/Library/Application Support/glide`
/// - Linux: `$XDG_CONFIG_HOME/glide` (defaults to `~/.config/glide`)
/// - Windows: `%APPDATA%\glide`
pub fn config_dir() -> Result<PathBuf, StoreError> {
    Ok(dirs::config_dir()
        .ok_or_else(|| StoreError::PathError("could not determine config directory".into()))?
        .join(APP_NAME))
}

/// Returns the platform-specific data directory for Glide.
///
/// - macOS: `~/Library/Application Support/glide`
/// - Linux: `$XDG_DATA_HOME/glide` (defaults to `~/.local/share/glide`)
/// - Windows: `%APPDATA%\glide`
pub fn data_dir() -> Result<PathBuf, StoreError> {
    Ok(dirs::data_dir()
        .ok_or_else(|| StoreError::PathError("could not determine data directory".into()))?
        .join(APP_NAME))
}

/// Returns the path to the widget state file.
///
/// Located at `data_dir()/state.json`.
pub fn state_file() -> Result<PathBuf, StoreError> {
    Ok(data_dir()?.join("state.json"))
}

/// Creates all Glide directories if they do not already exist.
///
/// Creates: config_dir and data_dir.
pub fn ensure_dirs() -> Result<(), StoreError> {
    fs::create_dir_all(config_dir()?).map_err(|e| StoreError::PathError(e.to_string()))?;
    fs::create_dir_all(data_dir()?).map_err(|e| StoreError::PathError(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_dir_ends_with_glide() {
        let path = config_dir().unwrap();
        assert!(
            path.ends_with("glide"),
            "config_dir should end with 'glide', got: {path:?}"
        );
    }

    #[test]
    fn data_dir_ends_with_glide() {
        let path = data_dir().unwrap();
        assert!(
            path.ends_with("glide"),
            "data_dir should end with 'glide', got: {path:?}"
        );
    }

    #[test]
    fn state_file_has_correct_name() {
        let path = state_file().unwrap();
        assert_eq!(path.file_name().unwrap().to_str().unwrap(), "state.json");
        assert!(
            path.parent().unwrap().ends_with("glide"),
            "state_file parent should end with 'glide', got: {path:?}"
        );
    }
}
