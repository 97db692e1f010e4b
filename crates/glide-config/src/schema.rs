//! Configuration schema types for Glide.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with defaults matching the shipped widget.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Glide.
///
/// All options have sensible defaults matching current behavior.
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GlideConfig {
    pub panel: PanelConfig,
    pub chat: ChatConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// Panel geometry and chrome settings, in viewport pixels.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Panel width on first open (valid range: 150-1600).
    pub default_width: f64,
    /// Panel height on first open (valid range: 150-1600).
    pub default_height: f64,
    pub min_width: f64,
    pub min_height: f64,
    pub max_width: f64,
    pub max_height: f64,
    /// Gap between the viewport edge and the launcher / first-open
    /// panel (valid range: 0-200).
    pub margin: f64,
    /// Height of the title band; also the minimized render height
    /// (valid range: 24-200).
    pub header_height: f64,
    /// Diameter of the round launcher button (valid range: 24-200).
    pub launcher_diameter: f64,
    /// Side length of the resize-handle hit square (valid range: 4-64).
    pub handle_size: f64,
    /// Remember position and size across reloads.
    pub persist_geometry: bool,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            default_width: 350.0,
            default_height: 500.0,
            min_width: 300.0,
            min_height: 400.0,
            max_width: 800.0,
            max_height: 900.0,
            margin: 24.0,
            header_height: 60.0,
            launcher_diameter: 56.0,
            handle_size: 16.0,
            persist_geometry: true,
        }
    }
}

/// Chat engine settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Lower bound of the simulated typing delay in milliseconds.
    pub reply_delay_min_ms: u64,
    /// Upper bound of the simulated typing delay in milliseconds
    /// (valid range: up to 60000, must not be below the lower bound).
    pub reply_delay_max_ms: u64,
    /// How many recent user inputs to retain (valid range: 1-100).
    pub history_limit: u32,
    /// Widget flavor: `assistant` or `storefront`.
    pub profile: String,
    /// Locale code for welcome and fallback text (en, de, zh, fr);
    /// unknown codes fall back to English.
    pub locale: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            reply_delay_min_ms: 1000,
            reply_delay_max_ms: 3000,
            history_limit: 10,
            profile: "assistant".into(),
            locale: "en".into(),
        }
    }
}

/// State persistence settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Persist widget state across runs. When disabled the widget runs
    /// fully in memory.
    pub enabled: bool,
    /// Override for the state file location; defaults to
    /// `state.json` under the platform data directory.
    pub path: Option<PathBuf>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: None,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Tracing filter directive, e.g. `glide=debug`.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "glide=info".into(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
