//! Configuration validation.
//!
//! Validates all numeric ranges and enum-like string fields, collecting
//! every error into a single `ConfigError` so a user can fix the whole
//! file in one pass.

use glide_common::ConfigError;

use crate::schema::GlideConfig;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &GlideConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_panel(&mut errors, config);
    validate_chat(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

/// Validate panel geometry constraints.
fn validate_panel(errors: &mut Vec<String>, config: &GlideConfig) {
    let p = &config.panel;

    validate_range_f64(errors, "panel.default_width", p.default_width, 150.0, 1600.0);
    validate_range_f64(
        errors,
        "panel.default_height",
        p.default_height,
        150.0,
        1600.0,
    );
    validate_range_f64(errors, "panel.min_width", p.min_width, 150.0, 1600.0);
    validate_range_f64(errors, "panel.min_height", p.min_height, 150.0, 1600.0);
    validate_range_f64(errors, "panel.max_width", p.max_width, 150.0, 1600.0);
    validate_range_f64(errors, "panel.max_height", p.max_height, 150.0, 1600.0);

    if p.min_width > p.max_width {
        errors.push(format!(
            "panel.min_width = {} exceeds panel.max_width = {}",
            p.min_width, p.max_width
        ));
    }
    if p.min_height > p.max_height {
        errors.push(format!(
            "panel.min_height = {} exceeds panel.max_height = {}",
            p.min_height, p.max_height
        ));
    }

    validate_range_f64(errors, "panel.margin", p.margin, 0.0, 200.0);
    validate_range_f64(errors, "panel.header_height", p.header_height, 24.0, 200.0);
    validate_range_f64(
        errors,
        "panel.launcher_diameter",
        p.launcher_diameter,
        24.0,
        200.0,
    );
    validate_range_f64(errors, "panel.handle_size", p.handle_size, 4.0, 64.0);
}

/// Validate chat behavior constraints.
fn validate_chat(errors: &mut Vec<String>, config: &GlideConfig) {
    let c = &config.chat;

    if c.reply_delay_min_ms > c.reply_delay_max_ms {
        errors.push(format!(
            "chat.reply_delay_min_ms = {} exceeds chat.reply_delay_max_ms = {}",
            c.reply_delay_min_ms, c.reply_delay_max_ms
        ));
    }
    if c.reply_delay_max_ms > 60_000 {
        errors.push(format!(
            "chat.reply_delay_max_ms = {} is out of range [0, 60000]",
            c.reply_delay_max_ms
        ));
    }

    validate_range(errors, "chat.history_limit", c.history_limit, 1, 100);

    if c.profile != "assistant" && c.profile != "storefront" {
        errors.push(format!(
            "chat.profile = \"{}\" is not one of: assistant, storefront",
            c.profile
        ));
    }
}

/// Push an error if `value` is outside `[min, max]` (integer).
fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is outside `[min, max]` (float).
fn validate_range_f64(errors: &mut Vec<String>, name: &str, value: f64, min: f64, max: f64) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&GlideConfig::default()).is_ok());
    }

    #[test]
    fn rejects_out_of_range_panel_width() {
        let mut config = GlideConfig::default();
        config.panel.default_width = 5000.0;
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("panel.default_width"));
    }

    #[test]
    fn rejects_inverted_size_bounds() {
        let mut config = GlideConfig::default();
        config.panel.min_width = 900.0;
        config.panel.max_width = 400.0;
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("min_width"));
    }

    #[test]
    fn rejects_inverted_delay_range() {
        let mut config = GlideConfig::default();
        config.chat.reply_delay_min_ms = 5000;
        config.chat.reply_delay_max_ms = 1000;
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("reply_delay_min_ms"));
    }

    #[test]
    fn rejects_unknown_profile() {
        let mut config = GlideConfig::default();
        config.chat.profile = "kiosk".to_string();
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("chat.profile"));
    }

    #[test]
    fn collects_multiple_errors() {
        let mut config = GlideConfig::default();
        config.panel.margin = 999.0;
        config.chat.history_limit = 0;
        config.chat.profile = "bogus".to_string();

        let err = validate(&config).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("panel.margin"));
        assert!(msg.contains("chat.history_limit"));
        assert!(msg.contains("chat.profile"));
    }

    #[test]
    fn boundary_values_accepted() {
        let mut config = GlideConfig::default();
        config.panel.margin = 0.0;
        config.panel.handle_size = 64.0;
        config.chat.history_limit = 100;
        config.chat.reply_delay_min_ms = 0;
        config.chat.reply_delay_max_ms = 60_000;
        assert!(validate(&config).is_ok());
    }
}
