use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which flavor of the widget is running.
///
/// `Assistant` is the plain support assistant. `Storefront` adds the
/// commerce extensions: product cards on matching replies and starter
/// suggestion chips on the welcome message. Everything else (geometry,
/// thread rules, scheduling) is identical between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetProfile {
    Assistant,
    Storefront,
}

impl Default for WidgetProfile {
    fn default() -> Self {
        WidgetProfile::Assistant
    }
}

impl fmt::Display for WidgetProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WidgetProfile::Assistant => write!(f, "assistant"),
            WidgetProfile::Storefront => write!(f, "storefront"),
        }
    }
}

impl FromStr for WidgetProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "assistant" => Ok(WidgetProfile::Assistant),
            "storefront" => Ok(WidgetProfile::Storefront),
            other => Err(format!("unknown widget profile '{other}'")),
        }
    }
}
