use serde::{Deserialize, Serialize};
use std::fmt;

/// Generate a fresh uuid-v4 string id.
///
/// Used for message ids and widget instance ids. Ordering is never derived
/// from ids; the thread's insertion order is authoritative.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Identity of one widget instance.
///
/// Multiple widgets may coexist on a page; each owns its geometry and
/// thread state exclusively, keyed by this id in logs and events.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WidgetId(String);

impl WidgetId {
    pub fn new() -> Self {
        Self(new_id())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for WidgetId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
