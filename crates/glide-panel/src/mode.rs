use serde::{Deserialize, Serialize};

/// Display mode of the panel. Exactly one is active at a time.
///
/// `Minimized` and `Maximized` are only reachable from `Open`; `Closed`
/// is reachable from everywhere and is the initial mode. The transition
/// rules live on the controller; this enum only answers mode queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PanelMode {
    Closed,
    Open,
    Minimized,
    Maximized,
}

impl PanelMode {
    /// The panel chrome is on screen (anything but `Closed`).
    pub fn is_visible(&self) -> bool {
        !matches!(self, PanelMode::Closed)
    }

    /// Drag and resize sessions may start only here.
    pub fn accepts_sessions(&self) -> bool {
        matches!(self, PanelMode::Open)
    }
}

impl Default for PanelMode {
    fn default() -> Self {
        PanelMode::Closed
    }
}
