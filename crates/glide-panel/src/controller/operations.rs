//! Mode transitions on the PanelController.
//!
//! All transitions report success through a `bool`; invalid ones are
//! no-ops, never errors. Every transition destroys an active pointer
//! session before the mode changes.

use tracing::debug;

use crate::commands::PanelCommand;
use crate::geometry::clamp_rect;
use crate::mode::PanelMode;

use super::PanelController;

impl PanelController {
    /// Closed -> Open. Re-clamps the retained rect on entry so a
    /// viewport that shrank while the panel was closed cannot leave it
    /// off screen.
    pub fn open(&mut self) -> bool {
        if self.mode != PanelMode::Closed {
            return false;
        }
        self.session = None;
        self.rect = clamp_rect(self.rect, self.viewport, self.settings.bounds);
        self.mode = PanelMode::Open;
        debug!(rect = ?self.rect, "panel opened");
        true
    }

    /// Any visible mode -> Closed. The rect is retained for the next
    /// open.
    pub fn close(&mut self) -> bool {
        if self.mode == PanelMode::Closed {
            return false;
        }
        self.session = None;
        self.mode = PanelMode::Closed;
        debug!("panel closed");
        true
    }

    /// Open the panel if closed, close it otherwise.
    pub fn toggle(&mut self) -> bool {
        if self.mode == PanelMode::Closed {
            self.open()
        } else {
            self.close()
        }
    }

    /// Open -> Minimized. The rect is untouched; rendering collapses to
    /// the header band via `layout()`.
    pub fn minimize(&mut self) -> bool {
        if self.mode != PanelMode::Open {
            return false;
        }
        self.session = None;
        self.mode = PanelMode::Minimized;
        true
    }

    /// Open -> Maximized. The rect keeps the pre-maximize geometry;
    /// `layout()` reports the full viewport while this mode is active.
    pub fn maximize(&mut self) -> bool {
        if self.mode != PanelMode::Open {
            return false;
        }
        self.session = None;
        self.mode = PanelMode::Maximized;
        true
    }

    /// Minimized|Maximized -> Open. The retained rect is reinstated and
    /// re-clamped.
    pub fn restore(&mut self) -> bool {
        if !matches!(self.mode, PanelMode::Minimized | PanelMode::Maximized) {
            return false;
        }
        self.session = None;
        self.rect = clamp_rect(self.rect, self.viewport, self.settings.bounds);
        self.mode = PanelMode::Open;
        true
    }

    /// Dispatch a command to the matching transition.
    pub fn execute(&mut self, command: PanelCommand) -> bool {
        match command {
            PanelCommand::Open => self.open(),
            PanelCommand::Close => self.close(),
            PanelCommand::Toggle => self.toggle(),
            PanelCommand::Minimize => self.minimize(),
            PanelCommand::Maximize => self.maximize(),
            PanelCommand::Restore => self.restore(),
        }
    }
}
