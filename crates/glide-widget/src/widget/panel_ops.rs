//! Panel mode operations with event publication and persistence.

use glide_common::WidgetEvent;
use glide_panel::PanelMode;

use super::Widget;

impl Widget {
    /// Show the panel. No-op unless closed.
    pub fn open(&mut self) -> bool {
        if !self.panel.open() {
            return false;
        }
        self.events.publish(WidgetEvent::PanelOpened);
        self.save_mode();
        true
    }

    /// Hide the panel, discarding any pending reply. The rect is
    /// retained for the next open.
    pub fn close(&mut self) -> bool {
        if !self.panel.close() {
            return false;
        }
        if self.scheduler.is_waiting() {
            self.scheduler.cancel();
            self.events.publish(WidgetEvent::ReplyDiscarded);
        }
        self.events.publish(WidgetEvent::PanelClosed);
        self.save_mode();
        true
    }

    /// Open when closed, close otherwise.
    pub fn toggle(&mut self) -> bool {
        if self.panel.mode() == PanelMode::Closed {
            self.open()
        } else {
            self.close()
        }
    }

    /// Collapse to the header band. No-op unless open.
    pub fn minimize(&mut self) -> bool {
        if !self.panel.minimize() {
            return false;
        }
        self.events.publish(WidgetEvent::PanelMinimized);
        self.save_mode();
        true
    }

    /// Fill the viewport. No-op unless open.
    pub fn maximize(&mut self) -> bool {
        if !self.panel.maximize() {
            return false;
        }
        self.events.publish(WidgetEvent::PanelMaximized);
        self.save_mode();
        true
    }

    /// Return from minimized or maximized to the retained rect.
    pub fn restore(&mut self) -> bool {
        if !self.panel.restore() {
            return false;
        }
        self.events.publish(WidgetEvent::PanelRestored);
        self.save_mode();
        true
    }
}
