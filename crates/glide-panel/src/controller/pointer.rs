//! Pointer session handling: drag, resize, and viewport changes.

use glide_common::{Point, Rect, Viewport};
use tracing::debug;

use crate::geometry::clamp_rect;
use crate::session::{DragSession, ResizeSession, Session};

use super::PanelController;

impl PanelController {
    /// Start a drag session from the header. Rejected while not `Open`
    /// or while another session is active.
    pub fn begin_drag(&mut self, pointer: Point) -> bool {
        if !self.mode.accepts_sessions() || self.session.is_some() {
            return false;
        }
        self.session = Some(Session::Drag(DragSession {
            pointer_start: pointer,
            origin_start: self.rect.origin(),
        }));
        debug!(x = pointer.x, y = pointer.y, "drag session started");
        true
    }

    /// Start a resize session from the bottom-right handle. Same gating
    /// as `begin_drag`; the two are mutually exclusive.
    pub fn begin_resize(&mut self, pointer: Point) -> bool {
        if !self.mode.accepts_sessions() || self.session.is_some() {
            return false;
        }
        self.session = Some(Session::Resize(ResizeSession {
            pointer_start: pointer,
            size_start: self.rect.size(),
        }));
        debug!(x = pointer.x, y = pointer.y, "resize session started");
        true
    }

    /// Feed a pointer move into the active session. Returns `false`
    /// when no session consumed it (plain hover).
    pub fn pointer_moved(&mut self, pointer: Point) -> bool {
        let Some(session) = self.session else {
            return false;
        };
        let target = match session {
            Session::Drag(drag) => {
                Rect::from_origin_size(drag.origin_at(pointer), self.rect.size())
            }
            Session::Resize(resize) => {
                let size = self.settings.bounds.clamp_size(resize.size_at(pointer));
                Rect::from_origin_size(self.rect.origin(), size)
            }
        };
        self.rect = clamp_rect(target, self.viewport, self.settings.bounds);
        true
    }

    /// End the active session unconditionally: pointer-up, window blur,
    /// and pointer-capture loss all land here. Returns whether a
    /// session was active.
    pub fn end_session(&mut self) -> bool {
        let ended = self.session.take().is_some();
        if ended {
            debug!(rect = ?self.rect, "pointer session ended");
        }
        ended
    }

    /// Apply a new viewport and re-clamp the rect. Idempotent for an
    /// unchanged viewport.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.rect = clamp_rect(self.rect, viewport, self.settings.bounds);
    }
}
