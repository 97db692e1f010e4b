//! Core types and constructors for PanelController.

use glide_common::{Rect, Size, Viewport};

use crate::geometry::{clamp_rect, SizeBounds};
use crate::mode::PanelMode;
use crate::session::Session;

/// Chrome measurements the controller needs for default placement and
/// hit testing. Values come from config; the defaults match the shipped
/// widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelSettings {
    /// Panel size used for the first open.
    pub default_size: Size,
    /// Width/height band enforced on every mutation.
    pub bounds: SizeBounds,
    /// Gap between the viewport edge and the launcher / first-open panel.
    pub margin: f64,
    /// Height of the title band; also the minimized render height.
    pub header_height: f64,
    /// Diameter of the round launcher button shown while closed.
    pub launcher_diameter: f64,
    /// Side length of the square resize handle in the bottom-right corner.
    pub handle_size: f64,
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            default_size: Size::new(350.0, 500.0),
            bounds: SizeBounds::default(),
            margin: 24.0,
            header_height: 60.0,
            launcher_diameter: 56.0,
            handle_size: 16.0,
        }
    }
}

/// Owns the panel's interaction state: mode, the authoritative rect,
/// and the single optional pointer session.
///
/// `rect` always holds the open-panel geometry. Maximized and minimized
/// rendering are derived views over it (`layout()`), so leaving those
/// modes needs no undo bookkeeping.
pub struct PanelController {
    pub(super) mode: PanelMode,
    pub(super) rect: Rect,
    pub(super) session: Option<Session>,
    pub(super) viewport: Viewport,
    pub(super) settings: PanelSettings,
}

impl PanelController {
    /// Create a controller with default settings. The initial rect is
    /// anchored to the bottom-right of the viewport with the configured
    /// margin, then clamped.
    pub fn new(viewport: Viewport) -> Self {
        Self::with_settings(viewport, PanelSettings::default())
    }

    /// Create with custom settings (from config).
    pub fn with_settings(viewport: Viewport, settings: PanelSettings) -> Self {
        let size = settings.default_size;
        let anchored = Rect {
            x: viewport.width - size.width - settings.margin,
            y: viewport.height - size.height - settings.margin,
            width: size.width,
            height: size.height,
        };
        Self {
            mode: PanelMode::Closed,
            rect: clamp_rect(anchored, viewport, settings.bounds),
            session: None,
            viewport,
            settings,
        }
    }

    /// Restore a controller from persisted geometry. The rect is
    /// re-clamped against the current viewport, so stale coordinates
    /// from a larger window self-heal.
    pub fn with_restored(viewport: Viewport, settings: PanelSettings, rect: Rect) -> Self {
        let mut ctrl = Self::with_settings(viewport, settings);
        ctrl.rect = clamp_rect(rect, viewport, settings.bounds);
        ctrl
    }

    // -- Accessors --

    pub fn mode(&self) -> PanelMode {
        self.mode
    }

    /// The authoritative open-panel rect (also the rect that will be
    /// restored when leaving Maximized/Minimized).
    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn settings(&self) -> &PanelSettings {
        &self.settings
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.session, Some(Session::Drag(_)))
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self.session, Some(Session::Resize(_)))
    }
}
