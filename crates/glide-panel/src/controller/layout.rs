//! Render geometry and hit testing derived from mode + rect.

use glide_common::{Point, Rect};

use crate::mode::PanelMode;

use super::PanelController;

/// What the host should draw this frame. At most one of `panel` /
/// `launcher` is set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelLayout {
    pub mode: PanelMode,
    /// Effective panel rect; `None` while closed.
    pub panel: Option<Rect>,
    /// Launcher button rect; `Some` only while closed.
    pub launcher: Option<Rect>,
}

/// Which interactive region a point falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitRegion {
    /// The round launcher button (closed state only).
    Launcher,
    /// The title band; drags start here.
    Header,
    /// The bottom-right resize handle (open state only).
    ResizeHandle,
    /// Panel interior below the header.
    Body,
    Outside,
}

impl PanelController {
    /// Effective geometry for the current mode. Minimized collapses to
    /// the header band at the retained origin; Maximized fills the
    /// viewport. Neither mutates the stored rect.
    pub fn layout(&self) -> PanelLayout {
        let panel = match self.mode {
            PanelMode::Closed => None,
            PanelMode::Open => Some(self.rect),
            PanelMode::Minimized => Some(Rect {
                height: self.settings.header_height,
                ..self.rect
            }),
            PanelMode::Maximized => Some(self.viewport.rect()),
        };
        PanelLayout {
            mode: self.mode,
            panel,
            launcher: (self.mode == PanelMode::Closed).then(|| self.launcher_rect()),
        }
    }

    /// Bounding square of the round launcher button, anchored to the
    /// bottom-right viewport corner with the configured margin.
    pub fn launcher_rect(&self) -> Rect {
        let d = self.settings.launcher_diameter;
        Rect {
            x: self.viewport.width - self.settings.margin - d,
            y: self.viewport.height - self.settings.margin - d,
            width: d,
            height: d,
        }
    }

    /// Map a point to the interactive region under it.
    pub fn hit_test(&self, point: Point) -> HitRegion {
        match self.mode {
            PanelMode::Closed => {
                // Round button: test against the inscribed circle, not
                // the bounding square.
                let launcher = self.launcher_rect();
                let r = launcher.width / 2.0;
                let cx = launcher.x + r;
                let cy = launcher.y + r;
                let (dx, dy) = (point.x - cx, point.y - cy);
                if dx * dx + dy * dy <= r * r {
                    HitRegion::Launcher
                } else {
                    HitRegion::Outside
                }
            }
            PanelMode::Minimized => {
                // Everything visible is the header band.
                let panel = Rect {
                    height: self.settings.header_height,
                    ..self.rect
                };
                if panel.contains(point) {
                    HitRegion::Header
                } else {
                    HitRegion::Outside
                }
            }
            PanelMode::Open | PanelMode::Maximized => {
                let panel = if self.mode == PanelMode::Open {
                    self.rect
                } else {
                    self.viewport.rect()
                };
                if !panel.contains(point) {
                    return HitRegion::Outside;
                }
                if self.mode == PanelMode::Open {
                    let handle = self.settings.handle_size;
                    if point.x >= panel.right() - handle && point.y >= panel.bottom() - handle {
                        return HitRegion::ResizeHandle;
                    }
                }
                if point.y < panel.y + self.settings.header_height {
                    HitRegion::Header
                } else {
                    HitRegion::Body
                }
            }
        }
    }
}
