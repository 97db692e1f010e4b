//! Pure rect clamping against the viewport.
//!
//! Every rect mutation in the panel controller flows through
//! [`clamp_rect`] before it is applied: at mount, on viewport resize,
//! after each drag or resize step, and when a transition lands back in
//! the open mode. Producers never enforce the viewport invariant
//! themselves; the guard does.

use glide_common::{Rect, Size, Viewport};

/// Allowed width/height band for the open panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeBounds {
    pub min: Size,
    pub max: Size,
}

impl SizeBounds {
    pub fn new(min: Size, max: Size) -> Self {
        Self { min, max }
    }

    /// Clamp a size into the band.
    pub fn clamp_size(&self, size: Size) -> Size {
        Size {
            width: size.width.clamp(self.min.width, self.max.width),
            height: size.height.clamp(self.min.height, self.max.height),
        }
    }
}

impl Default for SizeBounds {
    fn default() -> Self {
        Self {
            min: Size::new(300.0, 400.0),
            max: Size::new(800.0, 900.0),
        }
    }
}

/// Clamp a rect so it stays within the viewport and the size band.
///
/// Size is corrected first, then the origin is clamped into
/// `[0, viewport - size]`. The `.max(0.0)` comes second so that a
/// viewport narrower than the panel pins the origin to `0` and lets the
/// panel overflow to the right instead of inverting the range.
/// Idempotent: clamping an already-clamped rect returns it unchanged.
pub fn clamp_rect(rect: Rect, viewport: Viewport, bounds: SizeBounds) -> Rect {
    let size = bounds.clamp_size(rect.size());
    Rect {
        x: rect.x.min(viewport.width - size.width).max(0.0),
        y: rect.y.min(viewport.height - size.height).max(0.0),
        width: size.width.max(0.0),
        height: size.height.max(0.0),
    }
}
