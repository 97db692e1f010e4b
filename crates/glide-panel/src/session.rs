//! Ephemeral pointer-session state for drag and resize.
//!
//! A session exists only while a pointer button is held on the header
//! or the resize handle. It is destroyed on pointer-up, window blur,
//! pointer-capture loss, and every mode transition. Never persisted.

use glide_common::{Point, Size};

// =============================================================================
// TYPES
// =============================================================================

/// Active drag state: where the pointer and the panel origin were when
/// the button went down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub pointer_start: Point,
    pub origin_start: Point,
}

/// Active resize state: where the pointer and the panel size were when
/// the button went down on the bottom-right handle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeSession {
    pub pointer_start: Point,
    pub size_start: Size,
}

/// At most one pointer session is active at a time; the controller
/// holds an `Option<Session>`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Session {
    Drag(DragSession),
    Resize(ResizeSession),
}

// =============================================================================
// PROJECTIONS
// =============================================================================

impl DragSession {
    /// Panel origin implied by the current pointer position.
    /// Not yet clamped; the geometry guard runs afterwards.
    pub fn origin_at(&self, pointer: Point) -> Point {
        Point {
            x: self.origin_start.x + (pointer.x - self.pointer_start.x),
            y: self.origin_start.y + (pointer.y - self.pointer_start.y),
        }
    }
}

impl ResizeSession {
    /// Panel size implied by the current pointer position. The panel
    /// grows toward the bottom-right; the origin never moves.
    pub fn size_at(&self, pointer: Point) -> Size {
        Size {
            width: self.size_start.width + (pointer.x - self.pointer_start.x),
            height: self.size_start.height + (pointer.y - self.pointer_start.y),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
