//! Host input event model.
//!
//! The embedding host translates raw windowing events into these
//! normalized events before handing them to the widget. Everything here
//! is serializable so hosts can replay or forward events across a
//! process boundary.

use glide_common::{Point, Viewport};
use serde::{Deserialize, Serialize};

/// Keys the widget reacts to directly.
///
/// `Enter` only reaches the widget when the composer is empty; a
/// non-empty composer is translated by the host into
/// [`InputEvent::Submit`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Enter,
    Escape,
}

/// High-level UI intents from chrome the host renders itself
/// (header buttons, suggestion chips, rating controls).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiIntent {
    // -- Panel --
    OpenPanel,
    ClosePanel,
    TogglePanel,
    Minimize,
    Maximize,
    Restore,

    // -- Thread --
    ClearThread,
    Rate { message_id: String, helpful: bool },
    Suggestion(String),
}

/// A normalized input event delivered to the widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    // -- Pointer --
    PointerDown(Point),
    PointerMove(Point),
    PointerUp,

    // -- Window --
    WindowBlur,
    ViewportResized(Viewport),

    // -- Keyboard / composer --
    KeyDown(Key),
    Submit(String),

    // -- Chrome --
    Intent(UiIntent),
}
