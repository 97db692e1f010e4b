//! The assembled chat widget.
//!
//! Wires the panel controller, message thread, reply engine, and
//! scheduler to host input events, and persists state through the
//! pluggable store. Hosts construct a [`Widget`], feed it
//! [`InputEvent`]s, pump [`Widget::tick`], and render from
//! [`Widget::layout`].
//!
//! [`InputEvent`]: glide_platform::InputEvent
//! [`Widget::tick`]: widget::Widget::tick
//! [`Widget::layout`]: widget::Widget::layout

pub mod persist;
pub mod widget;

pub use persist::PersistedState;
pub use widget::Widget;
