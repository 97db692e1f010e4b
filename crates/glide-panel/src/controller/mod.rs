//! The PanelController coordinates mode, geometry, and pointer sessions.

mod layout;
mod operations;
mod pointer;
mod types;

pub use layout::{HitRegion, PanelLayout};
pub use types::*;
