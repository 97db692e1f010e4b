pub mod commands;
pub mod controller;
pub mod geometry;
pub mod mode;
pub mod session;

pub use commands::PanelCommand;
pub use controller::{HitRegion, PanelController, PanelLayout, PanelSettings};
pub use geometry::{clamp_rect, SizeBounds};
pub use mode::PanelMode;
pub use session::Session;
