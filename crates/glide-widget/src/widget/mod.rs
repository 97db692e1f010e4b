//! The Widget coordinates the panel controller, message thread, reply
//! engine, scheduler, persistence, and the host-facing event bus.

mod chat_ops;
mod core;
mod dispatch;
mod panel_ops;

pub use core::Widget;

#[cfg(test)]
mod tests;
