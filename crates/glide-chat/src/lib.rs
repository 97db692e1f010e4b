//! Chat engine for Glide.
//!
//! Provides the message model, the append-only thread store, the
//! scripted reply engine with its canned-text tables, and the
//! cancellable reply scheduler. Everything here is pure, synchronous
//! state; the widget layer wires it to input events and persistence.

pub mod locale;
pub mod message;
pub mod profile;
pub mod scheduler;
pub mod script;
pub mod thread;

pub use locale::Locale;
pub use message::{Author, Message, ProductRef, Rating};
pub use profile::WidgetProfile;
pub use scheduler::ReplyScheduler;
pub use script::{BotReply, ReplyRule, ScriptEngine};
pub use thread::MessageThread;
