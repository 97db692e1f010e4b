//! Host platform integration: input event model, filesystem paths, and
//! the key-value state store backing widget persistence.

pub mod input;
pub mod paths;
pub mod store;

pub use input::{InputEvent, Key, UiIntent};
pub use paths::{config_dir, data_dir, ensure_dirs, state_file};
pub use store::{JsonFileStore, MemoryStore, NullStore, StateStore};
