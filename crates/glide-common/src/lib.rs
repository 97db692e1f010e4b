pub mod errors;
pub mod events;
pub mod id;
pub mod notifications;
pub mod types;

pub use errors::{ConfigError, GlideError, StoreError};
pub use events::{EventBus, WidgetEvent};
pub use id::{new_id, WidgetId};
pub use notifications::{Notification, NotificationLevel, NotificationQueue};
pub use types::{Point, Rect, Size, Viewport};

pub type Result<T> = std::result::Result<T, GlideError>;
