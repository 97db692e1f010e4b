use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::types::Rect;

/// Events emitted by the widget so a host can mirror state changes,
/// drive analytics, or sync a remote view. The tagged serde layout keeps
/// the wire shape stable; hosts on older schemas fall into `Unknown`
/// instead of failing deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum WidgetEvent {
    PanelOpened,
    PanelClosed,
    PanelMinimized,
    PanelMaximized,
    PanelRestored,
    PanelMoved(Rect),
    PanelResized(Rect),
    MessageAppended { id: String },
    MessageRated { id: String, helpful: bool },
    ThreadCleared,
    ReplyScheduled { delay_ms: u64 },
    ReplyDiscarded,
    #[serde(other)]
    Unknown,
}

pub struct EventBus {
    sender: broadcast::Sender<WidgetEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<WidgetEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: WidgetEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}
