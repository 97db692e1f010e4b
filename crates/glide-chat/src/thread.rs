//! Message thread store.
//!
//! Append-only log of user/bot messages plus a bounded ring of recent
//! user inputs. The only permitted mutations besides `append` are the
//! single helpfulness write per bot message and `clear`, which resets
//! the thread to one fresh welcome message.

use std::collections::VecDeque;

use glide_common::new_id;
use tracing::debug;

use crate::locale::Locale;
use crate::message::{Author, Message, Rating};
use crate::profile::WidgetProfile;
use crate::script::ScriptEngine;

/// How many recent user inputs the history ring retains.
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

pub struct MessageThread {
    messages: Vec<Message>,
    recent_inputs: VecDeque<String>,
    history_limit: usize,
}

impl MessageThread {
    /// An empty thread. Most callers want [`MessageThread::with_welcome`].
    pub fn new() -> Self {
        Self::with_history_limit(DEFAULT_HISTORY_LIMIT)
    }

    pub fn with_history_limit(history_limit: usize) -> Self {
        Self {
            messages: Vec::new(),
            recent_inputs: VecDeque::new(),
            history_limit,
        }
    }

    /// A thread seeded with the localized welcome message, as shown on
    /// first mount.
    pub fn with_welcome(profile: WidgetProfile, locale: Locale) -> Self {
        let mut thread = Self::new();
        thread
            .messages
            .push(ScriptEngine::new(profile).welcome(locale));
        thread
    }

    /// Append a message at the end, assigning an id if the caller left
    /// it empty. Returns the message id. Messages are never re-sorted:
    /// insertion order is the thread order regardless of `created_at`.
    pub fn append(&mut self, mut message: Message) -> String {
        if message.id.is_empty() {
            message.id = new_id();
        }
        let id = message.id.clone();
        self.messages.push(message);
        id
    }

    /// Record a helpfulness vote. First write wins: returns `false` for
    /// an unknown id, a user message, or an already-rated message, and
    /// the stored vote never changes after the first success.
    pub fn rate(&mut self, id: &str, rating: Rating) -> bool {
        let Some(message) = self.messages.iter_mut().find(|m| m.id == id) else {
            return false;
        };
        if message.author != Author::Bot || message.helpfulness.is_some() {
            return false;
        }
        message.helpfulness = Some(rating);
        true
    }

    /// Replace the whole thread with a single fresh welcome message and
    /// drop the input history.
    pub fn clear(&mut self, profile: WidgetProfile, locale: Locale) {
        debug!(discarded = self.messages.len(), "thread cleared");
        self.messages.clear();
        self.recent_inputs.clear();
        self.messages
            .push(ScriptEngine::new(profile).welcome(locale));
    }

    /// Remember a submitted utterance; the oldest entry is evicted once
    /// the ring is full.
    pub fn record_input(&mut self, text: &str) {
        if self.recent_inputs.len() >= self.history_limit {
            self.recent_inputs.pop_front();
        }
        self.recent_inputs.push_back(text.to_string());
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn recent_inputs(&self) -> impl Iterator<Item = &str> {
        self.recent_inputs.iter().map(|s| s.as_str())
    }

    /// Replace contents wholesale (used when restoring persisted state).
    pub fn restore(&mut self, messages: Vec<Message>, recent_inputs: Vec<String>) {
        self.messages = messages;
        self.recent_inputs = recent_inputs
            .into_iter()
            .rev()
            .take(self.history_limit)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for MessageThread {
    fn default() -> Self {
        Self::new()
    }
}
