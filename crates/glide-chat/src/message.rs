use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use glide_common::new_id;

/// Who produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Author {
    User,
    Bot,
}

/// A helpfulness vote on a bot message. Written at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Up,
    Down,
}

impl Rating {
    pub fn is_helpful(&self) -> bool {
        matches!(self, Rating::Up)
    }
}

/// A product card attached to a storefront reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRef {
    pub id: String,
    pub name: String,
    /// Display price, already formatted ("€89.99").
    pub price: String,
    pub image: String,
    pub rating: f64,
    pub category: String,
}

/// One entry in the message thread.
///
/// Immutable once appended, except `helpfulness` which transitions
/// exactly once from `None` to a vote (bot messages only; enforced by
/// the thread store).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub author: Author,
    pub body: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub products: Vec<ProductRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub helpfulness: Option<Rating>,
}

impl Message {
    /// Creates a user message stamped now.
    pub fn user(body: impl Into<String>) -> Self {
        Self::new(Author::User, body)
    }

    /// Creates a bot message stamped now.
    pub fn bot(body: impl Into<String>) -> Self {
        Self::new(Author::Bot, body)
    }

    fn new(author: Author, body: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            author,
            body: body.into(),
            created_at: Utc::now(),
            suggestions: Vec::new(),
            products: Vec::new(),
            helpfulness: None,
        }
    }

    pub fn with_suggestions(mut self, suggestions: Vec<String>) -> Self {
        self.suggestions = suggestions;
        self
    }

    pub fn with_products(mut self, products: Vec<ProductRef>) -> Self {
        self.products = products;
        self
    }
}
