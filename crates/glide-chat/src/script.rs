//! Scripted reply engine.
//!
//! A declarative keyword-rule table consulted in declared priority
//! order; the first rule with a substring hit on the lowercased input
//! wins. Pure and deterministic: the same `(input, locale)` always
//! yields a byte-identical body. The typing delay before a reply
//! surfaces is the widget's concern, not this table's.

use tracing::debug;

use crate::locale::{self, Locale};
use crate::message::{Message, ProductRef};
use crate::profile::WidgetProfile;

/// One row of the reply table.
#[derive(Debug, Clone, Copy)]
pub struct ReplyRule {
    /// Topic label used in logs.
    pub topic: &'static str,
    /// Any substring hit on the lowercased input selects this rule.
    pub keywords: &'static [&'static str],
    pub body: &'static str,
    /// Restricts the rule to one profile; `None` means both.
    pub profile: Option<WidgetProfile>,
    /// Attach the demo product cards to the reply.
    pub with_products: bool,
}

impl ReplyRule {
    fn matches(&self, lowercased: &str) -> bool {
        self.keywords.iter().any(|k| lowercased.contains(k))
    }
}

/// The rule table in priority order. Earlier rules win when an input
/// matches several keyword sets ("medical device cost" is a medical
/// question, not a pricing one).
///
/// Note `pricing` is listed alongside `price`: "price" is not a
/// substring of "pricing", so the word alone would otherwise miss.
const RULES: &[ReplyRule] = &[
    ReplyRule {
        topic: "medical",
        keywords: &["medical", "device"],
        body: "I can help you find medical devices. We offer over 800+ certified medical components meeting EU/CE standards. Would you like to see our medical device categories or need help with specific compliance requirements?",
        profile: None,
        with_products: false,
    },
    ReplyRule {
        topic: "automotive",
        keywords: &["automotive", "car"],
        body: "Great! We have 600+ automotive components. Our automotive parts include connectors, sensors, motors, and mechanical components. All parts meet EMC/ROHS standards. What specific automotive components are you looking for?",
        profile: None,
        with_products: false,
    },
    ReplyRule {
        topic: "electronics",
        keywords: &["electronic", "tech"],
        body: "Electronics are popular right now! Here are two of our best-rated picks, both shipping from our EU warehouse with full certification. Would you like more details or a comparison?",
        profile: Some(WidgetProfile::Storefront),
        with_products: true,
    },
    ReplyRule {
        topic: "pricing",
        keywords: &["price", "pricing", "cost"],
        body: "For pricing information, I'd recommend contacting our sales team for personalized quotes. We offer volume discounts for bulk orders and have competitive pricing on all components. Would you like me to connect you with our sales team?",
        profile: None,
        with_products: false,
    },
    ReplyRule {
        topic: "shipping",
        keywords: &["shipping", "delivery"],
        body: "We offer worldwide shipping from our warehouses in Shenzhen, Shanghai, and Hong Kong. Delivery times vary by location: Europe (5-7 days), Global (7-14 days). Free shipping available for orders over €500. Need specific shipping information for your location?",
        profile: None,
        with_products: false,
    },
    ReplyRule {
        topic: "compliance",
        keywords: &["compliance", "certificate"],
        body: "All our products come with proper compliance certificates. Medical devices: MDR/CE certified. Automotive: EMC/ROHS compliant. We can provide detailed compliance documentation for any product. Which specific certifications do you need?",
        profile: None,
        with_products: false,
    },
    ReplyRule {
        topic: "support",
        keywords: &["support", "help"],
        body: "Our technical support team speaks German, English, and Chinese. We're available 24/7 for product questions, technical specifications, and order assistance. Would you like me to transfer you to a human specialist?",
        profile: None,
        with_products: false,
    },
    ReplyRule {
        topic: "company",
        keywords: &["company", "about", "who are you"],
        body: "We've been connecting European buyers with certified manufacturers since 2004, with 78 specialists across Shenzhen, Shanghai, Changsha, Hong Kong, and our Cologne branch. Medical components and automotive parts are our core business. What would you like to know about us?",
        profile: None,
        with_products: false,
    },
    ReplyRule {
        topic: "catalog",
        keywords: &["catalog", "categories", "browse"],
        body: "Our catalog spans medical components, automotive parts, connectors, sensors, and consumer electronics. You can browse by category, or tell me what you're building and I'll point you to the right section. Which category interests you?",
        profile: None,
        with_products: false,
    },
];

/// Starter chips attached to the storefront welcome message.
const WELCOME_SUGGESTIONS: &[&str] = &[
    "Show popular products",
    "Find electronics",
    "Best deals",
    "Customer support",
];

/// Chips attached to every storefront reply.
const REPLY_SUGGESTIONS: &[&str] = &[
    "Shipping info",
    "Product categories",
    "Returns info",
    "Talk to a human",
];

/// What the engine hands back for one user utterance.
#[derive(Debug, Clone, PartialEq)]
pub struct BotReply {
    pub body: String,
    pub suggestions: Vec<String>,
    pub products: Vec<ProductRef>,
}

/// The reply engine, parameterized by widget profile.
pub struct ScriptEngine {
    profile: WidgetProfile,
}

impl ScriptEngine {
    pub fn new(profile: WidgetProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> WidgetProfile {
        self.profile
    }

    /// Map a user utterance to a canned reply. Falls back to the
    /// localized introduction when no rule matches.
    pub fn respond(&self, input: &str, locale: Locale) -> BotReply {
        let lowercased = input.to_lowercase();
        let hit = RULES
            .iter()
            .filter(|r| r.profile.map_or(true, |p| p == self.profile))
            .find(|r| r.matches(&lowercased));

        match hit {
            Some(rule) => {
                debug!(topic = rule.topic, "reply rule matched");
                BotReply {
                    body: rule.body.to_string(),
                    suggestions: self.reply_suggestions(),
                    products: if rule.with_products {
                        demo_products()
                    } else {
                        Vec::new()
                    },
                }
            }
            None => {
                debug!("no reply rule matched, using fallback");
                BotReply {
                    body: locale::fallback_reply(self.profile, locale).to_string(),
                    suggestions: self.reply_suggestions(),
                    products: Vec::new(),
                }
            }
        }
    }

    /// The welcome message for a fresh or cleared thread.
    pub fn welcome(&self, locale: Locale) -> Message {
        let message = Message::bot(locale::welcome_message(self.profile, locale));
        match self.profile {
            WidgetProfile::Storefront => message.with_suggestions(
                WELCOME_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
            ),
            WidgetProfile::Assistant => message,
        }
    }

    fn reply_suggestions(&self) -> Vec<String> {
        match self.profile {
            WidgetProfile::Storefront => {
                REPLY_SUGGESTIONS.iter().map(|s| s.to_string()).collect()
            }
            WidgetProfile::Assistant => Vec::new(),
        }
    }
}

/// The two demo product cards carried by the storefront electronics
/// rule.
pub fn demo_products() -> Vec<ProductRef> {
    vec![
        ProductRef {
            id: "1".into(),
            name: "Wireless Headphones Pro".into(),
            price: "€89.99".into(),
            image: "/api/placeholder/80/80".into(),
            rating: 4.8,
            category: "Electronics".into(),
        },
        ProductRef {
            id: "2".into(),
            name: "Smart Watch Series 5".into(),
            price: "€299.99".into(),
            image: "/api/placeholder/80/80".into(),
            rating: 4.6,
            category: "Electronics".into(),
        },
    ]
}
