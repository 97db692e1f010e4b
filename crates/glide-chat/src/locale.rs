//! Locale codes and the engine-owned localized canned text.
//!
//! Only the welcome message and the no-match fallback carry locale
//! variants; scripted reply bodies are English. The host's own
//! translation table is a separate concern and never consulted here.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::profile::WidgetProfile;

/// Supported locale codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    De,
    Zh,
    Fr,
}

impl Locale {
    /// Parse a locale code; unknown codes fall back to English.
    pub fn from_code(code: &str) -> Self {
        match code.to_ascii_lowercase().as_str() {
            "de" => Locale::De,
            "zh" => Locale::Zh,
            "fr" => Locale::Fr,
            _ => Locale::En,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::De => "de",
            Locale::Zh => "zh",
            Locale::Fr => "fr",
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::En
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Greeting shown as the sole message of a fresh or cleared thread.
pub fn welcome_message(profile: WidgetProfile, locale: Locale) -> &'static str {
    match (profile, locale) {
        (WidgetProfile::Assistant, Locale::En) => {
            "Hello! I'm your AI assistant. How can I help you today?"
        }
        (WidgetProfile::Assistant, Locale::De) => {
            "Hallo! Ich bin Ihr KI-Assistent. Wie kann ich Ihnen heute helfen?"
        }
        (WidgetProfile::Assistant, Locale::Zh) => "您好！我是您的AI助手。今天我能为您做些什么？",
        (WidgetProfile::Assistant, Locale::Fr) => {
            "Bonjour! Je suis votre assistant IA. Comment puis-je vous aider aujourd'hui?"
        }
        (WidgetProfile::Storefront, Locale::En) => {
            "👋 Hello! I'm your AI shopping assistant. How can I help you find the perfect products today?"
        }
        (WidgetProfile::Storefront, Locale::De) => {
            "👋 Hallo! Ich bin Ihr KI-Shopping-Assistent. Wie kann ich Ihnen heute dabei helfen, die perfekten Produkte zu finden?"
        }
        (WidgetProfile::Storefront, Locale::Zh) => {
            "👋 您好！我是您的AI购物助手。今天我可以如何帮助您找到完美的产品？"
        }
        (WidgetProfile::Storefront, Locale::Fr) => {
            "👋 Bonjour! Je suis votre assistant shopping IA. Comment puis-je vous aider à trouver les produits parfaits aujourd'hui?"
        }
    }
}

/// Reply used when no keyword rule matches the input.
pub fn fallback_reply(profile: WidgetProfile, locale: Locale) -> &'static str {
    match (profile, locale) {
        (WidgetProfile::Assistant, Locale::En) => {
            "Thank you for your question! As a leading supplier of medical devices and automotive components, I'm here to help. Could you please provide more details about what you're looking for? I can assist with product searches, technical specifications, pricing, or compliance information."
        }
        (WidgetProfile::Assistant, Locale::De) => {
            "Vielen Dank für Ihre Frage! Als führender Anbieter von Medizinprodukten und Automobilkomponenten helfe ich Ihnen gerne weiter. Können Sie mir mehr Details geben? Ich unterstütze Sie bei Produktsuche, technischen Spezifikationen, Preisen und Compliance-Fragen."
        }
        (WidgetProfile::Assistant, Locale::Zh) => {
            "感谢您的提问！作为领先的医疗设备和汽车零部件供应商，我随时为您服务。能否提供更多细节？我可以协助产品搜索、技术规格、价格或合规信息。"
        }
        (WidgetProfile::Assistant, Locale::Fr) => {
            "Merci pour votre question! En tant que fournisseur leader de dispositifs médicaux et de composants automobiles, je suis là pour vous aider. Pouvez-vous préciser ce que vous recherchez? Je peux vous aider pour la recherche de produits, les spécifications techniques, les prix ou la conformité."
        }
        (WidgetProfile::Storefront, Locale::En) => {
            "Thanks for reaching out! I can help you browse products, track orders, and find the best deals. Could you tell me a bit more about what you're looking for?"
        }
        (WidgetProfile::Storefront, Locale::De) => {
            "Danke für Ihre Nachricht! Ich helfe Ihnen gerne beim Stöbern im Sortiment, bei Bestellungen und den besten Angeboten. Erzählen Sie mir etwas mehr darüber, was Sie suchen?"
        }
        (WidgetProfile::Storefront, Locale::Zh) => {
            "感谢您的咨询！我可以帮您浏览商品、跟踪订单并找到最优惠的价格。能告诉我更多您想找的东西吗？"
        }
        (WidgetProfile::Storefront, Locale::Fr) => {
            "Merci de votre message! Je peux vous aider à parcourir les produits, suivre vos commandes et trouver les meilleures offres. Pouvez-vous m'en dire un peu plus sur ce que vous cherchez?"
        }
    }
}
