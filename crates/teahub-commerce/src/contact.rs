//! Outbound contact links.
//!
//! These are opaque strings handed to the browser; nothing is awaited or
//! parsed on the way back.

use std::fmt;

use crate::catalog::{Product, SizeOption};

const WHATSAPP_BASE: &str = "https://wa.me/";

/// A WhatsApp click-to-chat link with optional prefilled text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhatsAppLink {
    number: String,
    text: Option<String>,
}

impl WhatsAppLink {
    /// Create a link to an international number without `+` or spaces
    /// (e.g., "918754148249").
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            text: None,
        }
    }

    /// Prefill the chat with a message.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Link asking about a specific tea and pack size.
    pub fn for_order(number: impl Into<String>, brand: &str, product: &Product, size: Option<&SizeOption>) -> Self {
        Self::new(number).with_text(order_message(brand, product, size))
    }

    /// The recipient number.
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Build the URL, percent-encoding the message.
    pub fn url(&self) -> String {
        match &self.text {
            Some(text) => format!(
                "{}{}?text={}",
                WHATSAPP_BASE,
                self.number,
                urlencoding::encode(text)
            ),
            None => format!("{}{}", WHATSAPP_BASE, self.number),
        }
    }
}

impl fmt::Display for WhatsAppLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.url())
    }
}

/// The prefilled order enquiry for a product.
pub fn order_message(brand: &str, product: &Product, size: Option<&SizeOption>) -> String {
    let item = match size {
        Some(size) => format!("{} ({})", product.name, size.label),
        None => product.name.clone(),
    };
    format!(
        "Hi {} \u{2014} I'm interested in {}. Please help with pricing and delivery.",
        brand, item
    )
}

/// The general enquiry used by the navbar, footer and floating button.
pub fn enquiry_message(brand: &str) -> String {
    format!(
        "Hi {} \u{2014} I'm interested in your premium teas. Please help with pricing and delivery.",
        brand
    )
}

/// The custom blend enquiry under the catalog.
pub fn collection_message(brand: &str) -> String {
    format!(
        "Hi {} \u{2014} I'd like to know about your full collection.",
        brand
    )
}

/// A `mailto:` link.
pub fn mailto_link(email: &str) -> String {
    format!("mailto:{}", email)
}

/// A `tel:` link. Spaces and dashes are stripped from the number.
pub fn tel_link(number: &str) -> String {
    let dial: String = number
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{}", dial)
}
