//! # Intent Catalog
//!
//! File: cli/src/intents/catalog.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The catalog is the static configuration of every intent the bot
//! recognizes: a name, the trigger patterns, and the candidate responses.
//!
//! Declaration order is significant. The matcher scans intents in the order
//! they appear here and stops at the first hit, so an utterance such as
//! "hi, bye" resolves to `greeting` only because `greeting` is declared before
//! `farewell`. Reordering entries silently changes behavior.
//!
//! ## Catalog files
//!
//! A catalog can also be loaded from TOML; file order is preserved:
//!
//! ```toml
//! [[intents]]
//! name = "greeting"
//! patterns = ['\bhi\b', '\bhello\b']
//! responses = ["Hi there!"]
//! ```
//!
use crate::common::fs::io;
use crate::core::error::{Result, SupportBotError};
use crate::intents::UNKNOWN_INTENT;
use anyhow::{anyhow, Context};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, warn};

/// A named category of user request.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Intent {
    pub name: String,
    /// Case-insensitive regular expressions, tried in order.
    #[serde(default)]
    pub patterns: Vec<String>,
    /// Candidate replies. Never empty in a validated catalog.
    pub responses: Vec<String>,
}

impl Intent {
    pub fn new(name: &str, patterns: &[&str], responses: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
            responses: responses.iter().map(|r| r.to_string()).collect(),
        }
    }
}

/// Ordered, validated collection of intents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    intents: Vec<Intent>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default)]
    intents: Vec<Intent>,
}

impl Catalog {
    /// Builds a catalog, keeping the given order.
    ///
    /// # Errors
    ///
    /// - `SupportBotError::Catalog` if a name is empty
    /// - `SupportBotError::ReservedIntentName` for `"unknown"`
    /// - `SupportBotError::DuplicateIntent` if a name repeats
    /// - `SupportBotError::EmptyResponses` if an intent has nothing to say
    pub fn new(intents: Vec<Intent>) -> Result<Self> {
        let mut seen = HashSet::new();
        for intent in &intents {
            if intent.name.trim().is_empty() {
                return Err(anyhow!(SupportBotError::Catalog(
                    "Intent names must not be empty.".to_string()
                )));
            }
            if intent.name == UNKNOWN_INTENT {
                return Err(anyhow!(SupportBotError::ReservedIntentName {
                    name: intent.name.clone()
                }));
            }
            if !seen.insert(intent.name.as_str()) {
                return Err(anyhow!(SupportBotError::DuplicateIntent {
                    name: intent.name.clone()
                }));
            }
            if intent.responses.is_empty() {
                return Err(anyhow!(SupportBotError::EmptyResponses {
                    name: intent.name.clone()
                }));
            }
            if intent.patterns.is_empty() {
                warn!("Intent '{}' has no patterns and can never match.", intent.name);
            }
        }
        Ok(Self { intents })
    }

    /// Parses a TOML catalog (`[[intents]]` tables).
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content).context("Failed to parse intent catalog")?;
        Self::new(file.intents)
    }

    /// Reads and validates a catalog file.
    pub fn load(path: &Path) -> Result<Self> {
        info!("Loading intent catalog from: {}", path.display());
        let content = io::read_file_to_string(path)?;
        let catalog = Self::from_toml_str(&content)
            .with_context(|| format!("Invalid catalog file: {}", path.display()))?;
        debug!("Loaded {} intents from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// The intents shipped with the bot.
    pub fn builtin() -> Self {
        // Built from literals that satisfy every rule `new` checks, so no validation pass.
        Self {
            intents: builtin_intents(),
        }
    }

    pub fn intents(&self) -> &[Intent] {
        &self.intents
    }

    pub fn get(&self, name: &str) -> Option<&Intent> {
        self.intents.iter().find(|intent| intent.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.intents.iter().map(|intent| intent.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.intents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_intents() -> Vec<Intent> {
    vec![
        Intent::new(
            "greeting",
            &[r"\bhi\b", r"\bhello\b", r"\bhey\b"],
            &["Hi there!", "Hello!", "Hey! How can I help you today?"],
        ),
        Intent::new(
            "faq_hours",
            &[r"working hours", r"hours of (operation|service)"],
            &["Our working hours are 9 AM to 5 PM, Monday through Friday."],
        ),
        Intent::new(
            "faq_location",
            &[r"where.*(office|located)", r"\blocation\b", r"where do you operate"],
            &["We are located in New Delhi, India, and serve customers worldwide."],
        ),
        Intent::new(
            "faq_order_status",
            &[r"order status", r"shipping", r"delivery", r"track my order"],
            &["You can track your order using the link provided in your email."],
        ),
        Intent::new(
            "faq_pricing",
            &[r"\bprice\b", r"\bcost\b", r"\baffordable\b"],
            &["Our products are priced competitively. You can check our website for detailed pricing."],
        ),
        Intent::new(
            "thanks",
            &[r"\bthanks\b", r"\bthank you\b"],
            &["You're welcome!", "Anytime!", "Glad to help!"],
        ),
        Intent::new(
            "farewell",
            &[r"\bbye\b", r"\bgoodbye\b", r"\bsee you\b"],
            &["Goodbye! Have a great day!", "See you next time!", "Farewell!"],
        ),
        Intent::new(
            "small_talk",
            &[r"how are you\b", r"what's up", r"how is it going"],
            &[
                "I'm just a bot, but I'm here to help!",
                "I'm doing well, thank you!",
                "I'm here to assist you!",
            ],
        ),
        Intent::new(
            "help",
            &[r"\bhelp\b", r"\bsupport\b", r"\bassist\b"],
            &[
                "How can I assist you?",
                "What do you need help with?",
                "I'm here to support you.",
            ],
        ),
        Intent::new(
            "faq_contact",
            &[r"contact number", r"phone number", r"how to contact"],
            &["You can contact us at +91-XXXXXXXXXX or via email at support@example.com."],
        ),
        Intent::new(
            "faq_refund",
            &[
                r"refund process",
                r"money back",
                r"how to get refund",
                r"cancel order",
                r"refund",
            ],
            &["Refunds are processed within 5-7 business days. You can request a refund via your account dashboard."],
        ),
        Intent::new(
            "faq_payment_methods",
            &[r"payment options", r"how can I pay", r"accepted payment methods"],
            &["We accept credit cards, debit cards, PayPal, and online bank transfers."],
        ),
        Intent::new(
            "faq_technical_issue",
            &[r"not working", r"issue with website", r"error message"],
            &["Try clearing your cache or using a different browser. If the issue persists, contact our support team."],
        ),
        Intent::new(
            "faq_discounts",
            &[r"discounts", r"coupon code", r"promo offers"],
            &["We have seasonal discounts. Check our website for the latest promo codes."],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_declaration_order() {
        let catalog = Catalog::builtin();
        let names: Vec<&str> = catalog.names().collect();
        assert_eq!(
            names,
            vec![
                "greeting",
                "faq_hours",
                "faq_location",
                "faq_order_status",
                "faq_pricing",
                "thanks",
                "farewell",
                "small_talk",
                "help",
                "faq_contact",
                "faq_refund",
                "faq_payment_methods",
                "faq_technical_issue",
                "faq_discounts",
            ]
        );
    }

    #[test]
    fn test_builtin_passes_validation() {
        let builtin = Catalog::builtin();
        let revalidated = Catalog::new(builtin.intents().to_vec()).unwrap();
        assert_eq!(revalidated, builtin);
    }

    #[test]
    fn test_get_and_contains() {
        let catalog = Catalog::builtin();
        assert!(catalog.contains("faq_refund"));
        assert!(!catalog.contains(UNKNOWN_INTENT));
        assert_eq!(catalog.get("thanks").unwrap().responses.len(), 3);
        assert!(catalog.get("nope").is_none());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let result = Catalog::new(vec![
            Intent::new("a", &["x"], &["one"]),
            Intent::new("a", &["y"], &["two"]),
        ]);
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SupportBotError>(),
            Some(SupportBotError::DuplicateIntent { name }) if name == "a"
        ));
    }

    #[test]
    fn test_reserved_name_rejected() {
        let result = Catalog::new(vec![Intent::new(UNKNOWN_INTENT, &["x"], &["r"])]);
        assert!(matches!(
            result.unwrap_err().downcast_ref::<SupportBotError>(),
            Some(SupportBotError::ReservedIntentName { .. })
        ));
    }

    #[test]
    fn test_empty_responses_rejected() {
        let result = Catalog::new(vec![Intent::new("silent", &["x"], &[])]);
        assert!(matches!(
            result.unwrap_err().downcast_ref::<SupportBotError>(),
            Some(SupportBotError::EmptyResponses { .. })
        ));
    }

    #[test]
    fn test_from_toml_preserves_file_order() {
        let content = r#"
            [[intents]]
            name = "zeta"
            patterns = ['\bz\b']
            responses = ["Z!"]

            [[intents]]
            name = "alpha"
            patterns = ['\ba\b']
            responses = ["A!", "Ah!"]
        "#;
        let catalog = Catalog::from_toml_str(content).unwrap();
        let names: Vec<&str> = catalog.names().collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
        assert_eq!(catalog.get("alpha").unwrap().patterns, vec![r"\ba\b"]);
    }

    #[test]
    fn test_from_toml_rejects_missing_responses() {
        let content = r#"
            [[intents]]
            name = "broken"
            patterns = ["x"]
        "#;
        assert!(Catalog::from_toml_str(content).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("intents.toml");
        std::fs::write(
            &path,
            "[[intents]]\nname = \"ping\"\npatterns = [\"ping\"]\nresponses = [\"pong\"]\n",
        )
        .unwrap();

        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains("ping"));
    }
}
