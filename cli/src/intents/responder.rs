//! # Responder
//!
//! File: cli/src/intents/responder.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Turns an intent name into reply text.
//!
//! - Known intent: one of its responses, chosen uniformly at random.
//! - Anything else (normally `"unknown"`): the original text is appended to the
//!   unknown-query log and the fixed fallback message is returned.
//!
//! Both collaborators are injected. The random source is any `rand::Rng`, so
//! callers pass `StdRng::seed_from_u64(..)` for reproducible output, and the
//! log is any `UnknownQueryLog`.
//!
//! ## Examples
//!
//! ```rust
//! use rand::{rngs::StdRng, SeedableRng};
//! use supportbot::intents::{Catalog, CompiledCatalog, MemoryUnknownLog, Responder};
//!
//! let compiled = CompiledCatalog::compile(&Catalog::builtin()).unwrap();
//! let mut responder = Responder::new(&compiled, MemoryUnknownLog::new(), StdRng::seed_from_u64(7));
//!
//! let reply = responder.reply("what are your working hours?");
//! assert_eq!(reply, "Our working hours are 9 AM to 5 PM, Monday through Friday.");
//!
//! responder.reply("asdkjasd");
//! assert_eq!(responder.log().entries()[0].text, "asdkjasd");
//! ```
//!
use crate::intents::matcher::CompiledCatalog;
use crate::intents::unknown_log::{UnknownQuery, UnknownQueryLog};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info, warn};

/// Reply for utterances that match no intent.
pub const DEFAULT_FALLBACK_RESPONSE: &str =
    "I'm sorry, I didn't understand that. Let me connect you to our support team.";

pub struct Responder<'a, L, R> {
    catalog: &'a CompiledCatalog,
    log: L,
    rng: R,
    fallback: String,
}

impl<'a, L: UnknownQueryLog, R: Rng> Responder<'a, L, R> {
    pub fn new(catalog: &'a CompiledCatalog, log: L, rng: R) -> Self {
        Self {
            catalog,
            log,
            rng,
            fallback: DEFAULT_FALLBACK_RESPONSE.to_string(),
        }
    }

    /// Replaces the fallback message.
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }

    pub fn catalog(&self) -> &'a CompiledCatalog {
        self.catalog
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    pub fn log(&self) -> &L {
        &self.log
    }

    pub fn into_log(self) -> L {
        self.log
    }

    /// Picks the reply for `intent_name`.
    ///
    /// Never fails: a log sink error is reported through `tracing` and the
    /// fallback is returned anyway.
    pub fn get_response(&mut self, intent_name: &str, original_text: &str) -> String {
        if let Some(intent) = self.catalog.get(intent_name) {
            if let Some(response) = intent.responses().choose(&mut self.rng) {
                debug!("Responding to intent '{}'", intent_name);
                return response.clone();
            }
        }

        info!("Unknown query: {}", original_text);
        if let Err(e) = self.log.append(&UnknownQuery::now(original_text)) {
            warn!("Failed to record unknown query: {:?}", e);
        }
        self.fallback.clone()
    }

    /// Matches `text` and answers it in one step.
    pub fn reply(&mut self, text: &str) -> String {
        let catalog = self.catalog;
        let intent = catalog.match_intent(text);
        self.get_response(intent, text)
    }
}
