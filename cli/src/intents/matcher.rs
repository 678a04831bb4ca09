//! # Intent Matcher
//!
//! File: cli/src/intents/matcher.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `CompiledCatalog` is the read-only, pre-compiled projection of a `Catalog`.
//! It is built once at startup and then only read, so it can be shared by
//! reference (it is `Send + Sync`).
//!
//! Matching is a priority scan, not a best match:
//! 1. The input is normalized (lower-cased, trimmed).
//! 2. Intents are visited in declaration order, and within each intent the
//!    patterns are visited in declaration order.
//! 3. Each pattern is an unanchored, case-insensitive regex search.
//! 4. The first hit wins. With no hit the result is `"unknown"`.
//!
//! ## Examples
//!
//! ```rust
//! use supportbot::intents::{Catalog, CompiledCatalog};
//!
//! let compiled = CompiledCatalog::compile(&Catalog::builtin()).unwrap();
//! assert_eq!(compiled.match_intent("Hi, what are your working hours?"), "greeting");
//! assert_eq!(compiled.match_intent("asdkjasd"), "unknown");
//! ```
//!
use crate::core::error::{Result, SupportBotError};
use crate::intents::catalog::Catalog;
use crate::intents::UNKNOWN_INTENT;
use regex::{Regex, RegexBuilder};
use std::collections::HashMap;
use tracing::{debug, trace};

/// Lower-cases and trims leading/trailing whitespace. Total on every input.
pub fn normalize(text: &str) -> String {
    text.to_lowercase().trim().to_string()
}

/// One intent with its patterns compiled.
#[derive(Debug, Clone)]
pub struct CompiledIntent {
    name: String,
    regexes: Vec<Regex>,
    responses: Vec<String>,
}

impl CompiledIntent {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn responses(&self) -> &[String] {
        &self.responses
    }

    /// Pattern sources in declaration order.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.regexes.iter().map(Regex::as_str)
    }
}

/// The result of a successful scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntentMatch<'a> {
    pub intent: &'a str,
    /// Source text of the pattern that fired.
    pub pattern: &'a str,
    /// Position of that pattern within its intent.
    pub pattern_index: usize,
}

/// Read-only, pre-compiled catalog.
#[derive(Debug, Clone)]
pub struct CompiledCatalog {
    intents: Vec<CompiledIntent>,
    index: HashMap<String, usize>,
}

impl CompiledCatalog {
    /// Compiles every pattern of `catalog` case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns `SupportBotError::InvalidPattern` for the first pattern that does
    /// not compile. A bad pattern is a configuration defect, so callers are
    /// expected to abort startup rather than skip it.
    pub fn compile(catalog: &Catalog) -> Result<Self> {
        let mut intents = Vec::with_capacity(catalog.len());
        let mut index = HashMap::with_capacity(catalog.len());

        for (position, intent) in catalog.intents().iter().enumerate() {
            let regexes = intent
                .patterns
                .iter()
                .map(|pattern| {
                    RegexBuilder::new(pattern)
                        .case_insensitive(true)
                        .build()
                        .map_err(|source| SupportBotError::InvalidPattern {
                            intent: intent.name.clone(),
                            pattern: pattern.clone(),
                            source,
                        })
                })
                .collect::<std::result::Result<Vec<_>, _>>()?;

            index.insert(intent.name.clone(), position);
            intents.push(CompiledIntent {
                name: intent.name.clone(),
                regexes,
                responses: intent.responses.clone(),
            });
        }

        debug!("Compiled {} intents", intents.len());
        Ok(Self { intents, index })
    }

    /// Scans for the first matching intent and reports which pattern fired.
    pub fn find_match(&self, text: &str) -> Option<IntentMatch<'_>> {
        let normalized = normalize(text);
        for intent in &self.intents {
            for (pattern_index, regex) in intent.regexes.iter().enumerate() {
                if regex.is_match(&normalized) {
                    trace!(
                        "'{}' matched intent '{}' via /{}/",
                        normalized,
                        intent.name,
                        regex.as_str()
                    );
                    return Some(IntentMatch {
                        intent: &intent.name,
                        pattern: regex.as_str(),
                        pattern_index,
                    });
                }
            }
        }
        trace!("'{}' matched no intent", normalized);
        None
    }

    /// Returns the first matching intent's name, or `"unknown"`.
    pub fn match_intent(&self, text: &str) -> &str {
        self.find_match(text)
            .map_or(UNKNOWN_INTENT, |found| found.intent)
    }

    pub fn get(&self, name: &str) -> Option<&CompiledIntent> {
        self.index.get(name).map(|&position| &self.intents[position])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Intents in priority order.
    pub fn intents(&self) -> &[CompiledIntent] {
        &self.intents
    }
}
