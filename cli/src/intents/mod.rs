//! # SupportBot Intent Engine
//!
//! File: cli/src/intents/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Everything that maps an utterance to a reply lives here:
//! - `catalog`: the ordered intent definitions (built-in or from a TOML file)
//! - `matcher`: compiled patterns and the first-match-wins scan
//! - `responder`: random response selection and the fallback path
//! - `unknown_log`: the injected sink for unmatched utterances
//!
//! The flow for one utterance is:
//!
//! ```text
//! text -> normalize -> scan intents in order -> intent name | "unknown"
//!      -> known: random response | unknown: log + fallback
//! ```
//!

pub mod catalog;
pub mod matcher;
pub mod responder;
pub mod unknown_log;

pub use catalog::{Catalog, Intent};
pub use matcher::{normalize, CompiledCatalog, CompiledIntent, IntentMatch};
pub use responder::{Responder, DEFAULT_FALLBACK_RESPONSE};
pub use unknown_log::{
    FileUnknownLog, MemoryUnknownLog, NullUnknownLog, UnknownQuery, UnknownQueryLog,
};

/// Sentinel returned when no intent matches. Reserved as an intent name.
pub const UNKNOWN_INTENT: &str = "unknown";
