//! # SupportBot Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used throughout SupportBot. Almost
//! nothing in the chatbot can fail at runtime: an unmatched utterance is a
//! normal outcome (`"unknown"`), not an error. The errors here describe
//! *configuration* defects that should stop the process at startup:
//! - Invalid configuration values
//! - Intent patterns that fail to compile
//! - Duplicate, reserved, or response-less intents in a catalog
//! - Catalog files that cannot be parsed
//!
//! ## Architecture
//!
//! - `SupportBotError`: a `thiserror` enum naming each configuration failure
//! - `Result<T>`: an alias for `anyhow::Result<T>`, so call sites can attach
//!   context with `anyhow::Context`
//!
//! ## Examples
//!
//! ```rust
//! use supportbot::core::error::{Result, SupportBotError};
//!
//! fn check(name: &str) -> Result<()> {
//!     if name == "unknown" {
//!         anyhow::bail!(SupportBotError::ReservedIntentName { name: name.into() });
//!     }
//!     Ok(())
//! }
//! assert!(check("unknown").is_err());
//! ```
//!
use thiserror::Error;

/// Custom error type for the SupportBot application.
#[derive(Error, Debug)]
pub enum SupportBotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid pattern '{pattern}' in intent '{intent}': {source}")]
    InvalidPattern {
        intent: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Intent '{name}' is declared more than once.")]
    DuplicateIntent { name: String },

    #[error("Intent name '{name}' is reserved.")]
    ReservedIntentName { name: String },

    #[error("Intent '{name}' has no responses.")]
    EmptyResponses { name: String },

    #[error("Catalog error: {0}")]
    Catalog(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
