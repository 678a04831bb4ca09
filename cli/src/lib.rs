//! # SupportBot Library
//!
//! File: cli/src/lib.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! A terminal customer-support chatbot. Free-text utterances are mapped to a
//! fixed set of intents with case-insensitive regular expressions, and each
//! intent answers with one of its canned responses. Utterances that match
//! nothing get a fallback message and are appended to an unknown-query log.
//!
//! The library half of the crate exists so the intent engine can be used and
//! tested directly; `main.rs` is only the command-line front end.
//!
//! ## Example
//!
//! ```rust
//! use rand::{rngs::StdRng, SeedableRng};
//! use supportbot::intents::{Catalog, CompiledCatalog, NullUnknownLog, Responder};
//!
//! let compiled = CompiledCatalog::compile(&Catalog::builtin()).unwrap();
//! assert_eq!(compiled.match_intent("  THANKS!!  "), "thanks");
//!
//! let mut responder = Responder::new(&compiled, NullUnknownLog, StdRng::seed_from_u64(1));
//! println!("{}", responder.reply("hello"));
//! ```
//!

pub mod commands;
pub mod common;
pub mod core;
pub mod intents;
