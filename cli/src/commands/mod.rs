//! # SupportBot Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the subcommands of the `supportbot` binary. Each
//! command defines its own clap `Args` struct and a `handle_*` function that
//! `main.rs` routes to.
//!
//! ## Commands
//!
//! - `chat`: Interactive conversation loop (the default)
//! - `ask`: Answer a single utterance and exit
//! - `intents`: List the active catalog in priority order
//!
//! Startup work shared by all of them (config, catalog, responder wiring)
//! lives in `context`.
//!

/// One-shot question answering (`supportbot ask`).
pub mod ask;
/// Interactive read-print loop (`supportbot chat`).
pub mod chat;
/// Configuration + catalog loading shared by every command.
pub mod context;
/// Catalog listing (`supportbot intents`).
pub mod intents;
