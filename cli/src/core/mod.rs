//! # SupportBot Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the infrastructure shared by the commands and the
//! intent engine:
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and the crate-wide `Result` alias
//!
//! ## Usage
//!
//! ```rust
//! use supportbot::core::config; // For loading configuration
//! use supportbot::core::error::{Result, SupportBotError}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
