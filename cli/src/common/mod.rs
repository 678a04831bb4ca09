//! # SupportBot Common Utilities
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers that are not specific to intent matching. Currently this is
//! only the filesystem layer used for reading config and catalog files and for
//! appending to the unknown-query log.
//!

/// Utilities for filesystem operations (reading files, appending lines).
pub mod fs;
