//! # SupportBot Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module centralizes the few filesystem operations SupportBot needs,
//! wrapping `std::fs` with `anyhow::Context` so failures name the file
//! involved:
//! - **`ensure_dir_exists`**: Creates a directory (and parents) if missing, and
//!   rejects paths that exist but are not directories.
//! - **`read_file_to_string`**: Reads a whole file, used for config and catalog files.
//! - **`append_line_to_file`**: Opens a file in append mode (creating it and its
//!   parent directory on demand) and writes exactly one line. This is the
//!   primitive behind the unknown-query log.
//!
//! ## Usage
//!
//! ```rust
//! use supportbot::common::fs::io;
//! use std::path::Path;
//!
//! # fn run_example() -> supportbot::core::error::Result<()> {
//! io::append_line_to_file(Path::new("./logs/unknowns.log"), "2024-01-01 - Unknown query: hm")?;
//! let content = io::read_file_to_string(Path::new("./logs/unknowns.log"))?;
//! # Ok(())
//! # }
//! ```
//!
use crate::core::error::{Result, SupportBotError};
use anyhow::Context;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Ensures that a directory exists at the specified path.
///
/// If the path does not exist it is created along with any missing parents
/// (like `mkdir -p`). If it exists but is not a directory,
/// `SupportBotError::Config` is returned.
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(SupportBotError::Config(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Reads the entire content of a file into a string.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))
}

/// Appends `line` plus a trailing newline to the file at `path`.
///
/// The file is created if it does not exist, and so is its parent directory.
/// Existing content is never truncated.
///
/// # Errors
///
/// Returns an `Err` if the parent directory cannot be created or the file
/// cannot be opened or written.
pub fn append_line_to_file(path: &Path, line: &str) -> Result<()> {
    // An empty parent means a bare file name relative to the working directory.
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir_exists(parent)?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open {:?} for appending", path))?;
    writeln!(file, "{}", line).with_context(|| format!("Failed to append to file {:?}", path))?;
    debug!("Appended line to file: {:?}", path);
    Ok(())
}
