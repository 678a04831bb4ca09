//! # SupportBot Filesystem Utilities
//!
//! File: cli/src/common/fs/mod.rs
//! Author: Christi Mahu
//!

/// Basic file I/O operations (`ensure_dir_exists`, `read_file_to_string`, `append_line_to_file`).
pub mod io;

// Note: No re-exports are defined here. Import from the submodule,
// e.g. `use crate::common::fs::io::append_line_to_file;`
