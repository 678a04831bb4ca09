//! # SupportBot Intent Listing
//!
//! File: cli/src/commands/intents.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `supportbot intents` prints the active catalog in match-priority order, so
//! it is easy to see why an utterance lands where it does.
//!
//! ```bash
//! $ supportbot intents --patterns
//!  1. greeting (3 patterns, 3 responses)
//!       \bhi\b
//!       \bhello\b
//!       \bhey\b
//! ...
//! ```
//!
use crate::commands::context::{BotArgs, BotContext};
use crate::core::error::Result;
use crate::intents::CompiledCatalog;
use clap::Args;
use std::io::{self, Write};
use tracing::info;

/// Arguments for the `intents` subcommand.
#[derive(Args, Debug)]
pub struct IntentsArgs {
    /// Also list every pattern under its intent.
    #[arg(long, short)]
    pub patterns: bool,
}

/// Entry point for `supportbot intents`.
pub fn handle_intents(args: IntentsArgs, bot: &BotArgs) -> Result<()> {
    info!("Handling intents command with args: {:?}", args);
    let context = BotContext::load(bot)?;
    let stdout = io::stdout();
    list_intents(context.catalog(), args.patterns, stdout.lock())
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{} {}", count, word)
    } else {
        format!("{} {}s", count, word)
    }
}

/// Writes one line per intent, numbered by match priority.
pub fn list_intents<W: Write>(
    catalog: &CompiledCatalog,
    show_patterns: bool,
    mut output: W,
) -> Result<()> {
    for (position, intent) in catalog.intents().iter().enumerate() {
        let patterns: Vec<&str> = intent.patterns().collect();
        writeln!(
            output,
            "{:>2}. {} ({}, {})",
            position + 1,
            intent.name(),
            plural(patterns.len(), "pattern"),
            plural(intent.responses().len(), "response")
        )?;
        if show_patterns {
            for pattern in patterns {
                writeln!(output, "      {}", pattern)?;
            }
        }
    }
    Ok(())
}
