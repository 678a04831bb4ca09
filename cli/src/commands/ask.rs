//! # SupportBot One-Shot Query
//!
//! File: cli/src/commands/ask.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `supportbot ask <TEXT>...` answers a single utterance and exits. Handy for
//! scripts and for checking how a catalog classifies a phrase.
//!
//! ```bash
//! $ supportbot ask --explain "Hi, what are your working hours?"
//! intent: greeting
//! pattern: \bhi\b
//! Hey! How can I help you today?
//! ```
//!
//! Unmatched questions are logged exactly as in the interactive chat.
//!
use crate::commands::context::{BotArgs, BotContext};
use crate::core::error::Result;
use crate::intents::{Responder, UnknownQueryLog, UNKNOWN_INTENT};
use clap::Args;
use rand::Rng;
use std::io::{self, Write};
use tracing::info;

/// Arguments for the `ask` subcommand.
#[derive(Args, Debug)]
pub struct AskArgs {
    /// The utterance. Several words are joined with single spaces.
    #[arg(required = true, num_args = 1.., value_name = "TEXT")]
    pub text: Vec<String>,

    /// Print the matched intent and pattern before the reply.
    #[arg(long)]
    pub explain: bool,
}

/// Entry point for `supportbot ask`.
pub fn handle_ask(args: AskArgs, bot: &BotArgs) -> Result<()> {
    info!("Handling ask command with args: {:?}", args);
    let context = BotContext::load(bot)?;
    let mut responder = context.responder();
    let text = args.text.join(" ");

    let stdout = io::stdout();
    answer(&mut responder, &text, args.explain, stdout.lock())
}

/// Writes the reply for `text`, optionally preceded by the match details.
pub fn answer<L, R, W>(
    responder: &mut Responder<'_, L, R>,
    text: &str,
    explain: bool,
    mut output: W,
) -> Result<()>
where
    L: UnknownQueryLog,
    R: Rng,
    W: Write,
{
    let catalog = responder.catalog();
    let found = catalog.find_match(text);
    let intent = found.map_or(UNKNOWN_INTENT, |m| m.intent);

    if explain {
        writeln!(output, "intent: {}", intent)?;
        if let Some(m) = found {
            writeln!(output, "pattern: {}", m.pattern)?;
        }
    }

    let reply = responder.get_response(intent, text);
    writeln!(output, "{}", reply)?;
    Ok(())
}
