//! # SupportBot Interactive Chat
//!
//! File: cli/src/commands/chat.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements `supportbot chat` (also the default when no subcommand is
//! given): a read-print loop over standard input.
//!
//! ```bash
//! $ supportbot
//! Welcome to Customer Support Chatbot! (Type 'bye' or 'exit' to quit.)
//! You: hi
//! Chatbot: Hello!
//! You: exit
//! Chatbot: Thank you! Goodbye!
//! ```
//!
//! The loop ends when the whole line, trimmed and lower-cased, is exactly
//! `bye` or `exit`, or when input reaches end-of-file. Note that "bye" inside
//! a longer sentence is just another utterance (it matches `farewell`).
//!
//! `run_chat` is generic over `BufRead`/`Write` so it can be driven from tests
//! without a terminal.
//!
use crate::commands::context::{BotArgs, BotContext};
use crate::core::error::Result;
use crate::intents::{normalize, Responder, UnknownQueryLog};
use anyhow::Context;
use clap::Args;
use rand::Rng;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// Arguments for the `chat` subcommand.
#[derive(Args, Debug, Default, Clone)]
pub struct ChatArgs {
    /// Skip the welcome banner.
    #[arg(long, short)]
    pub quiet: bool,
}

const WELCOME: &str = "Welcome to Customer Support Chatbot! (Type 'bye' or 'exit' to quit.)";
const GOODBYE: &str = "Thank you! Goodbye!";
const PROMPT: &str = "You: ";

/// Entry point for `supportbot chat`.
pub fn handle_chat(args: ChatArgs, bot: &BotArgs) -> Result<()> {
    info!("Handling chat command with args: {:?}", args);
    let context = BotContext::load(bot)?;
    let mut responder = context.responder();

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_chat(
        &mut responder,
        context.bot_name(),
        stdin.lock(),
        stdout.lock(),
        !args.quiet,
    )
}

/// `true` for the exact words that end the conversation.
pub fn is_exit_command(line: &str) -> bool {
    matches!(normalize(line).as_str(), "bye" | "exit")
}

/// Runs the conversation until an exit word or end of input.
pub fn run_chat<L, R, I, O>(
    responder: &mut Responder<'_, L, R>,
    bot_name: &str,
    mut input: I,
    mut output: O,
    welcome: bool,
) -> Result<()>
where
    L: UnknownQueryLog,
    R: Rng,
    I: BufRead,
    O: Write,
{
    if welcome {
        writeln!(output, "{}", WELCOME)?;
    }

    let mut buf = Vec::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush().context("Failed to flush stdout")?;

        buf.clear();
        let read = input
            .read_until(b'\n', &mut buf)
            .context("Failed to read from stdin")?;
        if read == 0 {
            debug!("End of input, leaving chat");
            writeln!(output)?;
            break;
        }

        // Undecodable bytes become U+FFFD; the line is still an utterance.
        let line = String::from_utf8_lossy(&buf);
        let utterance = line.trim_end_matches(['\n', '\r']);
        if is_exit_command(utterance) {
            break;
        }

        let reply = responder.reply(utterance);
        writeln!(output, "{}: {}", bot_name, reply)?;
    }

    writeln!(output, "{}: {}", bot_name, GOODBYE)?;
    output.flush()?;
    Ok(())
}
