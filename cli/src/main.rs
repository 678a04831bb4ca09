//! # SupportBot Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This file is the entry point for the `supportbot` binary. It:
//! - Parses command-line arguments using Clap
//! - Sets up logging based on verbosity flags (`RUST_LOG` takes precedence)
//! - Routes execution to the matching command handler
//!
//! Logs go to stderr so stdout carries nothing but the conversation.
//!
//! ## Examples
//!
//! ```bash
//! # Start chatting (same as `supportbot chat`)
//! supportbot
//!
//! # One question, reproducible reply, with match details
//! supportbot --seed 1 ask --explain "where is your office?"
//!
//! # Show the catalog in priority order
//! supportbot -v intents --patterns
//! ```
//!
use clap::{Parser, Subcommand};
use supportbot::commands::{self, context::BotArgs};
use tracing_subscriber::{fmt, EnvFilter};

/// Top-level command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "supportbot",
    about = "Terminal customer-support chatbot",
    long_about = "Answers customer questions by matching them against a catalog of intents.\n\
                  Unrecognized questions are recorded in an append-only log.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(flatten)]
    bot: BotArgs,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start an interactive conversation (default).
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    /// Answer a single question and exit.
    #[command(alias = "a")]
    Ask(commands::ask::AskArgs),
    /// List intents in match-priority order.
    #[command(alias = "i")]
    Intents(commands::intents::IntentsArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command = cli
        .command
        .unwrap_or_else(|| Commands::Chat(Default::default()));
    let command_result = match command {
        Commands::Chat(args) => commands::chat::handle_chat(args, &cli.bot),
        Commands::Ask(args) => commands::ask::handle_ask(args, &cli.bot),
        Commands::Intents(args) => commands::intents::handle_intents(args, &cli.bot),
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
