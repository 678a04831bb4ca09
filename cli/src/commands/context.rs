//! # SupportBot Command Context
//!
//! File: cli/src/commands/context.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Every command needs the same startup work: load the configuration, apply
//! command-line overrides, load and compile the intent catalog, and wire a
//! `Responder` to the configured log sink and random source. `BotContext`
//! does that once so the command handlers stay small.
//!
//! Catalog problems (bad TOML, invalid regex, duplicate names) surface here as
//! errors, which makes the process exit before the first prompt.
//!
use crate::core::config::{self, Config};
use crate::core::error::Result;
use crate::intents::{
    Catalog, CompiledCatalog, FileUnknownLog, NullUnknownLog, Responder, UnknownQueryLog,
};
use anyhow::Context;
use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct BotArgs {
    /// Read configuration from this file instead of the user/project config files.
    #[arg(long, global = true, env = "SUPPORTBOT_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Load intents from a TOML catalog file instead of the built-in set.
    #[arg(long, global = true, env = "SUPPORTBOT_CATALOG", value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Append unmatched queries to this file.
    #[arg(long, global = true, env = "SUPPORTBOT_LOG_FILE", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Do not record unmatched queries. Takes precedence over `--log-file`.
    #[arg(long, global = true)]
    pub no_log: bool,

    /// Seed the response picker so replies are reproducible.
    #[arg(long, global = true, value_name = "N")]
    pub seed: Option<u64>,
}

/// Loaded configuration plus the compiled catalog.
#[derive(Debug)]
pub struct BotContext {
    config: Config,
    catalog: CompiledCatalog,
}

/// The log sink type every command works with.
pub type BoxedLog = Box<dyn UnknownQueryLog>;

impl BotContext {
    /// Loads configuration and catalog, applying the command-line overrides.
    pub fn load(args: &BotArgs) -> Result<Self> {
        let mut config = config::load_config(args.config.as_deref())?;
        apply_overrides(&mut config, args);
        debug!("Effective configuration: {:?}", config);
        Self::from_config(config)
    }

    /// Builds the context from an already resolved configuration.
    pub fn from_config(config: Config) -> Result<Self> {
        let catalog = match &config.catalog.path {
            Some(path) => Catalog::load(Path::new(path))?,
            None => {
                debug!("Using built-in intent catalog");
                Catalog::builtin()
            }
        };
        let catalog =
            CompiledCatalog::compile(&catalog).context("Failed to compile intent patterns")?;
        info!("Ready with {} intents", catalog.intents().len());
        Ok(Self { config, catalog })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn catalog(&self) -> &CompiledCatalog {
        &self.catalog
    }

    pub fn bot_name(&self) -> &str {
        &self.config.chat.bot_name
    }

    /// A responder wired to the configured sink, seed and fallback text.
    pub fn responder(&self) -> Responder<'_, BoxedLog, StdRng> {
        let log: BoxedLog = if self.config.unknown_log.enabled {
            debug!("Unknown queries go to {}", self.config.unknown_log.path);
            Box::new(FileUnknownLog::new(&self.config.unknown_log.path))
        } else {
            debug!("Unknown query logging disabled");
            Box::new(NullUnknownLog)
        };
        let rng = match self.config.chat.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Responder::new(&self.catalog, log, rng)
            .with_fallback(self.config.chat.fallback_response.clone())
    }
}

/// Command-line flags win over anything loaded from files.
fn apply_overrides(config: &mut Config, args: &BotArgs) {
    if let Some(catalog) = &args.catalog {
        config.catalog.path = Some(catalog.to_string_lossy().into_owned());
    }
    if let Some(log_file) = &args.log_file {
        config.unknown_log.path = log_file.to_string_lossy().into_owned();
        config.unknown_log.enabled = true;
    }
    if args.no_log {
        config.unknown_log.enabled = false;
    }
    if args.seed.is_some() {
        config.chat.seed = args.seed;
    }
}
