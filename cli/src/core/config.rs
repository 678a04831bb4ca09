//! # SupportBot Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module handles loading, merging, validation, and access to the
//! SupportBot configuration. Every setting has a sensible default, so the bot
//! runs with no configuration file at all.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. An explicit file passed with `--config` (used on its own, nothing merged)
//! 2. Project-specific `.supportbot.toml` in the current directory or ancestors
//! 3. User-specific `<config_dir>/supportbot/config.toml`
//! 4. Default values defined in the code
//!
//! Command-line flags (`--catalog`, `--log-file`, `--seed`) are applied on top
//! of the loaded configuration by the command layer.
//!
//! ## Examples
//!
//! ```toml
//! [chat]
//! bot_name = "Helper"
//! seed = 42
//!
//! [unknown_log]
//! path = "~/.local/state/supportbot/unknowns.log"
//!
//! [catalog]
//! path = "./intents.toml"
//! ```
//!
use crate::common::fs::io;
use crate::core::error::{Result, SupportBotError};
use crate::intents::responder::DEFAULT_FALLBACK_RESPONSE;
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub unknown_log: UnknownLogConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Settings for the conversation itself.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ChatConfig {
    /// Name printed in front of every bot reply.
    #[serde(default = "default_bot_name")]
    pub bot_name: String,
    /// Reply used when no intent matches.
    #[serde(default = "default_fallback_response")]
    pub fallback_response: String,
    /// Fixed RNG seed. When set, response selection is reproducible.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Where (and whether) unmatched queries are recorded.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct UnknownLogConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Path of the append-only log file (can use ~). Will be expanded.
    #[serde(default = "default_unknown_log_path")]
    pub path: String,
}

/// Optional replacement for the built-in intent catalog.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    /// Path to a TOML catalog file (can use ~). `None` uses the built-in intents.
    #[serde(default)]
    pub path: Option<String>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            bot_name: default_bot_name(),
            fallback_response: default_fallback_response(),
            seed: None,
        }
    }
}

impl Default for UnknownLogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: default_unknown_log_path(),
        }
    }
}

fn default_bot_name() -> String {
    "Chatbot".to_string()
}
fn default_fallback_response() -> String {
    DEFAULT_FALLBACK_RESPONSE.to_string()
}
fn default_unknown_log_path() -> String {
    "chatbot_unknowns.log".to_string()
}
fn default_true() -> bool {
    true
}

const PROJECT_CONFIG_FILENAME: &str = ".supportbot.toml";

/// Loads the effective configuration.
///
/// With `explicit` set, only that file is read and it must exist. Otherwise
/// the user and project files are merged (project wins) over the defaults.
/// The result has its paths expanded and has been validated.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let mut config = match explicit {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            load_config_from_path(path)?
        }
        None => {
            let user_config = load_user_config()?;
            let project_config = load_project_config()?;
            merge_configs(user_config.unwrap_or_default(), project_config)
        }
    };
    expand_config_paths(&mut config);
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_user_config() -> Result<Option<Config>> {
    let Some(proj_dirs) = ProjectDirs::from("com", "SupportBot", "supportbot") else {
        warn!("Could not determine user config directory.");
        return Ok(None);
    };
    let config_path = proj_dirs.config_dir().join("config.toml");
    if config_path.is_file() {
        info!("Loading user configuration from: {}", config_path.display());
        load_config_from_path(&config_path).map(Some)
    } else {
        debug!(
            "User configuration file not found at {}",
            config_path.display()
        );
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    match find_project_config_path(&current_dir) {
        Some(path) => {
            info!("Loading project configuration from: {}", path.display());
            load_config_from_path(&path).map(Some)
        }
        None => {
            debug!("No {} found in current directory or ancestors.", PROJECT_CONFIG_FILENAME);
            Ok(None)
        }
    }
}

/// Walks from `start` towards the filesystem root looking for the project file.
/// The search stops at the first directory containing `.git`.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = io::read_file_to_string(path)?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Field-by-field merge: a project value wins when it differs from the default.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let Some(project) = project else {
        return user;
    };
    let mut merged = Config::default();
    merged.chat.bot_name = if project.chat.bot_name != default_bot_name() {
        project.chat.bot_name
    } else {
        user.chat.bot_name
    };
    merged.chat.fallback_response =
        if project.chat.fallback_response != default_fallback_response() {
            project.chat.fallback_response
        } else {
            user.chat.fallback_response
        };
    merged.chat.seed = project.chat.seed.or(user.chat.seed);
    // A project can only switch logging off, never back on over a user opt-out.
    merged.unknown_log.enabled = project.unknown_log.enabled && user.unknown_log.enabled;
    merged.unknown_log.path = if project.unknown_log.path != default_unknown_log_path() {
        project.unknown_log.path
    } else {
        user.unknown_log.path
    };
    merged.catalog.path = project.catalog.path.or(user.catalog.path);
    merged
}

fn expand_config_paths(config: &mut Config) {
    config.unknown_log.path = shellexpand::tilde(&config.unknown_log.path).into_owned();
    debug!("Expanded unknown log path: {}", config.unknown_log.path);
    if let Some(catalog_path) = config.catalog.path.as_mut() {
        *catalog_path = shellexpand::tilde(catalog_path).into_owned();
        debug!("Expanded catalog path: {}", catalog_path);
    }
}

/// Rejects settings the chat loop cannot work with.
pub fn validate_config(config: &Config) -> Result<()> {
    if config.chat.bot_name.trim().is_empty() {
        return Err(anyhow!(SupportBotError::Config(
            "chat.bot_name must not be empty.".to_string()
        )));
    }
    if config.chat.fallback_response.trim().is_empty() {
        return Err(anyhow!(SupportBotError::Config(
            "chat.fallback_response must not be empty.".to_string()
        )));
    }
    if config.unknown_log.enabled && config.unknown_log.path.trim().is_empty() {
        return Err(anyhow!(SupportBotError::Config(
            "unknown_log.path must not be empty while unknown_log.enabled is true.".to_string()
        )));
    }
    if let Some(catalog_path) = &config.catalog.path {
        let path = Path::new(catalog_path);
        if !path.is_file() {
            return Err(anyhow!(SupportBotError::Config(format!(
                "Catalog path '{}' does not exist or is not a file.",
                path.display()
            ))));
        }
    }
    debug!("Configuration validation successful.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_deserialize_basic_toml() {
        let toml_content = r#"
            [chat]
            bot_name = "Helper"
            seed = 7

            [unknown_log]
            path = "~/logs/unknowns.log"
        "#;

        let config: Config = toml::from_str(toml_content).expect("Failed to parse TOML");

        assert_eq!(config.chat.bot_name, "Helper");
        assert_eq!(config.chat.seed, Some(7));
        assert_eq!(config.chat.fallback_response, DEFAULT_FALLBACK_RESPONSE);
        assert!(config.unknown_log.enabled);
        assert_eq!(config.unknown_log.path, "~/logs/unknowns.log"); // Not yet expanded
        assert_eq!(config.catalog.path, None);
    }

    #[test]
    fn test_empty_toml_matches_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.chat.bot_name, "Chatbot");
        assert_eq!(config.unknown_log.path, "chatbot_unknowns.log");
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: std::result::Result<Config, _> = toml::from_str("[chat]\ncolour = \"red\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_merge_project_overrides_user() {
        let user = Config {
            chat: ChatConfig {
                bot_name: "UserBot".into(),
                seed: Some(1),
                ..Default::default()
            },
            catalog: CatalogConfig {
                path: Some("/user/catalog.toml".into()),
            },
            ..Default::default()
        };
        let project = Config {
            chat: ChatConfig {
                seed: Some(2),
                ..Default::default()
            },
            unknown_log: UnknownLogConfig {
                enabled: true,
                path: "project.log".into(),
            },
            ..Default::default()
        };

        let merged = merge_configs(user, Some(project));

        assert_eq!(merged.chat.bot_name, "UserBot"); // project left the default
        assert_eq!(merged.chat.seed, Some(2));
        assert_eq!(merged.unknown_log.path, "project.log");
        assert_eq!(merged.catalog.path.as_deref(), Some("/user/catalog.toml"));
    }

    #[test]
    fn test_merge_without_project_returns_user() {
        let user = Config {
            unknown_log: UnknownLogConfig {
                enabled: false,
                path: "x.log".into(),
            },
            ..Default::default()
        };
        assert_eq!(merge_configs(user.clone(), None), user);
    }

    #[test]
    fn test_path_expansion() {
        let mut config = Config {
            unknown_log: UnknownLogConfig {
                enabled: true,
                path: "~/unknowns.log".into(),
            },
            catalog: CatalogConfig {
                path: Some("/absolute/catalog.toml".into()),
            },
            ..Default::default()
        };

        expand_config_paths(&mut config);

        assert!(!config.unknown_log.path.starts_with('~'));
        assert!(config.unknown_log.path.ends_with("unknowns.log"));
        assert_eq!(config.catalog.path.as_deref(), Some("/absolute/catalog.toml"));
    }

    #[test]
    fn test_validate_config_valid() {
        let temp_dir = tempdir().unwrap();
        let catalog = temp_dir.path().join("catalog.toml");
        fs::write(&catalog, "").unwrap();

        let config = Config {
            catalog: CatalogConfig {
                path: Some(catalog.to_string_lossy().to_string()),
            },
            ..Default::default()
        };
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_config_empty_bot_name() {
        let config = Config {
            chat: ChatConfig {
                bot_name: "   ".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("bot_name"));
    }

    #[test]
    fn test_validate_config_empty_log_path_only_matters_when_enabled() {
        let mut config = Config {
            unknown_log: UnknownLogConfig {
                enabled: true,
                path: String::new(),
            },
            ..Default::default()
        };
        assert!(validate_config(&config).is_err());

        config.unknown_log.enabled = false;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_config_catalog_path_is_dir() {
        let temp_dir = tempdir().unwrap();
        let config = Config {
            catalog: CatalogConfig {
                path: Some(temp_dir.path().to_string_lossy().to_string()),
            },
            ..Default::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("is not a file"));
    }

    #[test]
    fn test_find_project_config_stops_at_git() {
        let root = tempdir().unwrap();
        fs::write(root.path().join(PROJECT_CONFIG_FILENAME), "").unwrap();
        let repo = root.path().join("repo");
        let nested = repo.join("src");
        fs::create_dir_all(repo.join(".git")).unwrap();
        fs::create_dir_all(&nested).unwrap();

        // The file above the repository root must not be picked up.
        assert_eq!(find_project_config_path(&nested), None);

        fs::write(repo.join(PROJECT_CONFIG_FILENAME), "").unwrap();
        assert_eq!(
            find_project_config_path(&nested),
            Some(repo.join(PROJECT_CONFIG_FILENAME))
        );
    }

    #[test]
    fn test_load_config_explicit_path() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("bot.toml");
        fs::write(&path, "[chat]\nbot_name = \"Ava\"\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.chat.bot_name, "Ava");
    }

    #[test]
    fn test_load_config_explicit_path_missing() {
        let temp_dir = tempdir().unwrap();
        let result = load_config(Some(&temp_dir.path().join("missing.toml")));
        assert!(result.is_err());
    }
}
