//! Building the base configuration from the environment.
//!
//! Resolution order per field:
//! 1. **Secret file** - only for the model name (`model_name`)
//! 2. **Environment variable** - parsed to the field's type
//! 3. **Literal default** - from [`super::defaults`]
//!
//! A variable that is set but fails to parse is a startup error. It is never
//! replaced by the default.

use crate::config::defaults::*;
use crate::config::types::BaseConfig;
use crate::errors::ConfigError;
use crate::secrets::SecretStore;
use std::path::PathBuf;
use std::str::FromStr;

/// Environment variable names, one per base configuration field.
pub mod vars {
    pub const API_PORT: &str = "API_PORT";
    pub const PROXY_URL: &str = "PROXY_URL";
    pub const MODEL_NAME: &str = "MODEL_NAME";
    pub const MODEL_TEMPERATURE: &str = "MODEL_TEMPERATURE";
    pub const MAX_ITERATIONS: &str = "MAX_ITERATIONS";
    pub const MAX_HISTORY: &str = "MAX_HISTORY";
    pub const MAX_TOOL_OUTPUT: &str = "MAX_TOOL_OUTPUT";
    pub const MAX_CONTEXT_MESSAGES: &str = "MAX_CONTEXT_MESSAGES";
    pub const MAX_BLOCKED_COMMANDS: &str = "MAX_BLOCKED_COMMANDS";
    pub const TOOL_TIMEOUT: &str = "TOOL_TIMEOUT";
    pub const COMMAND_TIMEOUT: &str = "COMMAND_TIMEOUT";
    pub const WEB_TIMEOUT: &str = "WEB_TIMEOUT";
    pub const MAX_MEMORY_CHARS: &str = "MAX_MEMORY_CHARS";
    pub const MAX_CHAT_HISTORY_CHARS: &str = "MAX_CHAT_HISTORY_CHARS";
    pub const MAX_CHAT_MESSAGES: &str = "MAX_CHAT_MESSAGES";
    pub const WORKSPACE: &str = "WORKSPACE";
    pub const SHARED_DIR: &str = "SHARED_DIR";
    pub const BOT_URL: &str = "BOT_URL";
    pub const USERBOT_URL: &str = "USERBOT_URL";
}

/// Secret holding the model name. Takes priority over `MODEL_NAME`.
pub const MODEL_SECRET: &str = "model_name";

const EXPECTED_PORT: &str = "a port number (0-65535)";
const EXPECTED_COUNT: &str = "a non-negative integer";
const EXPECTED_SECONDS: &str = "a whole number of seconds";
const EXPECTED_FLOAT: &str = "a floating-point number";

impl BaseConfig {
    /// Build the base configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnvVar`] if any numeric variable is set
    /// but does not parse.
    pub fn from_env(secrets: &SecretStore) -> Result<Self, ConfigError> {
        Self::from_lookup(secrets, |name| {
            std::env::var_os(name).map(|raw| {
                raw.into_string()
                    .unwrap_or_else(|raw| raw.to_string_lossy().into_owned())
            })
        })
    }

    /// Build the base configuration from an arbitrary variable lookup.
    ///
    /// `lookup` returns `None` for unset variables.
    pub fn from_lookup<F>(secrets: &SecretStore, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            api_port: parse_var(&lookup, vars::API_PORT, DEFAULT_API_PORT, EXPECTED_PORT)?,
            proxy_url: string_var(&lookup, vars::PROXY_URL, DEFAULT_PROXY_URL),
            model: resolve_model(secrets, &lookup),
            temperature: parse_var(
                &lookup,
                vars::MODEL_TEMPERATURE,
                DEFAULT_TEMPERATURE,
                EXPECTED_FLOAT,
            )?,
            max_iterations: parse_var(
                &lookup,
                vars::MAX_ITERATIONS,
                DEFAULT_MAX_ITERATIONS,
                EXPECTED_COUNT,
            )?,
            max_history: parse_var(&lookup, vars::MAX_HISTORY, DEFAULT_MAX_HISTORY, EXPECTED_COUNT)?,
            max_tool_output: parse_var(
                &lookup,
                vars::MAX_TOOL_OUTPUT,
                DEFAULT_MAX_TOOL_OUTPUT,
                EXPECTED_COUNT,
            )?,
            max_context_messages: parse_var(
                &lookup,
                vars::MAX_CONTEXT_MESSAGES,
                DEFAULT_MAX_CONTEXT_MESSAGES,
                EXPECTED_COUNT,
            )?,
            max_blocked_commands: parse_var(
                &lookup,
                vars::MAX_BLOCKED_COMMANDS,
                DEFAULT_MAX_BLOCKED_COMMANDS,
                EXPECTED_COUNT,
            )?,
            tool_timeout_secs: parse_var(
                &lookup,
                vars::TOOL_TIMEOUT,
                DEFAULT_TOOL_TIMEOUT_SECS,
                EXPECTED_SECONDS,
            )?,
            command_timeout_secs: parse_var(
                &lookup,
                vars::COMMAND_TIMEOUT,
                DEFAULT_COMMAND_TIMEOUT_SECS,
                EXPECTED_SECONDS,
            )?,
            web_timeout_secs: parse_var(
                &lookup,
                vars::WEB_TIMEOUT,
                DEFAULT_WEB_TIMEOUT_SECS,
                EXPECTED_SECONDS,
            )?,
            max_memory_chars: parse_var(
                &lookup,
                vars::MAX_MEMORY_CHARS,
                DEFAULT_MAX_MEMORY_CHARS,
                EXPECTED_COUNT,
            )?,
            max_chat_history_chars: parse_var(
                &lookup,
                vars::MAX_CHAT_HISTORY_CHARS,
                DEFAULT_MAX_CHAT_HISTORY_CHARS,
                EXPECTED_COUNT,
            )?,
            max_chat_messages: parse_var(
                &lookup,
                vars::MAX_CHAT_MESSAGES,
                DEFAULT_MAX_CHAT_MESSAGES,
                EXPECTED_COUNT,
            )?,
            workspace: PathBuf::from(string_var(&lookup, vars::WORKSPACE, DEFAULT_WORKSPACE)),
            shared_dir: PathBuf::from(string_var(&lookup, vars::SHARED_DIR, DEFAULT_SHARED_DIR)),
            bot_url: string_var(&lookup, vars::BOT_URL, DEFAULT_BOT_URL),
            userbot_url: string_var(&lookup, vars::USERBOT_URL, DEFAULT_USERBOT_URL),
        };

        tracing::info!(
            event = "core.config.base_loaded",
            api_port = config.api_port,
            max_iterations = config.max_iterations,
            workspace = %config.workspace.display()
        );

        Ok(config)
    }
}

/// Secret first, then `MODEL_NAME`, then the literal default.
fn resolve_model<F>(secrets: &SecretStore, lookup: &F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let sources: [&dyn Fn() -> Option<String>; 2] = [
        &|| secrets.lookup(MODEL_SECRET),
        &|| lookup(vars::MODEL_NAME),
    ];

    sources
        .iter()
        .find_map(|source| source())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string())
}

fn string_var<F>(lookup: &F, name: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).unwrap_or_else(|| default.to_string())
}

fn parse_var<F, T>(
    lookup: &F,
    name: &'static str,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let Some(value) = lookup(name) else {
        return Ok(default);
    };

    value
        .trim()
        .parse::<T>()
        .map_err(|_| ConfigError::InvalidEnvVar {
            name,
            value,
            expected,
        })
}
