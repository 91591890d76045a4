//! Literal defaults for the base configuration.
//!
//! These are the values used when the corresponding environment variable is
//! unset. A variable that is set but malformed never falls back to them.

use crate::config::types::BaseConfig;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_PORT: u16 = 4000;
pub const DEFAULT_PROXY_URL: &str = "";
pub const DEFAULT_MODEL: &str = "gpt-4";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

pub const DEFAULT_MAX_ITERATIONS: u32 = 30;
pub const DEFAULT_MAX_HISTORY: u32 = 10;
pub const DEFAULT_MAX_TOOL_OUTPUT: usize = 8000;
pub const DEFAULT_MAX_CONTEXT_MESSAGES: u32 = 40;
pub const DEFAULT_MAX_BLOCKED_COMMANDS: u32 = 10;

pub const DEFAULT_TOOL_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_COMMAND_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_WEB_TIMEOUT_SECS: u64 = 30;

pub const DEFAULT_MAX_MEMORY_CHARS: usize = 4000;
pub const DEFAULT_MAX_CHAT_HISTORY_CHARS: usize = 15000;
pub const DEFAULT_MAX_CHAT_MESSAGES: u32 = 200;

pub const DEFAULT_WORKSPACE: &str = "/workspace";
pub const DEFAULT_SHARED_DIR: &str = "/workspace/_shared";

pub const DEFAULT_BOT_URL: &str = "http://bot:4001";
pub const DEFAULT_USERBOT_URL: &str = "http://userbot:8080";

impl Default for BaseConfig {
    fn default() -> Self {
        Self {
            api_port: DEFAULT_API_PORT,
            proxy_url: DEFAULT_PROXY_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            max_history: DEFAULT_MAX_HISTORY,
            max_tool_output: DEFAULT_MAX_TOOL_OUTPUT,
            max_context_messages: DEFAULT_MAX_CONTEXT_MESSAGES,
            max_blocked_commands: DEFAULT_MAX_BLOCKED_COMMANDS,
            tool_timeout_secs: DEFAULT_TOOL_TIMEOUT_SECS,
            command_timeout_secs: DEFAULT_COMMAND_TIMEOUT_SECS,
            web_timeout_secs: DEFAULT_WEB_TIMEOUT_SECS,
            max_memory_chars: DEFAULT_MAX_MEMORY_CHARS,
            max_chat_history_chars: DEFAULT_MAX_CHAT_HISTORY_CHARS,
            max_chat_messages: DEFAULT_MAX_CHAT_MESSAGES,
            workspace: PathBuf::from(DEFAULT_WORKSPACE),
            shared_dir: PathBuf::from(DEFAULT_SHARED_DIR),
            bot_url: DEFAULT_BOT_URL.to_string(),
            userbot_url: DEFAULT_USERBOT_URL.to_string(),
        }
    }
}

impl BaseConfig {
    pub fn tool_timeout(&self) -> Duration {
        Duration::from_secs(self.tool_timeout_secs)
    }

    pub fn command_timeout(&self) -> Duration {
        Duration::from_secs(self.command_timeout_secs)
    }

    pub fn web_timeout(&self) -> Duration {
        Duration::from_secs(self.web_timeout_secs)
    }
}
