//! Base configuration record.
//!
//! Every field is resolved once at startup from its environment variable
//! (see [`super::loading`]) or from the literal default in [`super::defaults`].

use serde::Serialize;
use std::path::PathBuf;

/// Process-wide operational parameters.
///
/// Built once by [`BaseConfig::from_env`](super::loading) and shared by
/// reference with every consumer. Nothing mutates it after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaseConfig {
    // API
    /// Port the agent API listens on (`API_PORT`).
    pub api_port: u16,
    /// Upstream LLM proxy URL (`PROXY_URL`). Empty means unset.
    pub proxy_url: String,
    /// Model name (secret `model_name`, then `MODEL_NAME`).
    pub model: String,
    /// Sampling temperature (`MODEL_TEMPERATURE`).
    pub temperature: f64,

    // Agent
    /// Maximum tool-use iterations per request (`MAX_ITERATIONS`).
    pub max_iterations: u32,
    pub max_history: u32,
    /// Maximum characters of tool output fed back to the model.
    pub max_tool_output: usize,
    pub max_context_messages: u32,
    pub max_blocked_commands: u32,

    // Timeouts
    pub tool_timeout_secs: u64,
    pub command_timeout_secs: u64,
    pub web_timeout_secs: u64,

    // Storage
    pub max_memory_chars: usize,
    pub max_chat_history_chars: usize,
    pub max_chat_messages: u32,

    // Paths
    pub workspace: PathBuf,
    pub shared_dir: PathBuf,

    // Callbacks
    pub bot_url: String,
    pub userbot_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_config_serializes_field_names() {
        let value = serde_json::to_value(BaseConfig::default()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 19);
        assert_eq!(object["api_port"], 4000);
        assert_eq!(object["workspace"], "/workspace");
        assert_eq!(object["bot_url"], "http://bot:4001");
    }
}
