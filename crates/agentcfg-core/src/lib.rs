//! agentcfg-core: Layered configuration for agent services
//!
//! Resolves agent parameters from four layers, highest priority first:
//! admin override document, secret files, environment variables, literal
//! defaults.
//!
//! # Main Entry Points
//!
//! - [`config`] - Base configuration built once from env and secrets
//! - [`accessor`] - Per-read merge of admin overrides over the base config
//! - [`overrides`] - Admin override document loader
//! - [`secrets`] - Container-style secret files
//! - [`resolve`] - Priority chain of value sources

pub mod accessor;
pub mod config;
pub mod errors;
pub mod events;
pub mod logging;
pub mod overrides;
pub mod resolve;
pub mod secrets;

// Re-export commonly used types at crate root for convenience
pub use accessor::{AgentConfig, AgentSnapshot};
pub use config::BaseConfig;
pub use errors::{AgentcfgError, AgentcfgResult, ConfigError, OverrideError};
pub use overrides::AdminOverrides;
pub use resolve::{ResolverChain, ValueSource};
pub use secrets::SecretStore;

// Re-export logging initialization
pub use logging::init_logging;
