//! # Base Configuration
//!
//! Immutable record of operational parameters (ports, timeouts, size limits,
//! paths, callback URLs), built once at process start.
//!
//! ## Resolution Order
//!
//! For each field (later sources are only consulted when earlier ones are absent):
//! 1. **Secret file** - `/run/secrets/model_name[.txt]`, model name only
//! 2. **Environment variable** - e.g. `API_PORT`, `MAX_ITERATIONS`
//! 3. **Hardcoded defaults** - see [`defaults`]
//!
//! Admin overrides are not applied here; they are read on every access by
//! [`crate::accessor::AgentConfig`].
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use agentcfg_core::config::BaseConfig;
//! use agentcfg_core::secrets::SecretStore;
//! use std::sync::Arc;
//!
//! // A malformed variable is a startup error - don't fall back to defaults
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let base = Arc::new(BaseConfig::from_env(&SecretStore::default())?);
//!     println!("listening on {}", base.api_port);
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;

pub use loading::{MODEL_SECRET, vars};
pub use types::BaseConfig;
