//! Agent configuration accessor.
//!
//! Merges admin overrides over the base configuration at read time. Every call
//! re-reads the override document, so edits made by the admin tooling take
//! effect on the next read without a restart.
//!
//! ```rust,no_run
//! use agentcfg_core::accessor::AgentConfig;
//! use agentcfg_core::config::BaseConfig;
//! use agentcfg_core::overrides::AdminOverrides;
//! use agentcfg_core::secrets::SecretStore;
//! use std::sync::Arc;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let base = Arc::new(BaseConfig::from_env(&SecretStore::default())?);
//!     let agent = AgentConfig::new(base, AdminOverrides::default());
//!     let limit = agent.max_iterations()?;
//!     Ok(())
//! }
//! ```

pub mod coercion;

use crate::config::BaseConfig;
use crate::errors::ConfigError;
use crate::overrides::AdminOverrides;
use crate::resolve::{ResolverChain, ValueSource};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Override key for the model name.
pub const MODEL_KEY: &str = "model";
/// Override key for the sampling temperature.
pub const TEMPERATURE_KEY: &str = "temperature";
/// Override key for the iteration limit.
pub const MAX_ITERATIONS_KEY: &str = "max_iterations";

/// Typed agent parameters resolved together.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentSnapshot {
    pub model: String,
    pub temperature: f64,
    pub max_iterations: u32,
}

/// Read path for agent parameters: admin overrides first, base config second.
#[derive(Debug)]
pub struct AgentConfig {
    base: Arc<BaseConfig>,
    overrides: ResolverChain,
}

impl AgentConfig {
    /// Accessor whose only override layer is the admin document.
    pub fn new(base: Arc<BaseConfig>, admin: AdminOverrides) -> Self {
        Self::with_chain(base, ResolverChain::new().with_source(admin))
    }

    /// Accessor with an arbitrary chain of override layers.
    pub fn with_chain(base: Arc<BaseConfig>, overrides: ResolverChain) -> Self {
        Self { base, overrides }
    }

    pub fn base(&self) -> &BaseConfig {
        &self.base
    }

    pub fn overrides(&self) -> &ResolverChain {
        &self.overrides
    }

    /// Override value for `key`, or `default` unchanged.
    ///
    /// No type checking happens here; an override of any JSON type wins.
    pub fn get(&self, key: &str, default: Value) -> Value {
        self.overrides.resolve(key).unwrap_or(default)
    }

    /// Effective value for `key` with the name of the layer that supplied it.
    ///
    /// Falls back to the base config field of the same name. Returns `None`
    /// for keys neither layer knows.
    pub fn effective(&self, key: &str) -> Option<(Value, &'static str)> {
        self.overrides
            .resolve_with_origin(key)
            .or_else(|| self.base.lookup(key).map(|value| (value, self.base.name())))
    }

    /// Current model name.
    ///
    /// # Errors
    ///
    /// Fails if the override is present but not a string.
    pub fn model(&self) -> Result<String, ConfigError> {
        match self.overrides.resolve(MODEL_KEY) {
            Some(value) => coercion::to_string(MODEL_KEY, &value),
            None => Ok(self.base.model.clone()),
        }
    }

    /// Current sampling temperature.
    ///
    /// # Errors
    ///
    /// Fails if the override is present but not numerically convertible.
    pub fn temperature(&self) -> Result<f64, ConfigError> {
        match self.overrides.resolve(TEMPERATURE_KEY) {
            Some(value) => coercion::to_f64(TEMPERATURE_KEY, &value),
            None => Ok(self.base.temperature),
        }
    }

    /// Current iteration limit.
    ///
    /// # Errors
    ///
    /// Fails if the override is present but not a non-negative integer.
    pub fn max_iterations(&self) -> Result<u32, ConfigError> {
        match self.overrides.resolve(MAX_ITERATIONS_KEY) {
            Some(value) => coercion::to_u32(MAX_ITERATIONS_KEY, &value),
            None => Ok(self.base.max_iterations),
        }
    }

    /// All typed agent parameters.
    ///
    /// Each one re-reads the override document, so a concurrent edit can land
    /// between fields.
    pub fn snapshot(&self) -> Result<AgentSnapshot, ConfigError> {
        Ok(AgentSnapshot {
            model: self.model()?,
            temperature: self.temperature()?,
            max_iterations: self.max_iterations()?,
        })
    }
}
