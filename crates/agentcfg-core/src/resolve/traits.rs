//! Value source trait definition.

use crate::config::BaseConfig;
use crate::overrides::AdminOverrides;
use serde_json::Value;

/// A single layer in a [`ResolverChain`](super::ResolverChain).
///
/// Each source answers "do you have a value for this key?" and nothing else.
/// Precedence is decided by the chain, not by the source.
pub trait ValueSource: Send + Sync {
    /// Short name reported alongside resolved values (e.g. "admin", "base").
    fn name(&self) -> &'static str;

    /// Look up `key`, returning `None` when this source has no value for it.
    fn lookup(&self, key: &str) -> Option<Value>;
}

impl ValueSource for AdminOverrides {
    fn name(&self) -> &'static str {
        "admin"
    }

    fn lookup(&self, key: &str) -> Option<Value> {
        self.agent_section().remove(key)
    }
}

impl ValueSource for BaseConfig {
    fn name(&self) -> &'static str {
        "base"
    }

    fn lookup(&self, key: &str) -> Option<Value> {
        match serde_json::to_value(self).ok()? {
            Value::Object(mut fields) => fields.remove(key),
            _ => None,
        }
    }
}
