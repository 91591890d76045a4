//! Ordered list of value sources.

use super::traits::ValueSource;
use serde_json::Value;

/// Sources consulted in insertion order; the first one with a value wins.
#[derive(Default)]
pub struct ResolverChain {
    sources: Vec<Box<dyn ValueSource>>,
}

impl ResolverChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a source with lower priority than every source already present.
    pub fn with_source(mut self, source: impl ValueSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Names of the sources, highest priority first.
    pub fn source_names(&self) -> Vec<&'static str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// First present value for `key`.
    pub fn resolve(&self, key: &str) -> Option<Value> {
        self.resolve_with_origin(key).map(|(value, _)| value)
    }

    /// First present value for `key`, with the name of the source that supplied it.
    pub fn resolve_with_origin(&self, key: &str) -> Option<(Value, &'static str)> {
        self.sources
            .iter()
            .find_map(|source| source.lookup(key).map(|value| (value, source.name())))
    }
}

impl std::fmt::Debug for ResolverChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolverChain")
            .field("sources", &self.source_names())
            .finish()
    }
}
