//! Priority chain of configuration sources.
//!
//! - [`ValueSource`] - Trait implemented by each layer (admin overrides, base config)
//! - [`ResolverChain`] - Ordered list of sources; first present value wins
//!
//! Adding a new override layer means inserting a source into the chain, not
//! touching merge logic.

pub mod chain;
pub mod traits;

pub use chain::ResolverChain;
pub use traits::ValueSource;
