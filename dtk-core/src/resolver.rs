//! Reference resolution capability.
//!
//! The emitter never looks references up itself. Whoever owns the token
//! dictionary injects a [`ReferenceResolver`], and every typography field goes
//! through it, literal or not.

use crate::error::Result;
use crate::token::{DesignToken, TokenValue};

/// Dereferences a token field to its literal value.
///
/// Implementations must be idempotent and total over the values they are
/// given: a literal resolves to itself.
pub trait ReferenceResolver: Send + Sync {
    fn resolve(&self, value: &TokenValue) -> Result<TokenValue>;
}

/// Resolver for token sets that were resolved upstream. Returns every value
/// unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiteralResolver;

impl ReferenceResolver for LiteralResolver {
    fn resolve(&self, value: &TokenValue) -> Result<TokenValue> {
        Ok(value.clone())
    }
}

impl<F> ReferenceResolver for F
where
    F: Fn(&TokenValue) -> Result<TokenValue> + Send + Sync,
{
    fn resolve(&self, value: &TokenValue) -> Result<TokenValue> {
        self(value)
    }
}

/// The external token dictionary: ordered tokens plus the ability to resolve
/// references between them.
pub trait TokenSource: ReferenceResolver {
    /// All tokens, in the dictionary's order.
    fn all_tokens(&self) -> Vec<DesignToken>;
}
