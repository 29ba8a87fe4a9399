//! Shared state of callable declaration nodes.
//!
//! Every method or constructor declaration embeds a [`NodeBase`]. It holds
//! two slots with different lifecycles:
//!
//! - the symbol, bound exactly once by the resolution pass. Binding needs
//!   `&mut`, since resolution owns the subtree it walks.
//! - the signature, computed on first request and cached. Requests come
//!   through `&self` and may race from several threads; only one
//!   computation is ever stored.

use std::fmt;
use std::sync::{Arc, OnceLock};

use tracing::debug;

use crate::{ExecutableSymbol, OperationSignature, SymbolError};

/// Symbol slot of a declaration node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SymbolSlot<S> {
    Unbound,
    Bound(Arc<S>),
}

impl<S> Default for SymbolSlot<S> {
    fn default() -> Self {
        SymbolSlot::Unbound
    }
}

pub struct NodeBase<S: ExecutableSymbol> {
    symbol: SymbolSlot<S>,
    signature: OnceLock<OperationSignature>,
}

impl<S: ExecutableSymbol> NodeBase<S> {
    pub fn new() -> Self {
        NodeBase {
            symbol: SymbolSlot::Unbound,
            signature: OnceLock::new(),
        }
    }

    /// Bind the resolved symbol.
    ///
    /// # Errors
    ///
    /// [`SymbolError::AlreadySet`] if a symbol is already bound. The first
    /// symbol stays in place.
    pub fn set_symbol(&mut self, symbol: Arc<S>) -> Result<(), SymbolError> {
        if let SymbolSlot::Bound(existing) = &self.symbol {
            debug!(
                existing = existing.name(),
                rejected = symbol.name(),
                "symbol rebinding rejected"
            );
            return Err(SymbolError::AlreadySet);
        }
        debug!(symbol = symbol.name(), arity = symbol.arity(), "bound symbol");
        self.symbol = SymbolSlot::Bound(symbol);
        Ok(())
    }

    /// The bound symbol.
    ///
    /// # Errors
    ///
    /// [`SymbolError::NotSet`] before [`set_symbol`](Self::set_symbol).
    pub fn symbol(&self) -> Result<&Arc<S>, SymbolError> {
        match &self.symbol {
            SymbolSlot::Bound(symbol) => Ok(symbol),
            SymbolSlot::Unbound => Err(SymbolError::NotSet),
        }
    }

    pub fn symbol_slot(&self) -> &SymbolSlot<S> {
        &self.symbol
    }

    pub fn is_bound(&self) -> bool {
        matches!(self.symbol, SymbolSlot::Bound(_))
    }

    /// Cached signature, computing it with `build` on first request.
    ///
    /// `build` runs at most once per node that gets to store its result.
    /// Concurrent first requests block until the winner has stored it.
    pub fn signature_or_init(
        &self,
        build: impl FnOnce() -> OperationSignature,
    ) -> &OperationSignature {
        self.signature.get_or_init(build)
    }

    /// Signature if already computed.
    pub fn cached_signature(&self) -> Option<&OperationSignature> {
        self.signature.get()
    }

    pub fn has_signature(&self) -> bool {
        self.signature.get().is_some()
    }
}

impl<S: ExecutableSymbol> Default for NodeBase<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ExecutableSymbol> fmt::Debug for NodeBase<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeBase")
            .field("symbol", &self.symbol)
            .field("signature", &self.signature.get())
            .finish()
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
