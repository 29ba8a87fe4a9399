//! Symbol-slot contract violations.

/// Misuse of a node's symbol slot.
///
/// Both variants mean the resolution pass and its consumers ran out of
/// order. They are never caused by the analyzed source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SymbolError {
    /// The node was already bound; resolution ran twice.
    #[error("symbol already set")]
    AlreadySet,

    /// The node was queried before resolution bound it.
    #[error("symbol not set")]
    NotSet,
}
