//! Sequencing-contract violations on documents and token chains.
//!
//! None of these describe malformed source text. Each one means the scanning
//! driver called into the document in an order the document does not allow,
//! and callers are expected to treat it as an internal engine bug.

use crate::{DocumentId, Span, SpanError, TokenKind};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidState {
    /// `open` was called on a document that already has a sentinel.
    #[error("document is already opened")]
    AlreadyOpened,

    /// The text cannot be addressed with `u32` offsets.
    #[error("document text is too large: {0}")]
    TextTooLarge(#[from] SpanError),

    /// A chain query was made before `open`.
    #[error("document has not been opened")]
    NotOpened,

    /// The document is open but the scanner has not linked any token yet.
    #[error("document has no tokens after its sentinel")]
    NoTokens,

    /// A token's successor slot was already filled.
    #[error("{kind:?} token is already linked to a successor")]
    AlreadyLinked { kind: TokenKind },

    /// A token minted by one document was linked into another.
    #[error("token belongs to document {found}, not document {expected}")]
    ForeignToken {
        expected: DocumentId,
        found: DocumentId,
    },

    /// A token's span is reversed or runs past the end of the text.
    #[error("token span {span} falls outside document of length {len}")]
    OutOfBounds { span: Span, len: u32 },

    /// A token would start before its predecessor ends.
    #[error("token starting at {start} cannot follow a token ending at {previous_end}")]
    OutOfOrder { previous_end: u32, start: u32 },
}
