//! Tokens and the forward token chain.
//!
//! A chain is a singly linked list rooted at a document's sentinel. Every
//! token exclusively owns its successor through a write-once slot, so links
//! cannot be rewritten and the chain cannot form a cycle. Callers reach
//! tokens through [`TokenRef`], which pairs the token with its document.

use std::borrow::Cow;
use std::fmt;
use std::iter::FusedIterator;
use std::sync::OnceLock;

use crate::error::InvalidState;
use crate::{DocumentId, LineCol, Span, TokenDocument, TokenKind};

/// Immutable record of one lexical unit.
///
/// Created by [`TokenDocument::create_token`], then handed to
/// [`TokenRef::link`] to become part of a chain.
pub struct Token {
    kind: TokenKind,
    image: Cow<'static, str>,
    span: Span,
    document: DocumentId,
    next: OnceLock<Box<Token>>,
}

impl Token {
    pub(crate) fn new(
        kind: TokenKind,
        image: Cow<'static, str>,
        span: Span,
        document: DocumentId,
    ) -> Self {
        Token {
            kind,
            image,
            span,
            document,
            next: OnceLock::new(),
        }
    }

    /// Zero-width sentinel at `offset`.
    pub(crate) fn implicit(offset: u32, document: DocumentId) -> Self {
        Token::new(
            TokenKind::IMPLICIT,
            Cow::Borrowed(""),
            Span::point(offset),
            document,
        )
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The literal lexeme.
    #[inline]
    pub fn image(&self) -> &str {
        &self.image
    }

    /// Returns `true` when the image is a shared constant rather than text
    /// copied out of the stream.
    #[inline]
    pub fn has_shared_image(&self) -> bool {
        matches!(self.image, Cow::Borrowed(_))
    }

    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    #[inline]
    pub fn start(&self) -> u32 {
        self.span.start
    }

    #[inline]
    pub fn end(&self) -> u32 {
        self.span.end
    }

    #[inline]
    pub fn is_implicit(&self) -> bool {
        self.kind.is_implicit()
    }

    /// Id of the document that created this token.
    #[inline]
    pub fn document_id(&self) -> DocumentId {
        self.document
    }

    #[inline]
    pub fn is_linked(&self) -> bool {
        self.next.get().is_some()
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?} @ {}", self.kind, self.image, self.span)
    }
}

// Dropping a boxed list recursively would use one stack frame per token.
impl Drop for Token {
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut token) = next {
            next = token.next.take();
        }
    }
}

/// A token together with the document that owns its chain.
///
/// Copyable and cheap. Two refs are equal only when they point at the same
/// token: tokens with identical kind and text at different offsets stay
/// distinct.
#[derive(Copy, Clone)]
pub struct TokenRef<'doc> {
    token: &'doc Token,
    document: &'doc TokenDocument,
}

impl<'doc> TokenRef<'doc> {
    pub(crate) fn new(token: &'doc Token, document: &'doc TokenDocument) -> Self {
        TokenRef { token, document }
    }

    #[inline]
    pub fn token(self) -> &'doc Token {
        self.token
    }

    #[inline]
    pub fn document(self) -> &'doc TokenDocument {
        self.document
    }

    #[inline]
    pub fn kind(self) -> TokenKind {
        self.token.kind
    }

    #[inline]
    pub fn image(self) -> &'doc str {
        self.token.image()
    }

    #[inline]
    pub fn span(self) -> Span {
        self.token.span
    }

    #[inline]
    pub fn start(self) -> u32 {
        self.token.start()
    }

    #[inline]
    pub fn end(self) -> u32 {
        self.token.end()
    }

    #[inline]
    pub fn is_implicit(self) -> bool {
        self.token.is_implicit()
    }

    /// The document text this token covers.
    ///
    /// Equal to [`image`](Self::image) whenever the scanner's image matches
    /// its offsets.
    pub fn source_text(self) -> &'doc str {
        self.document.text().get(self.span().to_range()).unwrap_or_default()
    }

    /// Human-readable label of this token's kind.
    pub fn describe_kind(self) -> Cow<'doc, str> {
        self.document.describe_kind(self.kind())
    }

    /// Line and column of the first byte.
    pub fn begin(self) -> LineCol {
        self.document.line_col(self.start())
    }

    /// Line and column one past the last byte.
    pub fn finish(self) -> LineCol {
        self.document.line_col(self.end())
    }

    /// The successor, or `None` at the tail.
    #[inline]
    pub fn next(self) -> Option<TokenRef<'doc>> {
        self.token
            .next
            .get()
            .map(|next| TokenRef::new(next, self.document))
    }

    /// Iterate from this token to the tail, this token included.
    pub fn chain(self) -> Tokens<'doc> {
        Tokens { next: Some(self) }
    }

    /// Make `token` the successor of this token.
    ///
    /// The token must come from this document, lie within its text, and
    /// start no earlier than this token ends. Returns the linked token so
    /// the scanner can keep appending to it.
    pub fn link(self, token: Token) -> Result<TokenRef<'doc>, InvalidState> {
        if token.document != self.document.id() {
            return Err(InvalidState::ForeignToken {
                expected: self.document.id(),
                found: token.document,
            });
        }
        let len = self.document.len();
        if token.start() > token.end() || token.end() > len {
            return Err(InvalidState::OutOfBounds {
                span: token.span,
                len,
            });
        }
        if token.start() < self.end() {
            return Err(InvalidState::OutOfOrder {
                previous_end: self.end(),
                start: token.start(),
            });
        }

        let kind = self.kind();
        self.token
            .next
            .set(Box::new(token))
            .map_err(|_| InvalidState::AlreadyLinked { kind })?;

        self.next().ok_or(InvalidState::AlreadyLinked { kind })
    }
}

impl PartialEq for TokenRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.token, other.token)
    }
}

impl Eq for TokenRef<'_> {}

impl fmt::Debug for TokenRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.token, f)
    }
}

/// Forward iterator over a token chain.
#[derive(Clone)]
pub struct Tokens<'doc> {
    next: Option<TokenRef<'doc>>,
}

impl<'doc> Tokens<'doc> {
    pub(crate) fn starting_at(next: Option<TokenRef<'doc>>) -> Self {
        Tokens { next }
    }
}

impl<'doc> Iterator for Tokens<'doc> {
    type Item = TokenRef<'doc>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.next();
        Some(current)
    }
}

impl FusedIterator for Tokens<'_> {}

impl fmt::Debug for Tokens<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
