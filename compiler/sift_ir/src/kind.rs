//! Lexical kind codes and per-language kind naming.
//!
//! Kind codes are opaque integers chosen by each language's grammar. The
//! only value this crate reserves is [`TokenKind::IMPLICIT`], carried by the
//! sentinel token at the head of every chain.

use std::fmt;

use rustc_hash::FxHashMap;

/// Lexical kind code of a token.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct TokenKind(i32);

impl TokenKind {
    /// Synthetic kind of the chain sentinel. Never produced by a scanner.
    pub const IMPLICIT: TokenKind = TokenKind(-1);

    #[inline]
    pub const fn new(raw: i32) -> Self {
        TokenKind(raw)
    }

    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    #[inline]
    pub const fn is_implicit(self) -> bool {
        self.0 == Self::IMPLICIT.0
    }
}

impl fmt::Debug for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_implicit() {
            f.write_str("TokenKind(IMPLICIT)")
        } else {
            write!(f, "TokenKind({})", self.0)
        }
    }
}

impl From<i32> for TokenKind {
    fn from(raw: i32) -> Self {
        TokenKind(raw)
    }
}

/// Per-language kind naming hook.
///
/// [`TokenDocument::describe_kind`](crate::TokenDocument::describe_kind)
/// consults this only for non-implicit kinds. Returning `None` makes the
/// document fall back to a generic label that embeds the kind number.
pub trait KindNames: fmt::Debug + Send + Sync {
    fn describe_kind_impl(&self, kind: TokenKind) -> Option<&str>;
}

/// Naming hook that never maps a kind.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoKindNames;

impl KindNames for NoKindNames {
    fn describe_kind_impl(&self, _kind: TokenKind) -> Option<&str> {
        None
    }
}

/// Dense kind-name table indexed by kind code.
///
/// This is the shape grammar generators usually emit: one display string
/// per kind, in kind order. Negative or out-of-range kinds are unmapped.
#[derive(Copy, Clone, Debug)]
pub struct KindTable {
    names: &'static [&'static str],
}

impl KindTable {
    pub const fn new(names: &'static [&'static str]) -> Self {
        KindTable { names }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl KindNames for KindTable {
    fn describe_kind_impl(&self, kind: TokenKind) -> Option<&str> {
        let index = usize::try_from(kind.raw()).ok()?;
        self.names.get(index).copied()
    }
}

/// Sparse kind-name map for grammars whose kind codes are not contiguous.
#[derive(Clone, Debug, Default)]
pub struct KindMap {
    names: FxHashMap<i32, &'static str>,
}

impl KindMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the label for `kind`.
    #[must_use]
    pub fn with(mut self, kind: TokenKind, name: &'static str) -> Self {
        self.names.insert(kind.raw(), name);
        self
    }

    pub fn insert(&mut self, kind: TokenKind, name: &'static str) -> Option<&'static str> {
        self.names.insert(kind.raw(), name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<(TokenKind, &'static str)> for KindMap {
    fn from_iter<I: IntoIterator<Item = (TokenKind, &'static str)>>(iter: I) -> Self {
        KindMap {
            names: iter.into_iter().map(|(kind, name)| (kind.raw(), name)).collect(),
        }
    }
}

impl KindNames for KindMap {
    fn describe_kind_impl(&self, kind: TokenKind) -> Option<&str> {
        self.names.get(&kind.raw()).copied()
    }
}
