//! The token document: full source text plus the token chain built over it.
//!
//! # Lifecycle
//!
//! 1. [`TokenDocument::new`] stores the text. No chain exists yet.
//! 2. [`TokenDocument::open`] creates the sentinel, exactly once.
//! 3. The scanner mints tokens with [`TokenDocument::create_token`] and links
//!    each onto the current tail with [`TokenRef::link`].
//! 4. After scanning the chain is read-only and may be shared across threads.

use std::borrow::Cow;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;

use parking_lot::Mutex;
use tracing::{debug, trace, warn};

use crate::error::InvalidState;
use crate::{
    CharStream, KindNames, LineCol, LineIndex, NoKindNames, Span, Token, TokenKind, TokenRef,
    Tokens,
};

/// Process-unique identity of a [`TokenDocument`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(transparent)]
pub struct DocumentId(u64);

impl DocumentId {
    fn fresh() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        DocumentId(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Per-document options.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DocumentConfig {
    /// Compare caller-supplied images against the text at the stream's
    /// offsets and log mismatches. The caller's image is used either way.
    pub verify_images: bool,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        DocumentConfig {
            verify_images: cfg!(debug_assertions),
        }
    }
}

impl DocumentConfig {
    #[must_use]
    pub fn with_verify_images(mut self, verify_images: bool) -> Self {
        self.verify_images = verify_images;
        self
    }
}

/// Owner of one file's text and token chain.
pub struct TokenDocument {
    id: DocumentId,
    text: Box<str>,
    kind_names: Box<dyn KindNames>,
    config: DocumentConfig,
    /// Held only around the check-and-create in [`open`](Self::open).
    open_lock: Mutex<()>,
    sentinel: OnceLock<Token>,
    line_index: OnceLock<LineIndex>,
}

impl TokenDocument {
    /// A document whose kinds have no language-specific names.
    pub fn new(text: impl Into<Box<str>>) -> Self {
        Self::with_kind_names(text, NoKindNames)
    }

    pub fn with_kind_names(
        text: impl Into<Box<str>>,
        kind_names: impl KindNames + 'static,
    ) -> Self {
        Self::with_config(text, kind_names, DocumentConfig::default())
    }

    pub fn with_config(
        text: impl Into<Box<str>>,
        kind_names: impl KindNames + 'static,
        config: DocumentConfig,
    ) -> Self {
        TokenDocument {
            id: DocumentId::fresh(),
            text: text.into(),
            kind_names: Box::new(kind_names),
            config,
            open_lock: Mutex::new(()),
            sentinel: OnceLock::new(),
            line_index: OnceLock::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> DocumentId {
        self.id
    }

    /// The full source text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the text in bytes.
    ///
    /// Saturates for texts beyond `u32::MAX` bytes, which [`open`](Self::open)
    /// refuses.
    pub fn len(&self) -> u32 {
        u32::try_from(self.text.len()).unwrap_or(u32::MAX)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn config(&self) -> DocumentConfig {
        self.config
    }

    pub fn is_opened(&self) -> bool {
        self.sentinel.get().is_some()
    }

    /// Create the sentinel and return it so the scanner can link onto it.
    ///
    /// Fails if the document was already opened; the existing sentinel is
    /// left untouched. Also fails for texts whose offsets do not fit `u32`.
    pub fn open(&self) -> Result<TokenRef<'_>, InvalidState> {
        let extent = check_text_len(self.text.len())?;
        let sentinel = {
            let _guard = self.open_lock.lock();
            if self.sentinel.get().is_some() {
                debug!(document = %self.id, "rejected second open");
                return Err(InvalidState::AlreadyOpened);
            }
            self.sentinel.get_or_init(|| Token::implicit(0, self.id))
        };

        debug!(document = %self.id, %extent, "opened token document");
        Ok(TokenRef::new(sentinel, self))
    }

    /// The sentinel, once the document is open. Never a real token.
    pub fn sentinel(&self) -> Option<TokenRef<'_>> {
        self.sentinel.get().map(|token| TokenRef::new(token, self))
    }

    /// The first real token: the one right after the sentinel.
    pub fn first_token(&self) -> Result<TokenRef<'_>, InvalidState> {
        self.sentinel()
            .ok_or(InvalidState::NotOpened)?
            .next()
            .ok_or(InvalidState::NoTokens)
    }

    /// Iterate over the real tokens, sentinel excluded.
    ///
    /// An open document with no tokens yields an empty iterator.
    pub fn tokens(&self) -> Result<Tokens<'_>, InvalidState> {
        let sentinel = self.sentinel().ok_or(InvalidState::NotOpened)?;
        Ok(Tokens::starting_at(sentinel.next()))
    }

    /// Human-readable label for a kind, for diagnostics.
    ///
    /// The implicit kind always gets a fixed label. Other kinds use the
    /// language's [`KindNames`] hook and fall back to a label that embeds
    /// the kind number.
    pub fn describe_kind(&self, kind: TokenKind) -> Cow<'_, str> {
        if kind.is_implicit() {
            return Cow::Borrowed("implicit token");
        }
        match self.kind_names.describe_kind_impl(kind) {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Owned(format!("token of kind {}", kind.raw())),
        }
    }

    /// Mint a token of `kind` from the stream's current lexeme.
    ///
    /// When `image` is given it is used as-is and the stream's image is
    /// never requested. Offsets always come from the stream and are checked
    /// against the text when the token is linked. The token is not linked;
    /// that is the scanner's job.
    pub fn create_token<S: CharStream + ?Sized>(
        &self,
        kind: TokenKind,
        stream: &S,
        image: Option<&'static str>,
    ) -> Token {
        let span = Span::new(stream.start_offset(), stream.end_offset());

        let image = match image {
            Some(shared) => {
                if self.config.verify_images {
                    self.verify_image(kind, span, shared);
                }
                Cow::Borrowed(shared)
            }
            None => Cow::Owned(stream.image()),
        };

        trace!(document = %self.id, kind = kind.raw(), %span, "created token");
        Token::new(kind, image, span, self.id)
    }

    /// Returns `false` and logs a warning when `image` is not the text at
    /// `span`.
    fn verify_image(&self, kind: TokenKind, span: Span, image: &str) -> bool {
        let actual = self.text.get(span.to_range());
        let matches = actual == Some(image);
        if !matches {
            warn!(
                document = %self.id,
                kind = %self.describe_kind(kind),
                %span,
                expected = image,
                actual = actual.unwrap_or("<out of bounds>"),
                "shared token image does not match source text"
            );
        }
        matches
    }

    /// Line start table, built on first use.
    pub fn line_index(&self) -> &LineIndex {
        self.line_index.get_or_init(|| LineIndex::new(&self.text))
    }

    pub fn line_col(&self, offset: u32) -> LineCol {
        self.line_index().line_col(offset)
    }
}

/// Reject texts whose byte offsets do not fit a [`Span`].
fn check_text_len(len: usize) -> Result<Span, InvalidState> {
    Ok(Span::try_from_range(0..len)?)
}

impl fmt::Debug for TokenDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenDocument")
            .field("id", &self.id)
            .field("len", &self.text.len())
            .field("kind_names", &self.kind_names)
            .field("opened", &self.is_opened())
            .finish_non_exhaustive()
    }
}
