//! Scanning driver loop.
//!
//! The loop owns the sequencing (open once, start a lexeme, ask for a kind,
//! mint and link) while the caller-supplied decider owns every kind
//! decision.

use sift_ir::{InvalidState, TokenDocument, TokenKind};
use tracing::debug;

use crate::{ChainBuilder, SourceCharStream};

/// Kind decision for the lexeme the decider just read.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Lexeme {
    pub kind: TokenKind,
    /// Shared image to use instead of copying the lexeme out of the stream.
    pub image: Option<&'static str>,
}

impl Lexeme {
    pub const fn new(kind: TokenKind) -> Self {
        Lexeme { kind, image: None }
    }

    /// A lexeme whose text is always `image`, such as fixed punctuation.
    pub const fn shared(kind: TokenKind, image: &'static str) -> Self {
        Lexeme {
            kind,
            image: Some(image),
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanConfig {
    /// Kind of a zero-width token appended at end of input, if any.
    pub eof_kind: Option<TokenKind>,
}

impl ScanConfig {
    #[must_use]
    pub fn with_eof_kind(mut self, kind: TokenKind) -> Self {
        self.eof_kind = Some(kind);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScanError {
    #[error(transparent)]
    State(#[from] InvalidState),

    /// The decider returned without consuming input.
    #[error("scanner made no progress at offset {offset}")]
    NoProgress { offset: u32 },
}

/// Scan `document` from start to end.
///
/// Before each call the stream is positioned at a fresh lexeme start.
/// `decide` reads the lexeme and returns `Some` to emit a token or `None` to
/// skip the text (whitespace, comments). Either way it must consume at
/// least one character.
pub fn scan<'doc, F>(
    document: &'doc TokenDocument,
    config: ScanConfig,
    mut decide: F,
) -> Result<ChainBuilder<'doc>, ScanError>
where
    F: FnMut(&mut SourceCharStream<'doc>) -> Option<Lexeme>,
{
    let mut builder = ChainBuilder::new(document)?;
    let mut stream = SourceCharStream::new(document.text());

    while !stream.is_eof() {
        stream.start_token();
        let lexeme = decide(&mut stream);
        if stream.pos() == stream.token_start() {
            return Err(ScanError::NoProgress {
                offset: stream.pos(),
            });
        }
        if let Some(Lexeme { kind, image }) = lexeme {
            builder.push(kind, &stream, image)?;
        }
    }

    if let Some(kind) = config.eof_kind {
        stream.start_token();
        builder.push(kind, &stream, Some(""))?;
    }

    debug!(document = %document.id(), tokens = builder.len(), "scanned document");
    Ok(builder)
}
