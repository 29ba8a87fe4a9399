//! Append-only writer for a document's token chain.

use sift_ir::{CharStream, InvalidState, Token, TokenDocument, TokenKind, TokenRef};

/// Opens a document and keeps track of the chain tail while a scanner
/// appends tokens to it.
#[derive(Debug)]
pub struct ChainBuilder<'doc> {
    document: &'doc TokenDocument,
    tail: TokenRef<'doc>,
    len: usize,
}

impl<'doc> ChainBuilder<'doc> {
    /// Open `document` and start appending after its sentinel.
    pub fn new(document: &'doc TokenDocument) -> Result<Self, InvalidState> {
        let tail = document.open()?;
        Ok(ChainBuilder {
            document,
            tail,
            len: 0,
        })
    }

    /// Mint a token from the stream's current lexeme and append it.
    pub fn push<S: CharStream + ?Sized>(
        &mut self,
        kind: TokenKind,
        stream: &S,
        image: Option<&'static str>,
    ) -> Result<TokenRef<'doc>, InvalidState> {
        let token = self.document.create_token(kind, stream, image);
        self.push_token(token)
    }

    /// Append an already minted token.
    ///
    /// On error the chain is unchanged and `token` is dropped.
    pub fn push_token(&mut self, token: Token) -> Result<TokenRef<'doc>, InvalidState> {
        let linked = self.tail.link(token)?;
        self.tail = linked;
        self.len += 1;
        Ok(linked)
    }

    pub fn document(&self) -> &'doc TokenDocument {
        self.document
    }

    /// Last linked token; the sentinel while nothing has been pushed.
    pub fn tail(&self) -> TokenRef<'doc> {
        self.tail
    }

    /// Number of real tokens appended so far.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
