//! Character stream over an in-memory source string.
//!
//! The stream tracks two byte offsets: where the current lexeme started and
//! how far the scanner has read. A scanner calls [`begin_token`] (or
//! [`start_token`]) at every token boundary, reads ahead with
//! [`read_char`], and may [`backup`] within the current lexeme before it
//! commits to a kind.
//!
//! [`begin_token`]: SourceCharStream::begin_token
//! [`start_token`]: SourceCharStream::start_token
//! [`read_char`]: SourceCharStream::read_char
//! [`backup`]: SourceCharStream::backup

use sift_ir::CharStream;

#[allow(
    clippy::cast_possible_truncation,
    reason = "a UTF-8 encoded char is at most 4 bytes"
)]
#[inline]
fn width(c: char) -> u32 {
    c.len_utf8() as u32
}

#[derive(Clone, Debug)]
pub struct SourceCharStream<'src> {
    text: &'src str,
    /// Offset of the first byte of the current lexeme.
    token_start: u32,
    /// Offset of the next unread byte.
    pos: u32,
}

impl<'src> SourceCharStream<'src> {
    pub fn new(text: &'src str) -> Self {
        SourceCharStream {
            text,
            token_start: 0,
            pos: 0,
        }
    }

    /// Start a new lexeme at the current position without reading.
    #[inline]
    pub fn start_token(&mut self) {
        self.token_start = self.pos;
    }

    /// Start a new lexeme and read its first character.
    pub fn begin_token(&mut self) -> Option<char> {
        self.start_token();
        self.read_char()
    }

    /// Read one character into the current lexeme.
    pub fn read_char(&mut self) -> Option<char> {
        let c = self.rest().chars().next()?;
        self.pos += width(c);
        Some(c)
    }

    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Read while `pred` holds for the next character.
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.pos += width(c);
        }
    }

    /// Un-read up to `amount` characters, never past the lexeme start.
    pub fn backup(&mut self, amount: usize) {
        for _ in 0..amount {
            let Some(c) = self.lexeme().chars().next_back() else {
                break;
            };
            self.pos -= width(c);
        }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos as usize >= self.text.len()
    }

    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    #[inline]
    pub fn token_start(&self) -> u32 {
        self.token_start
    }

    /// Text of the current lexeme.
    pub fn lexeme(&self) -> &'src str {
        self.text
            .get(self.token_start as usize..self.pos as usize)
            .unwrap_or_default()
    }

    /// Unread text.
    pub fn rest(&self) -> &'src str {
        self.text.get(self.pos as usize..).unwrap_or_default()
    }

    pub fn text(&self) -> &'src str {
        self.text
    }
}

impl CharStream for SourceCharStream<'_> {
    fn image(&self) -> String {
        self.lexeme().to_owned()
    }

    fn start_offset(&self) -> u32 {
        self.token_start
    }

    fn end_offset(&self) -> u32 {
        self.pos
    }
}

#[cfg(test)]
mod tests;
