//! Character stream seam between the scanner and the token document.

/// Source of the current lexeme while a scanner is deciding token kinds.
///
/// Offsets are byte offsets into the document's full text and describe the
/// lexeme the scanner has just finished reading.
pub trait CharStream {
    /// Decoded text of the current lexeme.
    fn image(&self) -> String;

    /// Offset of the first byte of the current lexeme.
    fn start_offset(&self) -> u32;

    /// Offset one past the last byte of the current lexeme.
    fn end_offset(&self) -> u32;
}

impl<S: CharStream + ?Sized> CharStream for &S {
    fn image(&self) -> String {
        (**self).image()
    }

    fn start_offset(&self) -> u32 {
        (**self).start_offset()
    }

    fn end_offset(&self) -> u32 {
        (**self).end_offset()
    }
}

impl<S: CharStream + ?Sized> CharStream for &mut S {
    fn image(&self) -> String {
        (**self).image()
    }

    fn start_offset(&self) -> u32 {
        (**self).start_offset()
    }

    fn end_offset(&self) -> u32 {
        (**self).end_offset()
    }
}
