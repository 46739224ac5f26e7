//! Byte cursor over the lexer's source buffer.
//!
//! Reads past the end return `0x00`; [`Cursor::is_eof`] compares the
//! position against the source length so an interior NUL byte is still
//! scanned (as an illegal character) rather than ending the stream.

/// Cursor over a borrowed source string.
///
/// `Copy`, so a scan can start from a snapshot and commit the final
/// position back to the lexer.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(source: &'a str, pos: usize) -> Self {
        Cursor { source, pos }
    }

    /// Byte at the current position, `0x00` past the end.
    #[inline]
    pub(crate) fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Byte one past the current position, `0x00` past the end.
    #[inline]
    pub(crate) fn peek(&self) -> u8 {
        self.byte_at(self.pos + 1)
    }

    #[inline]
    fn byte_at(&self, pos: usize) -> u8 {
        self.source.as_bytes().get(pos).copied().unwrap_or(0)
    }

    #[inline]
    pub(crate) fn advance(&mut self) {
        self.advance_n(1);
    }

    /// Advance `n` bytes, stopping at the end of the source.
    #[inline]
    pub(crate) fn advance_n(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.source.len());
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    /// Source text between `start` and the current position.
    ///
    /// Empty when the range does not fall on character boundaries; every
    /// caller starts and stops on ASCII bytes or whole characters.
    pub(crate) fn slice_from(&self, start: usize) -> &'a str {
        self.source.get(start..self.pos).unwrap_or_default()
    }

    /// Advance while `pred` holds for the current byte.
    ///
    /// Stops at the end of the source regardless of `pred(0)`.
    #[inline]
    pub(crate) fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Skip spaces, tabs, carriage returns and newlines.
    #[inline]
    pub(crate) fn eat_whitespace(&mut self) {
        self.eat_while(|b| matches!(b, b' ' | b'\t' | b'\r' | b'\n'));
    }

    /// Move to the next occurrence of `byte`, or to the end of the source.
    ///
    /// Returns `true` if `byte` was found.
    pub(crate) fn eat_until(&mut self, byte: u8) -> bool {
        let remaining = self.source.as_bytes().get(self.pos..).unwrap_or_default();
        match memchr::memchr(byte, remaining) {
            Some(offset) => {
                self.pos += offset;
                true
            }
            None => {
                self.pos = self.source.len();
                false
            }
        }
    }

    /// Advance past the whole character at the current position.
    pub(crate) fn advance_char(&mut self) {
        let width = self
            .source
            .get(self.pos..)
            .and_then(|rest| rest.chars().next())
            .map_or(1, char::len_utf8);
        self.advance_n(width);
    }
}
