//! Source location spans.

use std::fmt;

/// Byte range into the source text.
///
/// Layout: 8 bytes total
/// - start: u32 - byte offset from source start
/// - end: u32 - byte offset (exclusive)
///
/// Offsets past `u32::MAX` saturate; sources that large are not a practical
/// input for a line-oriented interpreter.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

/// 1-based line and column of a byte offset.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

impl Span {
    /// Dummy span for synthesized nodes.
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Create from a byte range, saturating at `u32::MAX`.
    #[inline]
    pub fn from_range(range: std::ops::Range<usize>) -> Self {
        Span {
            start: saturate(range.start),
            end: saturate(range.end),
        }
    }

    /// Zero-width span at `pos`.
    #[inline]
    pub fn point(pos: usize) -> Self {
        let pos = saturate(pos);
        Span {
            start: pos,
            end: pos,
        }
    }


    /// Line and column of the span start within `source`.
    ///
    /// Columns count characters, not bytes. An offset past the end of
    /// `source` resolves to the position just after the last character.
    pub fn line_col(self, source: &str) -> LineCol {
        let offset = (self.start as usize).min(source.len());
        let before = source.get(..offset).unwrap_or(source);
        let mut line = 1;
        let mut line_start = 0;
        for (idx, byte) in before.bytes().enumerate() {
            if byte == b'\n' {
                line += 1;
                line_start = idx + 1;
            }
        }
        let col = before[line_start..].chars().count() + 1;
        LineCol {
            line,
            col: saturate(col),
        }
    }
}

#[inline]
fn saturate(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_col_first_line() {
        let source = "let x = 5;";
        assert_eq!(Span::new(4, 5).line_col(source), LineCol { line: 1, col: 5 });
    }

    #[test]
    fn test_line_col_after_newlines() {
        let source = "let x = 5;\nlet y = 6;\n  z";
        let z = source.find('z').unwrap_or_default();
        assert_eq!(Span::point(z).line_col(source), LineCol { line: 3, col: 3 });
    }

    #[test]
    fn test_line_col_counts_chars() {
        let source = "\"héllo\" @";
        let at = source.find('@').unwrap_or_default();
        assert_eq!(Span::point(at).line_col(source).col, 9);
    }

    #[test]
    fn test_line_col_past_end() {
        let source = "ab";
        assert_eq!(Span::point(100).line_col(source), LineCol { line: 1, col: 3 });
    }

    #[test]
    fn test_debug_format() {
        assert_eq!(format!("{:?}", Span::new(2, 9)), "2..9");
    }
}
