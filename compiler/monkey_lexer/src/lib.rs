//! Lexer for Monkey.
//!
//! [`Lexer::next_token`] is pull-based: the parser asks for one token at a
//! time. After the end of input every further call returns another
//! [`TokenKind::Eof`] token, so callers never need to track exhaustion
//! themselves.
//!
//! The lexer owns its source buffer. [`Lexer::reset`] swaps in new text while
//! keeping the allocation, which lets a read-eval-print loop reuse one lexer
//! for every line.
//!
//! Scanning never fails. Characters outside the token set come back as
//! [`TokenKind::Illegal`] tokens holding that character, and an unterminated
//! string literal yields everything up to the end of input.

mod cursor;

use monkey_ir::{lookup_keyword, Span, Token, TokenKind};

use crate::cursor::Cursor;

/// Tokenizer over an owned source string.
#[derive(Clone, Debug, Default)]
pub struct Lexer {
    source: String,
    pos: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Lexer {
            source: source.to_owned(),
            pos: 0,
        }
    }

    /// Replace the source and rewind to its start.
    pub fn reset(&mut self, source: &str) {
        self.source.clear();
        self.source.push_str(source);
        self.pos = 0;
    }

    /// Scan the next token.
    pub fn next_token(&mut self) -> Token {
        let mut cursor = Cursor::new(&self.source, self.pos);
        cursor.eat_whitespace();
        let start = cursor.pos();

        if cursor.is_eof() {
            self.pos = start;
            return Token::new(TokenKind::Eof, "", Span::point(start));
        }

        let (kind, literal) = scan(&mut cursor, start);
        self.pos = cursor.pos();
        Token::new(kind, literal, Span::from_range(start..self.pos))
    }
}

/// Scan one token starting at a non-whitespace byte.
fn scan(cursor: &mut Cursor<'_>, start: usize) -> (TokenKind, String) {
    let byte = cursor.current();
    let kind = match byte {
        b'=' => two_char(cursor, TokenKind::Eq, TokenKind::Assign),
        b'!' => two_char(cursor, TokenKind::NotEq, TokenKind::Bang),
        b'+' => single(cursor, TokenKind::Plus),
        b'-' => single(cursor, TokenKind::Minus),
        b'*' => single(cursor, TokenKind::Asterisk),
        b'/' => single(cursor, TokenKind::Slash),
        b'<' => single(cursor, TokenKind::Lt),
        b'>' => single(cursor, TokenKind::Gt),
        b',' => single(cursor, TokenKind::Comma),
        b';' => single(cursor, TokenKind::Semicolon),
        b'(' => single(cursor, TokenKind::LParen),
        b')' => single(cursor, TokenKind::RParen),
        b'{' => single(cursor, TokenKind::LBrace),
        b'}' => single(cursor, TokenKind::RBrace),
        b'"' => return (TokenKind::String, scan_string(cursor)),
        b if is_ident_start(b) => {
            cursor.eat_while(is_ident_continue);
            let word = cursor.slice_from(start);
            return (lookup_keyword(word), word.to_owned());
        }
        b if b.is_ascii_digit() => {
            cursor.eat_while(|b| b.is_ascii_digit());
            TokenKind::Int
        }
        _ => {
            cursor.advance_char();
            TokenKind::Illegal
        }
    };
    (kind, cursor.slice_from(start).to_owned())
}

#[inline]
fn single(cursor: &mut Cursor<'_>, kind: TokenKind) -> TokenKind {
    cursor.advance();
    kind
}

/// `==` / `!=` when the next byte is `=`, otherwise the one-byte operator.
#[inline]
fn two_char(cursor: &mut Cursor<'_>, with_eq: TokenKind, alone: TokenKind) -> TokenKind {
    if cursor.peek() == b'=' {
        cursor.advance_n(2);
        with_eq
    } else {
        cursor.advance();
        alone
    }
}

/// Scan a string literal; the cursor sits on the opening quote.
///
/// The literal is the text strictly between the quotes. No escapes.
fn scan_string(cursor: &mut Cursor<'_>) -> String {
    cursor.advance();
    let content_start = cursor.pos();
    let closed = cursor.eat_until(b'"');
    let content = cursor.slice_from(content_start).to_owned();
    if closed {
        cursor.advance();
    }
    content
}

#[inline]
fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

#[inline]
fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Yields tokens up to, but not including, the end-of-input token.
impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (token.kind != TokenKind::Eof).then_some(token)
    }
}

/// Tokenize `source` completely. The last token is always `Eof`.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}
