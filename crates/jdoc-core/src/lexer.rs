//! Lexer — turns the character stream into a flat, replayable token sequence.
//!
//! A single forward pass over a [`CharReader`], with at most one character of
//! pushback. The lexer classifies tokens and unescapes string contents but
//! builds no structure and converts no numbers: number tokens carry the
//! literal exactly as written, and the parser decides its numeric type later.
//! Exactly one `EndDocument` sentinel is appended after the last real token.

use std::io::Read;

use crate::error::{JsonError, Result};
use crate::reader::CharReader;

/// Lexical classification of a token.
///
/// Each kind owns a fixed, disjoint bit ([`TokenKind::bit`]) so the parser
/// can validate grammar transitions with a single mask test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    BeginObject,
    EndObject,
    BeginArray,
    EndArray,
    Null,
    Number,
    String,
    Boolean,
    Colon,
    Comma,
    EndDocument,
}

impl TokenKind {
    /// This kind's bit in an expected-token set.
    pub const fn bit(self) -> u16 {
        match self {
            TokenKind::BeginObject => 1,
            TokenKind::EndObject => 1 << 1,
            TokenKind::BeginArray => 1 << 2,
            TokenKind::EndArray => 1 << 3,
            TokenKind::Null => 1 << 4,
            TokenKind::Number => 1 << 5,
            TokenKind::String => 1 << 6,
            TokenKind::Boolean => 1 << 7,
            TokenKind::Colon => 1 << 8,
            TokenKind::Comma => 1 << 9,
            TokenKind::EndDocument => 1 << 10,
        }
    }
}

/// A classified lexical unit: kind plus raw text.
///
/// For `String` tokens the text is the unescaped contents; for `Number`
/// tokens it is the literal verbatim, sign and exponent included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    text: String,
}

impl Token {
    fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            kind,
            text: text.into(),
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// The token sequence produced by [`tokenize`], read forward through an
/// index cursor with one-step lookbehind.
#[derive(Debug)]
pub struct Tokens {
    items: Vec<Token>,
    cursor: usize,
}

impl Tokens {
    fn new(items: Vec<Token>) -> Self {
        Tokens { items, cursor: 0 }
    }

    /// The next token, advancing the cursor.
    pub fn next(&mut self) -> Option<&Token> {
        let token = self.items.get(self.cursor);
        if token.is_some() {
            self.cursor += 1;
        }
        token
    }

    /// The token immediately before the most recently consumed one.
    ///
    /// Used by the parser to tell a key string from a value string: a string
    /// directly preceded by a colon can only be a value.
    pub fn peek_previous(&self) -> Option<&Token> {
        self.cursor.checked_sub(2).and_then(|i| self.items.get(i))
    }

    /// True while tokens remain beyond the cursor.
    pub fn has_more(&self) -> bool {
        self.cursor < self.items.len()
    }
}

/// Tokenize the whole character stream.
pub fn tokenize<R: Read>(reader: &mut CharReader<R>) -> Result<Tokens> {
    let mut items = Vec::new();
    loop {
        let token = next_token(reader)?;
        let done = token.kind() == TokenKind::EndDocument;
        items.push(token);
        if done {
            return Ok(Tokens::new(items));
        }
    }
}

/// Scan one token, skipping insignificant whitespace before it.
fn next_token<R: Read>(reader: &mut CharReader<R>) -> Result<Token> {
    let c = loop {
        match reader.next()? {
            None => return Ok(Token::new(TokenKind::EndDocument, "EOF")),
            Some(c) if is_whitespace(c) => continue,
            Some(c) => break c,
        }
    };

    match c {
        '{' => Ok(Token::new(TokenKind::BeginObject, "{")),
        '}' => Ok(Token::new(TokenKind::EndObject, "}")),
        '[' => Ok(Token::new(TokenKind::BeginArray, "[")),
        ']' => Ok(Token::new(TokenKind::EndArray, "]")),
        ':' => Ok(Token::new(TokenKind::Colon, ":")),
        ',' => Ok(Token::new(TokenKind::Comma, ",")),
        '"' => read_string(reader),
        't' => read_keyword(reader, "true", TokenKind::Boolean),
        'f' => read_keyword(reader, "false", TokenKind::Boolean),
        'n' => read_keyword(reader, "null", TokenKind::Null),
        '-' | '0'..='9' => {
            reader.back();
            read_number(reader)
        }
        other => Err(JsonError::lex(
            reader.offset(),
            format!("unexpected character {other:?}"),
        )),
    }
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Scan the remainder of a keyword literal whose first character has already
/// been consumed.
fn read_keyword<R: Read>(
    reader: &mut CharReader<R>,
    word: &'static str,
    kind: TokenKind,
) -> Result<Token> {
    for want in word.chars().skip(1) {
        match reader.next()? {
            Some(c) if c == want => {}
            _ => {
                return Err(JsonError::lex(
                    reader.offset(),
                    format!("invalid literal, expected `{word}`"),
                ));
            }
        }
    }
    Ok(Token::new(kind, word))
}

/// Scan a string literal. The opening quote has been consumed; the token
/// text is the unescaped contents without the quotes.
fn read_string<R: Read>(reader: &mut CharReader<R>) -> Result<Token> {
    let mut text = String::new();
    loop {
        let c = reader
            .next()?
            .ok_or_else(|| JsonError::lex(reader.offset(), "unterminated string literal"))?;
        match c {
            '"' => return Ok(Token::new(TokenKind::String, text)),
            '\\' => text.push(read_escape(reader)?),
            other => text.push(other),
        }
    }
}

/// Decode one escape sequence; the backslash has been consumed.
fn read_escape<R: Read>(reader: &mut CharReader<R>) -> Result<char> {
    let c = reader
        .next()?
        .ok_or_else(|| JsonError::lex(reader.offset(), "unterminated string literal"))?;
    match c {
        '"' => Ok('"'),
        '\\' => Ok('\\'),
        '/' => Ok('/'),
        'b' => Ok('\u{0008}'),
        'f' => Ok('\u{000C}'),
        'n' => Ok('\n'),
        'r' => Ok('\r'),
        't' => Ok('\t'),
        'u' => read_unicode_escape(reader),
        other => Err(JsonError::lex(
            reader.offset(),
            format!("invalid escape character {other:?}"),
        )),
    }
}

/// Decode a `\uXXXX` escape. A high surrogate must be followed by a second
/// `\uXXXX` holding the low half; the pair combines into one character.
fn read_unicode_escape<R: Read>(reader: &mut CharReader<R>) -> Result<char> {
    let first = read_hex4(reader)?;

    if (0xD800..=0xDBFF).contains(&first) {
        if reader.next()? != Some('\\') || reader.next()? != Some('u') {
            return Err(JsonError::lex(
                reader.offset(),
                "high surrogate not followed by a low surrogate escape",
            ));
        }
        let low = read_hex4(reader)?;
        if !(0xDC00..=0xDFFF).contains(&low) {
            return Err(JsonError::lex(
                reader.offset(),
                "high surrogate not followed by a low surrogate escape",
            ));
        }
        let code = 0x10000 + ((first - 0xD800) << 10) + (low - 0xDC00);
        return char::from_u32(code)
            .ok_or_else(|| JsonError::lex(reader.offset(), "invalid surrogate pair"));
    }

    char::from_u32(first)
        .ok_or_else(|| JsonError::lex(reader.offset(), "unpaired surrogate in \\u escape"))
}

/// Read exactly four hex digits.
fn read_hex4<R: Read>(reader: &mut CharReader<R>) -> Result<u32> {
    let mut code = 0u32;
    for _ in 0..4 {
        let c = reader
            .next()?
            .ok_or_else(|| JsonError::lex(reader.offset(), "unterminated \\u escape"))?;
        let digit = c.to_digit(16).ok_or_else(|| {
            JsonError::lex(
                reader.offset(),
                format!("invalid hex digit {c:?} in \\u escape"),
            )
        })?;
        code = code * 16 + digit;
    }
    Ok(code)
}

/// Scan a number literal: optional minus, integer digits, optional fraction,
/// optional exponent. The token text is the literal exactly as it appeared;
/// no conversion happens here.
fn read_number<R: Read>(reader: &mut CharReader<R>) -> Result<Token> {
    let mut text = String::new();

    match reader.next()? {
        Some('-') => text.push('-'),
        Some(_) => reader.back(),
        None => {}
    }

    read_digits(reader, &mut text)?;

    match reader.next()? {
        Some('.') => {
            text.push('.');
            read_digits(reader, &mut text)?;
        }
        Some(_) => reader.back(),
        None => return Ok(Token::new(TokenKind::Number, text)),
    }

    match reader.next()? {
        Some(c @ ('e' | 'E')) => {
            text.push(c);
            match reader.next()? {
                Some(c @ ('+' | '-')) => text.push(c),
                Some(_) => reader.back(),
                None => {}
            }
            read_digits(reader, &mut text)?;
        }
        Some(_) => reader.back(),
        None => {}
    }

    Ok(Token::new(TokenKind::Number, text))
}

/// Consume a run of ASCII digits into `text`, pushing back the character
/// that ends the run. An empty run is a lexical error.
fn read_digits<R: Read>(reader: &mut CharReader<R>, text: &mut String) -> Result<()> {
    let mut count = 0;
    while let Some(c) = reader.next()? {
        if c.is_ascii_digit() {
            text.push(c);
            count += 1;
        } else {
            reader.back();
            break;
        }
    }
    if count == 0 {
        return Err(JsonError::lex(
            reader.offset(),
            "digit expected in number literal",
        ));
    }
    Ok(())
}
