//! Recursive-descent parser with expected-token validation.
//!
//! The parser reads the token sequence forward, carrying one mutable
//! [`Expect`] set that is recomputed after every token: the set of token
//! kinds legal at the next position. Each [`TokenKind`] owns a disjoint bit,
//! so the legality check is a single mask test instead of a grammar table.
//!
//! # Key design decisions
//!
//! - **Key/value strings by lookbehind**: inside an object, a string token is
//!   a value exactly when the token immediately before it is a colon;
//!   otherwise it is a key. The check inspects the already-consumed token
//!   stream rather than giving the lexer separate key/value states.
//! - **Numbers materialize here, not in the lexer**: a literal containing
//!   `.`, `e`, or `E` becomes a `Double`; other literals become `Int` when
//!   they fit in 32 bits and `Long` otherwise.
//! - **The root must be an object or array**: a bare scalar document is
//!   rejected. Fully empty (or whitespace-only) input is the one leniency
//!   and yields an empty object.

use std::io::Read;

use crate::error::{JsonError, Result};
use crate::lexer::{self, Token, TokenKind, Tokens};
use crate::reader::CharReader;
use crate::value::{JsonArray, JsonObject, Value};

/// A set of token kinds legal at the parser's current position.
#[derive(Debug, Clone, Copy)]
struct Expect(u16);

impl Expect {
    fn of(kinds: &[TokenKind]) -> Self {
        Expect(kinds.iter().fold(0, |mask, kind| mask | kind.bit()))
    }

    fn with(self, kind: TokenKind) -> Self {
        Expect(self.0 | kind.bit())
    }

    fn contains(self, kind: TokenKind) -> bool {
        self.0 & kind.bit() != 0
    }
}

/// Every kind that can begin a value.
const VALUE_STARTS: &[TokenKind] = &[
    TokenKind::Null,
    TokenKind::Number,
    TokenKind::Boolean,
    TokenKind::String,
    TokenKind::BeginObject,
    TokenKind::BeginArray,
];

/// Parse a complete JSON document from text.
///
/// Drives the whole pipeline: character source, lexer, then the
/// grammar-validated token walk. Returns the document root, which is always
/// an object or an array (or the empty-input empty object).
pub fn parse(input: &str) -> Result<Value> {
    parse_reader(input.as_bytes())
}

/// Parse a complete JSON document from any byte source.
pub fn parse_reader<R: Read>(source: R) -> Result<Value> {
    let mut reader = CharReader::new(source);
    let tokens = lexer::tokenize(&mut reader)?;
    parse_tokens(tokens)
}

fn parse_tokens(mut tokens: Tokens) -> Result<Value> {
    let root = match tokens.next() {
        // Empty or whitespace-only input is deliberately an empty object,
        // not an error.
        None => return Ok(Value::Object(JsonObject::new())),
        Some(token) => match token.kind() {
            TokenKind::EndDocument => return Ok(Value::Object(JsonObject::new())),
            TokenKind::BeginObject => Value::Object(parse_object(&mut tokens)?),
            TokenKind::BeginArray => Value::Array(parse_array(&mut tokens)?),
            _ => {
                return Err(JsonError::grammar(format!(
                    "document root must be an object or array, found `{}`",
                    token.text()
                )));
            }
        },
    };

    match tokens.next() {
        Some(token) if token.kind() == TokenKind::EndDocument => Ok(root),
        _ => Err(JsonError::grammar("trailing content after document root")),
    }
}

/// Fail unless the token's kind is in the expected set.
fn check_expected(kind: TokenKind, text: &str, expected: Expect) -> Result<()> {
    if expected.contains(kind) {
        Ok(())
    } else {
        Err(JsonError::grammar(format!("unexpected token `{text}`")))
    }
}

/// The key a value is about to be assigned to. Grammar validation guarantees
/// one is pending whenever a value token is legal.
fn pending_key(key: &mut Option<String>) -> Result<String> {
    key.take()
        .ok_or_else(|| JsonError::grammar("value with no preceding key"))
}

/// Parse an object body; the opening brace has been consumed.
fn parse_object(tokens: &mut Tokens) -> Result<JsonObject> {
    let mut object = JsonObject::new();
    let mut expected = Expect::of(&[TokenKind::String, TokenKind::EndObject]);
    let mut key: Option<String> = None;

    while tokens.has_more() {
        let (kind, text) = match tokens.next() {
            Some(token) => (token.kind(), token.text().to_string()),
            None => break,
        };
        check_expected(kind, &text, expected)?;

        match kind {
            TokenKind::BeginObject => {
                let nested = parse_object(tokens)?;
                object.insert(pending_key(&mut key)?, nested);
                expected = Expect::of(&[TokenKind::Comma, TokenKind::EndObject]);
            }
            TokenKind::BeginArray => {
                let nested = parse_array(tokens)?;
                object.insert(pending_key(&mut key)?, nested);
                expected = Expect::of(&[TokenKind::Comma, TokenKind::EndObject]);
            }
            TokenKind::EndObject => return Ok(object),
            TokenKind::Null => {
                object.insert(pending_key(&mut key)?, Value::Null);
                expected = Expect::of(&[TokenKind::Comma, TokenKind::EndObject]);
            }
            TokenKind::Number => {
                object.insert(pending_key(&mut key)?, materialize_number(&text)?);
                expected = Expect::of(&[TokenKind::Comma, TokenKind::EndObject]);
            }
            TokenKind::Boolean => {
                object.insert(pending_key(&mut key)?, Value::Bool(text == "true"));
                expected = Expect::of(&[TokenKind::Comma, TokenKind::EndObject]);
            }
            TokenKind::String => {
                // A string is a value only when a colon directly precedes it;
                // everywhere else in an object body it is a key.
                let after_colon = matches!(
                    tokens.peek_previous().map(Token::kind),
                    Some(TokenKind::Colon)
                );
                if after_colon {
                    object.insert(pending_key(&mut key)?, Value::String(text));
                    expected = Expect::of(&[TokenKind::Comma, TokenKind::EndObject]);
                } else {
                    key = Some(text);
                    expected = Expect::of(&[TokenKind::Colon]);
                }
            }
            TokenKind::Colon => {
                expected = Expect::of(VALUE_STARTS);
            }
            TokenKind::Comma => {
                expected = Expect::of(&[TokenKind::String]);
            }
            // EndDocument and EndArray carry bits no object-state expected
            // set ever contains, so check_expected rejected them above.
            _ => return Err(JsonError::grammar(format!("unexpected token `{text}`"))),
        }
    }

    Err(JsonError::grammar("unterminated object"))
}

/// Parse an array body; the opening bracket has been consumed. Same walk as
/// the object loop but without keys or colons: every string is a value.
fn parse_array(tokens: &mut Tokens) -> Result<JsonArray> {
    let mut array = JsonArray::new();
    let mut expected = Expect::of(VALUE_STARTS).with(TokenKind::EndArray);

    while tokens.has_more() {
        let (kind, text) = match tokens.next() {
            Some(token) => (token.kind(), token.text().to_string()),
            None => break,
        };
        check_expected(kind, &text, expected)?;

        match kind {
            TokenKind::BeginObject => {
                array.push(parse_object(tokens)?);
                expected = Expect::of(&[TokenKind::Comma, TokenKind::EndArray]);
            }
            TokenKind::BeginArray => {
                array.push(parse_array(tokens)?);
                expected = Expect::of(&[TokenKind::Comma, TokenKind::EndArray]);
            }
            TokenKind::EndArray => return Ok(array),
            TokenKind::Null => {
                array.push(Value::Null);
                expected = Expect::of(&[TokenKind::Comma, TokenKind::EndArray]);
            }
            TokenKind::Number => {
                array.push(materialize_number(&text)?);
                expected = Expect::of(&[TokenKind::Comma, TokenKind::EndArray]);
            }
            TokenKind::Boolean => {
                array.push(Value::Bool(text == "true"));
                expected = Expect::of(&[TokenKind::Comma, TokenKind::EndArray]);
            }
            TokenKind::String => {
                array.push(Value::String(text));
                expected = Expect::of(&[TokenKind::Comma, TokenKind::EndArray]);
            }
            TokenKind::Comma => {
                expected = Expect::of(VALUE_STARTS);
            }
            _ => return Err(JsonError::grammar(format!("unexpected token `{text}`"))),
        }
    }

    Err(JsonError::grammar("unterminated array"))
}

/// Turn a number token into its value. Literals with a fraction or exponent
/// marker become `Double`; plain integers become `Int` when they fit in
/// 32 bits and `Long` otherwise.
fn materialize_number(text: &str) -> Result<Value> {
    if text.contains(['.', 'e', 'E']) {
        let n: f64 = text
            .parse()
            .map_err(|_| JsonError::grammar(format!("malformed number literal `{text}`")))?;
        if !n.is_finite() {
            return Err(JsonError::grammar(format!(
                "number literal `{text}` out of range"
            )));
        }
        return Ok(Value::Double(n));
    }

    let n: i64 = text
        .parse()
        .map_err(|_| JsonError::grammar(format!("integer literal `{text}` out of range")))?;
    if i64::from(i32::MIN) <= n && n <= i64::from(i32::MAX) {
        Ok(Value::Int(n as i32))
    } else {
        Ok(Value::Long(n))
    }
}
