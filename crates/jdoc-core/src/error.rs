//! Error types for JSON lexing and parsing.

use thiserror::Error;

/// Errors that can occur while turning JSON text into a document tree.
///
/// All three kinds are fatal: the parse aborts immediately and the caller
/// never sees a half-built tree.
#[derive(Error, Debug)]
pub enum JsonError {
    /// The underlying character source failed while the lexer wanted more input.
    #[error("read error: {0}")]
    Io(#[from] std::io::Error),

    /// A character sequence matched no recognized token shape (unterminated
    /// string, invalid escape, malformed number, stray character).
    /// `offset` is the number of characters consumed when the lexer gave up.
    #[error("lexical error at offset {offset}: {message}")]
    Lex {
        /// Character offset from the start of the input.
        offset: usize,
        /// What the lexer was unable to read.
        message: String,
    },

    /// A well-formed token appeared where the grammar forbids it, or the
    /// input ended inside an open structure.
    #[error("grammar error: {message}")]
    Grammar {
        /// Which token broke the grammar, and where in the structure.
        message: String,
    },
}

impl JsonError {
    pub(crate) fn lex(offset: usize, message: impl Into<String>) -> Self {
        JsonError::Lex {
            offset,
            message: message.into(),
        }
    }

    pub(crate) fn grammar(message: impl Into<String>) -> Self {
        JsonError::Grammar {
            message: message.into(),
        }
    }
}

/// Convenience alias used throughout jdoc-core.
pub type Result<T> = std::result::Result<T, JsonError>;
