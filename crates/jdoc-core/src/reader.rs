//! Buffered character source with single-character pushback.
//!
//! [`CharReader`] wraps any byte source and hands out characters one at a
//! time, refilling a fixed-size internal buffer so the lexer never issues
//! per-character reads. The cursor can be rewound by exactly one position
//! (`back`), which is all the lookahead the lexer needs to un-consume the
//! character that terminated a number or keyword.
//!
//! Input is decoded as UTF-8. A multi-byte sequence split across a chunk
//! boundary is carried over into the next refill; bytes that are not valid
//! UTF-8 are a lexical error.

use std::io::Read;

use crate::error::{JsonError, Result};

/// Bytes requested from the underlying source per refill.
const CHUNK_SIZE: usize = 1024;

/// A chunk-buffered character cursor over a byte source.
pub struct CharReader<R> {
    source: R,
    /// Decoded characters of the currently loaded chunk.
    buf: Vec<char>,
    /// Index into `buf` of the character `next` will return.
    pos: usize,
    /// Undecoded tail bytes of the previous chunk (an incomplete UTF-8
    /// sequence), prepended to the next refill.
    carry: Vec<u8>,
    /// The character most recently returned by `next`.
    last: Option<char>,
    /// Characters consumed so far, for error positions.
    offset: usize,
    /// Set once the source reports end of stream.
    eof: bool,
}

impl<R: Read> CharReader<R> {
    pub fn new(source: R) -> Self {
        CharReader {
            source,
            buf: Vec::new(),
            pos: 0,
            carry: Vec::new(),
            last: None,
            offset: 0,
            eof: false,
        }
    }

    /// Return the next character and advance the cursor, or `None` at end of
    /// input. Fails if the underlying source fails.
    pub fn next(&mut self) -> Result<Option<char>> {
        if !self.has_more()? {
            return Ok(None);
        }
        let c = self.buf[self.pos];
        self.pos += 1;
        self.offset += 1;
        self.last = Some(c);
        Ok(Some(c))
    }

    /// The character most recently returned by [`next`](Self::next), without
    /// advancing. After a [`back`](Self::back) this is the character the next
    /// `next` call will deliver again.
    pub fn peek(&self) -> Option<char> {
        self.last
    }

    /// Rewind the cursor by one position, never below the start of the
    /// currently loaded chunk. Only single-character pushback is supported:
    /// `back` is called at most once before the next `next`.
    pub fn back(&mut self) {
        if self.pos > 0 {
            self.pos -= 1;
            self.offset -= 1;
        }
    }

    /// True if a character is available, transparently refilling the buffer
    /// from the source. A refill that yields no bytes leaves this false.
    pub fn has_more(&mut self) -> Result<bool> {
        while self.pos >= self.buf.len() {
            if self.eof {
                return Ok(false);
            }
            self.fill_buf()?;
        }
        Ok(true)
    }

    /// Characters consumed so far.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Read one chunk from the source and decode it, keeping any trailing
    /// incomplete UTF-8 sequence for the next refill.
    fn fill_buf(&mut self) -> Result<()> {
        let mut chunk = [0u8; CHUNK_SIZE];
        let n = self.source.read(&mut chunk)?;
        if n == 0 {
            self.eof = true;
            if !self.carry.is_empty() {
                return Err(JsonError::lex(
                    self.offset,
                    "incomplete UTF-8 sequence at end of input",
                ));
            }
            return Ok(());
        }

        let mut bytes = std::mem::take(&mut self.carry);
        bytes.extend_from_slice(&chunk[..n]);

        let valid_len = match std::str::from_utf8(&bytes) {
            Ok(_) => bytes.len(),
            // A truncated sequence at the chunk boundary is carried over;
            // anything else is bad input.
            Err(e) if e.error_len().is_none() => e.valid_up_to(),
            Err(_) => {
                return Err(JsonError::lex(self.offset, "invalid UTF-8 in input"));
            }
        };
        self.carry = bytes.split_off(valid_len);
        let decoded = std::str::from_utf8(&bytes)
            .map_err(|_| JsonError::lex(self.offset, "invalid UTF-8 in input"))?;
        self.buf.clear();
        self.buf.extend(decoded.chars());
        self.pos = 0;
        Ok(())
    }
}
